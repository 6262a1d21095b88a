// src/gui/components/record_card.rs
//
// The last scanned record. Missing fields show as "-".

use eframe::egui::{self, Color32, RichText};

use crate::{
    gui::app::App,
    record::Field,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Last scan");
    ui.add_space(6.0);

    let Some(report) = app.session.last_report.as_ref() else {
        ui.label("Nothing scanned yet");
        return;
    };

    let Some(ex) = report.extraction() else {
        ui.label(report.summary());
        return;
    };

    egui::Grid::new("record_card")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            for f in Field::ALL {
                ui.strong(field_title(f));
                match ex.record.get(f) {
                    Some(v) => ui.label(v),
                    None => ui.label(RichText::new("-").weak()),
                };
                ui.end_row();
            }
            ui.strong("Registered");
            ui.label(ex.record.timestamp());
            ui.end_row();
        });

    if let Some(w) = ex.warning() {
        ui.add_space(8.0);
        ui.label(RichText::new(w).color(Color32::from_rgb(0xF0, 0xD2, 0x3C)));
    }

    ui.add_space(8.0);
    let color = if report.is_saved() {
        Color32::from_rgb(0x6A, 0xC2, 0x6A)
    } else {
        Color32::from_rgb(0xDC, 0x61, 0x49)
    };
    ui.label(RichText::new(report.summary()).color(color));
}

fn field_title(f: Field) -> &'static str {
    match f {
        Field::Name => "Name",
        Field::Identification => "ID",
        Field::Email => "Email",
        Field::Role => "Role",
    }
}
