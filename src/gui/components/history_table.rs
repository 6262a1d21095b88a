// src/gui/components/history_table.rs
//
// Every saved registration, straight from the ledger file, plus the CSV
// download. Purely a view; the snapshot is reloaded after each save.

use eframe::egui::{self, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut export = false;
    let mut refresh = false;

    ui.horizontal(|ui| {
        ui.checkbox(&mut app.session.gui.show_history, "Show history");
        if app.session.gui.show_history && ui.button("Refresh").clicked() {
            refresh = true;
        }
    });
    if !app.session.gui.show_history { return; }

    if refresh || app.history.is_none() {
        actions::refresh_history(app);
    }

    ui.horizontal(|ui| {
        ui.label("Export to:");
        ui.add(
            egui::TextEdit::singleline(&mut app.session.gui.export_path)
                .desired_width(280.0),
        );
        if ui.button("Export CSV").clicked() {
            export = true;
        }
    });

    if export {
        actions::export(app);
    }

    ui.add_space(6.0);

    if let Some(err) = &app.history_error {
        ui.label(err);
        return;
    }
    let Some(ledger) = app.history.as_ref() else { return; };
    if ledger.is_empty() {
        ui.label("No records saved yet");
        return;
    }

    ui.label(format!("{} record(s)", ledger.len()));

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("history", ledger.headers.len()));
    for (ci, _) in ledger.headers.iter().enumerate() {
        let w = if ci == 0 || ci == 2 { 180.0 } else { 120.0 };
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
    }

    table
        .header(22.0, |mut header| {
            for h in &ledger.headers {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, ledger.rows.len(), |mut row| {
                let Some(data) = ledger.rows.get(row.index()) else { return; };
                for cell in data {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.label(cell);
                    });
                }
            });
        });
}
