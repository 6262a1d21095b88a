// src/gui/components/status_bar.rs
use eframe::egui::{self, Color32, RichText};

use crate::gui::{app::App, progress::StatusLevel};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let status = app.status_snapshot();

    let color = match status.level {
        StatusLevel::Info => ui.visuals().text_color(),
        StatusLevel::Success => Color32::from_rgb(0x6A, 0xC2, 0x6A),
        StatusLevel::Warning => Color32::from_rgb(0xF0, 0xD2, 0x3C),
        StatusLevel::Error => Color32::from_rgb(0xDC, 0x61, 0x49),
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new(&status.text).color(color));
        // a success after a warning still shows the warning
        if status.level == StatusLevel::Success {
            for w in &status.warnings {
                ui.separator();
                ui.label(RichText::new(w).color(Color32::from_rgb(0xF0, 0xD2, 0x3C)));
            }
        }
    });
}
