// src/gui/components/header.rs
use eframe::egui::{self, Align, Layout};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut logout = false;

    ui.horizontal(|ui| {
        ui.heading("QR Attendance Kiosk");
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("Log out").clicked() {
                logout = true;
            }
            if let Some(user) = app.session.gate.user() {
                ui.label(format!("Operator: {user}"));
            }
        });
    });

    if logout {
        actions::logout(app);
    }
}
