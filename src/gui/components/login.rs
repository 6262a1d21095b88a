// src/gui/components/login.rs
//
// Shown whenever the gate is unauthenticated. Nothing else is drawn.

use eframe::egui::{self, Color32, Key, RichText};

use crate::gui::{actions, app::App, progress::StatusLevel};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut submit = false;
    let status = app.status_snapshot();

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.heading("QR Attendance Kiosk");
        ui.add_space(16.0);

        let gui = &mut app.session.gui;

        ui.add(
            egui::TextEdit::singleline(&mut gui.username)
                .hint_text("Username")
                .desired_width(220.0),
        );
        let pw = ui.add(
            egui::TextEdit::singleline(&mut gui.password)
                .hint_text("Password")
                .password(true)
                .desired_width(220.0),
        );
        if pw.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            submit = true;
        }

        ui.add_space(8.0);
        if ui.button("Log in").clicked() {
            submit = true;
        }

        if let Some(err) = &gui.login_error {
            ui.add_space(8.0);
            ui.label(RichText::new(err).color(Color32::from_rgb(0xDC, 0x61, 0x49)));
        }

        if !app.session.gate.has_credentials() {
            ui.add_space(8.0);
            let msg = if status.level == StatusLevel::Error {
                status.text.clone()
            } else {
                s!("No operators configured")
            };
            ui.label(RichText::new(msg).color(Color32::from_rgb(0xF0, 0xD2, 0x3C)));
        }
    });

    if submit {
        actions::login(app);
    }
}
