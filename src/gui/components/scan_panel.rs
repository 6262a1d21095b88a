// src/gui/components/scan_panel.rs
//
// Two ways in: an image file (path field or drag-and-drop onto the window),
// or the profile link itself when the code was read by another device.

use eframe::egui::{self, Key};

use crate::gui::{actions, app::App};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Clicked { None, Scan, Register }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut clicked = Clicked::None;
    let gui = &mut app.session.gui;

    ui.label("Scan a QR code image, or drop one onto the window.");
    ui.add_space(4.0);

    egui::Grid::new("scan_inputs")
        .num_columns(3)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Image:");
            let r = ui.add(
                egui::TextEdit::singleline(&mut gui.image_path)
                    .hint_text("path/to/qr.png")
                    .desired_width(360.0),
            );
            if ui.button("Scan image").clicked()
                || (r.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)))
            {
                clicked = Clicked::Scan;
            }
            ui.end_row();

            ui.label("Link:");
            let r = ui.add(
                egui::TextEdit::singleline(&mut gui.payload)
                    .hint_text("https://…/perfil?idperfil=…")
                    .desired_width(360.0),
            );
            if ui.button("Register link").clicked()
                || (r.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)))
            {
                clicked = Clicked::Register;
            }
            ui.end_row();
        });

    match clicked {
        Clicked::Scan => actions::scan_image(app),
        Clicked::Register => actions::register_payload(app),
        Clicked::None => {}
    }
}
