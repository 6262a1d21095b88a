// src/gui/actions/auth.rs
use crate::gui::{app::App, progress::StatusLevel};

pub fn login(app: &mut App) {
    let gui = &mut app.session.gui;
    match app.session.gate.login(&gui.username, &gui.password) {
        Ok(()) => {
            gui.password.clear();
            gui.login_error = None;
            app.invalidate_history();
            let user = app.session.gate.user().unwrap_or_default().to_owned();
            app.status(StatusLevel::Info, format!("Logged in as {user}. Ready to scan"));
        }
        Err(e) => {
            gui.password.clear();
            gui.login_error = Some(e.to_string());
        }
    }
}

pub fn logout(app: &mut App) {
    app.session.end_shift();
    app.invalidate_history();
    app.status(StatusLevel::Info, "Logged out");
}
