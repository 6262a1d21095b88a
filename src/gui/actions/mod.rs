// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{login, scan_*, export, ...}.

mod auth;    // src/gui/actions/auth.rs
mod export;  // src/gui/actions/export.rs
mod history; // src/gui/actions/history.rs
mod scan;    // src/gui/actions/scan.rs

pub use auth::{login, logout};
pub use export::export;
pub use history::refresh_history;
pub use scan::{register_payload, scan_dropped, scan_image};

use crate::gui::{app::App, progress::StatusLevel};

/// Scanner actions refuse to run without an operator.
pub(super) fn require_operator(app: &App) -> bool {
    if app.session.gate.is_authenticated() {
        true
    } else {
        logw!("UI: Scanner action without a session");
        app.status(StatusLevel::Error, "Log in first");
        false
    }
}
