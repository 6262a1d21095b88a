// src/gui/actions/history.rs
use crate::{
    gui::{app::App, progress::StatusLevel},
    store::{self, Ledger},
};

/// Reload the ledger snapshot shown in the history table.
pub fn refresh_history(app: &mut App) {
    match store::load_all(app.session.options.ledger.path()) {
        Ok(ledger) => {
            logd!("History: {} row(s)", ledger.len());
            app.history = Some(ledger);
            app.history_error = None;
        }
        Err(e) => {
            loge!("History: {}", e);
            // keep an empty snapshot so the table doesn't retry every frame
            app.history = Some(Ledger::default());
            app.history_error = Some(e.to_string());
            app.status(StatusLevel::Error, e.to_string());
        }
    }
}
