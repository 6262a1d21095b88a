// src/gui/actions/export.rs
use std::path::PathBuf;

use super::{refresh_history, require_operator};
use crate::{
    gui::{app::App, progress::StatusLevel},
    store::{self, LedgerError},
};

pub fn export(app: &mut App) {
    if !require_operator(app) { return; }

    // normalize the out path first (mutates app) before any ledger borrows
    let text = app.session.gui.export_path.trim();
    if !text.is_empty() {
        app.session.options.ledger.export_path = PathBuf::from(text);
    }
    let out = app.session.options.ledger.export_path.clone();

    // export what is on disk, not a stale snapshot
    refresh_history(app);

    if app.history_error.is_some() { return; }

    let (level, status_msg) = match app.history.as_ref() {
        None => (StatusLevel::Error, s!("Could not read the ledger")),
        Some(ledger) => match store::export_csv(ledger, &out) {
            Ok(path) => {
                logf!("Export: OK rows={} → {}", ledger.len(), path.display());
                (StatusLevel::Success, format!("Exported {} record(s) → {}", ledger.len(), path.display()))
            }
            Err(LedgerError::Empty) => {
                logd!("Export: Clicked, but there's nothing to export");
                (StatusLevel::Warning, s!("Nothing to export"))
            }
            Err(e) => {
                loge!("Export: Error: {}", e);
                (StatusLevel::Error, format!("Export error: {e}"))
            }
        },
    };

    // mutate app only after the ledger borrow is gone
    app.status(level, status_msg);
}
