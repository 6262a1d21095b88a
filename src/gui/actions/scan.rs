// src/gui/actions/scan.rs
use std::path::PathBuf;

use eframe::egui;

use super::require_operator;
use crate::{
    gui::{app::App, progress::{GuiProgress, StatusLevel}},
    pipeline::{self, ScanReport},
};

pub fn scan_image(app: &mut App) {
    if !require_operator(app) { return; }

    let text = app.session.gui.image_path.trim().to_owned();
    if text.is_empty() {
        app.status(StatusLevel::Warning, "Choose an image first");
        return;
    }

    let path = PathBuf::from(text);
    let mut prog = GuiProgress::new(app.status.clone());
    let report = pipeline::process_image(&app.session.options, &app.extractor, &path, Some(&mut prog));
    finish(app, report);
}

pub fn register_payload(app: &mut App) {
    if !require_operator(app) { return; }

    let payload = app.session.gui.payload.trim().to_owned();
    if payload.is_empty() {
        app.status(StatusLevel::Warning, "Paste a profile link first");
        return;
    }

    let mut prog = GuiProgress::new(app.status.clone());
    let report = pipeline::process_payload(&app.session.options, &app.extractor, &payload, Some(&mut prog));
    finish(app, report);
}

/// Files dropped on the window are scanned one after another.
pub fn scan_dropped(ctx: &egui::Context, app: &mut App) {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    if dropped.is_empty() || !require_operator(app) { return; }

    for file in dropped {
        let mut prog = GuiProgress::new(app.status.clone());
        let report = if let Some(path) = &file.path {
            app.session.gui.image_path = path.to_string_lossy().into_owned();
            pipeline::process_image(&app.session.options, &app.extractor, path, Some(&mut prog))
        } else if let Some(bytes) = &file.bytes {
            match image::load_from_memory(bytes) {
                Ok(frame) => pipeline::process_frame(&app.session.options, &app.extractor, &frame, Some(&mut prog)),
                Err(e) => {
                    let report = ScanReport::DecodeFailed(e.to_string());
                    app.status(StatusLevel::Error, report.summary());
                    report
                }
            }
        } else {
            logd!("UI: Dropped file {} has neither path nor bytes", file.name);
            continue;
        };
        finish(app, report);
    }
}

fn finish(app: &mut App, report: ScanReport) {
    if report.is_saved() {
        app.invalidate_history();
    }
    app.session.last_report = Some(report);
}
