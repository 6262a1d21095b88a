// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{options::KioskOptions, state::KioskSession},
    session::{CredentialTable, SessionGate},
    specs::profile::StyleMatchExtractor,
    store::Ledger,
};

use super::{
    actions,
    components,
    progress::{Status, StatusLevel},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let kiosk = KioskOptions::from_env()?;
    eframe::run_native(
        "QR Attendance Kiosk",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(kiosk)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub session: KioskSession,
    pub extractor: StyleMatchExtractor,

    // status line; the pipeline writes here through GuiProgress
    pub status: Arc<Mutex<Status>>,

    // ledger snapshot for the history table; None = reload on next draw
    pub history: Option<Ledger>,
    pub history_error: Option<String>,
}

impl App {
    pub fn new(options: KioskOptions) -> Self {
        let mut status = Status::default();

        let table = match CredentialTable::load(&options.credentials_path) {
            Ok(t) => {
                if t.is_empty() {
                    logw!("Init: {} has no users", options.credentials_path.display());
                }
                t
            }
            Err(e) => {
                loge!("Init: {}", e);
                status.level = StatusLevel::Error;
                status.text = format!("{e}. Nobody can log in until it is fixed.");
                CredentialTable::default()
            }
        };

        logf!(
            "Init: ledger={}, tz={}, timeout={}s",
            options.ledger.path().display(),
            options.clock.timezone_name().unwrap_or("local"),
            options.fetch.timeout.as_secs()
        );

        Self {
            session: KioskSession::new(options, SessionGate::new(table)),
            extractor: StyleMatchExtractor::default(),
            status: Arc::new(Mutex::new(status)),
            history: None,
            history_error: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, level: StatusLevel, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            s.level = level;
            s.text = msg.into();
            s.warnings.clear();
        }
    }

    #[inline]
    pub fn status_snapshot(&self) -> Status {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn invalidate_history(&mut self) {
        self.history = None;
        self.history_error = None;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.session.gate.is_authenticated() {
            egui::CentralPanel::default().show(ctx, |ui| {
                components::login::draw(ui, self);
            });
            return;
        }

        actions::scan_dropped(ctx, self);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::SidePanel::right("record")
            .resizable(false)
            .min_width(280.0)
            .show(ctx, |ui| {
                components::record_card::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::scan_panel::draw(ui, self);

            ui.separator();

            components::history_table::draw(ui, self);
        });
    }
}
