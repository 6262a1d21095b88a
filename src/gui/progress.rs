// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug)]
pub struct Status {
    pub level: StatusLevel,
    pub text: String,
    /// Warnings from the current scan; cleared when the next one starts.
    pub warnings: Vec<String>,
}

impl Default for Status {
    fn default() -> Self {
        Self { level: StatusLevel::Info, text: s!("Idle"), warnings: Vec::new() }
    }
}

pub struct GuiProgress {
    status: Arc<Mutex<Status>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<Status>>) -> Self {
        if let Ok(mut s) = status.lock() {
            s.warnings.clear();
        }
        Self { status }
    }

    fn set_status(&self, level: StatusLevel, msg: &str) {
        if let Ok(mut s) = self.status.lock() {
            s.level = level;
            s.text = s!(msg);
        }
    }
}

impl Progress for GuiProgress {
    fn stage(&mut self, msg: &str) {
        self.set_status(StatusLevel::Info, msg);
    }

    fn warn(&mut self, msg: &str) {
        if let Ok(mut s) = self.status.lock() {
            s.warnings.push(s!(msg));
        }
        self.set_status(StatusLevel::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.set_status(StatusLevel::Error, msg);
    }

    fn success(&mut self, msg: &str) {
        self.set_status(StatusLevel::Success, msg);
    }
}
