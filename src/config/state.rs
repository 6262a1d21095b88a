// src/config/state.rs
use super::options::KioskOptions;
use crate::pipeline::ScanReport;
use crate::session::SessionGate;

/// Transient UI flags; nothing here outlives the window.
#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    // Login form
    pub username: String,
    pub password: String,
    pub login_error: Option<String>,

    // Scan panel inputs
    pub image_path: String,
    pub payload: String,

    /// History table shown below the scan panel
    pub show_history: bool,
    pub export_path: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1000,
            window_h: 700,
            username: s!(),
            password: s!(),
            login_error: None,
            image_path: s!(),
            payload: s!(),
            show_history: false,
            export_path: s!(),
        }
    }
}

/// Per-session context handed to every handler: options, the login gate,
/// UI flags and the outcome of the last scan. Created at startup, dropped
/// with the window.
#[derive(Debug)]
pub struct KioskSession {
    pub options: KioskOptions,
    pub gate: SessionGate,
    pub gui: GuiState,
    pub last_report: Option<ScanReport>,
}

impl KioskSession {
    pub fn new(options: KioskOptions, gate: SessionGate) -> Self {
        let gui = GuiState {
            export_path: options.ledger.export_path.to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self { options, gate, gui, last_report: None }
    }

    /// Log out and drop everything tied to the previous operator.
    pub fn end_shift(&mut self) {
        self.gate.logout();
        self.gui.password.clear();
        self.gui.login_error = None;
        self.gui.show_history = false;
        self.last_report = None;
    }
}
