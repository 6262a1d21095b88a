// src/progress.rs
/// Operator-facing notices raised while a scan runs.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// A stage started ("Decoding QR…", "Fetching profile…").
    fn stage(&mut self, _msg: &str) {}

    /// Non-blocking problem; the scan carries on.
    fn warn(&mut self, _msg: &str) {}

    /// The scan stopped here.
    fn error(&mut self, _msg: &str) {}

    /// The record reached the ledger.
    fn success(&mut self, _msg: &str) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Collects every notice; handy for tests and for replaying into a UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notices {
    pub stages: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub successes: Vec<String>,
}

impl Progress for Notices {
    fn stage(&mut self, msg: &str) { self.stages.push(s!(msg)); }
    fn warn(&mut self, msg: &str) { self.warnings.push(s!(msg)); }
    fn error(&mut self, msg: &str) { self.errors.push(s!(msg)); }
    fn success(&mut self, msg: &str) { self.successes.push(s!(msg)); }
}
