// src/pipeline.rs
//
// One scan, start to finish: decode → rewrite → fetch → extract → append.
// Every failure ends up in the returned `ScanReport` and as a notice on the
// progress sink; nothing here returns Err or panics.

use std::path::Path;

use image::DynamicImage;

use crate::{
    config::options::KioskOptions,
    core::net::{self, FetchError},
    progress::Progress,
    qr::{self, DecodeOutcome},
    specs::profile::{self, Extraction, ProfileExtractor},
    store::{self, LedgerError},
};

pub const MSG_NO_CODE: &str = "No valid QR code detected";
pub const MSG_SAVED: &str = "Record saved";

#[derive(Debug)]
pub enum ScanReport {
    /// The frame held no readable symbol.
    NoCode,
    /// Image unreadable or symbol corrupt.
    DecodeFailed(String),
    /// Non-200 or transport failure. `url` is the rewritten query URL.
    FetchFailed { url: String, error: FetchError },
    /// Extracted and appended. `rows` is the ledger size afterwards.
    Saved { extraction: Extraction, rows: usize },
    /// Extracted, but the ledger write failed.
    SaveFailed { extraction: Extraction, error: LedgerError },
}

impl ScanReport {
    pub fn is_saved(&self) -> bool { matches!(self, ScanReport::Saved { .. }) }

    pub fn extraction(&self) -> Option<&Extraction> {
        match self {
            ScanReport::Saved { extraction, .. } | ScanReport::SaveFailed { extraction, .. } => Some(extraction),
            _ => None,
        }
    }

    /// One-line outcome for a status bar or terminal.
    pub fn summary(&self) -> String {
        match self {
            ScanReport::NoCode => s!(MSG_NO_CODE),
            ScanReport::DecodeFailed(reason) => format!("QR decode error: {reason}"),
            ScanReport::FetchFailed { url, error } if error.is_timeout() => {
                format!("Profile service did not answer in time: {url}")
            }
            ScanReport::FetchFailed { error, .. } => format!("Could not fetch profile: {error}"),
            ScanReport::Saved { rows, .. } => format!("{MSG_SAVED} ({rows} in ledger)"),
            ScanReport::SaveFailed { error, .. } => format!("Could not save record: {error}"),
        }
    }
}

fn notify(progress: &mut Option<&mut dyn Progress>, f: impl FnOnce(&mut dyn Progress)) {
    if let Some(p) = progress.as_deref_mut() {
        f(p);
    }
}

/// Scan an image file.
pub fn process_image(
    opts: &KioskOptions,
    extractor: &dyn ProfileExtractor,
    image_path: &Path,
    mut progress: Option<&mut dyn Progress>,
) -> ScanReport {
    logf!("Scan: Begin image={}", image_path.display());
    notify(&mut progress, |p| p.stage("Decoding QR code…"));
    let outcome = qr::decode_file(image_path);
    process_outcome(opts, extractor, outcome, progress)
}

/// Scan a frame already in memory.
pub fn process_frame(
    opts: &KioskOptions,
    extractor: &dyn ProfileExtractor,
    frame: &DynamicImage,
    mut progress: Option<&mut dyn Progress>,
) -> ScanReport {
    logf!("Scan: Begin frame {}x{}", frame.width(), frame.height());
    notify(&mut progress, |p| p.stage("Decoding QR code…"));
    let outcome = qr::decode_image(frame);
    process_outcome(opts, extractor, outcome, progress)
}

fn process_outcome(
    opts: &KioskOptions,
    extractor: &dyn ProfileExtractor,
    outcome: DecodeOutcome,
    mut progress: Option<&mut dyn Progress>,
) -> ScanReport {
    match outcome {
        DecodeOutcome::Decoded(payload) => process_payload(opts, extractor, &payload, progress),
        DecodeOutcome::NotFound => {
            logd!("Scan: No QR code");
            notify(&mut progress, |p| p.warn(MSG_NO_CODE));
            ScanReport::NoCode
        }
        DecodeOutcome::DecodeFailed(reason) => {
            let report = ScanReport::DecodeFailed(reason);
            notify(&mut progress, |p| p.error(&report.summary()));
            report
        }
    }
}

/// Everything after decoding: the payload is the QR text (a profile link).
pub fn process_payload(
    opts: &KioskOptions,
    extractor: &dyn ProfileExtractor,
    payload: &str,
    mut progress: Option<&mut dyn Progress>,
) -> ScanReport {
    let url = profile::query_url(payload);
    logf!("Scan: Fetch {}", url);
    notify(&mut progress, |p| p.stage("Fetching profile…"));

    let html = match net::http_get(&url, &opts.fetch) {
        Ok(body) => body,
        Err(error) => {
            loge!("Scan: Fetch failed {}: {}", url, error);
            let report = ScanReport::FetchFailed { url, error };
            notify(&mut progress, |p| p.error(&report.summary()));
            return report;
        }
    };

    let extraction = profile::extract(extractor, &html, &opts.clock);
    if let Some(w) = extraction.warning() {
        logw!("Scan: {}", w);
        notify(&mut progress, |p| p.warn(&w));
    }

    notify(&mut progress, |p| p.stage("Saving record…"));
    match store::append(opts.ledger.path(), &extraction.record) {
        Ok(rows) => {
            let report = ScanReport::Saved { extraction, rows };
            notify(&mut progress, |p| p.success(&report.summary()));
            report
        }
        Err(error) => {
            loge!("Scan: Ledger write failed: {}", error);
            let report = ScanReport::SaveFailed { extraction, error };
            notify(&mut progress, |p| p.error(&report.summary()));
            report
        }
    }
}
