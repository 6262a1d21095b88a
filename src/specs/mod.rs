// src/specs/mod.rs
//! # Page "specs"
//!
//! Knowledge of the remote profile service lives here and nowhere else:
//! how a QR payload maps to the page we fetch, and where each identity field
//! sits in that page's HTML.
//!
//! Specs do not fetch, persist or report. They turn text into text.
//!
//! The profile template is matched on exact inline `style` strings. That is
//! tied to one site's markup; a different template means a different
//! `ProfileExtractor` impl, with the pipeline left untouched.
pub mod profile;
