// src/specs/profile.rs
//! Spec for the profile service.
//!
//! Payload rewrite:
//! - QR codes carry the *profile* link (`...?idperfil=42`).
//! - The service answers the *query* form (`...?action=consulta&id=42`).
//! - Plain substring replacement; no URL parsing, unknown shapes pass through.
//!
//! Page layout (all matched on the exact `style` attribute):
//! - `<h5 style="text-align: center;">` → name
//! - `<h6 style="text-align: center; line-height: 10px">` → role
//! - `<h6 style="text-align: center; line-height: 15px">` → labelled details,
//!   `No. Identificación: …` and `Correo Institucional: …`

use chrono::{DateTime, FixedOffset};
use scraper::Html;

use crate::config::consts::{PROFILE_PARAM, QUERY_PARAM};
use crate::config::options::ClockOptions;
use crate::core::html::{find_all_by_style, find_by_style, text_of, text_with_sep};
use crate::core::sanitize::{non_empty, strip_label};
use crate::record::{Field, ProfileFields, ProfileRecord};

pub const NAME_STYLE: &str = "text-align: center;";
pub const ROLE_STYLE: &str = "text-align: center; line-height: 10px";
pub const DETAIL_STYLE: &str = "text-align: center; line-height: 15px";

pub const ID_MARKER: &str = "No. Identificación";
pub const EMAIL_MARKER: &str = "Correo Institucional";

/// Rewrite a scanned profile link into the service's query link.
pub fn query_url(payload: &str) -> String {
    payload.replace(PROFILE_PARAM, QUERY_PARAM)
}

/// Reads identity fields out of a fetched document.
pub trait ProfileExtractor {
    fn extract_fields(&self, html: &str) -> ProfileFields;
}

/// Style-string matcher for the profile template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleMatchExtractor {
    pub name_style: String,
    pub role_style: String,
    pub detail_style: String,
    pub id_marker: String,
    pub email_marker: String,
}

impl Default for StyleMatchExtractor {
    fn default() -> Self {
        Self {
            name_style: s!(NAME_STYLE),
            role_style: s!(ROLE_STYLE),
            detail_style: s!(DETAIL_STYLE),
            id_marker: s!(ID_MARKER),
            email_marker: s!(EMAIL_MARKER),
        }
    }
}

impl ProfileExtractor for StyleMatchExtractor {
    fn extract_fields(&self, html: &str) -> ProfileFields {
        let doc = Html::parse_document(html);

        let name = find_by_style(&doc, "h5", &self.name_style)
            .and_then(|el| non_empty(&text_of(el)));
        let role = find_by_style(&doc, "h6", &self.role_style)
            .and_then(|el| non_empty(&text_of(el)));

        let id_label = join!(&self.id_marker, ":");
        let email_label = join!(&self.email_marker, ":");

        // Later matches win, same as reading the page top to bottom.
        let mut identification = None;
        let mut email = None;
        for el in find_all_by_style(&doc, "h6", &self.detail_style) {
            let text = text_of(el);
            if text.contains(self.id_marker.as_str()) {
                identification = strip_label(&text, &id_label);
            } else if text.contains(self.email_marker.as_str()) {
                // Address is often wrapped in its own tag; keep a gap between nodes.
                email = strip_label(&text_with_sep(el, " "), &email_label);
            }
        }

        ProfileFields { name, identification, email, role }
    }
}

/// A stamped record plus the fields that could not be found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction {
    pub record: ProfileRecord,
    pub gaps: Vec<Field>,
}

impl Extraction {
    pub fn is_complete(&self) -> bool { self.gaps.is_empty() }

    /// One operator warning covering every gap, or None if nothing is missing.
    pub fn warning(&self) -> Option<String> {
        if self.gaps.is_empty() {
            return None;
        }
        let missing: Vec<&str> = self.gaps.iter().map(|f| f.label()).collect();
        Some(format!("Some data could not be extracted: {}", missing.join(", ")))
    }
}

/// Extract fields and stamp them with `registered_at`.
pub fn extract_at(
    extractor: &dyn ProfileExtractor,
    html: &str,
    registered_at: DateTime<FixedOffset>,
) -> Extraction {
    let fields = extractor.extract_fields(html);
    let gaps = fields.gaps();
    Extraction { record: ProfileRecord::stamp(fields, registered_at), gaps }
}

/// Extract fields and stamp them with the clock's current time.
pub fn extract(extractor: &dyn ProfileExtractor, html: &str, clock: &ClockOptions) -> Extraction {
    extract_at(extractor, html, clock.now())
}
