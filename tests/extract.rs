// tests/extract.rs
use chrono::{FixedOffset, TimeZone};

use qr_kiosk::{
    config::options::ClockOptions,
    record::Field,
    specs::profile::{self, ProfileExtractor, StyleMatchExtractor},
};

const FULL: &str = r#"<!DOCTYPE html>
<html><body>
  <div class="card">
    <h5 style="text-align: center;">Jane   Doe</h5>
    <h6 style="text-align: center; line-height: 10px">Student</h6>
    <h6 style="text-align: center; line-height: 15px"><b>No. Identificación:</b> 12345</h6>
    <h6 style="text-align: center; line-height: 15px"><b>Correo Institucional:</b><a href="mailto:jane@inst.edu">jane@inst.edu</a></h6>
  </div>
</body></html>"#;

const NO_ROLE: &str = r#"<html><body>
    <h5 style="text-align: center;">Jane Doe</h5>
    <h6 style="text-align: center; line-height: 15px">No. Identificación: 12345</h6>
    <h6 style="text-align: center; line-height: 15px">Correo Institucional: jane@inst.edu</h6>
</body></html>"#;

#[test]
fn full_profile_yields_all_fields() {
    let f = StyleMatchExtractor::default().extract_fields(FULL);
    assert_eq!(f.name.as_deref(), Some("Jane Doe"));
    assert_eq!(f.role.as_deref(), Some("Student"));
    assert_eq!(f.identification.as_deref(), Some("12345"));
    assert_eq!(f.email.as_deref(), Some("jane@inst.edu"));
    assert!(f.gaps().is_empty());
}

#[test]
fn missing_role_is_a_single_gap_with_one_warning() {
    let at = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
    let ex = profile::extract_at(&StyleMatchExtractor::default(), NO_ROLE, at);

    assert_eq!(ex.record.role, None);
    assert_eq!(ex.record.name.as_deref(), Some("Jane Doe"));
    assert_eq!(ex.gaps, vec![Field::Role]);
    assert!(!ex.is_complete());

    let w = ex.warning().unwrap();
    assert!(w.contains("role"));
    assert_eq!(ex.record.timestamp(), "2024-05-01 09:30:00");
}

#[test]
fn near_miss_styles_do_not_match() {
    let html = r#"<h5 style="text-align:center;">Jane Doe</h5>
                  <h6 style="text-align: center; line-height: 10px;">Student</h6>"#;
    let f = StyleMatchExtractor::default().extract_fields(html);
    assert_eq!(f.name, None);
    assert_eq!(f.role, None);
}

#[test]
fn unrelated_page_yields_nothing_but_still_stamps() {
    let ex = profile::extract(
        &StyleMatchExtractor::default(),
        "<html><body><p>Not found</p></body></html>",
        &ClockOptions::default(),
    );
    assert_eq!(ex.gaps, Field::ALL.to_vec());
    assert_eq!(ex.record.timestamp().len(), 19);
    // one combined message, not one per field
    assert_eq!(ex.warning().unwrap().matches("could not be extracted").count(), 1);
}

#[test]
fn later_detail_lines_win() {
    let html = r#"<h6 style="text-align: center; line-height: 15px">No. Identificación: 111</h6>
                  <h6 style="text-align: center; line-height: 15px">No. Identificación: 222</h6>"#;
    let f = StyleMatchExtractor::default().extract_fields(html);
    assert_eq!(f.identification.as_deref(), Some("222"));
}

#[test]
fn label_without_value_counts_as_missing() {
    let html = r#"<h6 style="text-align: center; line-height: 15px">Correo Institucional:   </h6>"#;
    let f = StyleMatchExtractor::default().extract_fields(html);
    assert_eq!(f.email, None);
}
