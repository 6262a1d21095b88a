// tests/pipeline_e2e.rs
//
// Whole scans against a throwaway HTTP server on 127.0.0.1.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use image::{DynamicImage, GrayImage, Luma};
use qrcode::{Color, QrCode};

use qr_kiosk::{
    config::options::{ClockOptions, KioskOptions},
    core::net::FetchError,
    log,
    pipeline::{self, ScanReport},
    progress::{Notices, NullProgress},
    specs::profile::{StyleMatchExtractor, query_url},
    store,
};

const PROFILE: &str = r#"<html><body>
    <h5 style="text-align: center;">Jane Doe</h5>
    <h6 style="text-align: center; line-height: 10px">Student</h6>
    <h6 style="text-align: center; line-height: 15px">No. Identificación: 12345</h6>
    <h6 style="text-align: center; line-height: 15px">Correo Institucional: <span>jane@inst.edu</span></h6>
</body></html>"#;

const PROFILE_NO_EMAIL: &str = r#"<html><body>
    <h5 style="text-align: center;">Jane Doe</h5>
    <h6 style="text-align: center; line-height: 10px">Student</h6>
    <h6 style="text-align: center; line-height: 15px">No. Identificación: 12345</h6>
</body></html>"#;

/// Serve exactly one request, answering `status` with `body`.
/// The handle yields the request target the client asked for.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();

        let mut req = Vec::new();
        let mut buf = [0u8; 1024];
        while !req.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 { break; }
            req.extend_from_slice(&buf[..n]);
        }
        let head = String::from_utf8_lossy(&req).into_owned();
        let target = head.split_whitespace().nth(1).unwrap_or_default().to_string();

        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).unwrap();
        stream.flush().unwrap();
        target
    });

    (base, handle)
}

/// Keep diagnostics out of the package directory.
fn test_log() -> PathBuf {
    let path = std::env::temp_dir().join("qr_kiosk_tests").join("pipeline.log");
    log::init(path.clone());
    path
}

fn options(ledger: &Path) -> KioskOptions {
    let mut opts = KioskOptions::default();
    opts.ledger.set_path(ledger.to_str().unwrap());
    opts.clock = ClockOptions::with_timezone("UTC").unwrap();
    opts.fetch.set_timeout_secs("5").unwrap();
    opts
}

fn qr_image(text: &str) -> DynamicImage {
    let code = QrCode::new(text.as_bytes()).unwrap();
    let w = code.width() as u32;
    let side = (w + 8) * 6;
    let mut img = GrayImage::from_pixel(side, side, Luma([255]));
    for (i, c) in code.to_colors().iter().enumerate() {
        if *c != Color::Dark { continue; }
        let (x0, y0) = ((i as u32 % w + 4) * 6, (i as u32 / w + 4) * 6);
        for dy in 0..6 {
            for dx in 0..6 {
                img.put_pixel(x0 + dx, y0 + dy, Luma([0]));
            }
        }
    }
    DynamicImage::ImageLuma8(img)
}

#[test]
fn payload_is_rewritten_fetched_extracted_and_saved() {
    test_log();
    let (base, server) = serve_once("200 OK", PROFILE);
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("registros.xlsx");
    let opts = options(&ledger);

    let mut notices = Notices::default();
    let report = pipeline::process_payload(
        &opts,
        &StyleMatchExtractor::default(),
        &format!("{base}/profile?idperfil=42"),
        Some(&mut notices),
    );

    assert_eq!(server.join().unwrap(), "/profile?action=consulta&id=42");
    assert!(matches!(report, ScanReport::Saved { rows: 1, .. }), "{}", report.summary());
    assert!(notices.warnings.is_empty());
    assert!(notices.errors.is_empty());
    assert_eq!(notices.successes.len(), 1);

    let rows = store::load_all(&ledger).unwrap().entries();
    assert_eq!(rows.len(), 1);
    let r = &rows[0];
    assert_eq!(r.name.as_deref(), Some("Jane Doe"));
    assert_eq!(r.identification.as_deref(), Some("12345"));
    assert_eq!(r.role.as_deref(), Some("Student"));
    assert_eq!(r.email.as_deref(), Some("jane@inst.edu"));
    assert_eq!(r.registered_at.len(), 19);
    assert!(chrono::NaiveDateTime::parse_from_str(&r.registered_at, "%Y-%m-%d %H:%M:%S").is_ok());
}

#[test]
fn partial_profile_is_saved_with_one_warning() {
    test_log();
    let (base, server) = serve_once("200 OK", PROFILE_NO_EMAIL);
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("registros.xlsx");

    let mut notices = Notices::default();
    let report = pipeline::process_payload(
        &options(&ledger),
        &StyleMatchExtractor::default(),
        &format!("{base}/p?idperfil=7"),
        Some(&mut notices),
    );
    server.join().unwrap();

    assert!(report.is_saved());
    assert_eq!(notices.warnings.len(), 1);
    assert!(notices.warnings[0].contains("email"));

    let rows = store::load_all(&ledger).unwrap().entries();
    assert_eq!(rows[0].email, None);
    assert_eq!(rows[0].name.as_deref(), Some("Jane Doe"));
}

#[test]
fn non_200_is_a_fetch_failure_and_nothing_is_written() {
    test_log();
    let (base, server) = serve_once("404 Not Found", "<html>gone</html>");
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("registros.xlsx");

    let mut notices = Notices::default();
    let report = pipeline::process_payload(
        &options(&ledger),
        &StyleMatchExtractor::default(),
        &format!("{base}/profile?idperfil=42"),
        Some(&mut notices),
    );
    server.join().unwrap();

    match &report {
        ScanReport::FetchFailed { url, error: FetchError::Status { status, .. } } => {
            assert_eq!(*status, 404);
            assert!(url.ends_with("action=consulta&id=42"));
        }
        other => panic!("unexpected report: {}", other.summary()),
    }
    assert_eq!(notices.errors.len(), 1);
    assert!(!ledger.exists());
}

#[test]
fn unreachable_host_is_a_fetch_failure() {
    test_log();
    // bind then drop: the port is free and nobody is listening
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("registros.xlsx");

    let report = pipeline::process_payload(
        &options(&ledger),
        &StyleMatchExtractor::default(),
        &format!("http://127.0.0.1:{port}/profile?idperfil=1"),
        Some(&mut NullProgress),
    );
    assert!(matches!(report, ScanReport::FetchFailed { error: FetchError::Transport(_), .. }));
    assert!(!ledger.exists());
}

#[test]
fn silent_server_times_out() {
    test_log();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let server = thread::spawn(move || {
        // accept, then say nothing until the client has given up
        let (_stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_secs(3));
    });

    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("registros.xlsx");
    let mut opts = options(&ledger);
    opts.fetch.set_timeout_secs("1").unwrap();

    let report = pipeline::process_payload(
        &opts,
        &StyleMatchExtractor::default(),
        &format!("{base}/profile?idperfil=5"),
        None,
    );
    server.join().unwrap();

    match &report {
        ScanReport::FetchFailed { error, .. } => assert!(error.is_timeout()),
        other => panic!("unexpected report: {}", other.summary()),
    }
    assert!(report.summary().contains("did not answer in time"));
    assert!(!ledger.exists());
}

#[test]
fn frame_with_code_runs_the_whole_pipeline() {
    test_log();
    let (base, server) = serve_once("200 OK", PROFILE);
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("registros.xlsx");
    let frame = qr_image(&format!("{base}/profile?idperfil=42"));

    let report = pipeline::process_frame(&options(&ledger), &StyleMatchExtractor::default(), &frame, None);
    assert_eq!(server.join().unwrap(), "/profile?action=consulta&id=42");
    assert!(report.is_saved());
    assert_eq!(store::load_all(&ledger).unwrap().len(), 1);
}

#[test]
fn image_without_code_stops_before_fetching() {
    test_log();
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("registros.xlsx");
    let img_path = dir.path().join("blank.png");
    DynamicImage::ImageLuma8(GrayImage::from_pixel(120, 120, Luma([255])))
        .save(&img_path)
        .unwrap();

    let mut notices = Notices::default();
    let report = pipeline::process_image(
        &options(&ledger),
        &StyleMatchExtractor::default(),
        &img_path,
        Some(&mut notices),
    );

    assert!(matches!(report, ScanReport::NoCode));
    assert_eq!(notices.warnings, vec![pipeline::MSG_NO_CODE.to_string()]);
    assert!(!ledger.exists());
}

#[test]
fn unreadable_image_is_a_decode_failure() {
    test_log();
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("registros.xlsx");
    let img_path = dir.path().join("broken.png");
    std::fs::write(&img_path, b"\x89PNG but not really").unwrap();

    let report = pipeline::process_image(&options(&ledger), &StyleMatchExtractor::default(), &img_path, None);
    assert!(matches!(report, ScanReport::DecodeFailed(_)));
    assert!(!ledger.exists());
}

#[test]
fn payload_is_rewritten_exactly_as_given() {
    test_log();
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let dir = tempfile::tempdir().unwrap();
    let payload = format!(" http://127.0.0.1:{port}/p?idperfil=3 ");

    let report = pipeline::process_payload(
        &options(&dir.path().join("registros.xlsx")),
        &StyleMatchExtractor::default(),
        &payload,
        None,
    );
    match &report {
        ScanReport::FetchFailed { url, .. } => {
            assert_eq!(url, &query_url(&payload));
            assert_eq!(url, &format!(" http://127.0.0.1:{port}/p?action=consulta&id=3 "));
        }
        other => panic!("unexpected report: {}", other.summary()),
    }
}

#[test]
fn diagnostics_go_to_the_configured_log() {
    let path = test_log();
    let dir = tempfile::tempdir().unwrap();
    let img_path = dir.path().join("blank.png");
    DynamicImage::ImageLuma8(GrayImage::from_pixel(60, 60, Luma([255])))
        .save(&img_path)
        .unwrap();

    pipeline::process_image(
        &options(&dir.path().join("registros.xlsx")),
        &StyleMatchExtractor::default(),
        &img_path,
        None,
    );

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains(&img_path.display().to_string()));
}
