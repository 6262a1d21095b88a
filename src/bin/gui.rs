// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use qr_kiosk::{config::consts::DEFAULT_LOG_FILE, gui, log, loge};

/// A 32x32 finder-pattern glyph, drawn rather than loaded.
fn app_icon() -> IconData {
    const N: u32 = 32;
    let mut rgba = Vec::with_capacity((N * N * 4) as usize);
    for y in 0..N {
        for x in 0..N {
            // concentric squares: dark ring, light ring, dark core
            let d = x.min(y).min(N - 1 - x).min(N - 1 - y);
            let dark = d < 5 || d >= 10;
            let v = if dark { 0x20 } else { 0xF0 };
            rgba.extend_from_slice(&[v, v, v, 0xFF]);
        }
    }
    IconData { rgba, width: N, height: N }
}

fn main() {
    log::init(DEFAULT_LOG_FILE);

    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
