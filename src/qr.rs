// src/qr.rs
//
// Image → QR payload. Every failure mode is a value, never a panic.

use std::borrow::Cow;
use std::path::Path;

use image::{DynamicImage, RgbImage, imageops};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeOutcome {
    Decoded(String),
    NotFound,
    DecodeFailed(String),
}

impl DecodeOutcome {
    pub fn payload(&self) -> Option<&str> {
        match self {
            DecodeOutcome::Decoded(t) => Some(t),
            _ => None,
        }
    }
}

/// Open an image file and decode it.
pub fn decode_file(path: &Path) -> DecodeOutcome {
    match image::open(path) {
        Ok(img) => decode_image(&img),
        Err(e) => {
            loge!("QR: Could not read image {}: {}", path.display(), e);
            DecodeOutcome::DecodeFailed(format!("Could not read image: {e}"))
        }
    }
}

/// Decode an encoded image held in memory (PNG/JPEG/BMP).
pub fn decode_bytes(bytes: &[u8]) -> DecodeOutcome {
    match image::load_from_memory(bytes) {
        Ok(img) => decode_image(&img),
        Err(e) => {
            loge!("QR: Could not decode image bytes ({} B): {}", bytes.len(), e);
            DecodeOutcome::DecodeFailed(format!("Could not read image: {e}"))
        }
    }
}

/// Locate and decode one QR symbol.
///
/// Frames holding several symbols are tried in detection order; the first that
/// decodes wins. A symbol that is unreadable or decodes to empty text counts
/// as not found; `DecodeFailed` is kept for images that cannot be processed.
pub fn decode_image(img: &DynamicImage) -> DecodeOutcome {
    let rgb: Cow<'_, RgbImage> = match img.as_rgb8() {
        Some(rgb) => Cow::Borrowed(rgb),
        None => Cow::Owned(img.to_rgb8()),
    };
    let (w, h) = rgb.dimensions();
    if w == 0 || h == 0 {
        return DecodeOutcome::DecodeFailed(s!("Image is empty"));
    }

    let luma = imageops::grayscale(&*rgb);
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(w as usize, h as usize, |x, y| {
        luma.get_pixel(x as u32, y as u32)[0]
    });
    let grids = prepared.detect_grids();

    if grids.is_empty() {
        logd!("QR: No symbol in {}x{} frame", w, h);
        return DecodeOutcome::NotFound;
    }
    if grids.len() > 1 {
        logd!("QR: {} symbols in frame, taking the first that decodes", grids.len());
    }

    for grid in &grids {
        match grid.decode() {
            Ok((_, text)) if text.is_empty() => continue,
            Ok((_, text)) => {
                logf!("QR: Decoded {} chars", text.chars().count());
                return DecodeOutcome::Decoded(text);
            }
            Err(e) => logw!("QR: Symbol found but unreadable: {:?}", e),
        }
    }

    // A damaged symbol is no valid code at all.
    DecodeOutcome::NotFound
}
