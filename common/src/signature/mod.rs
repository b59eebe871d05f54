//! Freehand signature capture.
//!
//! The browser canvas is only a live preview; the authoritative copy of the
//! signature is the list of strokes held by [`SignatureSurface`], which is
//! rasterized to PNG on export. That keeps the exported image deterministic
//! and lets the whole flow run without a DOM.

mod input;
mod raster;
mod surface;

pub use input::{Point, PointerInput, SurfaceRect};
pub use raster::{BRUSH_RADIUS, INK};
pub use surface::{SignatureSurface, Stroke, DEFAULT_HEIGHT, DEFAULT_WIDTH};

use thiserror::Error;

/// Prefix of the file offered by the "Unduh Tanda Tangan" button.
pub const DOWNLOAD_PREFIX: &str = "TandaTangan_";

/// Used in the download name when no trainee name has been typed yet.
pub const UNNAMED: &str = "tanpa_nama";

#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("failed to encode signature image: {0}")]
    Encode(#[from] image::ImageError),
}

/// File name for a downloaded signature: `TandaTangan_<nama>.png`.
pub fn download_file_name(nama: &str) -> String {
    let nama = nama.trim();
    let nama = if nama.is_empty() { UNNAMED } else { nama };
    format!("{}{}.png", DOWNLOAD_PREFIX, nama)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_name_uses_trainee_name() {
        assert_eq!(download_file_name("Budi Santoso"), "TandaTangan_Budi Santoso.png");
    }

    #[test]
    fn download_name_falls_back_to_placeholder() {
        assert_eq!(download_file_name(""), "TandaTangan_tanpa_nama.png");
        assert_eq!(download_file_name("   "), "TandaTangan_tanpa_nama.png");
    }
}
