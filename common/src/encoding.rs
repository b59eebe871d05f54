//! Data-URI encoding shared by the uploaded-file and drawn-signature paths.

use base64::{engine::general_purpose, Engine as _};

/// MIME type of the surface export.
pub const PNG_MIME: &str = "image/png";

/// Used when the browser reports no MIME type for an uploaded file.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Encodes `bytes` as a `data:<mime>;base64,<payload>` string.
///
/// An empty `mime` falls back to [`FALLBACK_MIME`], which is what a
/// `FileReader.readAsDataURL` call produces for files of unknown type.
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    let mime = mime.trim();
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

/// Splits a base64 data URI into its MIME type and decoded bytes.
///
/// Returns `None` for anything that is not a well-formed base64 data URI.
pub fn from_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let mime = meta.strip_suffix(";base64")?;
    let bytes = general_purpose::STANDARD.decode(payload).ok()?;
    Some((mime.to_string(), bytes))
}
