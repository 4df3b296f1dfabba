//! Export-side packaging: download filenames and data URLs.
//!
//! The core never performs the handoff to storage or the DOM; it only
//! produces the strings a host needs to do so. Filenames follow a
//! single timestamp convention (`pixelbox-<ms>.<ext>`) so exports sort
//! chronologically in a download folder.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::encode::EncodingResult;
use crate::format::ImageFormat;

/// Generate a download filename for an export.
///
/// # Arguments
///
/// * `format` - Encoded format, which picks the extension
/// * `timestamp_ms` - Caller-supplied export time in milliseconds
///
/// # Example
///
/// ```ignore
/// let name = export_filename(ImageFormat::Jpeg, 1_700_000_000_123);
/// assert_eq!(name, "pixelbox-1700000000123.jpg");
/// ```
pub fn export_filename(format: ImageFormat, timestamp_ms: u64) -> String {
    format!("pixelbox-{}.{}", timestamp_ms, format.extension())
}

/// Package an encoded result as a `data:` URL.
///
/// Hosts hand this to an anchor download or an `img` source without
/// touching the raw bytes again.
pub fn data_url(result: &EncodingResult) -> String {
    format!(
        "data:{};base64,{}",
        result.format.mime_type(),
        STANDARD.encode(&result.bytes)
    )
}
