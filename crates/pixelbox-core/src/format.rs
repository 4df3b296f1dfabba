//! Target encoding formats and their capability table.
//!
//! Every decision about alpha support, quality parameters, and search
//! order keys off [`ImageFormat`]; the rest of the crate never matches
//! on format names directly.

use serde::{Deserialize, Serialize};

/// Encodable output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    WebP,
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Formats in budget-search preference order, best compression first.
    pub const PREFERENCE_ORDER: [ImageFormat; 3] =
        [ImageFormat::WebP, ImageFormat::Jpeg, ImageFormat::Png];

    /// Whether the format can store an alpha channel.
    pub fn supports_alpha(self) -> bool {
        match self {
            ImageFormat::WebP | ImageFormat::Png => true,
            ImageFormat::Jpeg => false,
        }
    }

    /// Whether encoders for this format take a quality parameter.
    pub fn supports_quality(self) -> bool {
        match self {
            ImageFormat::WebP | ImageFormat::Jpeg => true,
            ImageFormat::Png => false,
        }
    }

    /// Lowercase format token, identical to the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::WebP => "webp",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
        }
    }

    /// Lowercase file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::WebP => "webp",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
        }
    }

    /// MIME type for data URLs and downloads.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::WebP => "image/webp",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }
}
