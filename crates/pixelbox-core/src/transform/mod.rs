//! Raster application of geometric operations.
//!
//! The `geometry` module computes exact pixel-space parameters; the
//! functions here apply them to RGBA buffers and hand back new
//! [`crate::RasterImage`] values. Inputs are never mutated.
//!
//! # Pipeline Order
//!
//! When several operations combine, they apply in this order:
//! 1. Rotation (canvas expands to the rotated bounds)
//! 2. Crop
//! 3. Resize
//! 4. Sharpening and flattening, on the way to the encoder

mod crop;
mod resize;
mod rotate;

pub use crop::apply_crop;
pub use resize::apply_resize;
pub use rotate::apply_rotation;

use serde::{Deserialize, Serialize};

/// Sampling filter for resampling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingFilter {
    /// Nearest neighbor (fastest, lowest quality).
    Nearest,
    /// Bilinear (fast, acceptable quality; the preview default).
    #[default]
    Bilinear,
    /// Lanczos3 (slower, highest quality; the export choice).
    Lanczos3,
}

impl SamplingFilter {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            SamplingFilter::Nearest => image::imageops::FilterType::Nearest,
            SamplingFilter::Bilinear => image::imageops::FilterType::Triangle,
            SamplingFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}
