//! Alpha flattening for formats without transparency support.
//!
//! JPEG cannot store an alpha channel, so transparent pixels must be
//! composited over an opaque background before encoding. The check and
//! the composite are split: [`has_transparency`] scans the alpha channel
//! with an early exit, and [`flatten_if_needed`] only allocates when a
//! flatten is actually required, handing back `Cow::Borrowed` otherwise.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::ImageFormat;
use crate::raster::RasterImage;

/// Errors from background resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlattenError {
    /// `Preserve` asks to keep alpha, but the target cannot store it.
    #[error("Cannot preserve transparency: {format:?} does not support an alpha channel")]
    PreserveUnsupported { format: ImageFormat },
}

/// Background policy for flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// Keep transparency; only valid when the target format stores alpha.
    Preserve,
    /// Composite over opaque white.
    #[default]
    White,
    /// Composite over opaque black.
    Black,
    /// Composite over an arbitrary opaque color.
    Solid { r: u8, g: u8, b: u8 },
}

impl Background {
    /// The composite color, or `None` for `Preserve`.
    fn solid_color(self) -> Option<(u8, u8, u8)> {
        match self {
            Background::Preserve => None,
            Background::White => Some((255, 255, 255)),
            Background::Black => Some((0, 0, 0)),
            Background::Solid { r, g, b } => Some((r, g, b)),
        }
    }
}

/// Whether any pixel carries partial or full transparency.
///
/// Scans the alpha channel and returns on the first `alpha < 255`; fully
/// opaque images pay one pass, transparent ones usually far less.
pub fn has_transparency(image: &RasterImage) -> bool {
    image
        .pixels
        .chunks_exact(4)
        .any(|chunk| chunk[3] < 255)
}

/// Flatten transparency onto a background when the target format needs it.
///
/// Returns `Cow::Borrowed` untouched when the format stores alpha or the
/// image is already opaque. Otherwise every pixel is composited over the
/// resolved background (`out = src*a + bg*(1-a)`) and alpha is forced
/// to 255.
///
/// # Errors
///
/// Returns [`FlattenError::PreserveUnsupported`] when a flatten is
/// required but the background policy is [`Background::Preserve`].
pub fn flatten_if_needed(
    image: &RasterImage,
    format: ImageFormat,
    background: Background,
) -> Result<Cow<'_, RasterImage>, FlattenError> {
    if format.supports_alpha() || !has_transparency(image) {
        return Ok(Cow::Borrowed(image));
    }

    let (br, bg, bb) = background
        .solid_color()
        .ok_or(FlattenError::PreserveUnsupported { format })?;

    let mut pixels = image.pixels.clone();
    for chunk in pixels.chunks_exact_mut(4) {
        let alpha = chunk[3] as f32 / 255.0;
        if alpha < 1.0 {
            let inverse = 1.0 - alpha;
            chunk[0] = (chunk[0] as f32 * alpha + br as f32 * inverse).round() as u8;
            chunk[1] = (chunk[1] as f32 * alpha + bg as f32 * inverse).round() as u8;
            chunk[2] = (chunk[2] as f32 * alpha + bb as f32 * inverse).round() as u8;
        }
        chunk[3] = 255;
    }

    Ok(Cow::Owned(RasterImage::new(
        image.width,
        image.height,
        pixels,
    )))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
