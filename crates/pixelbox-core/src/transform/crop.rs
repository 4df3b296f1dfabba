//! Crop extraction for RGBA raster images.
//!
//! Copies the pixels inside a [`Rect`] into a new image. The rect is
//! validated against the source canvas before any pixel work happens,
//! so a stale region from an earlier edit surfaces as an error instead
//! of a silent truncation.

use crate::geometry::{GeometryError, Rect};
use crate::raster::{RasterImage, BYTES_PER_PIXEL};

/// Extract the pixels inside `rect` from `source`.
///
/// # Arguments
///
/// * `source` - Image to crop
/// * `rect` - Region to keep, in source pixel coordinates
///
/// # Returns
///
/// A new image of exactly `rect.width` x `rect.height` pixels.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidRect`] when the rect is empty or
/// extends past the source canvas.
///
/// # Example
///
/// ```ignore
/// // Keep a 50x40 window starting at (10, 10)
/// let cropped = apply_crop(&source, &Rect::new(10, 10, 50, 40))?;
/// ```
pub fn apply_crop(source: &RasterImage, rect: &Rect) -> Result<RasterImage, GeometryError> {
    rect.validate(source.width, source.height)?;

    // Fast path: full-canvas crop is a plain copy.
    if rect.x == 0 && rect.y == 0 && rect.width == source.width && rect.height == source.height {
        return Ok(source.clone());
    }

    let src_stride = source.width as usize * BYTES_PER_PIXEL;
    let dst_stride = rect.width as usize * BYTES_PER_PIXEL;

    let mut pixels = vec![0u8; rect.height as usize * dst_stride];

    // Copy row by row; each output row is one contiguous slice of the source.
    for row in 0..rect.height as usize {
        let src_row = rect.y as usize + row;
        let src_start = src_row * src_stride + rect.x as usize * BYTES_PER_PIXEL;
        let dst_start = row * dst_stride;

        pixels[dst_start..dst_start + dst_stride]
            .copy_from_slice(&source.pixels[src_start..src_start + dst_stride]);
    }

    Ok(RasterImage::new(rect.width, rect.height, pixels))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
