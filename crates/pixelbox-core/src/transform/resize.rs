//! Raster resizing through fit-mode scaling.
//!
//! [`apply_resize`] plans output dimensions with the `geometry` fit
//! functions and delegates the resampling itself to `image::imageops`.

use crate::geometry::{compute_fit_scale, fitted_dimensions, GeometryError, ResizeSpec};
use crate::raster::{RasterImage, BYTES_PER_PIXEL};
use crate::transform::SamplingFilter;

/// Resize an image into the spec's target box.
///
/// The output dimensions come from [`compute_fit_scale`] and
/// [`fitted_dimensions`]: `Contain` and `Cover` scale uniformly, `Fill`
/// matches the box exactly and may distort.
///
/// # Arguments
///
/// * `source` - Image to resize
/// * `spec` - Target box and fit mode
/// * `filter` - Sampling quality for the resampler
///
/// # Returns
///
/// A new image at the fitted dimensions. A source already at those
/// dimensions comes back as an untouched copy.
///
/// # Errors
///
/// - [`GeometryError::InvalidTarget`] when a target dimension is zero
/// - [`GeometryError::MalformedImage`] when the pixel buffer length does
///   not match the source dimensions
pub fn apply_resize(
    source: &RasterImage,
    spec: &ResizeSpec,
    filter: SamplingFilter,
) -> Result<RasterImage, GeometryError> {
    spec.validate()?;

    let scale = compute_fit_scale(
        source.width,
        source.height,
        spec.target_width,
        spec.target_height,
        spec.fit_mode,
    );
    let (out_w, out_h) = fitted_dimensions(source.width, source.height, scale);

    // Fast path: already at the fitted size.
    if out_w == source.width && out_h == source.height {
        return Ok(source.clone());
    }

    let rgba = source
        .to_rgba_image()
        .ok_or(GeometryError::MalformedImage {
            width: source.width,
            height: source.height,
            expected: source.width as usize * source.height as usize * BYTES_PER_PIXEL,
            actual: source.pixels.len(),
        })?;

    let resized = image::imageops::resize(&rgba, out_w, out_h, filter.to_image_filter());

    Ok(RasterImage::from_rgba_image(resized))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
