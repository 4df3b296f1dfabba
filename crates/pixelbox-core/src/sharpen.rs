//! Fixed-kernel 3x3 sharpening.
//!
//! [`sharpen`] runs a center-heavy unsharp kernel over the RGB channels
//! of an image; alpha passes through untouched. The one-pixel border is
//! copied unmodified: the kernel only fires where all nine taps are in
//! bounds, which keeps the operation a pure per-pixel function over a
//! disjoint 3x3 input neighborhood (rows could be processed in parallel
//! without coordination).

use crate::raster::{RasterImage, BYTES_PER_PIXEL};

/// Sharpening kernel. The taps sum to 1, so flat regions are unchanged.
#[rustfmt::skip]
pub const SHARPEN_KERNEL: [f32; 9] = [
    -1.0, -1.0, -1.0,
    -1.0,  9.0, -1.0,
    -1.0, -1.0, -1.0,
];

/// Identity kernel; convolving with it reproduces the input exactly.
#[rustfmt::skip]
pub const IDENTITY_KERNEL: [f32; 9] = [
    0.0, 0.0, 0.0,
    0.0, 1.0, 0.0,
    0.0, 0.0, 0.0,
];

/// Sharpen an image with the fixed [`SHARPEN_KERNEL`].
///
/// # Example
///
/// ```
/// use pixelbox_core::{sharpen, RasterImage, Rgba};
///
/// let image = RasterImage::filled(8, 8, Rgba::opaque(100, 100, 100));
/// let sharpened = sharpen(&image);
/// // A flat image is a fixed point of the kernel.
/// assert_eq!(sharpened.pixels, image.pixels);
/// ```
pub fn sharpen(image: &RasterImage) -> RasterImage {
    convolve_rgb_3x3(image, &SHARPEN_KERNEL)
}

/// Convolve the RGB channels with a 3x3 kernel, copying the border.
///
/// Alpha bytes are carried over from the source at every position.
/// Output channels are clamped to [0, 255]. Images with no interior
/// (either dimension at most 2) come back as an untouched copy.
pub fn convolve_rgb_3x3(image: &RasterImage, kernel: &[f32; 9]) -> RasterImage {
    if image.width <= 2 || image.height <= 2 {
        return image.clone();
    }

    let w = image.width as usize;
    let h = image.height as usize;
    let stride = w * BYTES_PER_PIXEL;

    // Start from a copy so the border and all alpha bytes are already right.
    let mut pixels = image.pixels.clone();

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut sum = [0.0f32; 3];

            for ky in 0..3 {
                for kx in 0..3 {
                    let weight = kernel[ky * 3 + kx];
                    let src_idx = (y + ky - 1) * stride + (x + kx - 1) * BYTES_PER_PIXEL;
                    sum[0] += image.pixels[src_idx] as f32 * weight;
                    sum[1] += image.pixels[src_idx + 1] as f32 * weight;
                    sum[2] += image.pixels[src_idx + 2] as f32 * weight;
                }
            }

            let dst_idx = y * stride + x * BYTES_PER_PIXEL;
            pixels[dst_idx] = sum[0].clamp(0.0, 255.0) as u8;
            pixels[dst_idx + 1] = sum[1].clamp(0.0, 255.0) as u8;
            pixels[dst_idx + 2] = sum[2].clamp(0.0, 255.0) as u8;
        }
    }

    RasterImage::new(image.width, image.height, pixels)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
