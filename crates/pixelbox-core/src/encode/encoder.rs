//! The rasterize-and-encode primitive.
//!
//! The adaptive search never talks to a codec directly; it drives an
//! [`Encoder`], which resamples to the requested dimensions and writes
//! file bytes in one step. [`CodecEncoder`] is the built-in
//! implementation over the `image` crate. Hosts with their own codecs
//! (a browser canvas, a hardware encoder) implement the trait instead.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{imageops, ExtendedColorType, ImageEncoder};

use crate::encode::types::{EncodeError, EncodingResult};
use crate::format::ImageFormat;
use crate::raster::{RasterImage, BYTES_PER_PIXEL};

/// Quality applied when the caller does not pick one.
pub const DEFAULT_QUALITY: f32 = 0.9;

/// A rasterize-and-encode primitive.
pub trait Encoder {
    /// Encode `image`, resampled to `width` x `height`, into `format`.
    ///
    /// `quality` is in [0, 1] and only consulted for formats where
    /// [`ImageFormat::supports_quality`] holds.
    fn encode(
        &self,
        image: &RasterImage,
        width: u32,
        height: u32,
        format: ImageFormat,
        quality: Option<f32>,
    ) -> Result<EncodingResult, EncodeError>;
}

/// Built-in encoder over the `image` crate's codecs.
///
/// Resampling uses Lanczos3. JPEG maps quality onto the codec's 1-100
/// scale and drops the alpha channel at the codec boundary (run
/// [`crate::flatten_if_needed`] upstream for a composited result).
/// WebP output is lossless: the `image` crate ships no lossy WebP
/// encoder, so the quality value is reported but not applied. Hosts
/// that need lossy WebP bring their own [`Encoder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CodecEncoder;

impl Encoder for CodecEncoder {
    fn encode(
        &self,
        image: &RasterImage,
        width: u32,
        height: u32,
        format: ImageFormat,
        quality: Option<f32>,
    ) -> Result<EncodingResult, EncodeError> {
        if width == 0 || height == 0 {
            return Err(EncodeError::InvalidDimensions { width, height });
        }

        let expected = image.width as usize * image.height as usize * BYTES_PER_PIXEL;
        if image.pixels.len() != expected {
            return Err(EncodeError::InvalidPixelData {
                expected,
                actual: image.pixels.len(),
            });
        }

        let source = image
            .to_rgba_image()
            .ok_or(EncodeError::InvalidPixelData {
                expected,
                actual: image.pixels.len(),
            })?;

        let rgba = if (width, height) == (image.width, image.height) {
            source
        } else {
            imageops::resize(&source, width, height, imageops::FilterType::Lanczos3)
        };

        let mut buffer = Cursor::new(Vec::new());

        match format {
            ImageFormat::Jpeg => {
                let rgb = strip_alpha(rgba.as_raw());
                JpegEncoder::new_with_quality(&mut buffer, jpeg_quality(quality))
                    .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
                    .map_err(|e| EncodeError::EncodingFailed {
                        format,
                        message: e.to_string(),
                    })?;
            }
            ImageFormat::Png => {
                PngEncoder::new(&mut buffer)
                    .write_image(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
                    .map_err(|e| EncodeError::EncodingFailed {
                        format,
                        message: e.to_string(),
                    })?;
            }
            ImageFormat::WebP => {
                WebPEncoder::new_lossless(&mut buffer)
                    .write_image(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
                    .map_err(|e| EncodeError::EncodingFailed {
                        format,
                        message: e.to_string(),
                    })?;
            }
        }

        let quality_used = if format.supports_quality() {
            Some(quality.unwrap_or(DEFAULT_QUALITY).clamp(0.0, 1.0))
        } else {
            None
        };

        Ok(EncodingResult {
            bytes: buffer.into_inner(),
            width,
            height,
            format,
            quality_used,
        })
    }
}

/// Map a [0, 1] quality onto the JPEG codec's 1-100 scale.
fn jpeg_quality(quality: Option<f32>) -> u8 {
    let q = quality.unwrap_or(DEFAULT_QUALITY).clamp(0.0, 1.0);
    ((q * 100.0).round() as u8).clamp(1, 100)
}

/// Drop the alpha bytes from an RGBA buffer.
fn strip_alpha(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}


// ============================================================================
// Property-Based Tests
// ============================================================================
