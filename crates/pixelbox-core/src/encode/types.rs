//! Encoding requests, results, and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::ImageFormat;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec rejected the image
    #[error("{format:?} encoding failed: {message}")]
    EncodingFailed {
        format: ImageFormat,
        message: String,
    },
}

/// A single encode request.
///
/// When `target_byte_budget` is set the request is handled by the
/// adaptive search instead of a single encode call; see
/// [`crate::encode::encode_with_spec`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncodingSpec {
    /// Target format.
    pub format: ImageFormat,
    /// Quality in [0, 1] for formats that support it; ignored otherwise.
    pub quality: Option<f32>,
    /// Byte-size ceiling the output should satisfy.
    pub target_byte_budget: Option<usize>,
}

impl EncodingSpec {
    /// A plain single-encode request with no budget.
    pub fn new(format: ImageFormat, quality: Option<f32>) -> Self {
        Self {
            format,
            quality,
            target_byte_budget: None,
        }
    }

    /// A budget-constrained request; format and quality become the
    /// search's concern.
    pub fn with_budget(format: ImageFormat, budget: usize) -> Self {
        Self {
            format,
            quality: None,
            target_byte_budget: Some(budget),
        }
    }
}

/// The product of one encode call.
///
/// Produced once, handed to the caller, never cached: every transform
/// request re-encodes from the raster it is given.
#[derive(Debug, Clone)]
pub struct EncodingResult {
    /// Encoded file bytes.
    pub bytes: Vec<u8>,
    /// Pixel width of the encoded image.
    pub width: u32,
    /// Pixel height of the encoded image.
    pub height: u32,
    /// Format actually written.
    pub format: ImageFormat,
    /// Quality applied, for formats that take one.
    pub quality_used: Option<f32>,
}

impl EncodingResult {
    /// Encoded size in bytes.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}
