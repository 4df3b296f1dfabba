//! Byte-budget search over formats, qualities, and scales.
//!
//! [`compress_to_budget`] looks for the first encoding that fits a byte
//! ceiling, walking candidates from highest fidelity to lowest:
//!
//! 1. Every format in preference order at the original dimensions,
//!    stepping quality down one rung at a time.
//! 2. Downscaled dimensions (WebP only, the best compressor), stepping
//!    quality down per scale.
//! 3. Nothing fit: the smallest attempt is returned with
//!    `budget_met = false`. An unattainable budget is a soft verdict,
//!    not an error.
//!
//! Candidates that fail to encode are skipped, never retried. A
//! seen-set keyed on `(format, quality, width, height)` stops identical
//! tuples from being re-encoded when downscaling collapses onto repeat
//! dimensions for small images.

use std::collections::HashSet;

use crate::encode::encoder::Encoder;
use crate::encode::types::{EncodeError, EncodingResult, EncodingSpec};
use crate::format::ImageFormat;
use crate::raster::RasterImage;

/// Quality rungs tried per format, best first.
pub const QUALITY_LADDER: [f32; 8] = [0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2];

/// Downscale factors tried when no full-size candidate fits, best first.
pub const SCALE_LADDER: [f64; 5] = [0.9, 0.8, 0.7, 0.6, 0.5];

/// Outcome of a budget-constrained compression.
#[derive(Debug, Clone)]
pub struct CompressionOutcome {
    /// The chosen encoding: the first candidate under budget, or the
    /// smallest attempt when nothing fit.
    pub result: EncodingResult,
    /// Whether `result` satisfies the requested byte budget.
    pub budget_met: bool,
    /// Number of encode calls the search made.
    pub attempts: u32,
}

/// Search state threaded through the candidate phases.
struct Search<'a, E: Encoder> {
    encoder: &'a E,
    image: &'a RasterImage,
    budget: usize,
    seen: HashSet<(ImageFormat, u32, u32, u32)>,
    attempts: u32,
    best: Option<EncodingResult>,
    last_error: Option<EncodeError>,
}

impl<E: Encoder> Search<'_, E> {
    /// Encode one candidate tuple. Returns the result when it fits the
    /// budget; otherwise records it as a fallback (or its error) and
    /// returns `None` so the search continues.
    fn attempt(
        &mut self,
        width: u32,
        height: u32,
        format: ImageFormat,
        quality: f32,
    ) -> Option<EncodingResult> {
        // Quality is keyed by bit pattern; ladder values are fixed literals.
        if !self.seen.insert((format, quality.to_bits(), width, height)) {
            return None;
        }
        self.attempts += 1;

        match self
            .encoder
            .encode(self.image, width, height, format, Some(quality))
        {
            Ok(result) => {
                if result.byte_len() <= self.budget {
                    return Some(result);
                }
                let smaller = self
                    .best
                    .as_ref()
                    .is_none_or(|b| result.byte_len() < b.byte_len());
                if smaller {
                    self.best = Some(result);
                }
                None
            }
            Err(error) => {
                self.last_error = Some(error);
                None
            }
        }
    }
}

/// Find the highest-fidelity encoding of `image` that fits `budget` bytes.
///
/// # Arguments
///
/// * `encoder` - The rasterize-and-encode primitive to drive
/// * `image` - Source raster
/// * `budget` - Byte ceiling the output should satisfy
///
/// # Returns
///
/// A [`CompressionOutcome`]. When no candidate fits, the smallest
/// attempt comes back with `budget_met = false`.
///
/// # Errors
///
/// Returns the last [`EncodeError`] only when every attempted candidate
/// failed to encode, leaving nothing to degrade to.
pub fn compress_to_budget<E: Encoder>(
    encoder: &E,
    image: &RasterImage,
    budget: usize,
) -> Result<CompressionOutcome, EncodeError> {
    let mut search = Search {
        encoder,
        image,
        budget,
        seen: HashSet::new(),
        attempts: 0,
        best: None,
        last_error: None,
    };

    // Phase 1: full dimensions, every format, quality stepping down.
    for format in ImageFormat::PREFERENCE_ORDER {
        for quality in QUALITY_LADDER {
            if let Some(result) = search.attempt(image.width, image.height, format, quality) {
                return Ok(CompressionOutcome {
                    result,
                    budget_met: true,
                    attempts: search.attempts,
                });
            }
        }
    }

    // Phase 2: shrink the canvas, WebP only.
    for scale in SCALE_LADDER {
        let width = ((image.width as f64 * scale).round() as u32).max(1);
        let height = ((image.height as f64 * scale).round() as u32).max(1);

        for quality in QUALITY_LADDER {
            if let Some(result) = search.attempt(width, height, ImageFormat::WebP, quality) {
                return Ok(CompressionOutcome {
                    result,
                    budget_met: true,
                    attempts: search.attempts,
                });
            }
        }
    }

    // Phase 3: nothing fit. Degrade to the smallest attempt; with no
    // successful attempt at all, surface the last failure.
    match search.best {
        Some(result) => Ok(CompressionOutcome {
            result,
            budget_met: false,
            attempts: search.attempts,
        }),
        None => Err(search
            .last_error
            .unwrap_or(EncodeError::InvalidDimensions {
                width: image.width,
                height: image.height,
            })),
    }
}

/// Encode per an [`EncodingSpec`].
///
/// A spec with a byte budget runs the adaptive search (the spec's
/// format and quality yield to the search's own ladder). Without one,
/// this is a single encode call at the spec's format and quality.
pub fn encode_with_spec<E: Encoder>(
    encoder: &E,
    image: &RasterImage,
    spec: &EncodingSpec,
) -> Result<CompressionOutcome, EncodeError> {
    match spec.target_byte_budget {
        Some(budget) => compress_to_budget(encoder, image, budget),
        None => {
            let result = encoder.encode(
                image,
                image.width,
                image.height,
                spec.format,
                spec.quality,
            )?;
            Ok(CompressionOutcome {
                result,
                budget_met: true,
                attempts: 1,
            })
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
