//! Preview request sequencing.
//!
//! Live previews are regenerated on every slider movement, and an
//! encode for an older request can finish after a newer one was issued.
//! [`PreviewSequencer`] hands out generation tickets so that only the
//! most recently issued request ever surfaces: a stale result is
//! dropped on arrival instead of flickering the preview backward.
//!
//! Dropping a superseded frame is the one place this crate discards a
//! completed result without reporting anything.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::encode::EncodingResult;
use crate::format::ImageFormat;
use crate::raster::RasterImage;

/// Issues and checks preview generation tickets.
#[derive(Debug, Default)]
pub struct PreviewSequencer {
    generation: AtomicU64,
}

/// Proof of a preview request, valid until the next [`PreviewSequencer::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket {
    generation: u64,
}

impl PreviewSequencer {
    /// Create a sequencer with no outstanding requests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new preview request, superseding every earlier ticket.
    pub fn begin(&self) -> PreviewTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        PreviewTicket { generation }
    }

    /// Whether this ticket is still the latest issued.
    pub fn is_current(&self, ticket: PreviewTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Gate a finished result behind its ticket.
    ///
    /// Returns `Some(frame)` when the ticket is still current and
    /// `None` when a newer request superseded it, discarding the stale
    /// frame.
    pub fn accept<T>(&self, ticket: PreviewTicket, frame: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(frame)
        } else {
            None
        }
    }
}

/// A before/after pair for the comparison display.
#[derive(Debug, Clone)]
pub struct PreviewFrame {
    /// The untouched source raster.
    pub original: RasterImage,
    /// The raster after the current edit chain.
    pub processed: RasterImage,
    /// Details of the encoded output the processed side represents.
    pub info: PreviewInfo,
}

/// Encoded-output details shown alongside a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewInfo {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Encoded container format.
    pub format: ImageFormat,
    /// Encoded size in bytes.
    pub byte_length: usize,
}

impl From<&EncodingResult> for PreviewInfo {
    fn from(result: &EncodingResult) -> Self {
        Self {
            width: result.width,
            height: result.height,
            format: result.format,
            byte_length: result.byte_len(),
        }
    }
}
