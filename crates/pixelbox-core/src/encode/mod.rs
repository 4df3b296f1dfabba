//! Image encoding: single-shot codecs and the byte-budget search.
//!
//! The [`Encoder`] trait is the pluggable primitive: resample to target
//! dimensions and serialize in one format at one quality. [`CodecEncoder`]
//! implements it over the bundled codecs. On top of that,
//! [`compress_to_budget`] runs the adaptive format/quality/scale search
//! and [`encode_with_spec`] dispatches between the two modes.
//!
//! Callers are expected to flatten transparency first (see
//! [`crate::flatten`]) when targeting a format without an alpha channel;
//! the encoders here drop alpha silently for such formats.

mod adaptive;
mod encoder;
mod types;

pub use adaptive::{
    compress_to_budget, encode_with_spec, CompressionOutcome, QUALITY_LADDER, SCALE_LADDER,
};
pub use encoder::{CodecEncoder, Encoder, DEFAULT_QUALITY};
pub use types::{EncodeError, EncodingResult, EncodingSpec};
