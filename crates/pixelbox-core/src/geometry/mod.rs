//! Pure transform math: crop-rect solving, rotation descriptions, fit scaling.
//!
//! Nothing in this module touches pixel data. It turns high-level transform
//! intents into exact pixel-space parameters that the `transform` module (or
//! a host-side rasterizer) then applies.
//!
//! # Validation Policy
//!
//! Rectangles and specs supplied by callers are checked against the canvas
//! and rejected with [`GeometryError`] when they violate their invariants.
//! Values computed inside this module are always clamped before being
//! returned, so outputs never need re-validation.

mod fit;
mod rect;
mod rotation;

pub use fit::{compute_fit_scale, fitted_dimensions, FitMode, FitScale, ResizeSpec};
pub use rect::{
    resize_crop_rect, solve_crop_rect, translate_crop_rect, AspectConstraint, Axis, Rect,
    MIN_CROP_EDGE,
};
pub use rotation::{
    compute_rotation_transform, normalize_angle, rotated_bounds, Pivot, RotationSpec,
    RotationTransform,
};

use thiserror::Error;

/// Errors for caller-supplied geometry that violates its invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// Rect has a zero dimension or extends outside the canvas.
    #[error(
        "Invalid rect: {x},{y} {width}x{height} does not fit a {bounds_width}x{bounds_height} canvas"
    )]
    InvalidRect {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        bounds_width: u32,
        bounds_height: u32,
    },

    /// Aspect ratio terms must both be at least 1.
    #[error("Invalid aspect ratio: {w}:{h}")]
    InvalidRatio { w: u32, h: u32 },

    /// Resize target dimensions must both be at least 1.
    #[error("Invalid resize target: {width}x{height}")]
    InvalidTarget { width: u32, height: u32 },

    /// Pixel buffer length does not match the image dimensions.
    #[error("Malformed image: {width}x{height} RGBA needs {expected} bytes, buffer has {actual}")]
    MalformedImage {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
