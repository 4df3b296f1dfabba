//! Fit-scale planning for resize operations.
//!
//! [`compute_fit_scale`] turns a source size, a target box, and a
//! [`FitMode`] into per-axis scale factors; [`fitted_dimensions`] rounds
//! them back into output pixels. Splitting the two keeps the scale available
//! to hosts that want to drive their own rasterizer.

use serde::{Deserialize, Serialize};

use crate::geometry::GeometryError;

/// Scaling policy for fitting a source image into a target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Largest uniform scale that keeps the whole source inside the box.
    #[default]
    Contain,
    /// Smallest uniform scale that covers the whole box.
    Cover,
    /// Independent per-axis scales that match the box exactly, distorting
    /// the aspect ratio.
    Fill,
}

/// Resolved per-axis scale factors for a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitScale {
    pub scale_x: f64,
    pub scale_y: f64,
}

impl FitScale {
    /// True when both axes share one factor (contain and cover always do).
    pub fn is_uniform(&self) -> bool {
        (self.scale_x - self.scale_y).abs() < f64::EPSILON
    }
}

/// A resize request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeSpec {
    /// Target box width in pixels.
    pub target_width: u32,
    /// Target box height in pixels.
    pub target_height: u32,
    /// How the source is fitted into the box.
    pub fit_mode: FitMode,
}

impl ResizeSpec {
    /// Create a spec, rejecting degenerate targets.
    pub fn new(target_width: u32, target_height: u32, fit_mode: FitMode) -> Result<Self, GeometryError> {
        let spec = Self {
            target_width,
            target_height,
            fit_mode,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check that both target dimensions are at least 1.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.target_width == 0 || self.target_height == 0 {
            return Err(GeometryError::InvalidTarget {
                width: self.target_width,
                height: self.target_height,
            });
        }
        Ok(())
    }
}

/// Compute the per-axis scale factors that fit a source into a target box.
///
/// `contain` picks the smaller axis ratio (whole source visible), `cover`
/// the larger (whole box covered), `fill` keeps both independently. The
/// source dimensions must be positive; raster images guarantee this.
pub fn compute_fit_scale(
    source_w: u32,
    source_h: u32,
    target_w: u32,
    target_h: u32,
    mode: FitMode,
) -> FitScale {
    let sx = target_w as f64 / source_w as f64;
    let sy = target_h as f64 / source_h as f64;

    match mode {
        FitMode::Contain => {
            let s = sx.min(sy);
            FitScale {
                scale_x: s,
                scale_y: s,
            }
        }
        FitMode::Cover => {
            let s = sx.max(sy);
            FitScale {
                scale_x: s,
                scale_y: s,
            }
        }
        FitMode::Fill => FitScale {
            scale_x: sx,
            scale_y: sy,
        },
    }
}

/// Output dimensions after applying a fit scale: rounded, floored at 1.
pub fn fitted_dimensions(source_w: u32, source_h: u32, scale: FitScale) -> (u32, u32) {
    let w = (source_w as f64 * scale.scale_x).round() as u32;
    let h = (source_h as f64 * scale.scale_y).round() as u32;
    (w.max(1), h.max(1))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
