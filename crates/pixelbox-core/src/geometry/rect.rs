//! Crop rectangle solving and movement.
//!
//! The crop tool works in integer pixel space. [`Rect`] positions a region on
//! a canvas; [`AspectConstraint`] optionally locks its width:height ratio.
//! Three operations cover the tool's interactions:
//!
//! - [`solve_crop_rect`] re-establishes a newly selected ratio lock
//! - [`resize_crop_rect`] applies a handle drag on one axis
//! - [`translate_crop_rect`] moves the whole region
//!
//! All three validate the incoming rect and clamp their result, so the
//! returned rect always sits fully inside the canvas.

use serde::{Deserialize, Serialize};

use crate::geometry::GeometryError;

/// Hard floor for crop dimensions, in pixels.
///
/// Ratio solving and handle drags never produce a region thinner than this
/// on either axis, unless the canvas itself is smaller.
pub const MIN_CROP_EDGE: u32 = 10;

/// A crop region in the pixel space of a specific canvas.
///
/// Invariants relative to its canvas: `width >= 1`, `height >= 1`,
/// `x + width <= canvas width`, `y + height <= canvas height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge, in pixels from the canvas left.
    pub x: u32,
    /// Top edge, in pixels from the canvas top.
    pub y: u32,
    /// Region width in pixels.
    pub width: u32,
    /// Region height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rect. Invariants are checked by [`Rect::validate`], not here.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge. Meaningful only for validated rects.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge. Meaningful only for validated rects.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Center point of the region.
    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Check the rect invariants against a canvas.
    ///
    /// Uses widened arithmetic so hostile coordinates near `u32::MAX`
    /// cannot wrap past the bounds check.
    pub fn validate(&self, bounds_w: u32, bounds_h: u32) -> Result<(), GeometryError> {
        let fits_x = self.x as u64 + self.width as u64 <= bounds_w as u64;
        let fits_y = self.y as u64 + self.height as u64 <= bounds_h as u64;

        if self.width == 0 || self.height == 0 || !fits_x || !fits_y {
            return Err(GeometryError::InvalidRect {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                bounds_width: bounds_w,
                bounds_height: bounds_h,
            });
        }
        Ok(())
    }
}

/// Optional width:height lock for a crop region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectConstraint {
    /// No ratio lock; dimensions move independently.
    #[default]
    Free,
    /// Width:height locked to `w:h`.
    Ratio { w: u32, h: u32 },
}

impl AspectConstraint {
    /// Build a ratio lock, rejecting zero terms.
    pub fn ratio(w: u32, h: u32) -> Result<Self, GeometryError> {
        if w == 0 || h == 0 {
            return Err(GeometryError::InvalidRatio { w, h });
        }
        Ok(AspectConstraint::Ratio { w, h })
    }

    /// A 1:1 lock.
    pub const fn square() -> Self {
        AspectConstraint::Ratio { w: 1, h: 1 }
    }

    /// Width over height, or `None` when free.
    pub fn target_ratio(&self) -> Option<f64> {
        match *self {
            AspectConstraint::Free => None,
            AspectConstraint::Ratio { w, h } => Some(w as f64 / h as f64),
        }
    }

    /// Whether a rect satisfies the lock.
    ///
    /// Integer rects cannot hit most ratios exactly, so a rect counts as
    /// satisfying when either dimension is within one pixel of the value
    /// derived from the other. Checking both directions keeps the test fair
    /// for extreme ratios, where a half-pixel of height corresponds to many
    /// pixels of width.
    pub fn is_satisfied_by(&self, rect: &Rect) -> bool {
        match self.target_ratio() {
            None => true,
            Some(ratio) => {
                let derived_width = (rect.height as f64 * ratio).round();
                let derived_height = (rect.width as f64 / ratio).round();
                (rect.width as f64 - derived_width).abs() <= 1.0
                    || (rect.height as f64 - derived_height).abs() <= 1.0
            }
        }
    }
}

/// Which axis a drag handle drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Re-establish an aspect lock on an existing crop region.
///
/// With a bound ratio, the dimension in excess of the target is shrunk and
/// the removed excess is split evenly on both sides, keeping the region
/// centered where it was. The other dimension is never touched: if the
/// region is too wide (`current ratio > target`) width shrinks, otherwise
/// height shrinks.
///
/// # Arguments
///
/// * `current` - Existing crop region (validated against the canvas)
/// * `constraint` - Ratio lock to establish; `Free` returns the rect as-is
/// * `bounds_w` / `bounds_h` - Canvas dimensions
///
/// # Returns
///
/// A rect satisfying the lock, inside the canvas, with both dimensions at
/// least [`MIN_CROP_EDGE`] (the floor wins over the ratio when they clash).
///
/// # Errors
///
/// [`GeometryError::InvalidRect`] when `current` violates its invariants.
pub fn solve_crop_rect(
    current: &Rect,
    constraint: AspectConstraint,
    bounds_w: u32,
    bounds_h: u32,
) -> Result<Rect, GeometryError> {
    current.validate(bounds_w, bounds_h)?;

    let target = match constraint.target_ratio() {
        None => return Ok(*current),
        Some(t) => t,
    };

    // A rect that already satisfies the lock is left alone, which makes
    // re-solving a settled region a no-op instead of a one-pixel churn.
    if constraint.is_satisfied_by(current) {
        return Ok(*current);
    }

    let mut new_w = current.width;
    let mut new_h = current.height;

    if current.aspect_ratio() > target {
        // Too wide: shrink width, keep height.
        new_w = (current.height as f64 * target).round() as u32;
    } else {
        // Too tall (or already exact): shrink height, keep width.
        new_h = (current.width as f64 / target).round() as u32;
    }

    new_w = new_w.max(MIN_CROP_EDGE.min(bounds_w));
    new_h = new_h.max(MIN_CROP_EDGE.min(bounds_h));

    let (cx, cy) = current.center();
    Ok(position_about_center(cx, cy, new_w, new_h, bounds_w, bounds_h))
}

/// Apply a drag on one resize handle.
///
/// The dragged axis takes `value` (clamped between the crop floor and the
/// canvas). With a ratio lock the other dimension is derived from the lock;
/// when the derived dimension cannot fit the canvas, both shrink together so
/// the ratio holds. The region is then re-centered on its previous center
/// and clamped into the canvas.
///
/// # Errors
///
/// [`GeometryError::InvalidRect`] when `current` violates its invariants.
pub fn resize_crop_rect(
    current: &Rect,
    axis: Axis,
    value: u32,
    constraint: AspectConstraint,
    bounds_w: u32,
    bounds_h: u32,
) -> Result<Rect, GeometryError> {
    current.validate(bounds_w, bounds_h)?;

    let floor_w = MIN_CROP_EDGE.min(bounds_w);
    let floor_h = MIN_CROP_EDGE.min(bounds_h);

    let (mut new_w, mut new_h) = match axis {
        Axis::Horizontal => (value.clamp(floor_w, bounds_w), current.height),
        Axis::Vertical => (current.width, value.clamp(floor_h, bounds_h)),
    };

    if let Some(ratio) = constraint.target_ratio() {
        match axis {
            Axis::Horizontal => {
                new_h = (new_w as f64 / ratio).round() as u32;
                if new_h > bounds_h {
                    // Derived height cannot fit: shrink both, ratio held.
                    new_h = bounds_h;
                    new_w = (new_h as f64 * ratio).round().min(bounds_w as f64) as u32;
                }
                new_h = new_h.max(floor_h);
            }
            Axis::Vertical => {
                new_w = (new_h as f64 * ratio).round() as u32;
                if new_w > bounds_w {
                    new_w = bounds_w;
                    new_h = (new_w as f64 / ratio).round().min(bounds_h as f64) as u32;
                }
                new_w = new_w.max(floor_w);
            }
        }
        new_w = new_w.max(1);
        new_h = new_h.max(1);
    }

    let (cx, cy) = current.center();
    Ok(position_about_center(cx, cy, new_w, new_h, bounds_w, bounds_h))
}

/// Move a crop region without changing its size.
///
/// The position is clamped so the region never exits the canvas on either
/// axis; dimensions pass through untouched.
///
/// # Errors
///
/// [`GeometryError::InvalidRect`] when `rect` violates its invariants.
pub fn translate_crop_rect(
    rect: &Rect,
    dx: i32,
    dy: i32,
    bounds_w: u32,
    bounds_h: u32,
) -> Result<Rect, GeometryError> {
    rect.validate(bounds_w, bounds_h)?;

    let max_x = (bounds_w - rect.width) as i64;
    let max_y = (bounds_h - rect.height) as i64;

    let x = (rect.x as i64 + dx as i64).clamp(0, max_x) as u32;
    let y = (rect.y as i64 + dy as i64).clamp(0, max_y) as u32;

    Ok(Rect { x, y, ..*rect })
}

/// Place a `width x height` region centered on (cx, cy), clamped into the
/// canvas. Dimensions larger than the canvas are cut down first.
fn position_about_center(
    cx: f64,
    cy: f64,
    width: u32,
    height: u32,
    bounds_w: u32,
    bounds_h: u32,
) -> Rect {
    let width = width.clamp(1, bounds_w);
    let height = height.clamp(1, bounds_h);

    let max_x = (bounds_w - width) as f64;
    let max_y = (bounds_h - height) as f64;

    let x = (cx - width as f64 / 2.0).round().clamp(0.0, max_x) as u32;
    let y = (cy - height as f64 / 2.0).round().clamp(0.0, max_y) as u32;

    Rect {
        x,
        y,
        width,
        height,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
