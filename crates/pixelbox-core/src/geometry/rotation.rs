//! Rotation angle math and affine descriptions.
//!
//! Angles are degrees, positive counter-clockwise, normalized into the
//! half-open interval `(-180, 180]`. [`compute_rotation_transform`] resolves
//! a [`RotationSpec`] against a canvas into a pure affine description
//! (translate to pivot, rotate, translate back); no pixel access happens
//! here.

use serde::{Deserialize, Serialize};

use crate::Rgba;

/// Normalize an angle in degrees into `(-180, 180]`.
///
/// # Example
///
/// ```
/// use pixelbox_core::geometry::normalize_angle;
///
/// assert_eq!(normalize_angle(370.0), 10.0);
/// assert_eq!(normalize_angle(-185.0), 175.0);
/// assert_eq!(normalize_angle(180.0), 180.0);
/// ```
pub fn normalize_angle(degrees: f64) -> f64 {
    let mut angle = degrees % 360.0;
    if angle > 180.0 {
        angle -= 360.0;
    } else if angle <= -180.0 {
        angle += 360.0;
    }
    angle
}

/// Rotation pivot, resolved against a canvas when the transform is computed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pivot {
    /// Canvas center.
    #[default]
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Position as a percentage of the canvas, 0-100 on each axis.
    Percent { x: f64, y: f64 },
    /// Absolute pixel position.
    Absolute { x: f64, y: f64 },
}

impl Pivot {
    /// Resolve to an absolute point on a canvas, clamped inside it.
    pub fn resolve(&self, canvas_w: u32, canvas_h: u32) -> (f64, f64) {
        let (w, h) = (canvas_w as f64, canvas_h as f64);
        let (x, y) = match *self {
            Pivot::Center => (w / 2.0, h / 2.0),
            Pivot::TopLeft => (0.0, 0.0),
            Pivot::TopRight => (w, 0.0),
            Pivot::BottomLeft => (0.0, h),
            Pivot::BottomRight => (w, h),
            Pivot::Percent { x, y } => (w * x / 100.0, h * y / 100.0),
            Pivot::Absolute { x, y } => (x, y),
        };
        (x.clamp(0.0, w), y.clamp(0.0, h))
    }
}

/// Full description of a rotation request.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RotationSpec {
    /// Rotation angle in degrees, positive counter-clockwise.
    pub angle_degrees: f64,
    /// Point the canvas rotates around.
    pub pivot: Pivot,
    /// Fill for output regions the rotated source does not cover.
    pub background: Rgba,
}

impl RotationSpec {
    /// Create a center-pivot rotation over a transparent background.
    pub fn new(angle_degrees: f64) -> Self {
        Self {
            angle_degrees: normalize_angle(angle_degrees),
            pivot: Pivot::Center,
            background: Rgba::TRANSPARENT,
        }
    }

    /// The angle normalized into `(-180, 180]`, whatever the field holds.
    pub fn normalized_angle(&self) -> f64 {
        normalize_angle(self.angle_degrees)
    }
}

/// A pure affine description of a rotation: translate to the pivot, rotate
/// by `radians`, translate back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTransform {
    /// Absolute pivot point on the canvas.
    pub pivot: (f64, f64),
    /// Rotation angle in radians.
    pub radians: f64,
}

/// Resolve a rotation spec against a canvas.
///
/// The pivot becomes an absolute clamped point and the normalized angle is
/// converted to radians. The result describes the rotation completely; the
/// `transform` module (or a host rasterizer) applies it to pixels.
pub fn compute_rotation_transform(
    spec: &RotationSpec,
    canvas_w: u32,
    canvas_h: u32,
) -> RotationTransform {
    RotationTransform {
        pivot: spec.pivot.resolve(canvas_w, canvas_h),
        radians: spec.normalized_angle().to_radians(),
    }
}

/// Compute the bounding box that contains a `width x height` canvas rotated
/// by the given angle.
///
/// The box depends only on the angle, not the pivot: changing the pivot
/// translates the result without changing its extent.
///
/// # Example
///
/// ```
/// use pixelbox_core::geometry::rotated_bounds;
///
/// // Quarter turns swap dimensions exactly
/// assert_eq!(rotated_bounds(100, 50, 90.0), (50, 100));
/// assert_eq!(rotated_bounds(100, 50, 0.0), (100, 50));
/// ```
pub fn rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    let angle = normalize_angle(angle_degrees);
    let abs = angle.abs();

    // Multiples of 90 degrees keep exact integer dimensions.
    if abs < 0.001 || (abs - 180.0).abs() < 0.001 {
        return (width, height);
    }
    if (abs - 90.0).abs() < 0.001 {
        return (height, width);
    }

    let radians = angle.to_radians();
    let cos = radians.cos().abs();
    let sin = radians.sin().abs();

    let w = width as f64;
    let h = height as f64;

    // Bounding box of a rotated w x h rectangle.
    let out_w = (w * cos + h * sin).round() as u32;
    let out_h = (w * sin + h * cos).round() as u32;

    (out_w.max(1), out_h.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_wrap_positive() {
        assert_eq!(normalize_angle(370.0), 10.0);
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(720.0), 0.0);
        assert_eq!(normalize_angle(450.0), 90.0);
    }

    #[test]
    fn test_normalize_wrap_negative() {
        assert_eq!(normalize_angle(-185.0), 175.0);
        assert_eq!(normalize_angle(-360.0), 0.0);
        assert_eq!(normalize_angle(-90.0), -90.0);
    }

    #[test]
    fn test_normalize_boundary() {
        // 180 belongs to the interval; -180 maps onto it
        assert_eq!(normalize_angle(180.0), 180.0);
        assert_eq!(normalize_angle(-180.0), 180.0);
        assert_eq!(normalize_angle(540.0), 180.0);
    }

    #[test]
    fn test_normalize_identity_in_range() {
        for angle in [-179.9, -45.0, 0.0, 0.5, 90.0, 179.9] {
            assert_eq!(normalize_angle(angle), angle);
        }
    }

    #[test]
    fn test_pivot_named_positions() {
        assert_eq!(Pivot::Center.resolve(100, 50), (50.0, 25.0));
        assert_eq!(Pivot::TopLeft.resolve(100, 50), (0.0, 0.0));
        assert_eq!(Pivot::TopRight.resolve(100, 50), (100.0, 0.0));
        assert_eq!(Pivot::BottomLeft.resolve(100, 50), (0.0, 50.0));
        assert_eq!(Pivot::BottomRight.resolve(100, 50), (100.0, 50.0));
    }

    #[test]
    fn test_pivot_percent() {
        assert_eq!(Pivot::Percent { x: 50.0, y: 50.0 }.resolve(200, 100), (100.0, 50.0));
        assert_eq!(Pivot::Percent { x: 25.0, y: 75.0 }.resolve(200, 100), (50.0, 75.0));
    }

    #[test]
    fn test_pivot_absolute_clamped() {
        assert_eq!(Pivot::Absolute { x: 30.0, y: 20.0 }.resolve(100, 50), (30.0, 20.0));
        // Points outside the canvas clamp onto its edge
        assert_eq!(Pivot::Absolute { x: -10.0, y: 500.0 }.resolve(100, 50), (0.0, 50.0));
    }

    #[test]
    fn test_rotation_spec_normalizes() {
        let spec = RotationSpec::new(370.0);
        assert_eq!(spec.angle_degrees, 10.0);

        // Struct-literal construction is normalized through the accessor
        let spec = RotationSpec {
            angle_degrees: -185.0,
            ..RotationSpec::default()
        };
        assert_eq!(spec.normalized_angle(), 175.0);
    }

    #[test]
    fn test_compute_transform_center() {
        let spec = RotationSpec::new(90.0);
        let t = compute_rotation_transform(&spec, 200, 100);

        assert_eq!(t.pivot, (100.0, 50.0));
        assert!((t.radians - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_compute_transform_corner_pivot() {
        let spec = RotationSpec {
            angle_degrees: 45.0,
            pivot: Pivot::BottomRight,
            background: Rgba::TRANSPARENT,
        };
        let t = compute_rotation_transform(&spec, 80, 60);

        assert_eq!(t.pivot, (80.0, 60.0));
    }

    #[test]
    fn test_bounds_quarter_turns() {
        assert_eq!(rotated_bounds(100, 50, 90.0), (50, 100));
        assert_eq!(rotated_bounds(100, 50, -90.0), (50, 100));
        assert_eq!(rotated_bounds(100, 50, 270.0), (50, 100));
        assert_eq!(rotated_bounds(100, 50, 180.0), (100, 50));
        assert_eq!(rotated_bounds(100, 50, 0.0), (100, 50));
    }

    #[test]
    fn test_bounds_45_degrees() {
        let (w, h) = rotated_bounds(100, 100, 45.0);
        // Diagonal of a 100x100 square is ~141.4
        assert!(w > 140 && w < 143, "width was {}", w);
        assert!(h > 140 && h < 143, "height was {}", h);
    }

    #[test]
    fn test_bounds_symmetric_in_sign() {
        let (w1, h1) = rotated_bounds(100, 50, 30.0);
        let (w2, h2) = rotated_bounds(100, 50, -30.0);
        assert_eq!((w1, h1), (w2, h2));
    }

    #[test]
    fn test_bounds_over_full_turn() {
        // 450 degrees normalizes to 90
        assert_eq!(rotated_bounds(100, 50, 450.0), (50, 100));
        assert_eq!(rotated_bounds(100, 50, 720.0), (100, 50));
    }

    #[test]
    fn test_bounds_never_zero() {
        for angle in [1.0, 15.0, 45.0, 89.0, 91.0, 135.0, 179.0, 359.0] {
            let (w, h) = rotated_bounds(1, 1, angle);
            assert!(w >= 1 && h >= 1, "degenerate bounds at {}", angle);
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Normalized angles always land in (-180, 180].
        #[test]
        fn prop_normalize_in_range(angle in -10_000.0f64..=10_000.0) {
            let n = normalize_angle(angle);
            prop_assert!(n > -180.0 && n <= 180.0, "{} normalized to {}", angle, n);
        }

        /// Property: Normalization is stable (already normalized stays put).
        #[test]
        fn prop_normalize_idempotent(angle in -10_000.0f64..=10_000.0) {
            let once = normalize_angle(angle);
            prop_assert_eq!(once, normalize_angle(once));
        }

        /// Property: Adding full turns never changes the normalized angle.
        #[test]
        fn prop_normalize_modular(angle in -170.0f64..=170.0, turns in -5i32..=5) {
            let shifted = angle + 360.0 * turns as f64;
            let n = normalize_angle(shifted);
            prop_assert!((n - angle).abs() < 1e-6, "{} + {} turns gave {}", angle, turns, n);
        }

        /// Property: Rotated bounds are never zero and never drop below the
        /// smaller source dimension (modulo rounding).
        #[test]
        fn prop_bounds_positive(
            w in 1u32..=500,
            h in 1u32..=500,
            angle in -360.0f64..=360.0,
        ) {
            let (bw, bh) = rotated_bounds(w, h, angle);
            prop_assert!(bw >= 1);
            prop_assert!(bh >= 1);
            // Each box axis is w*|cos| + h*|sin| with |cos| + |sin| >= 1,
            // so neither can fall below min(w, h) by more than rounding.
            let min_dim = w.min(h);
            prop_assert!(bw + 1 >= min_dim, "bw {} for {}x{} at {}", bw, w, h, angle);
            prop_assert!(bh + 1 >= min_dim, "bh {} for {}x{} at {}", bh, w, h, angle);
        }

        /// Property: Pivot always resolves inside the canvas.
        #[test]
        fn prop_pivot_in_canvas(
            w in 1u32..=500,
            h in 1u32..=500,
            px in -200.0f64..=200.0,
            py in -200.0f64..=200.0,
        ) {
            let (x, y) = Pivot::Percent { x: px, y: py }.resolve(w, h);
            prop_assert!(x >= 0.0 && x <= w as f64);
            prop_assert!(y >= 0.0 && y <= h as f64);
        }
    }
}
