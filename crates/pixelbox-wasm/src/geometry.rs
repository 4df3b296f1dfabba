//! Crop-rect solving and angle math WASM bindings.
//!
//! These bindings cover the pure geometry layer: no pixels move, only
//! rectangle and angle values cross the boundary. Rects, constraints,
//! and axes are plain JavaScript objects converted with
//! serde-wasm-bindgen, matching the serde shape of the core types:
//!
//! ```typescript
//! type Rect = { x: number, y: number, width: number, height: number };
//! type AspectConstraint = "free" | { ratio: { w: number, h: number } };
//! type Axis = "horizontal" | "vertical";
//! ```

use pixelbox_core::geometry::{
    self, normalize_angle as core_normalize_angle, AspectConstraint, Axis, Rect,
};
use wasm_bindgen::prelude::*;

fn rect_from_js(value: JsValue) -> Result<Rect, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn constraint_from_js(value: JsValue) -> Result<AspectConstraint, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn rect_to_js(rect: Rect) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&rect).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Solve a crop rect against an aspect constraint.
///
/// With a bound ratio, the rect is shrunk on one axis to satisfy the
/// lock, recentered, and clamped into the canvas. A free constraint
/// returns the rect unchanged.
///
/// # Arguments
///
/// * `rect` - Current crop rect as `{x, y, width, height}`
/// * `constraint` - `"free"` or `{ratio: {w, h}}`
/// * `bounds_width` - Canvas width in pixels
/// * `bounds_height` - Canvas height in pixels
///
/// # Returns
///
/// The solved rect as `{x, y, width, height}`, or an error when the
/// input rect violates its invariants.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const square = solve_crop_rect(
///   { x: 10, y: 10, width: 100, height: 80 },
///   { ratio: { w: 1, h: 1 } },
///   200, 200,
/// );
/// ```
#[wasm_bindgen]
pub fn solve_crop_rect(
    rect: JsValue,
    constraint: JsValue,
    bounds_width: u32,
    bounds_height: u32,
) -> Result<JsValue, JsValue> {
    let rect = rect_from_js(rect)?;
    let constraint = constraint_from_js(constraint)?;

    let solved = geometry::solve_crop_rect(&rect, constraint, bounds_width, bounds_height)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    rect_to_js(solved)
}

/// Apply a drag on one crop resize handle.
///
/// The dragged axis takes `value`; with a ratio lock the other axis is
/// derived, and the region is recentered and clamped into the canvas.
///
/// # Arguments
///
/// * `rect` - Current crop rect as `{x, y, width, height}`
/// * `axis` - `"horizontal"` or `"vertical"`
/// * `value` - New size on the dragged axis, in pixels
/// * `constraint` - `"free"` or `{ratio: {w, h}}`
/// * `bounds_width` - Canvas width in pixels
/// * `bounds_height` - Canvas height in pixels
#[wasm_bindgen]
pub fn resize_crop_rect(
    rect: JsValue,
    axis: JsValue,
    value: u32,
    constraint: JsValue,
    bounds_width: u32,
    bounds_height: u32,
) -> Result<JsValue, JsValue> {
    let rect = rect_from_js(rect)?;
    let axis: Axis =
        serde_wasm_bindgen::from_value(axis).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let constraint = constraint_from_js(constraint)?;

    let resized =
        geometry::resize_crop_rect(&rect, axis, value, constraint, bounds_width, bounds_height)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
    rect_to_js(resized)
}

/// Move a crop rect by a pixel delta without changing its size.
///
/// The position is clamped so the region never exits the canvas.
#[wasm_bindgen]
pub fn translate_crop_rect(
    rect: JsValue,
    dx: i32,
    dy: i32,
    bounds_width: u32,
    bounds_height: u32,
) -> Result<JsValue, JsValue> {
    let rect = rect_from_js(rect)?;

    let moved = geometry::translate_crop_rect(&rect, dx, dy, bounds_width, bounds_height)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    rect_to_js(moved)
}

/// Normalize a rotation angle into the `(-180, 180]` degree range.
///
/// # Example (TypeScript)
///
/// ```typescript
/// normalize_angle(370);   // 10
/// normalize_angle(-185);  // 175
/// ```
#[wasm_bindgen]
pub fn normalize_angle(degrees: f64) -> f64 {
    core_normalize_angle(degrees)
}


/// WASM-specific tests that require JsValue.
///
/// These only run on wasm32 targets. Use `wasm-pack test` to run them.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn js_rect(x: u32, y: u32, width: u32, height: u32) -> JsValue {
        serde_wasm_bindgen::to_value(&Rect::new(x, y, width, height)).unwrap()
    }

    fn square_constraint() -> JsValue {
        serde_wasm_bindgen::to_value(&AspectConstraint::square()).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_solve_crop_rect_round_trip() {
        let result = solve_crop_rect(js_rect(10, 10, 100, 80), square_constraint(), 200, 200);
        assert!(result.is_ok());

        let solved: Rect = serde_wasm_bindgen::from_value(result.unwrap()).unwrap();
        assert_eq!(solved.width, solved.height);
    }

    #[wasm_bindgen_test]
    fn test_solve_crop_rect_rejects_out_of_bounds() {
        let result = solve_crop_rect(js_rect(150, 150, 100, 100), square_constraint(), 200, 200);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_translate_clamps_to_canvas() {
        let result = translate_crop_rect(js_rect(0, 0, 50, 50), -10, -10, 100, 100);
        let moved: Rect = serde_wasm_bindgen::from_value(result.unwrap()).unwrap();
        assert_eq!((moved.x, moved.y), (0, 0));
    }

    #[wasm_bindgen_test]
    fn test_resize_crop_rect_drag() {
        let axis = serde_wasm_bindgen::to_value(&Axis::Horizontal).unwrap();
        let result = resize_crop_rect(
            js_rect(10, 10, 100, 100),
            axis,
            150,
            square_constraint(),
            200,
            200,
        );
        let resized: Rect = serde_wasm_bindgen::from_value(result.unwrap()).unwrap();
        assert_eq!((resized.width, resized.height), (150, 150));
    }

    #[wasm_bindgen_test]
    fn test_malformed_rect_object_rejected() {
        let bogus = js_sys::Object::new();
        let result = solve_crop_rect(bogus.into(), square_constraint(), 100, 100);
        assert!(result.is_err());
    }
}
