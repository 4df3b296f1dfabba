//! WASM bindings for raster transform operations.
//!
//! This module provides JavaScript bindings for crop, rotation, resize,
//! and sharpening, enabling the preview and export pipelines to apply
//! transforms to RGBA pixel data. Spec objects cross the boundary as
//! plain JavaScript objects in the serde shape of the core types:
//!
//! ```typescript
//! type RotationSpec = {
//!   angle_degrees: number,
//!   pivot: "center" | "topLeft" | "topRight" | "bottomLeft" | "bottomRight"
//!        | { percent: { x: number, y: number } }
//!        | { absolute: { x: number, y: number } },
//!   background: { r: number, g: number, b: number, a: number },
//! };
//! type ResizeSpec = {
//!   target_width: number,
//!   target_height: number,
//!   fit_mode: "contain" | "cover" | "fill",
//! };
//! ```

use crate::types::{filter_from_u8, JsRasterImage};
use pixelbox_core::geometry::{Rect, ResizeSpec, RotationSpec};
use pixelbox_core::sharpen::sharpen as core_sharpen;
use pixelbox_core::transform::{
    apply_crop as core_crop, apply_resize as core_resize, apply_rotation as core_rotate,
};
use wasm_bindgen::prelude::*;

/// Apply rotation to an image.
///
/// The output canvas expands to fit the entire rotated image (no
/// clipping); regions the source does not cover take the spec's
/// background color.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `spec` - Rotation spec object (`angle_degrees`, `pivot`, `background`)
/// * `filter` - Resampling: 0=Nearest, 1=Bilinear (preview), 2=Lanczos3 (export)
///
/// # Returns
///
/// New `JsRasterImage` with the rotated content. The dimensions may
/// differ from the source due to canvas expansion.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const spec = {
///   angle_degrees: 15,
///   pivot: "center",
///   background: { r: 0, g: 0, b: 0, a: 0 },
/// };
/// // Preview rotation (fast, bilinear)
/// const rotated = apply_rotation(sourceImage, spec, 1);
/// ```
#[wasm_bindgen]
pub fn apply_rotation(
    image: &JsRasterImage,
    spec: JsValue,
    filter: u8,
) -> Result<JsRasterImage, JsValue> {
    let spec: RotationSpec =
        serde_wasm_bindgen::from_value(spec).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let src = image.to_raster();
    let result = core_rotate(&src, &spec, filter_from_u8(filter));
    Ok(JsRasterImage::from_raster(result))
}

/// Crop a region from an image.
///
/// # Arguments
///
/// * `image` - Source image to crop
/// * `rect` - Crop region as `{x, y, width, height}` in pixels
///
/// # Returns
///
/// New `JsRasterImage` containing only the cropped region, or an error
/// when the rect falls outside the image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const cropped = apply_crop(sourceImage, { x: 10, y: 10, width: 100, height: 100 });
/// ```
#[wasm_bindgen]
pub fn apply_crop(image: &JsRasterImage, rect: JsValue) -> Result<JsRasterImage, JsValue> {
    let rect: Rect =
        serde_wasm_bindgen::from_value(rect).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let src = image.to_raster();
    let result = core_crop(&src, &rect).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsRasterImage::from_raster(result))
}

/// Resize an image into a target box.
///
/// # Arguments
///
/// * `image` - Source image to resize
/// * `spec` - Resize spec object (`target_width`, `target_height`, `fit_mode`)
/// * `filter` - Resampling: 0=Nearest, 1=Bilinear (preview), 2=Lanczos3 (export)
///
/// # Returns
///
/// New `JsRasterImage` at the fitted dimensions, or an error when the
/// target box has a zero dimension.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const spec = { target_width: 800, target_height: 600, fit_mode: "contain" };
/// const resized = apply_resize(sourceImage, spec, 2);
/// ```
#[wasm_bindgen]
pub fn apply_resize(
    image: &JsRasterImage,
    spec: JsValue,
    filter: u8,
) -> Result<JsRasterImage, JsValue> {
    let spec: ResizeSpec =
        serde_wasm_bindgen::from_value(spec).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let src = image.to_raster();
    let result =
        core_resize(&src, &spec, filter_from_u8(filter)).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsRasterImage::from_raster(result))
}

/// Sharpen an image with the fixed 3x3 kernel.
///
/// Edges and borders are handled inside the core; the output always has
/// the source dimensions.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const sharpened = sharpen(sourceImage);
/// ```
#[wasm_bindgen]
pub fn sharpen(image: &JsRasterImage) -> JsRasterImage {
    let src = image.to_raster();
    JsRasterImage::from_raster(core_sharpen(&src))
}
