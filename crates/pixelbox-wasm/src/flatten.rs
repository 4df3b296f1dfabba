//! WASM bindings for transparency checks and alpha flattening.
//!
//! JPEG output cannot carry an alpha channel, so the export path calls
//! [`flatten_if_needed`] before encoding. Format and background policy
//! cross the boundary as plain values in the serde shape of the core
//! types:
//!
//! ```typescript
//! type ImageFormat = "webp" | "jpeg" | "png";
//! type Background =
//!   | "preserve"
//!   | "white"
//!   | "black"
//!   | { solid: { r: number, g: number, b: number } };
//! ```

use crate::types::JsRasterImage;
use pixelbox_core::flatten::{
    flatten_if_needed as core_flatten, has_transparency as core_has_transparency, Background,
};
use pixelbox_core::ImageFormat;
use wasm_bindgen::prelude::*;

/// Whether any pixel carries partial or full transparency.
///
/// The UI uses this to decide whether to surface the background picker
/// before a JPEG export.
///
/// # Example (TypeScript)
///
/// ```typescript
/// if (has_transparency(image)) {
///   showBackgroundPicker();
/// }
/// ```
#[wasm_bindgen]
pub fn has_transparency(image: &JsRasterImage) -> bool {
    core_has_transparency(&image.to_raster())
}

/// Flatten transparency onto a background when the target format needs it.
///
/// Images that are already opaque, or targets that store alpha, come back
/// unchanged. The composite is `out = src*a + bg*(1-a)` per channel, with
/// alpha forced to 255.
///
/// # Arguments
///
/// * `image` - Source image
/// * `format` - Target format token (`"webp"`, `"jpeg"`, `"png"`)
/// * `background` - Background policy (see module docs for the shape)
///
/// # Returns
///
/// New `JsRasterImage`, or an error when the policy is `"preserve"` but
/// the target cannot store alpha.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const flattened = flatten_if_needed(image, "jpeg", "white");
/// ```
#[wasm_bindgen]
pub fn flatten_if_needed(
    image: &JsRasterImage,
    format: JsValue,
    background: JsValue,
) -> Result<JsRasterImage, JsValue> {
    let format: ImageFormat =
        serde_wasm_bindgen::from_value(format).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let background: Background =
        serde_wasm_bindgen::from_value(background).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let src = image.to_raster();
    let result =
        core_flatten(&src, format, background).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsRasterImage::from_raster(result.into_owned()))
}


/// WASM-specific tests that require JsValue.
///
/// These only run on wasm32 targets. Use `wasm-pack test` to run them.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn transparent_image() -> JsRasterImage {
        let mut pixels = vec![200u8; 4 * 4 * 4];
        pixels[3] = 0;
        JsRasterImage::new(4, 4, pixels)
    }

    fn js<T: serde::Serialize>(value: &T) -> JsValue {
        serde_wasm_bindgen::to_value(value).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_flatten_for_jpeg_removes_transparency() {
        let img = transparent_image();
        let out = flatten_if_needed(&img, js(&ImageFormat::Jpeg), js(&Background::White)).unwrap();
        assert!(!has_transparency(&out));
        // Fully transparent pixel became the white background.
        assert_eq!(&out.pixels()[0..4], &[255, 255, 255, 255]);
    }

    #[wasm_bindgen_test]
    fn test_flatten_for_webp_keeps_pixels() {
        let img = transparent_image();
        let out = flatten_if_needed(&img, js(&ImageFormat::WebP), js(&Background::White)).unwrap();
        assert_eq!(out.pixels(), img.pixels());
    }

    #[wasm_bindgen_test]
    fn test_preserve_policy_rejected_for_jpeg() {
        let img = transparent_image();
        let result = flatten_if_needed(&img, js(&ImageFormat::Jpeg), js(&Background::Preserve));
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_solid_background_object() {
        let img = transparent_image();
        let bg = Background::Solid { r: 10, g: 20, b: 30 };
        let out = flatten_if_needed(&img, js(&ImageFormat::Jpeg), js(&bg)).unwrap();
        assert_eq!(&out.pixels()[0..4], &[10, 20, 30, 255]);
    }

    #[wasm_bindgen_test]
    fn test_unknown_format_token_rejected() {
        let img = transparent_image();
        let result = flatten_if_needed(&img, JsValue::from_str("bmp"), js(&Background::White));
        assert!(result.is_err());
    }
}
