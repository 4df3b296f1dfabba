//! WASM bindings for image decoding.
//!
//! [`decode`] is the entry point for file bytes dropped into the app:
//! it sniffs the container, decodes WebP, JPEG, or PNG into RGBA, and
//! bakes EXIF orientation into the pixels so every downstream operation
//! can treat the raster as upright.
//!
//! # Example
//!
//! ```typescript
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(image.pixels()), image.width, image.height), 0, 0);
//! ```

use crate::types::JsRasterImage;
use pixelbox_core::decode::{
    decode as core_decode, decode_no_orientation as core_decode_no_orientation,
    get_orientation as core_get_orientation,
};
use wasm_bindgen::prelude::*;

/// Decode image bytes into an upright RGBA raster.
///
/// Sniffs the format from the bytes; WebP, JPEG, and PNG are supported.
/// EXIF orientation is applied before the pixels come back, so a photo
/// shot sideways decodes upright.
///
/// # Errors
///
/// Returns an error when the format is unrecognized or the data is
/// corrupted or truncated.
#[wasm_bindgen]
pub fn decode(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    core_decode(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode image bytes without applying EXIF orientation.
///
/// Pixels come back exactly as stored in the file. Useful for tools
/// that want to show the raw sensor orientation or handle rotation
/// themselves.
#[wasm_bindgen]
pub fn decode_no_orientation(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    core_decode_no_orientation(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Read the EXIF orientation tag from image bytes.
///
/// Returns the standard EXIF value 1-8, where 1 is upright. Bytes with
/// no EXIF data, or an unreadable tag, report 1.
///
/// # Example
///
/// ```typescript
/// if (get_orientation(bytes) !== 1) {
///   console.log("camera stored this image rotated");
/// }
/// ```
#[wasm_bindgen]
pub fn get_orientation(bytes: &[u8]) -> u8 {
    core_get_orientation(bytes) as u8
}


/// WASM-specific tests that require JsValue.
///
/// These only run on wasm32 targets. Use `wasm-pack test` to run them.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use pixelbox_core::encode::{CodecEncoder, Encoder};
    use pixelbox_core::{ImageFormat, RasterImage, Rgba};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_garbage_errors() {
        assert!(decode(&[0, 1, 2, 3]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_empty_errors() {
        assert!(decode(&[]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_truncated_png_errors() {
        let img = RasterImage::filled(8, 8, Rgba::WHITE);
        let bytes = CodecEncoder
            .encode(&img, 8, 8, ImageFormat::Png, None)
            .unwrap()
            .bytes;

        assert!(decode(&bytes[..24]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_webp_preserves_alpha() {
        let img = RasterImage::filled(4, 4, Rgba::new(50, 60, 70, 128));
        let bytes = CodecEncoder
            .encode(&img, 4, 4, ImageFormat::WebP, None)
            .unwrap()
            .bytes;

        let decoded = decode(&bytes).unwrap();
        assert_eq!(&decoded.pixels()[0..4], &[50, 60, 70, 128]);
    }
}
