//! WASM bindings for encoding and the byte-budget compression search.
//!
//! Encode requests cross the boundary as plain objects in the serde
//! shape of the core spec type:
//!
//! ```typescript
//! type EncodingSpec = {
//!   format: "webp" | "jpeg" | "png",
//!   quality?: number,             // [0, 1]
//!   target_byte_budget?: number,  // byte ceiling; triggers the search
//! };
//! ```
//!
//! Results come back as an opaque [`JsEncodeOutcome`] that owns the
//! encoded bytes in WASM memory. Pull them across with `bytes()`, or
//! skip the copy entirely with `data_url()` for `<img>` sources and
//! download anchors.

use crate::types::JsRasterImage;
use pixelbox_core::encode::{
    compress_to_budget as core_compress, encode_with_spec as core_encode, CodecEncoder,
    CompressionOutcome, EncodingSpec,
};
use pixelbox_core::export;
use wasm_bindgen::prelude::*;

/// The product of an encode call or a budget search.
///
/// Owns the encoded file bytes plus the metadata the UI shows: final
/// dimensions, format, quality, and how the search went.
#[wasm_bindgen]
pub struct JsEncodeOutcome {
    outcome: CompressionOutcome,
}

#[wasm_bindgen]
impl JsEncodeOutcome {
    /// Pixel width of the encoded image.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.outcome.result.width
    }

    /// Pixel height of the encoded image.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.outcome.result.height
    }

    /// Encoded size in bytes.
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.outcome.result.byte_len()
    }

    /// Format token actually written: `"webp"`, `"jpeg"`, or `"png"`.
    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.outcome.result.format.name().to_string()
    }

    /// Quality applied, for formats that take one.
    #[wasm_bindgen(getter)]
    pub fn quality_used(&self) -> Option<f32> {
        self.outcome.result.quality_used
    }

    /// Whether the output satisfies the requested byte budget.
    ///
    /// Always `true` for unbudgeted requests. `false` means the search
    /// exhausted its ladders and this is the smallest result it found.
    #[wasm_bindgen(getter)]
    pub fn budget_met(&self) -> bool {
        self.outcome.budget_met
    }

    /// Number of encode attempts the search spent.
    #[wasm_bindgen(getter)]
    pub fn attempts(&self) -> u32 {
        self.outcome.attempts
    }

    /// Returns the encoded file bytes as a Uint8Array.
    ///
    /// This copies the data out of WASM memory.
    pub fn bytes(&self) -> Vec<u8> {
        self.outcome.result.bytes.clone()
    }

    /// Base64 data URL for the encoded bytes.
    ///
    /// Usable directly as an `<img>` source or a download anchor's
    /// `href`.
    pub fn data_url(&self) -> String {
        export::data_url(&self.outcome.result)
    }

    /// Download filename for this result.
    ///
    /// `timestamp_ms` is a Unix timestamp in milliseconds, typically
    /// `Date.now()`.
    ///
    /// # Example (TypeScript)
    ///
    /// ```typescript
    /// anchor.download = outcome.filename(Date.now());
    /// anchor.href = outcome.data_url();
    /// ```
    pub fn filename(&self, timestamp_ms: f64) -> String {
        export::export_filename(self.outcome.result.format, timestamp_ms as u64)
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional; wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this to immediately release a large result.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

/// Encode an image according to a spec.
///
/// Specs without `target_byte_budget` perform exactly one encode at the
/// requested format and quality. Specs with a budget run the adaptive
/// search; see [`compress_to_budget`].
///
/// # Example (TypeScript)
///
/// ```typescript
/// const outcome = encode_with_spec(image, { format: "jpeg", quality: 0.85 });
/// download(outcome.bytes(), outcome.filename(Date.now()));
/// ```
#[wasm_bindgen]
pub fn encode_with_spec(image: &JsRasterImage, spec: JsValue) -> Result<JsEncodeOutcome, JsValue> {
    let spec: EncodingSpec =
        serde_wasm_bindgen::from_value(spec).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let src = image.to_raster();
    let outcome =
        core_encode(&CodecEncoder, &src, &spec).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsEncodeOutcome { outcome })
}

/// Search for the smallest acceptable encoding under a byte budget.
///
/// Walks format preference (WebP, JPEG, PNG) and a quality ladder, then
/// a dimension ladder, returning the first result that fits. When
/// nothing fits, the smallest attempt comes back with `budget_met`
/// false rather than an error.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const outcome = compress_to_budget(image, 500 * 1024);
/// if (!outcome.budget_met) {
///   showOversizeWarning(outcome.byte_length);
/// }
/// ```
#[wasm_bindgen]
pub fn compress_to_budget(
    image: &JsRasterImage,
    budget: usize,
) -> Result<JsEncodeOutcome, JsValue> {
    let src = image.to_raster();
    let outcome =
        core_compress(&CodecEncoder, &src, budget).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsEncodeOutcome { outcome })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Gradient image; flat fills compress too uniformly to exercise
    /// the search.
    fn gradient_image(width: u32, height: u32) -> JsRasterImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let r = (x * 255 / width) as u8;
                let g = (y * 255 / height) as u8;
                pixels.extend_from_slice(&[r, g, 128, 255]);
            }
        }
        JsRasterImage::new(width, height, pixels)
    }

    #[test]
    fn test_generous_budget_first_attempt() {
        let img = gradient_image(16, 16);
        let outcome = compress_to_budget(&img, 1_000_000).unwrap();

        assert!(outcome.budget_met());
        assert_eq!(outcome.attempts(), 1);
        assert_eq!(outcome.format(), "webp");
        assert_eq!(outcome.width(), 16);
        assert_eq!(outcome.height(), 16);
        assert!(outcome.byte_length() > 0);
        assert_eq!(outcome.bytes().len(), outcome.byte_length());
    }

    #[test]
    fn test_unattainable_budget_soft_outcome() {
        let img = gradient_image(16, 16);
        let outcome = compress_to_budget(&img, 1).unwrap();

        assert!(!outcome.budget_met());
        assert!(outcome.byte_length() > 1);
        assert!(outcome.attempts() > 1);
    }

    #[test]
    fn test_data_url_prefix() {
        let img = gradient_image(8, 8);
        let outcome = compress_to_budget(&img, 1_000_000).unwrap();

        assert!(outcome.data_url().starts_with("data:image/webp;base64,"));
    }

    #[test]
    fn test_filename_carries_format_extension() {
        let img = gradient_image(8, 8);
        let outcome = compress_to_budget(&img, 1_000_000).unwrap();

        assert_eq!(
            outcome.filename(1_700_000_000_000.0),
            "pixelbox-1700000000000.webp"
        );
    }

    #[test]
    fn test_quality_used_reported() {
        let img = gradient_image(8, 8);
        let outcome = compress_to_budget(&img, 1_000_000).unwrap();

        // First ladder rung, reported by the codec.
        assert_eq!(outcome.quality_used(), Some(0.9));
    }
}
