//! Pixelbox WASM - WebAssembly bindings for Pixelbox
//!
//! This crate provides WASM bindings to expose the pixelbox-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (format sniffing, EXIF orientation)
//! - `geometry` - Crop-rect solving and angle normalization
//! - `transform` - Crop, rotation, resize, and sharpen bindings
//! - `flatten` - Transparency checks and alpha flattening
//! - `encode` - Encoding and the byte-budget compression search
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode, compress_to_budget } from '@pixelbox/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Decode a dropped file and compress it under 500 KiB
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode(bytes);
//! const outcome = compress_to_budget(image, 500 * 1024);
//! console.log(`${outcome.format} at ${outcome.byte_length} bytes`);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod flatten;
mod geometry;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode, decode_no_orientation, get_orientation};
pub use encode::{compress_to_budget, encode_with_spec, JsEncodeOutcome};
pub use flatten::{flatten_if_needed, has_transparency};
pub use geometry::{normalize_angle, resize_crop_rect, solve_crop_rect, translate_crop_rect};
pub use transform::{apply_crop, apply_resize, apply_rotation, sharpen};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Simple function to verify WASM is working
#[wasm_bindgen]
pub fn greet(name: &str) -> String {
    format!("Hello, {}! Pixelbox WASM is ready.", name)
}
