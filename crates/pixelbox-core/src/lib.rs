//! Pixelbox Core - Raster transform and adaptive encoding library
//!
//! This crate provides the processing core for Pixelbox, a browser image
//! toolbox: crop/rotate/resize geometry, a sharpening convolution filter,
//! alpha-flattening for formats without transparency, and an adaptive
//! encoder that searches for an output meeting a byte-size budget.
//!
//! The host supplies decoded pixels and consumes encoded bytes; everything
//! in between lives here as pure, synchronous functions over value objects.

pub mod decode;
pub mod encode;
pub mod export;
pub mod flatten;
pub mod format;
pub mod geometry;
pub mod history;
pub mod preview;
pub mod raster;
pub mod sharpen;
pub mod transform;

pub use encode::{compress_to_budget, encode_with_spec, CodecEncoder, Encoder};
pub use flatten::{flatten_if_needed, has_transparency, Background};
pub use format::ImageFormat;
pub use geometry::{
    compute_fit_scale, normalize_angle, resize_crop_rect, solve_crop_rect, translate_crop_rect,
    AspectConstraint, FitMode, GeometryError, Rect, ResizeSpec, RotationSpec,
};
pub use raster::RasterImage;
pub use sharpen::sharpen;
pub use transform::{apply_crop, apply_resize, apply_rotation, SamplingFilter};

/// An RGBA color value used for rotation backgrounds and flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    /// Create a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Check whether the color has full alpha.
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// The color as a `[r, g, b, a]` byte array, matching raster pixel layout.
    pub const fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::TRANSPARENT.a, 0);
        assert!(Rgba::WHITE.is_opaque());
        assert!(Rgba::BLACK.is_opaque());
        assert_eq!(Rgba::WHITE.to_bytes(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_rgba_opaque_constructor() {
        let c = Rgba::opaque(10, 20, 30);
        assert_eq!(c, Rgba::new(10, 20, 30, 255));
        assert!(c.is_opaque());
    }

    #[test]
    fn test_rgba_default_is_transparent() {
        assert_eq!(Rgba::default(), Rgba::TRANSPARENT);
    }
}
