//! Image decoding with EXIF orientation handling.
//!
//! [`decode`] turns an encoded byte stream (any of the supported
//! container formats) into an RGBA [`RasterImage`], applying the EXIF
//! orientation tag so callers always see upright pixels. Orientation
//! lives in metadata, not in the pixel data, so skipping this step
//! shows sideways or mirrored photos from most phone cameras.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raster::RasterImage;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The byte stream does not start with any recognized image signature.
    #[error("Unrecognized or unsupported image format")]
    UnsupportedFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptData(String),
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl Orientation {
    /// Returns true if this orientation swaps width and height dimensions.
    ///
    /// Rotations of 90° and 270° (and their flip variants Transpose/Transverse)
    /// swap the image dimensions.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Decode an encoded image, applying EXIF orientation correction.
///
/// The container format is sniffed from the leading bytes, so the
/// caller does not declare it.
///
/// # Arguments
///
/// * `bytes` - Raw encoded file bytes
///
/// # Returns
///
/// A [`RasterImage`] with RGBA pixel data, upright per the EXIF
/// orientation tag.
///
/// # Errors
///
/// Returns [`DecodeError::UnsupportedFormat`] when no codec recognizes
/// the byte signature, and [`DecodeError::CorruptData`] when a
/// recognized stream fails to decode.
pub fn decode(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    // Orientation comes from the container metadata, before decoding.
    let orientation = get_orientation(bytes);

    let img = decode_dynamic(bytes)?;
    let oriented = apply_orientation(img, orientation);

    Ok(RasterImage::from_rgba_image(oriented.into_rgba8()))
}

/// Decode an encoded image without applying EXIF orientation.
///
/// Use this when the host handles orientation itself or the pixels are
/// known to be upright already.
pub fn decode_no_orientation(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    let img = decode_dynamic(bytes)?;
    Ok(RasterImage::from_rgba_image(img.into_rgba8()))
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptData(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::UnsupportedFormat);
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptData(e.to_string()))
}

/// Extract the EXIF orientation tag from an encoded image.
///
/// Returns [`Orientation::Normal`] if no EXIF data is found or the
/// orientation tag is absent.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply an EXIF orientation transformation to a decoded image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{CodecEncoder, Encoder};
    use crate::format::ImageFormat;
    use crate::Rgba;

    /// Encode a solid-color image so decode tests have real bytes to
    /// chew on without binary fixtures.
    fn encoded(format: ImageFormat, width: u32, height: u32, color: Rgba) -> Vec<u8> {
        let img = RasterImage::filled(width, height, color);
        CodecEncoder
            .encode(&img, width, height, format, Some(0.9))
            .unwrap()
            .bytes
    }

    /// Minimal little-endian TIFF whose only IFD entry is the
    /// orientation tag.
    fn tiff_with_orientation(value: u16) -> Vec<u8> {
        let mut bytes = vec![
            0x49, 0x49, 0x2A, 0x00, // "II" magic, little-endian
            0x08, 0x00, 0x00, 0x00, // IFD0 at offset 8
            0x01, 0x00, // one entry
            0x12, 0x01, // tag 0x0112 (Orientation)
            0x03, 0x00, // type SHORT
            0x01, 0x00, 0x00, 0x00, // count 1
        ];
        bytes.extend_from_slice(&value.to_le_bytes());
        bytes.extend_from_slice(&[0x00, 0x00]); // value field padding
        bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // no next IFD
        bytes
    }

    #[test]
    fn test_decode_png_round_trip() {
        let bytes = encoded(ImageFormat::Png, 4, 3, Rgba::opaque(10, 20, 30));

        let img = decode(&bytes).unwrap();

        assert_eq!(img.width, 4);
        assert_eq!(img.height, 3);
        for px in img.pixels.chunks_exact(4) {
            assert_eq!(px, [10, 20, 30, 255]);
        }
    }

    #[test]
    fn test_decode_webp_preserves_alpha() {
        let bytes = encoded(ImageFormat::WebP, 5, 5, Rgba::new(50, 60, 70, 128));

        let img = decode(&bytes).unwrap();

        assert_eq!(img.width, 5);
        assert_eq!(img.height, 5);
        assert_eq!(&img.pixels[0..4], &[50, 60, 70, 128]);
    }

    #[test]
    fn test_decode_jpeg() {
        let bytes = encoded(ImageFormat::Jpeg, 8, 6, Rgba::opaque(200, 100, 50));

        let img = decode(&bytes).unwrap();

        assert_eq!(img.width, 8);
        assert_eq!(img.height, 6);
        assert_eq!(img.pixels.len(), 8 * 6 * 4);
        // JPEG has no alpha channel; decoded pixels come back opaque.
        for px in img.pixels.chunks_exact(4) {
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn test_decode_garbage_rejected() {
        let result = decode(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat)));
    }

    #[test]
    fn test_decode_empty_rejected() {
        let result = decode(&[]);
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat)));
    }

    #[test]
    fn test_decode_truncated_rejected() {
        let bytes = encoded(ImageFormat::Png, 16, 16, Rgba::WHITE);

        // Keep the signature so the format is recognized, then cut the
        // stream short.
        let result = decode(&bytes[0..24]);
        assert!(matches!(result, Err(DecodeError::CorruptData(_))));
    }

    #[test]
    fn test_decode_no_orientation_matches_for_untagged_files() {
        let bytes = encoded(ImageFormat::Png, 6, 4, Rgba::opaque(1, 2, 3));

        let a = decode(&bytes).unwrap();
        let b = decode_no_orientation(&bytes).unwrap();

        assert_eq!(a.pixels, b.pixels);
        assert_eq!((a.width, a.height), (b.width, b.height));
    }

    #[test]
    fn test_get_orientation_without_exif() {
        let bytes = encoded(ImageFormat::Png, 2, 2, Rgba::WHITE);
        assert_eq!(get_orientation(&bytes), Orientation::Normal);
        assert_eq!(get_orientation(&[0x00, 0x01, 0x02]), Orientation::Normal);
    }

    #[test]
    fn test_get_orientation_from_tiff() {
        assert_eq!(
            get_orientation(&tiff_with_orientation(1)),
            Orientation::Normal
        );
        assert_eq!(
            get_orientation(&tiff_with_orientation(6)),
            Orientation::Rotate90CW
        );
        assert_eq!(
            get_orientation(&tiff_with_orientation(8)),
            Orientation::Rotate270CW
        );
        // Out-of-range values fall back to Normal.
        assert_eq!(
            get_orientation(&tiff_with_orientation(99)),
            Orientation::Normal
        );
    }

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(3), Orientation::Rotate180);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(0), Orientation::Normal);
        assert_eq!(Orientation::from(99), Orientation::Normal);
    }

    #[test]
    fn test_orientation_swaps_dimensions() {
        assert!(!Orientation::Normal.swaps_dimensions());
        assert!(!Orientation::FlipHorizontal.swaps_dimensions());
        assert!(!Orientation::Rotate180.swaps_dimensions());
        assert!(!Orientation::FlipVertical.swaps_dimensions());

        assert!(Orientation::Transpose.swaps_dimensions());
        assert!(Orientation::Rotate90CW.swaps_dimensions());
        assert!(Orientation::Transverse.swaps_dimensions());
        assert!(Orientation::Rotate270CW.swaps_dimensions());
    }

    #[test]
    fn test_apply_orientation_rotate90_swaps_dimensions() {
        let pixels = vec![
            255, 0, 0, 255, // red (left)
            0, 255, 0, 255, // green (right)
        ];
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_raw(2, 1, pixels).unwrap());

        let result = apply_orientation(img, Orientation::Rotate90CW).into_rgba8();

        assert_eq!(result.dimensions(), (1, 2));
        // Clockwise: the left pixel ends up on top.
        assert_eq!(result.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(result.get_pixel(0, 1).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_apply_orientation_rotate180_reverses() {
        let pixels = vec![
            255, 0, 0, 255, // red (left)
            0, 255, 0, 255, // green (right)
        ];
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_raw(2, 1, pixels).unwrap());

        let result = apply_orientation(img, Orientation::Rotate180).into_rgba8();

        assert_eq!(result.dimensions(), (2, 1));
        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0, 255]);
        assert_eq!(result.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        let pixels = vec![
            255, 0, 0, 255, // red (left)
            0, 255, 0, 255, // green (right)
        ];
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_raw(2, 1, pixels).unwrap());

        let result = apply_orientation(img, Orientation::FlipHorizontal).into_rgba8();

        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0, 255]);
        assert_eq!(result.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }
}
