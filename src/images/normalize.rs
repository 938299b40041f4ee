//! Canonical avatar rendering: decode, orient, crop-to-fill, re-encode.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageDecoder, ImageError, ImageReader};

use crate::error::Result;

/// Edge length of the square avatar canvas in pixels.
const AVATAR_SIZE: u32 = 400;

/// JPEG encode quality for normalized avatars.
const JPEG_QUALITY: u8 = 90;

/// Normalizes arbitrary uploaded images into the canonical avatar format.
///
/// The output is always an upright, exactly square JPEG: the shorter input
/// dimension is scaled up to cover the canvas and the excess on the longer
/// dimension is cropped, centered. Stored orientation metadata is applied
/// before resizing so captures from rotated devices come out right-side up.
pub struct ImageNormalizer {
    size: u32,
    quality: u8,
}

impl Default for ImageNormalizer {
    fn default() -> Self {
        Self {
            size: AVATAR_SIZE,
            quality: JPEG_QUALITY,
        }
    }
}

impl ImageNormalizer {
    /// Create a normalizer with a custom canvas size and JPEG quality.
    pub fn new(size: u32, quality: u8) -> Self {
        Self { size, quality }
    }

    /// Normalize raw image bytes into canonical avatar bytes.
    ///
    /// Fails if the input cannot be decoded or re-encoded; nothing partial
    /// is ever returned.
    pub fn normalize(&self, data: &[u8]) -> Result<Vec<u8>> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(ImageError::IoError)?;
        let mut decoder = reader.into_decoder()?;
        let orientation = decoder.orientation()?;

        let mut img = DynamicImage::from_decoder(decoder)?;
        img.apply_orientation(orientation);

        let square = img.resize_to_fill(self.size, self.size, FilterType::Lanczos3);

        // JPEG has no alpha channel; flatten before encoding.
        let rgb = DynamicImage::ImageRgb8(square.to_rgb8());
        let mut buf = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut buf, self.quality);
        rgb.write_with_encoder(encoder)?;

        Ok(buf.into_inner())
    }

    /// File extension matching the canonical output format.
    pub fn extension(&self) -> &'static str {
        ".jpg"
    }
}
