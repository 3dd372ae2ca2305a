//! Decoded bitmaps with a density tag.
//!
//! A [`Bitmap`] owns RGBA pixels plus a [`BitmapDensity`] describing the
//! screen density the pixels were authored for. Density-aware renderers scale
//! a bitmap by `screen dpi / bitmap dpi` when drawing it at its intrinsic
//! size; a bitmap tagged [`BitmapDensity::Unscaled`] is always drawn at its
//! pixel size (or at whatever explicit bounds the drawable carries).

use std::io::{Cursor, Read};

use image::{DynamicImage, ImageFormat, ImageReader, Limits, RgbaImage};

use crate::error::{RenderError, RenderResult};
use crate::metrics::{BASELINE_DPI, DisplayMetrics};

/// Largest encoded PNG accepted by [`Bitmap::decode_png`], in bytes.
pub const MAX_ENCODED_LEN: u64 = 16 * 1024 * 1024;

/// The density a bitmap's pixels were authored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitmapDensity {
    /// Never auto-scaled.
    Unscaled,
    /// Authored for a screen of this many dots per inch.
    Dpi(u32),
}

impl Default for BitmapDensity {
    fn default() -> Self {
        BitmapDensity::Dpi(BASELINE_DPI)
    }
}

/// A decoded RGBA bitmap.
#[derive(Clone)]
pub struct Bitmap {
    pixels: RgbaImage,
    density: BitmapDensity,
}

impl Bitmap {
    /// Decode a PNG from a byte stream of at most [`MAX_ENCODED_LEN`] bytes.
    ///
    /// The reader is consumed and dropped before this returns, whether or not
    /// decoding succeeds. The new bitmap is tagged with the baseline density.
    pub fn decode_png<R: Read>(reader: R) -> RenderResult<Self> {
        Self::decode_png_with_limit(reader, MAX_ENCODED_LEN)
    }

    /// Decode a PNG, refusing streams longer than `max_len` bytes.
    ///
    /// At most `max_len + 1` bytes are read. Decoding runs under the
    /// decoder's default allocation limits.
    pub fn decode_png_with_limit<R: Read>(reader: R, max_len: u64) -> RenderResult<Self> {
        let mut encoded = Vec::new();
        {
            let mut bounded = reader.take(max_len.saturating_add(1));
            bounded.read_to_end(&mut encoded)?;
        }
        if encoded.len() as u64 > max_len {
            return Err(RenderError::TooLarge { limit: max_len });
        }

        let mut decoder = ImageReader::with_format(Cursor::new(encoded), ImageFormat::Png);
        decoder.limits(Limits::default());
        Ok(Self::from_dynamic_image(decoder.decode()?))
    }

    /// Create a bitmap from an already decoded image.
    pub fn from_dynamic_image(image: DynamicImage) -> Self {
        Self {
            pixels: image.into_rgba8(),
            density: BitmapDensity::default(),
        }
    }

    /// Create a bitmap from raw RGBA pixel data.
    ///
    /// The data must be exactly `width * height * 4` bytes in row-major order.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> RenderResult<Self> {
        let pixels = RgbaImage::from_raw(width, height, data)
            .ok_or(RenderError::InvalidDimensions { width, height })?;
        Ok(Self {
            pixels,
            density: BitmapDensity::default(),
        })
    }

    /// Get the width of the bitmap in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Get the height of the bitmap in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Get the density tag.
    #[inline]
    pub fn density(&self) -> BitmapDensity {
        self.density
    }

    /// Replace the density tag.
    #[inline]
    pub fn set_density(&mut self, density: BitmapDensity) {
        self.density = density;
    }

    /// Borrow the pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Take ownership of the pixel buffer.
    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }

    /// The size a density-aware renderer would draw this bitmap at on the
    /// given display, when no explicit bounds are set.
    pub fn scaled_size(&self, metrics: &DisplayMetrics) -> (u32, u32) {
        match self.density {
            BitmapDensity::Unscaled => (self.width(), self.height()),
            BitmapDensity::Dpi(0) => (self.width(), self.height()),
            BitmapDensity::Dpi(source_dpi) => {
                let target_dpi = u64::from(metrics.dpi());
                let scale = |value: u32| {
                    let scaled = (u64::from(value) * target_dpi + u64::from(source_dpi) / 2)
                        / u64::from(source_dpi);
                    u32::try_from(scaled).unwrap_or(u32::MAX)
                };
                (scale(self.width()), scale(self.height()))
            }
        }
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("density", &self.density)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(image)
            .write_to(&mut bytes, ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let bitmap = Bitmap::decode_png(Cursor::new(encode_png(12, 8))).unwrap();
        assert_eq!(bitmap.width(), 12);
        assert_eq!(bitmap.height(), 8);
        assert_eq!(bitmap.density(), BitmapDensity::Dpi(BASELINE_DPI));
        assert_eq!(bitmap.pixels().get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = Bitmap::decode_png(Cursor::new(b"definitely not a png".to_vec()));
        assert!(matches!(result, Err(RenderError::Decode(_))));
    }

    #[test]
    fn test_decode_empty_stream_fails() {
        let result = Bitmap::decode_png(Cursor::new(Vec::new()));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(Bitmap::from_rgba(vec![0; 16], 2, 2).is_ok());
        let err = Bitmap::from_rgba(vec![0; 15], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidDimensions {
                width: 2,
                height: 2
            }
        ));
    }

    #[test]
    fn test_oversized_stream_is_refused() {
        let encoded = encode_png(12, 8);
        let limit = encoded.len() as u64 - 1;
        let err = Bitmap::decode_png_with_limit(Cursor::new(encoded.clone()), limit).unwrap_err();
        assert!(matches!(err, RenderError::TooLarge { limit: l } if l == limit));

        let exact = Bitmap::decode_png_with_limit(Cursor::new(encoded.clone()), encoded.len() as u64);
        assert!(exact.is_ok());
    }

    #[test]
    fn test_into_pixels() {
        let bitmap = Bitmap::decode_png(Cursor::new(encode_png(3, 2))).unwrap();
        let pixels = bitmap.into_pixels();
        assert_eq!(pixels.dimensions(), (3, 2));
        assert_eq!(pixels.get_pixel(2, 1), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_scaled_size_respects_density() {
        let mut bitmap = Bitmap::from_rgba(vec![0; 24 * 24 * 4], 24, 24).unwrap();
        let metrics = DisplayMetrics::new(2.0);

        assert_eq!(bitmap.scaled_size(&metrics), (48, 48));

        bitmap.set_density(BitmapDensity::Unscaled);
        assert_eq!(bitmap.scaled_size(&metrics), (24, 24));
    }
}
