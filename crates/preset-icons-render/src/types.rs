//! Basic color and pixel-geometry types.

use image::Rgba;

/// An RGBA color with premultiplied alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    ///
    /// Note: This expects premultiplied alpha. Use [`from_rgba`](Self::from_rgba)
    /// for non-premultiplied input.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from non-premultiplied RGBA components.
    #[inline]
    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r * a,
            g: g * a,
            b: b * a,
            a,
        }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Check whether the color is fully transparent.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Convert to a non-premultiplied 8-bit pixel.
    pub fn to_rgba8(self) -> Rgba<u8> {
        // Unpremultiply alpha for storage
        let (r, g, b) = if self.a > 0.0 {
            (
                ((self.r / self.a) * 255.0).round().clamp(0.0, 255.0) as u8,
                ((self.g / self.a) * 255.0).round().clamp(0.0, 255.0) as u8,
                ((self.b / self.a) * 255.0).round().clamp(0.0, 255.0) as u8,
            )
        } else {
            (0, 0, 0)
        };
        let a = (self.a * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgba([r, g, b, a])
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
}

/// An integer rectangle in device pixels, stored as edges.
///
/// `right` and `bottom` are exclusive, so `[0, 0, 48, 48]` covers 48x48 pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelRect {
    /// An empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a rectangle from its edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a `size` x `size` rectangle anchored at the origin.
    #[inline]
    pub fn square(size: u32) -> Self {
        let edge = i32::try_from(size).unwrap_or(i32::MAX);
        Self::new(0, 0, edge, edge)
    }

    /// Create a rectangle anchored at the origin with the given size.
    #[inline]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(
            0,
            0,
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        )
    }

    /// Width in pixels; zero for inverted rectangles.
    #[inline]
    pub fn width(&self) -> u32 {
        (i64::from(self.right) - i64::from(self.left)).max(0) as u32
    }

    /// Height in pixels; zero for inverted rectangles.
    #[inline]
    pub fn height(&self) -> u32 {
        (i64::from(self.bottom) - i64::from(self.top)).max(0) as u32
    }

    /// Check if the rectangle covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Return the edges as `[left, top, right, bottom]`.
    #[inline]
    pub fn to_array(self) -> [i32; 4] {
        [self.left, self.top, self.right, self.bottom]
    }
}
