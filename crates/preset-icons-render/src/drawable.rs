//! Drawables: bitmaps and solid colors with explicit pixel bounds.
//!
//! A drawable is what UI code actually paints. It pairs content with the
//! [`PixelRect`] it should occupy; [`Drawable::rasterize`] produces an RGBA
//! buffer of exactly the bounds size.

use image::RgbaImage;

use crate::bitmap::Bitmap;
use crate::types::{Color, PixelRect};

/// Resampling filter used when rasterizing a bitmap to its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFilter {
    /// Nearest neighbor interpolation. Fast but pixelated.
    Nearest,
    /// Bilinear interpolation. Balanced speed and quality.
    #[default]
    Triangle,
    /// Catmull-Rom bicubic interpolation. Good quality.
    CatmullRom,
    /// Lanczos interpolation with window size 3. High quality.
    Lanczos3,
}

impl ResizeFilter {
    fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            ResizeFilter::Nearest => image::imageops::FilterType::Nearest,
            ResizeFilter::Triangle => image::imageops::FilterType::Triangle,
            ResizeFilter::CatmullRom => image::imageops::FilterType::CatmullRom,
            ResizeFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// A drawable backed by a decoded bitmap.
#[derive(Debug, Clone)]
pub struct BitmapDrawable {
    bitmap: Bitmap,
    bounds: PixelRect,
}

impl BitmapDrawable {
    /// Wrap a bitmap. Bounds start at the bitmap's pixel size.
    pub fn new(bitmap: Bitmap) -> Self {
        let bounds = PixelRect::from_size(bitmap.width(), bitmap.height());
        Self { bitmap, bounds }
    }

    /// Borrow the bitmap.
    #[inline]
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Mutably borrow the bitmap.
    #[inline]
    pub fn bitmap_mut(&mut self) -> &mut Bitmap {
        &mut self.bitmap
    }

    /// Get the bounds.
    #[inline]
    pub fn bounds(&self) -> PixelRect {
        self.bounds
    }

    /// Set the bounds.
    #[inline]
    pub fn set_bounds(&mut self, bounds: PixelRect) {
        self.bounds = bounds;
    }

    /// Intrinsic width of the bitmap in pixels.
    #[inline]
    pub fn intrinsic_width(&self) -> u32 {
        self.bitmap.width()
    }

    /// Intrinsic height of the bitmap in pixels.
    #[inline]
    pub fn intrinsic_height(&self) -> u32 {
        self.bitmap.height()
    }

    /// Render the bitmap stretched to the bounds size.
    pub fn rasterize(&self, filter: ResizeFilter) -> RgbaImage {
        let (width, height) = (self.bounds.width(), self.bounds.height());
        if width == 0 || height == 0 {
            return RgbaImage::new(width, height);
        }
        if (width, height) == (self.bitmap.width(), self.bitmap.height()) {
            return self.bitmap.pixels().clone();
        }
        image::imageops::resize(
            self.bitmap.pixels(),
            width,
            height,
            filter.to_image_filter(),
        )
    }
}

/// A drawable that fills its bounds with one color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorDrawable {
    color: Color,
    bounds: PixelRect,
}

impl ColorDrawable {
    /// Create a color drawable with empty bounds.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            bounds: PixelRect::ZERO,
        }
    }

    /// Create a fully transparent drawable.
    pub fn transparent() -> Self {
        Self::new(Color::TRANSPARENT)
    }

    /// Get the fill color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Get the bounds.
    #[inline]
    pub fn bounds(&self) -> PixelRect {
        self.bounds
    }

    /// Set the bounds.
    #[inline]
    pub fn set_bounds(&mut self, bounds: PixelRect) {
        self.bounds = bounds;
    }

    /// Render the fill color at the bounds size.
    pub fn rasterize(&self) -> RgbaImage {
        RgbaImage::from_pixel(
            self.bounds.width(),
            self.bounds.height(),
            self.color.to_rgba8(),
        )
    }
}

/// Any drawable produced for an icon.
#[derive(Debug, Clone)]
pub enum Drawable {
    /// A decoded bitmap.
    Bitmap(BitmapDrawable),
    /// A solid color, typically a transparent placeholder.
    Color(ColorDrawable),
}

impl Drawable {
    /// Get the bounds.
    pub fn bounds(&self) -> PixelRect {
        match self {
            Drawable::Bitmap(drawable) => drawable.bounds(),
            Drawable::Color(drawable) => drawable.bounds(),
        }
    }

    /// Set the bounds.
    pub fn set_bounds(&mut self, bounds: PixelRect) {
        match self {
            Drawable::Bitmap(drawable) => drawable.set_bounds(bounds),
            Drawable::Color(drawable) => drawable.set_bounds(bounds),
        }
    }

    /// Get the bitmap drawable, if this is one.
    pub fn as_bitmap(&self) -> Option<&BitmapDrawable> {
        match self {
            Drawable::Bitmap(drawable) => Some(drawable),
            Drawable::Color(_) => None,
        }
    }

    /// Check whether this drawable paints nothing visible.
    pub fn is_transparent(&self) -> bool {
        match self {
            Drawable::Bitmap(_) => false,
            Drawable::Color(drawable) => drawable.color().is_transparent(),
        }
    }

    /// Render at the bounds size.
    pub fn rasterize(&self, filter: ResizeFilter) -> RgbaImage {
        match self {
            Drawable::Bitmap(drawable) => drawable.rasterize(filter),
            Drawable::Color(drawable) => drawable.rasterize(),
        }
    }
}

impl From<BitmapDrawable> for Drawable {
    fn from(drawable: BitmapDrawable) -> Self {
        Drawable::Bitmap(drawable)
    }
}

impl From<ColorDrawable> for Drawable {
    fn from(drawable: ColorDrawable) -> Self {
        Drawable::Color(drawable)
    }
}
