//! Bitmap and drawable primitives for preset icons.
//!
//! This crate holds the pixel-level half of icon handling:
//!
//! - **Display metrics**: density factor and dp-to-pixel conversion, either as
//!   a fixed snapshot or a live handle the windowing layer updates
//! - **Bitmaps**: PNG decoding into RGBA buffers tagged with a source density
//! - **Drawables**: bitmaps or solid colors with explicit pixel bounds, ready
//!   to rasterize at the size they will be shown
//!
//! # Example
//!
//! ```ignore
//! use preset_icons_render::{Bitmap, BitmapDensity, BitmapDrawable, DisplayMetrics, PixelRect};
//!
//! let mut bitmap = Bitmap::decode_png(std::fs::File::open("bicycle.png")?)?;
//! bitmap.set_density(BitmapDensity::Unscaled);
//!
//! let px = DisplayMetrics::new(2.0).dp_to_px(24);
//! let mut drawable = BitmapDrawable::new(bitmap);
//! drawable.set_bounds(PixelRect::square(px));
//! ```

mod bitmap;
mod drawable;
mod error;
pub mod logging;
mod metrics;
mod types;

pub use bitmap::{Bitmap, BitmapDensity, MAX_ENCODED_LEN};
pub use drawable::{BitmapDrawable, ColorDrawable, Drawable, ResizeFilter};
pub use error::{RenderError, RenderResult};
pub use metrics::{BASELINE_DPI, DisplayMetrics, LiveDisplayMetrics, MetricsSource};
pub use types::{Color, PixelRect};

// Re-exported so callers can name rasterized buffers without a direct dependency.
pub use image::RgbaImage;
