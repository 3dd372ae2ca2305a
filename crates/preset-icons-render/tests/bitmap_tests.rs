//! Integration tests for bitmap decoding and drawables.

use std::io::{self, Cursor, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use image::{DynamicImage, ImageFormat, Rgba};
use preset_icons_render::{
    Bitmap, BitmapDensity, BitmapDrawable, Drawable, LiveDisplayMetrics, MetricsSource,
    PixelRect, RenderError, ResizeFilter, RgbaImage,
};

/// A reader that records when it is dropped.
struct TrackedReader<R> {
    inner: R,
    dropped: Arc<AtomicBool>,
}

impl<R: Read> Read for TrackedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R> Drop for TrackedReader<R> {
    fn drop(&mut self) {
        self.dropped.store(true, Ordering::SeqCst);
    }
}

/// A reader that always fails.
struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("device unplugged"))
    }
}

fn png_bytes(size: u32) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(size, size, Rgba([255, 0, 0, 255])))
        .write_to(&mut bytes, ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}

fn tracked(bytes: Vec<u8>) -> (TrackedReader<Cursor<Vec<u8>>>, Arc<AtomicBool>) {
    let dropped = Arc::new(AtomicBool::new(false));
    let reader = TrackedReader {
        inner: Cursor::new(bytes),
        dropped: dropped.clone(),
    };
    (reader, dropped)
}

#[test]
fn test_stream_released_after_decode() {
    let (reader, dropped) = tracked(png_bytes(8));
    let bitmap = Bitmap::decode_png(reader).unwrap();
    assert!(dropped.load(Ordering::SeqCst));
    assert_eq!((bitmap.width(), bitmap.height()), (8, 8));
}

#[test]
fn test_stream_released_after_decode_failure() {
    let (reader, dropped) = tracked(b"\x89PNG but not really".to_vec());
    assert!(Bitmap::decode_png(reader).is_err());
    assert!(dropped.load(Ordering::SeqCst));
}

#[test]
fn test_read_failure_is_io_error() {
    let err = Bitmap::decode_png(FailingReader).unwrap_err();
    assert!(matches!(err, RenderError::Io(_)));
}

#[test]
fn test_unscaled_drawable_with_density_bounds() {
    let metrics = LiveDisplayMetrics::default();
    metrics.set_density(3.0);

    let mut bitmap = Bitmap::decode_png(Cursor::new(png_bytes(24))).unwrap();
    bitmap.set_density(BitmapDensity::Unscaled);

    let px = metrics.display_metrics().dp_to_px(24);
    let mut drawable = BitmapDrawable::new(bitmap);
    drawable.set_bounds(PixelRect::square(px));

    let drawable = Drawable::from(drawable);
    assert_eq!(drawable.bounds().to_array(), [0, 0, 72, 72]);

    let raster = drawable.rasterize(ResizeFilter::Triangle);
    assert_eq!(raster.dimensions(), (72, 72));
    assert_eq!(raster.get_pixel(36, 36), &Rgba([255, 0, 0, 255]));
}
