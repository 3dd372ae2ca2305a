//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while decoding or building bitmaps.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Reading the encoded image bytes failed.
    #[error("failed to read image data: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The encoded stream exceeded the accepted size.
    #[error("encoded image exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    /// Raw pixel data did not match the requested dimensions.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
