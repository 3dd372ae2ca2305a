//! Preset icon resolution.
//!
//! Presets reference their icons by string. A reference is either
//!
//! - an `http://` / `https://` URL whose image was downloaded earlier into a
//!   local directory, named `<first 24 hex chars of SHA-256(url)>.png`, or
//! - a path relative to `images/` inside the application's bundled assets.
//!
//! [`PresetIconResolver`] classifies the reference, loads and decodes the PNG,
//! marks it as unscaled and sizes it to the requested density-independent
//! size on the current display. Any failure yields `None` (or a transparent
//! placeholder) and is logged, never propagated.
//!
//! # Example
//!
//! ```ignore
//! use include_dir::{include_dir, Dir};
//! use preset_icons::{EmbeddedAssets, IconContext, LiveDisplayMetrics, PresetIconResolver};
//!
//! static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");
//!
//! let metrics = LiveDisplayMetrics::default();
//! let context = IconContext::new(EmbeddedAssets::new(&ASSETS), metrics.clone());
//! let resolver = PresetIconResolver::new(context, Some("/var/cache/myapp/icons"));
//!
//! // Bundled asset: images/presets/bicycle.png
//! let bicycle = resolver.resolve(Some("presets/bicycle.png"), 24);
//!
//! // Always returns something with the right bounds
//! let icon = resolver.resolve_or_placeholder(Some("https://example.com/bus.png"), 24);
//! ```
//!
//! # Logging
//!
//! Diagnostics are emitted through `tracing` on the targets listed in
//! [`logging::targets`].

mod assets;
mod config;
mod context;
mod error;
mod hash;
pub mod logging;
mod reference;
mod resolver;

pub use assets::{AssetStore, DirectoryAssets, EmbeddedAssets};
pub use config::{DEFAULT_ASSET_PREFIX, ResolverConfig};
pub use context::IconContext;
pub use error::{Error, ErrorKind, Result};
pub use hash::{CONTENT_HASH_LEN, content_hash};
pub use reference::{IconReference, is_remote_url};
pub use resolver::PresetIconResolver;

pub use preset_icons_render::{
    Bitmap, BitmapDensity, BitmapDrawable, Color, ColorDrawable, DisplayMetrics, Drawable,
    LiveDisplayMetrics, MetricsSource, PixelRect, RenderError, ResizeFilter, RgbaImage,
};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        AssetStore, DirectoryAssets, Drawable, EmbeddedAssets, IconContext, LiveDisplayMetrics,
        PresetIconResolver, ResolverConfig,
    };
}
