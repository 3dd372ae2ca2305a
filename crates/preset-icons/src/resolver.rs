//! Preset icon resolution.
//!
//! This module provides the [`PresetIconResolver`], which turns an icon
//! reference from a preset into a drawable sized for the current display.
//!
//! # Lookup rules
//!
//! 1. With a download directory configured, `http://` and `https://`
//!    references load `<base path>/<content_hash(url)>.png`.
//! 2. Other references without `..` load `<asset prefix><reference>` from the
//!    bundled asset store.
//! 3. Everything else is rejected.
//!
//! The loaded PNG has its density reset to [`BitmapDensity::Unscaled`] and its
//! bounds set to `[0, 0, px, px]` with `px = round(size_dp * density)`.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use preset_icons_render::{
    Bitmap, BitmapDensity, BitmapDrawable, ColorDrawable, Drawable, PixelRect,
};

use crate::config::ResolverConfig;
use crate::context::IconContext;
use crate::error::{Error, Result};
use crate::hash::content_hash;
use crate::logging::targets;
use crate::reference::IconReference;

/// File extension of downloaded icons.
const DOWNLOADED_ICON_EXTENSION: &str = "png";

/// Resolves preset icon references to drawables.
///
/// The resolver holds no mutable state; it can be shared between threads and
/// every call is independent. Each call does blocking file I/O on the calling
/// thread.
#[derive(Debug, Clone)]
pub struct PresetIconResolver {
    context: IconContext,
    config: ResolverConfig,
}

impl PresetIconResolver {
    /// Create a resolver. `base_path` is the directory of downloaded icons;
    /// without it remote references never resolve.
    pub fn new(context: IconContext, base_path: Option<impl Into<PathBuf>>) -> Self {
        let mut config = ResolverConfig::default();
        config.base_path = base_path.map(Into::into);
        Self::with_config(context, config)
    }

    /// Create a resolver from a full configuration.
    pub fn with_config(context: IconContext, config: ResolverConfig) -> Self {
        Self { context, config }
    }

    /// The context this resolver reads assets and metrics from.
    pub fn context(&self) -> &IconContext {
        &self.context
    }

    /// The resolver configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The download directory, if any.
    pub fn base_path(&self) -> Option<&Path> {
        self.config.base_path()
    }

    /// Classify a reference the way [`resolve`](Self::resolve) would.
    pub fn classify<'a>(&self, reference: &'a str) -> IconReference<'a> {
        IconReference::classify(reference, self.base_path().is_some())
    }

    /// Where the downloaded image for `url` is expected.
    ///
    /// Returns `None` when no download directory is configured or `url` is
    /// not a remote reference.
    pub fn downloaded_icon_path(&self, url: &str) -> Option<PathBuf> {
        match self.classify(url) {
            IconReference::Remote(url) => self.base_path().map(|base| downloaded_path(base, url)),
            IconReference::Asset(_) | IconReference::Rejected(_) => None,
        }
    }

    /// Convert density-independent pixels to device pixels using the
    /// current display metrics.
    pub fn dp_to_px(&self, dp: u32) -> u32 {
        self.context.display_metrics().dp_to_px(dp)
    }

    /// Resolve `reference` to a drawable of `size_dp` x `size_dp`.
    ///
    /// Returns `None` for a missing or empty reference, a rejected reference,
    /// or when the image cannot be opened or decoded. Failures are logged on
    /// the `preset_icons::resolver` target and never propagate. The opened
    /// stream is released on every path; errors while releasing it are
    /// ignored.
    pub fn resolve(&self, reference: Option<&str>, size_dp: u32) -> Option<BitmapDrawable> {
        let Some(reference) = reference.filter(|r| !r.is_empty()) else {
            tracing::debug!(target: targets::RESOLVER, size_dp, "no icon reference given");
            return None;
        };

        match self.load(reference, size_dp) {
            Ok(drawable) => Some(drawable),
            Err(err @ Error::UnrecognizedReference { .. }) => {
                tracing::error!(target: targets::RESOLVER, reference, "{err}");
                None
            }
            Err(err) => {
                tracing::error!(
                    target: targets::RESOLVER,
                    reference,
                    kind = ?err.kind(),
                    error = %err,
                    "failed to load preset icon"
                );
                None
            }
        }
    }

    /// Like [`resolve`](Self::resolve), but returns a fully transparent
    /// placeholder with the same bounds instead of `None`.
    pub fn resolve_or_placeholder(&self, reference: Option<&str>, size_dp: u32) -> Drawable {
        match self.resolve(reference, size_dp) {
            Some(drawable) => Drawable::Bitmap(drawable),
            None => {
                let mut placeholder = ColorDrawable::transparent();
                placeholder.set_bounds(PixelRect::square(self.dp_to_px(size_dp)));
                Drawable::Color(placeholder)
            }
        }
    }

    fn load(&self, reference: &str, size_dp: u32) -> Result<BitmapDrawable> {
        let (location, stream) = self.open(self.classify(reference))?;
        let mut bitmap = Bitmap::decode_png(stream).map_err(|e| Error::decode(&location, e))?;

        bitmap.set_density(BitmapDensity::Unscaled);
        let mut drawable = BitmapDrawable::new(bitmap);
        drawable.set_bounds(PixelRect::square(self.dp_to_px(size_dp)));

        tracing::trace!(
            target: targets::RESOLVER,
            reference,
            location = %location,
            bounds = ?drawable.bounds().to_array(),
            "resolved preset icon"
        );
        Ok(drawable)
    }

    fn open(&self, reference: IconReference<'_>) -> Result<(String, Box<dyn Read + '_>)> {
        match reference {
            IconReference::Remote(url) => {
                // Remote is only produced when a base path exists
                let base = self
                    .base_path()
                    .ok_or_else(|| Error::unrecognized(url))?;
                let path = downloaded_path(base, url);
                let location = path.display().to_string();
                let file = File::open(&path).map_err(|e| Error::unreadable(&location, e))?;
                Ok((location, Box::new(file)))
            }
            IconReference::Asset(relative) => {
                let location = format!("{}{}", self.config.asset_prefix, relative);
                let stream = self
                    .context
                    .assets()
                    .open(&location)
                    .map_err(|e| Error::unreadable(&location, e))?;
                Ok((location, stream))
            }
            IconReference::Rejected(reference) => Err(Error::unrecognized(reference)),
        }
    }
}

fn downloaded_path(base: &Path, url: &str) -> PathBuf {
    base.join(format!("{}.{}", content_hash(url), DOWNLOADED_ICON_EXTENSION))
}
