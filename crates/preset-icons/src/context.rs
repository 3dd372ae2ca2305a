//! The resource and display handle a resolver works against.

use std::fmt;
use std::sync::Arc;

use preset_icons_render::{DisplayMetrics, MetricsSource};

use crate::assets::AssetStore;

/// Access to bundled assets and live display metrics.
///
/// Cloning is cheap; clones share the same store and metrics source.
#[derive(Clone)]
pub struct IconContext {
    assets: Arc<dyn AssetStore>,
    metrics: Arc<dyn MetricsSource>,
}

impl IconContext {
    /// Create a context from an asset store and a metrics source.
    pub fn new(assets: impl AssetStore + 'static, metrics: impl MetricsSource + 'static) -> Self {
        Self {
            assets: Arc::new(assets),
            metrics: Arc::new(metrics),
        }
    }

    /// Create a context from already shared parts.
    pub fn from_shared(assets: Arc<dyn AssetStore>, metrics: Arc<dyn MetricsSource>) -> Self {
        Self { assets, metrics }
    }

    /// The bundled asset store.
    #[inline]
    pub fn assets(&self) -> &dyn AssetStore {
        self.assets.as_ref()
    }

    /// A snapshot of the current display metrics.
    #[inline]
    pub fn display_metrics(&self) -> DisplayMetrics {
        self.metrics.display_metrics()
    }
}

impl fmt::Debug for IconContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconContext")
            .field("assets", &self.assets)
            .field("metrics", &self.display_metrics())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::DirectoryAssets;
    use preset_icons_render::LiveDisplayMetrics;

    #[test]
    fn test_context_reads_live_metrics() {
        let live = LiveDisplayMetrics::new(DisplayMetrics::new(1.0));
        let context = IconContext::new(DirectoryAssets::new("/srv/assets"), live.clone());
        assert_eq!(context.display_metrics().density, 1.0);

        live.set_density(2.0);
        assert_eq!(context.display_metrics().density, 2.0);
    }

    #[test]
    fn test_context_from_shared() {
        let live = LiveDisplayMetrics::new(DisplayMetrics::new(1.0));
        let assets: Arc<dyn AssetStore> = Arc::new(DirectoryAssets::new("/srv/assets"));
        let metrics: Arc<dyn MetricsSource> = Arc::new(live.clone());

        let first = IconContext::from_shared(assets.clone(), metrics.clone());
        let second = IconContext::from_shared(assets, metrics);
        live.set_density(3.0);
        assert_eq!(first.display_metrics().density, 3.0);
        assert_eq!(second.display_metrics().density, 3.0);
        assert!(!first.assets().contains("images/presets/none.png"));
    }

    #[test]
    fn test_context_clones_share_parts() {
        let context = IconContext::new(DirectoryAssets::new("/srv/assets"), DisplayMetrics::new(1.5));
        let clone = context.clone();
        assert_eq!(clone.display_metrics(), context.display_metrics());
        assert!(format!("{context:?}").contains("IconContext"));
    }
}
