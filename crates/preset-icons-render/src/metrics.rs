//! Display metrics and density-independent unit conversion.
//!
//! Icon sizes are requested in density-independent pixels (dp). One dp is one
//! device pixel on a baseline (160 dpi) screen; on denser screens the
//! [`DisplayMetrics::density`] factor scales it up.
//!
//! # Example
//!
//! ```ignore
//! use preset_icons_render::{DisplayMetrics, LiveDisplayMetrics, MetricsSource};
//!
//! let metrics = DisplayMetrics::new(2.0);
//! assert_eq!(metrics.dp_to_px(24), 48);
//!
//! // A windowing layer can share a live handle and update it on scale changes.
//! let live = LiveDisplayMetrics::new(DisplayMetrics::new(1.0));
//! live.set_density(1.5);
//! assert_eq!(live.display_metrics().dp_to_px(32), 48);
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use crate::logging::targets;

/// Dots-per-inch of the baseline density (`density == 1.0`).
pub const BASELINE_DPI: u32 = 160;

/// A snapshot of the current display's scaling parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Device pixels per density-independent pixel.
    pub density: f32,
}

impl DisplayMetrics {
    /// Metrics for a baseline-density display.
    pub const BASELINE: Self = Self { density: 1.0 };

    /// Create metrics with the given density factor.
    #[inline]
    pub const fn new(density: f32) -> Self {
        Self { density }
    }

    /// Create metrics from a screen dpi value.
    #[inline]
    pub fn from_dpi(dpi: u32) -> Self {
        Self::new(dpi as f32 / BASELINE_DPI as f32)
    }

    /// The screen dpi implied by the density factor.
    #[inline]
    pub fn dpi(&self) -> u32 {
        self.scale(BASELINE_DPI)
    }

    /// Convert density-independent pixels to device pixels.
    ///
    /// Rounds to the nearest pixel. A non-finite or non-positive density
    /// yields zero.
    #[inline]
    pub fn dp_to_px(&self, dp: u32) -> u32 {
        self.scale(dp)
    }

    fn scale(&self, value: u32) -> u32 {
        if !self.density.is_finite() || self.density <= 0.0 {
            return 0;
        }
        // `as` saturates for values beyond u32::MAX
        (value as f32 * self.density).round() as u32
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// Anything that can report the current display metrics.
///
/// Implementations must be cheap to query: icon resolution reads the metrics
/// once per call.
pub trait MetricsSource: Send + Sync {
    /// Take a snapshot of the current metrics.
    fn display_metrics(&self) -> DisplayMetrics;
}

impl MetricsSource for DisplayMetrics {
    fn display_metrics(&self) -> DisplayMetrics {
        *self
    }
}

/// A shared, updatable metrics handle.
///
/// Clones share the same underlying value, so the windowing layer can keep
/// one clone and update it when the scale factor changes while resolvers read
/// the others.
#[derive(Debug, Clone, Default)]
pub struct LiveDisplayMetrics {
    inner: Arc<RwLock<DisplayMetrics>>,
}

impl LiveDisplayMetrics {
    /// Create a live handle starting at the given metrics.
    pub fn new(metrics: DisplayMetrics) -> Self {
        Self {
            inner: Arc::new(RwLock::new(metrics)),
        }
    }

    /// Replace the metrics.
    pub fn set(&self, metrics: DisplayMetrics) {
        tracing::debug!(
            target: targets::METRICS,
            density = metrics.density,
            "display metrics updated"
        );
        *self.inner.write() = metrics;
    }

    /// Replace only the density factor.
    pub fn set_density(&self, density: f32) {
        self.set(DisplayMetrics::new(density));
    }
}

impl MetricsSource for LiveDisplayMetrics {
    fn display_metrics(&self) -> DisplayMetrics {
        *self.inner.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_to_px_rounds_to_nearest() {
        assert_eq!(DisplayMetrics::new(1.0).dp_to_px(32), 32);
        assert_eq!(DisplayMetrics::new(1.5).dp_to_px(32), 48);
        assert_eq!(DisplayMetrics::new(2.625).dp_to_px(24), 63);
        // 0.75 * 26 = 19.5 rounds up
        assert_eq!(DisplayMetrics::new(0.75).dp_to_px(26), 20);
    }

    #[test]
    fn test_invalid_density_yields_zero() {
        assert_eq!(DisplayMetrics::new(0.0).dp_to_px(32), 0);
        assert_eq!(DisplayMetrics::new(-2.0).dp_to_px(32), 0);
        assert_eq!(DisplayMetrics::new(f32::NAN).dp_to_px(32), 0);
        assert_eq!(DisplayMetrics::new(f32::INFINITY).dp_to_px(32), 0);
    }

    #[test]
    fn test_dpi_conversion() {
        let metrics = DisplayMetrics::from_dpi(320);
        assert_eq!(metrics.density, 2.0);
        assert_eq!(metrics.dpi(), 320);
        assert_eq!(DisplayMetrics::default().dpi(), BASELINE_DPI);
    }

    #[test]
    fn test_metrics_target_matches_module() {
        assert!(module_path!().starts_with(targets::METRICS));
    }

    #[test]
    fn test_live_metrics_shared_between_clones() {
        let live = LiveDisplayMetrics::new(DisplayMetrics::BASELINE);
        let reader = live.clone();
        assert_eq!(reader.display_metrics().dp_to_px(10), 10);

        live.set_density(3.0);
        assert_eq!(reader.display_metrics().dp_to_px(10), 30);
    }
}
