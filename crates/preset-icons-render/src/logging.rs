//! Tracing targets used by this crate.

/// Target names for log filtering.
pub mod targets {
    /// Display metrics updates.
    pub const METRICS: &str = "preset_icons_render::metrics";
}
