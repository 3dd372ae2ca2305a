//! Tracing targets used by this crate.
//!
//! Every diagnostic is emitted through `tracing` with one of the targets
//! below, so applications can filter icon noise independently, e.g.
//! `RUST_LOG=preset_icons::resolver=off`.

/// Target names for log filtering.
pub mod targets {
    /// Icon resolution failures and results.
    pub const RESOLVER: &str = "preset_icons::resolver";
    /// Asset store access.
    pub const ASSETS: &str = "preset_icons::assets";
    /// Configuration loading.
    pub const CONFIG: &str = "preset_icons::config";
}
