//! Resolve a preset icon reference and save it as a PNG.
//!
//! Run with:
//!
//! ```text
//! cargo run -p preset-icons --example resolve_icon -- \
//!     presets/bicycle.png 24 --assets crates/preset-icons/tests/fixtures --density 2 --out bicycle.png
//! ```
//!
//! Pass `--help` for the full option list.
//!
//! Set `RUST_LOG=preset_icons=debug` to see resolver diagnostics.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use preset_icons::{
    DirectoryAssets, DisplayMetrics, IconContext, PresetIconResolver, ResizeFilter,
    ResolverConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Resolve a preset icon reference and save it as a PNG", long_about = None)]
struct Cli {
    /// Icon reference: an asset path below `images/` or an http(s) URL
    reference: String,

    /// Requested size in density-independent pixels
    size_dp: u32,

    /// Asset root containing `images/`
    #[arg(long, value_name = "DIR", default_value = ".")]
    assets: PathBuf,

    /// Directory of downloaded icons
    #[arg(long, value_name = "DIR")]
    base_path: Option<PathBuf>,

    /// TOML resolver configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Display density factor
    #[arg(long, default_value_t = 1.0)]
    density: f32,

    /// Output PNG
    #[arg(short, long, value_name = "FILE", default_value = "icon.png")]
    out: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => match ResolverConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => ResolverConfig::default(),
    };
    if let Some(base_path) = args.base_path {
        config = config.with_base_path(base_path);
    }

    let context = IconContext::new(
        DirectoryAssets::new(&args.assets),
        DisplayMetrics::new(args.density),
    );
    let resolver = PresetIconResolver::with_config(context, config);

    println!("Reference: {}", args.reference);
    println!("Classified as: {:?}", resolver.classify(&args.reference));
    if let Some(path) = resolver.downloaded_icon_path(&args.reference) {
        println!("Downloaded icon path: {}", path.display());
    }

    let drawable = resolver.resolve_or_placeholder(Some(&args.reference), args.size_dp);
    println!(
        "Bounds: {:?}{}",
        drawable.bounds().to_array(),
        if drawable.is_transparent() {
            " (placeholder)"
        } else {
            ""
        }
    );

    let raster = drawable.rasterize(ResizeFilter::default());
    if raster.width() == 0 || raster.height() == 0 {
        eprintln!("Nothing to write: empty bounds");
        return ExitCode::FAILURE;
    }
    if let Err(e) = raster.save(&args.out) {
        eprintln!("Failed to write {}: {e}", args.out.display());
        return ExitCode::FAILURE;
    }
    println!("Wrote {}", args.out.display());
    ExitCode::SUCCESS
}
