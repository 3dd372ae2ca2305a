//! Resolver configuration.
//!
//! The configuration can be built in code or loaded from TOML:
//!
//! ```toml
//! # Directory holding downloaded icons, named <content hash>.png
//! base_path = "/var/cache/myapp/icons"
//! # Prefix prepended to relative references inside the asset store
//! asset_prefix = "images/"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::targets;

/// Prefix under which bundled preset icons live in the asset store.
pub const DEFAULT_ASSET_PREFIX: &str = "images/";

/// Settings for a [`PresetIconResolver`](crate::PresetIconResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Directory of downloaded icons. Remote references never resolve
    /// without one.
    pub base_path: Option<PathBuf>,
    /// Prefix prepended to asset references.
    pub asset_prefix: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            asset_prefix: DEFAULT_ASSET_PREFIX.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Set the download directory.
    #[must_use]
    pub fn with_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Set the asset prefix.
    #[must_use]
    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_prefix = prefix.into();
        self
    }

    /// The download directory, if one is configured and non-empty.
    pub fn base_path(&self) -> Option<&Path> {
        self.base_path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| Error::config_io(path, e))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            base_path = ?config.base_path,
            "loaded icon configuration"
        );
        Ok(config)
    }

    /// The platform cache location for an application's downloaded icons,
    /// `<cache dir>/icons`.
    pub fn default_download_dir(application: &str) -> Option<PathBuf> {
        ProjectDirs::from("", "", application).map(|dirs| dirs.cache_dir().join("icons"))
    }
}
