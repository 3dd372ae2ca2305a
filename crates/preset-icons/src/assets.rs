//! Read-only asset stores for bundled icons.
//!
//! Bundled icons live in a hierarchical, read-only store addressed by
//! relative `/`-separated paths such as `images/presets/bicycle.png`. Two
//! stores are provided:
//!
//! - [`EmbeddedAssets`]: a directory compiled into the binary with
//!   `include_dir!`
//! - [`DirectoryAssets`]: a directory on disk, e.g. an unpacked asset bundle
//!
//! # Example
//!
//! ```ignore
//! use include_dir::{include_dir, Dir};
//! use preset_icons::{AssetStore, EmbeddedAssets};
//!
//! static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");
//!
//! let store = EmbeddedAssets::new(&ASSETS);
//! if store.contains("images/presets/bicycle.png") {
//!     let reader = store.open("images/presets/bicycle.png")?;
//! }
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Component, Path, PathBuf};

use include_dir::Dir;

use crate::logging::targets;

/// A read-only store of bundled assets.
pub trait AssetStore: Send + Sync + fmt::Debug {
    /// Open the asset at `path` for reading.
    ///
    /// The returned reader owns whatever handle backs the asset; dropping it
    /// releases the handle. Release is best-effort and never reports errors.
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>>;

    /// Check whether an asset exists at `path`.
    fn contains(&self, path: &str) -> bool {
        self.open(path).is_ok()
    }
}

/// Assets embedded in the binary with `include_dir!`.
#[derive(Clone, Copy)]
pub struct EmbeddedAssets {
    dir: &'static Dir<'static>,
}

impl EmbeddedAssets {
    /// Wrap an embedded directory.
    pub const fn new(dir: &'static Dir<'static>) -> Self {
        Self { dir }
    }

    /// Get an asset's contents by path.
    pub fn get(&self, path: &str) -> Option<&'static [u8]> {
        self.dir.get_file(path).map(|f| f.contents())
    }
}

impl AssetStore for EmbeddedAssets {
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        match self.get(path) {
            Some(contents) => Ok(Box::new(Cursor::new(contents))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no embedded asset at '{path}'"),
            )),
        }
    }

    fn contains(&self, path: &str) -> bool {
        self.dir.get_file(path).is_some()
    }
}

impl fmt::Debug for EmbeddedAssets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedAssets")
            .field("entries", &self.dir.entries().len())
            .finish()
    }
}

/// Assets read from a directory on disk.
///
/// Paths are always resolved below the root; any path with `..`, a root, or
/// a drive prefix is refused with [`io::ErrorKind::InvalidInput`].
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    /// Use `root` as the asset root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The asset root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an asset path to a filesystem path below the root.
    pub fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        let relative = Path::new(path);
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    tracing::warn!(target: targets::ASSETS, path, "refusing asset path outside root");
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("asset path '{path}' escapes the asset root"),
                    ));
                }
            }
        }
        Ok(resolved)
    }
}

impl AssetStore for DirectoryAssets {
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        let full = self.resolve(path)?;
        let file = File::open(&full)?;
        if file.metadata()?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("asset path '{path}' is a directory"),
            ));
        }
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_directory_assets_open() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("images/presets")).unwrap();
        fs::write(dir.path().join("images/presets/tram.png"), b"tram").unwrap();

        let store = DirectoryAssets::new(dir.path());
        let mut contents = Vec::new();
        store
            .open("images/presets/tram.png")
            .unwrap()
            .read_to_end(&mut contents)
            .unwrap();
        assert_eq!(contents, b"tram");
        assert!(store.contains("images/presets/tram.png"));
        assert!(!store.contains("images/presets/bus.png"));
    }

    #[test]
    fn test_directory_assets_refuses_escape() {
        let store = DirectoryAssets::new("/srv/assets");
        for path in ["../secret", "images/../../secret", "/etc/passwd"] {
            let err = store.resolve(path).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{path}");
        }
    }

    #[test]
    fn test_directory_assets_resolves_below_root() {
        let store = DirectoryAssets::new("/srv/assets");
        assert_eq!(
            store.resolve("images/./presets/bus.png").unwrap(),
            PathBuf::from("/srv/assets/images/presets/bus.png")
        );
    }

    #[test]
    fn test_directory_assets_refuses_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();

        let store = DirectoryAssets::new(dir.path());
        assert!(store.open("images").is_err());
        assert!(store.open("images/").is_err());
    }
}
