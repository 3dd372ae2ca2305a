//! Error types for icon resolution.

use std::path::PathBuf;

use preset_icons_render::RenderError;

/// Result type alias for icon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The reference is neither a usable remote reference nor a safe asset path.
    UnrecognizedReference,
    /// The target file or asset is missing, unreadable, or not a valid image.
    NotFoundOrUnreadable,
    /// Resolver configuration could not be loaded.
    Configuration,
}

/// Errors that can occur while resolving icons or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The reference was rejected before any I/O.
    #[error("unknown icon reference type for '{reference}'")]
    UnrecognizedReference { reference: String },

    /// The file or asset could not be opened.
    #[error("failed to open icon '{location}': {source}")]
    Unreadable {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// The bytes could not be read or decoded as PNG.
    #[error("failed to decode icon '{location}': {source}")]
    Decode {
        location: String,
        #[source]
        source: RenderError,
    },

    /// A configuration file could not be read.
    #[error("failed to read icon configuration '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration document is malformed.
    #[error("invalid icon configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    /// Create an unrecognized-reference error.
    pub fn unrecognized(reference: impl Into<String>) -> Self {
        Self::UnrecognizedReference {
            reference: reference.into(),
        }
    }

    /// Create an open error.
    pub fn unreadable(location: impl Into<String>, source: std::io::Error) -> Self {
        Self::Unreadable {
            location: location.into(),
            source,
        }
    }

    /// Create a decode error.
    pub fn decode(location: impl Into<String>, source: RenderError) -> Self {
        Self::Decode {
            location: location.into(),
            source,
        }
    }

    /// Create a configuration I/O error.
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnrecognizedReference { .. } => ErrorKind::UnrecognizedReference,
            Error::Unreadable { .. } | Error::Decode { .. } => ErrorKind::NotFoundOrUnreadable,
            Error::ConfigIo { .. } | Error::ConfigParse(_) => ErrorKind::Configuration,
        }
    }
}
