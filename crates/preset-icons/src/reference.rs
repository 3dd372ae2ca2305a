//! Classification of icon reference strings.
//!
//! A reference is classified once, before any I/O, into one of three
//! [`IconReference`] variants. Keeping this step pure means the routing rules
//! can be tested without touching the filesystem.

/// How a reference string will be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconReference<'a> {
    /// An `http://` or `https://` URL whose image was downloaded into the
    /// base directory under its content hash.
    Remote(&'a str),
    /// A relative path inside the bundled asset store.
    Asset(&'a str),
    /// Neither of the above; never looked up.
    Rejected(&'a str),
}

impl<'a> IconReference<'a> {
    /// Classify `reference`.
    ///
    /// `remote_enabled` is true when a download directory is configured.
    /// Remote URLs are rejected without one, and are never reinterpreted as
    /// asset paths. Empty references and asset paths containing `..` are
    /// rejected.
    pub fn classify(reference: &'a str, remote_enabled: bool) -> Self {
        if reference.is_empty() {
            return IconReference::Rejected(reference);
        }
        if is_remote_url(reference) {
            return if remote_enabled {
                IconReference::Remote(reference)
            } else {
                IconReference::Rejected(reference)
            };
        }
        if reference.contains("..") {
            return IconReference::Rejected(reference);
        }
        IconReference::Asset(reference)
    }

    /// The original reference string.
    pub fn as_str(&self) -> &'a str {
        match *self {
            IconReference::Remote(s) | IconReference::Asset(s) | IconReference::Rejected(s) => s,
        }
    }

    /// Returns true for [`IconReference::Remote`].
    pub fn is_remote(&self) -> bool {
        matches!(self, IconReference::Remote(_))
    }

    /// Returns true for [`IconReference::Rejected`].
    pub fn is_rejected(&self) -> bool {
        matches!(self, IconReference::Rejected(_))
    }
}

/// Check whether `reference` is an HTTP(S) URL. The scheme match is
/// case-sensitive.
pub fn is_remote_url(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}
