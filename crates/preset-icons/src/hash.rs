//! Content hashes for downloaded icon file names.

use sha2::{Digest, Sha256};

/// Number of characters kept from the hex digest.
///
/// Existing download directories are keyed by names of this length, so it
/// must not change.
pub const CONTENT_HASH_LEN: usize = 24;

/// Derive a file-name safe identifier for `value`.
///
/// SHA-256 over the UTF-8 bytes, rendered as lowercase hex and truncated to
/// [`CONTENT_HASH_LEN`] characters. Used to name cached files, not for
/// integrity or authentication.
pub fn content_hash(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    let mut hex = format!("{digest:x}");
    hex.truncate(CONTENT_HASH_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(
            content_hash("https://example.com/x.png"),
            "026efd6de2494a5f76ee86ac"
        );
        assert_eq!(
            content_hash("http://example.com/icons/bus.png"),
            "ec64738c8c0cfba595498e04"
        );
        assert_eq!(content_hash(""), "e3b0c44298fc1c149afbf4c8");
    }

    #[test]
    fn test_deterministic_and_fixed_length() {
        let long = "long".repeat(1000);
        let inputs = [
            "",
            "a",
            "https://example.com/x.png",
            "ünïcödé/ピクトグラム.png",
            long.as_str(),
        ];
        for input in inputs {
            let first = content_hash(input);
            assert_eq!(first, content_hash(input));
            assert_eq!(first.len(), CONTENT_HASH_LEN);
            assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_distinct_inputs_distinct_hashes() {
        assert_ne!(
            content_hash("https://example.com/a.png"),
            content_hash("https://example.com/b.png")
        );
        assert_ne!(
            content_hash("http://example.com/a.png"),
            content_hash("https://example.com/a.png")
        );
    }
}
