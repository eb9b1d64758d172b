// crates/geomatch-core/src/hash.rs

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the UTF-8 bytes of `label`.
///
/// ```rust
/// use geomatch_core::hash::label_hash;
///
/// assert_eq!(
///     label_hash(""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn label_hash(label: &str) -> String {
    digest_hex(label.as_bytes())
}

pub(crate) fn digest_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
