//! Slug derivation and catalog hashing.

use sha2::{Digest, Sha256};

/// Derive a slug from a title: lowercase ASCII alphanumerics, every other run
/// of characters collapsed into a single `-`.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// SHA-256 over length-prefixed fields, hex encoded.
///
/// Length prefixes keep `["ab", "c"]` and `["a", "bc"]` distinct.
#[must_use]
pub fn fingerprint<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    let mut hasher = Sha256::new();
    for field in fields {
        hasher.update((field.len() as u64).to_le_bytes());
        hasher.update(field.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}
