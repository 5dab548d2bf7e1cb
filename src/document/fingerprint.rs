//! Document identifiers
//!
//! An identifier is a content fingerprint of the extracted text: the SHA-256
//! digest in hex, truncated to [`ID_LENGTH`] characters. Truncation makes
//! collisions far more likely than with the full digest; two documents that
//! collide share one store slot and the later upload wins.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest
pub const ID_LENGTH: usize = 10;

/// Compute the identifier for a document's extracted text
pub fn document_id(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let mut id = hex::encode(hasher.finalize());
    id.truncate(ID_LENGTH);
    id
}
