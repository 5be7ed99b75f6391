//! # Hashing Utilities
//!
//! The two hash constructions the ledger actually uses:
//!
//! - **Double SHA-256** — base58check checksums for every address format.
//!   Only the first four bytes survive, which is plenty to catch typos.
//!
//! - **SHA-512Half** — SHA-512 truncated to its first 32 bytes. This is the
//!   ledger's general-purpose digest: transaction IDs, ledger object keys,
//!   signing hashes.
//!
//! Domain separation is done the old-fashioned way: a 4-byte ASCII prefix
//! (`TXN\0`, `STX\0`, ...) is fed into the hasher ahead of the payload.
//! See [`crate::config`] for the prefixes.

use sha2::{Digest, Sha256, Sha512};

use crate::config::HASH_OUTPUT_LENGTH;

/// Compute the SHA-256 hash of the input data.
///
/// # Example
///
/// ```
/// use xrpl_protocol::crypto::sha256;
///
/// let hash = sha256(b"ledger");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Compute the double-SHA-256 hash: `SHA-256(SHA-256(data))`.
///
/// Used for base58check checksums. Callers keep the first
/// [`CHECKSUM_LENGTH`](crate::config::CHECKSUM_LENGTH) bytes.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut output = [0u8; 32];
    output.copy_from_slice(&second);
    output
}

/// Compute the full 64-byte SHA-512 digest.
pub fn sha512(data: &[u8]) -> Vec<u8> {
    Sha512::digest(data).to_vec()
}

/// Compute SHA-512Half: the first 32 bytes of SHA-512.
pub fn sha512_half(data: &[u8]) -> [u8; HASH_OUTPUT_LENGTH] {
    prefixed_sha512_half(&[], data)
}

/// Compute SHA-512Half over `prefix || data` without concatenating first.
///
/// This is how every domain-separated ledger hash is built. The prefix is
/// fed into the hasher before the payload, so there is no temporary buffer.
pub fn prefixed_sha512_half(prefix: &[u8], data: &[u8]) -> [u8; HASH_OUTPUT_LENGTH] {
    let mut hasher = Sha512::new();
    hasher.update(prefix);
    hasher.update(data);
    let digest = hasher.finalize();
    let mut output = [0u8; HASH_OUTPUT_LENGTH];
    output.copy_from_slice(&digest[..HASH_OUTPUT_LENGTH]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        let hash = sha256(b"");
        let expected =
            hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap();
        assert_eq!(hash, expected);
    }

    #[test]
    fn double_sha256_equals_sha256_of_sha256() {
        let single = sha256(b"ledger");
        let double = double_sha256(b"ledger");
        assert_eq!(double.to_vec(), sha256(&single));
        assert_ne!(double.to_vec(), single);
    }

    #[test]
    fn test_sha512_known_vector() {
        // SHA-512 of "abc" from FIPS 180-2.
        let hash = sha512(b"abc");
        assert_eq!(
            hex::encode(&hash[..16]),
            "ddaf35a193617abacc417349ae204131"
        );
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn sha512_half_is_the_first_half() {
        let full = sha512(b"half measures");
        let half = sha512_half(b"half measures");
        assert_eq!(half.as_slice(), &full[..32]);
    }

    #[test]
    fn prefixed_hash_matches_concatenation() {
        let prefixed = prefixed_sha512_half(b"TXN\0", b"payload");
        let concatenated = sha512_half(b"TXN\0payload");
        assert_eq!(prefixed, concatenated);
    }

    #[test]
    fn prefix_changes_the_digest() {
        let plain = sha512_half(b"payload");
        let prefixed = prefixed_sha512_half(b"STX\0", b"payload");
        assert_ne!(plain, prefixed);
    }
}
