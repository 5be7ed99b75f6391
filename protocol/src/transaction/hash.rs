//! Transaction identifiers.
//!
//! A transaction's ID is SHA-512Half of its signed blob, domain-separated
//! with the `TXN\0` prefix so it can never collide with the hash of a
//! ledger object or a signing digest.

use tracing::debug;

use crate::config::TRANSACTION_ID_PREFIX;
use crate::crypto::hash::prefixed_sha512_half;

/// Computes the transaction hash of a hex-encoded signed blob.
///
/// Returns the 32-byte hash as uppercase hex, or `None` if `blob_hex` is
/// not valid hex. Either case of hex digits is accepted.
///
/// # Example
///
/// ```
/// use xrpl_protocol::transaction::transaction_blob_to_hash;
///
/// assert!(transaction_blob_to_hash("not hex").is_none());
/// assert_eq!(transaction_blob_to_hash("00").unwrap().len(), 64);
/// ```
pub fn transaction_blob_to_hash(blob_hex: &str) -> Option<String> {
    let blob = match hex::decode(blob_hex) {
        Ok(blob) => blob,
        Err(e) => {
            debug!(error = %e, "transaction blob is not valid hex");
            return None;
        }
    };
    Some(hex::encode_upper(prefixed_sha512_half(
        &TRANSACTION_ID_PREFIX,
        &blob,
    )))
}
