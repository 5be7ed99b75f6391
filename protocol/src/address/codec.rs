//! Base58check over the ripple alphabet, and classic addresses on top of it.
//!
//! ```text
//! payload (version byte(s) || body)
//!     -> checksum = double_sha256(payload)[..4]
//!     -> base58(payload || checksum)   // alphabet: rpshnaf39wBUDNEGHJKLM...
//! ```
//!
//! The ripple alphabet is a permutation of Bitcoin's, chosen so that the
//! zero version byte renders as a leading `r`. Same checksum construction
//! though, and the same guarantee: any single-character substitution is
//! caught by the 4-byte checksum.

use super::{AccountId, AddressError};
use crate::config::{
    ACCOUNT_ID_LENGTH, CHECKSUM_LENGTH, CLASSIC_ADDRESS_DECODED_LENGTH, CLASSIC_ADDRESS_VERSION,
};
use crate::crypto::hash::double_sha256;

/// Computes the 4-byte base58check checksum of a payload.
pub(crate) fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = double_sha256(payload);
    let mut out = [0u8; CHECKSUM_LENGTH];
    out.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    out
}

/// Appends the checksum to `payload` and base58-encodes the result.
pub(crate) fn encode_check(payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_LENGTH);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum(payload));
    bs58::encode(buf)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .into_string()
}

/// Base58-decodes `encoded`, verifies the trailing checksum and returns the
/// payload (version bytes included, checksum stripped).
///
/// Length is checked before the checksum so that truncated input reports
/// the more useful error.
pub(crate) fn decode_check(encoded: &str, expected_len: usize) -> Result<Vec<u8>, AddressError> {
    let mut raw = bs58::decode(encoded)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .into_vec()
        .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;

    if raw.len() != expected_len {
        return Err(AddressError::InvalidLength {
            expected: expected_len,
            got: raw.len(),
        });
    }

    let split = raw.len() - CHECKSUM_LENGTH;
    if checksum(&raw[..split]) != raw[split..] {
        return Err(AddressError::InvalidChecksum);
    }

    raw.truncate(split);
    Ok(raw)
}

/// Encodes a 20-byte account ID as a classic `r...` address.
///
/// # Example
///
/// ```
/// use xrpl_protocol::address::encode_classic_address;
///
/// // The all-zero account is the ledger's "black hole".
/// assert_eq!(encode_classic_address(&[0u8; 20]), "rrrrrrrrrrrrrrrrrrrrrhoLvTp");
/// ```
pub fn encode_classic_address(account_id: &AccountId) -> String {
    let mut payload = Vec::with_capacity(1 + ACCOUNT_ID_LENGTH);
    payload.push(CLASSIC_ADDRESS_VERSION);
    payload.extend_from_slice(account_id);
    encode_check(&payload)
}

/// Decodes a classic address back into its 20-byte account ID.
///
/// Fails on bad base58, the wrong decoded length, a version byte other than
/// [`CLASSIC_ADDRESS_VERSION`] or a checksum mismatch.
pub fn decode_classic_address(address: &str) -> Result<AccountId, AddressError> {
    let payload = decode_check(address, CLASSIC_ADDRESS_DECODED_LENGTH)?;
    let (version, body) = payload
        .split_first()
        .ok_or(AddressError::InvalidLength {
            expected: CLASSIC_ADDRESS_DECODED_LENGTH,
            got: 0,
        })?;

    if *version != CLASSIC_ADDRESS_VERSION {
        return Err(AddressError::InvalidVersion(vec![*version]));
    }

    let mut account_id = [0u8; ACCOUNT_ID_LENGTH];
    account_id.copy_from_slice(body);
    Ok(account_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "r9LqNeG6qHxjeUocjvVki2XR35weJ9mZgQ";
    const ALICE_ID: &str = "5B812C9D57731E27A2DA8B1830195F88EF32A3B6";

    #[test]
    fn decode_known_classic_address() {
        let id = decode_classic_address(ALICE).unwrap();
        assert_eq!(hex::encode_upper(id), ALICE_ID);
    }

    #[test]
    fn classic_address_roundtrip() {
        let id = decode_classic_address(ALICE).unwrap();
        assert_eq!(encode_classic_address(&id), ALICE);
    }

    #[test]
    fn zero_account_encodes_to_black_hole() {
        assert_eq!(
            encode_classic_address(&[0u8; 20]),
            "rrrrrrrrrrrrrrrrrrrrrhoLvTp"
        );
    }

    #[test]
    fn bitcoin_alphabet_characters_rejected() {
        // '0' is not part of any base58 alphabet.
        let err = decode_classic_address("r9LqNeG6qHxjeUocjvVki2XR35weJ9mZg0").unwrap_err();
        assert!(matches!(err, AddressError::InvalidBase58(_)));
    }

    #[test]
    fn truncated_address_reports_length() {
        let err = decode_classic_address(&ALICE[..20]).unwrap_err();
        assert!(matches!(err, AddressError::InvalidLength { expected: 25, .. }));
    }

    #[test]
    fn corrupted_checksum_rejected() {
        // Swap the last character for a different alphabet character.
        let mut corrupted = ALICE[..ALICE.len() - 1].to_string();
        corrupted.push('R');
        assert!(decode_classic_address(&corrupted).is_err());
    }

    #[test]
    fn wrong_version_byte_rejected() {
        let mut payload = vec![0x23];
        payload.extend_from_slice(&[7u8; 20]);
        let encoded = encode_check(&payload);
        let err = decode_classic_address(&encoded).unwrap_err();
        assert!(matches!(err, AddressError::InvalidVersion(_)));
    }

    #[test]
    fn empty_string_rejected() {
        assert!(decode_classic_address("").is_err());
    }
}
