//! X-addresses: an account ID and an optional destination tag in one string.
//!
//! ```text
//! prefix (2) || account_id (20) || flag (1) || tag (8, LE) || checksum (4)
//!
//! prefix: 0x05 0x44 (mainnet, "X...") | 0x04 0x93 (testnet, "T...")
//! flag:   0 = no tag, 1 = 32-bit tag
//! tag:    low 4 bytes carry the u32, high 4 bytes are reserved and zero
//! ```
//!
//! The flag byte is what keeps "no tag" and "tag 0" apart. Exchanges route
//! deposits by tag, so conflating the two sends money to the wrong customer.

use tracing::trace;

use super::codec::{decode_check, decode_classic_address, encode_check, encode_classic_address};
use super::{AddressError, ClassicAddress};
use crate::config::{
    network_name, x_address_prefix, ACCOUNT_ID_LENGTH, CHECKSUM_LENGTH, X_ADDRESS_DECODED_LENGTH,
    X_ADDRESS_FLAG_NO_TAG, X_ADDRESS_FLAG_TAG, X_ADDRESS_PREFIX_MAIN, X_ADDRESS_PREFIX_TEST,
    X_ADDRESS_TAG_FIELD_LENGTH,
};

/// Encodes a classic address and optional tag as an X-address.
///
/// Fails with an [`AddressError`] if `classic_address` is not a valid
/// classic address.
///
/// # Example
///
/// ```
/// use xrpl_protocol::address::{decode_x_address, encode_x_address};
///
/// let x = encode_x_address("rGWrZyQqhTp9Xu7G5Pkayo7bXjH4k4QYpf", Some(12345), false).unwrap();
/// assert_eq!(x, "XVLhHMPHU98es4dbozjVtdWzVrDjtVFpRb8iCFUkMtRyVii");
///
/// let decoded = decode_x_address(&x).unwrap();
/// assert_eq!(decoded.tag, Some(12345));
/// ```
pub fn encode_x_address(
    classic_address: &str,
    tag: Option<u32>,
    is_test: bool,
) -> Result<String, AddressError> {
    let account_id = decode_classic_address(classic_address)?;

    let mut payload = Vec::with_capacity(X_ADDRESS_DECODED_LENGTH - CHECKSUM_LENGTH);
    payload.extend_from_slice(&x_address_prefix(is_test));
    payload.extend_from_slice(&account_id);
    match tag {
        Some(tag) => {
            payload.push(X_ADDRESS_FLAG_TAG);
            payload.extend_from_slice(&u64::from(tag).to_le_bytes());
        }
        None => {
            payload.push(X_ADDRESS_FLAG_NO_TAG);
            payload.extend_from_slice(&[0u8; X_ADDRESS_TAG_FIELD_LENGTH]);
        }
    }

    Ok(encode_check(&payload))
}

/// Decodes an X-address into its classic address, tag and network.
///
/// Rejects bad base58, a checksum mismatch, the wrong length, an unknown
/// network prefix, a flag byte outside `{0, 1}`, a non-zero tag field
/// alongside flag 0, and any bits set in the reserved upper half of the tag.
pub fn decode_x_address(x_address: &str) -> Result<ClassicAddress, AddressError> {
    let payload = decode_check(x_address, X_ADDRESS_DECODED_LENGTH)?;

    let (prefix, rest) = payload.split_at(2);
    let is_test = if prefix == X_ADDRESS_PREFIX_MAIN {
        false
    } else if prefix == X_ADDRESS_PREFIX_TEST {
        true
    } else {
        return Err(AddressError::InvalidVersion(prefix.to_vec()));
    };

    let (account_bytes, rest) = rest.split_at(ACCOUNT_ID_LENGTH);
    let (flag, tag_field) = rest.split_at(1);

    let mut tag_bytes = [0u8; X_ADDRESS_TAG_FIELD_LENGTH];
    tag_bytes.copy_from_slice(tag_field);
    let raw_tag = u64::from_le_bytes(tag_bytes);

    let tag = match flag[0] {
        X_ADDRESS_FLAG_NO_TAG if raw_tag == 0 => None,
        X_ADDRESS_FLAG_NO_TAG => return Err(AddressError::UnsupportedTag),
        X_ADDRESS_FLAG_TAG => {
            Some(u32::try_from(raw_tag).map_err(|_| AddressError::UnsupportedTag)?)
        }
        other => return Err(AddressError::InvalidTagFlag(other)),
    };

    let mut account_id = [0u8; ACCOUNT_ID_LENGTH];
    account_id.copy_from_slice(account_bytes);

    trace!(
        network = network_name(is_test),
        has_tag = tag.is_some(),
        "decoded x-address"
    );

    Ok(ClassicAddress {
        address: encode_classic_address(&account_id),
        tag,
        is_test,
    })
}
