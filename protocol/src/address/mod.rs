//! # Address Module
//!
//! Checksum-validated conversion between the two address forms the ledger
//! understands:
//!
//! 1. **Classic address** — `r...`, base58check of a 20-byte account ID with
//!    version byte `0x00`. This is what the ledger itself stores and what
//!    every canonical transaction field must contain.
//! 2. **X-address** — `X...` (mainnet) or `T...` (testnet). The same account
//!    ID plus an optional 32-bit tag and a network discriminator, so users
//!    can't forget the destination tag when paying an exchange.
//!
//! ```text
//! codec.rs     — base58check primitives, classic address encode/decode
//! x_address.rs — X-address encode/decode
//! ```
//!
//! All validation is pure and allocation-light. Nothing here touches the
//! network, and nothing here panics on user input.

pub mod codec;
pub mod x_address;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use codec::{decode_classic_address, encode_classic_address};
pub use x_address::{decode_x_address, encode_x_address};

/// A 20-byte account identifier, the payload of every address.
pub type AccountId = [u8; crate::config::ACCOUNT_ID_LENGTH];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while decoding or encoding addresses.
///
/// Every variant is an input problem: the string handed to us is not the
/// address it claims to be.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The string contains characters outside the ripple base58 alphabet.
    #[error("base58 decode error: {0}")]
    InvalidBase58(String),

    /// The trailing four bytes don't match the double-SHA-256 of the payload.
    #[error("checksum mismatch")]
    InvalidChecksum,

    /// The decoded byte string has the wrong length for this address type.
    #[error("invalid decoded length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected decoded length.
        expected: usize,
        /// Actual decoded length.
        got: usize,
    },

    /// The version (or network prefix) bytes are not recognized.
    #[error("unrecognized version bytes: {0:02X?}")]
    InvalidVersion(Vec<u8>),

    /// The X-address tag flag byte is neither 0 nor 1.
    #[error("invalid tag flag byte: {0}")]
    InvalidTagFlag(u8),

    /// The X-address tag field doesn't fit the 32-bit tag model.
    #[error("unsupported tag encoding: tag must be a 32-bit value flagged as present")]
    UnsupportedTag,
}

// ---------------------------------------------------------------------------
// ClassicAddress
// ---------------------------------------------------------------------------

/// A classic address together with the tag and network an X-address carried.
///
/// `tag: None` and `tag: Some(0)` are different things and stay different
/// through every conversion in this module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicAddress {
    /// Classic `r...` address.
    pub address: String,
    /// Destination or source tag, if any.
    pub tag: Option<u32>,
    /// `true` when the originating X-address was a testnet address.
    pub is_test: bool,
}

impl ClassicAddress {
    /// Wraps a classic address after validating it.
    pub fn new(address: &str, tag: Option<u32>, is_test: bool) -> Result<Self, AddressError> {
        decode_classic_address(address)?;
        Ok(Self {
            address: address.to_string(),
            tag,
            is_test,
        })
    }

    /// Encodes this address, tag and network as an X-address.
    pub fn to_x_address(&self) -> Result<String, AddressError> {
        encode_x_address(&self.address, self.tag, self.is_test)
    }
}

impl fmt::Display for ClassicAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag {
            Some(tag) => write!(f, "{}:{}", self.address, tag),
            None => write!(f, "{}", self.address),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Returns `true` if `address` is a well-formed classic address.
pub fn is_valid_classic_address(address: &str) -> bool {
    decode_classic_address(address).is_ok()
}

/// Returns `true` if `address` is a well-formed mainnet or testnet X-address.
pub fn is_valid_x_address(address: &str) -> bool {
    decode_x_address(address).is_ok()
}

/// Returns `true` if `address` is valid in either form.
///
/// # Example
///
/// ```
/// use xrpl_protocol::address::is_valid_address;
///
/// assert!(is_valid_address("r9LqNeG6qHxjeUocjvVki2XR35weJ9mZgQ"));
/// assert!(is_valid_address("XVLhHMPHU98es4dbozjVtdWzVrDjtV18pX8yuPT7y4xaEHi"));
/// assert!(!is_valid_address("r9LqNeG6qHxjeUocjvVki2XR35weJ9mZgq"));
/// ```
pub fn is_valid_address(address: &str) -> bool {
    is_valid_classic_address(address) || is_valid_x_address(address)
}

/// Normalizes an address in either form to its classic form.
///
/// Classic input comes back with `tag: None` and `is_test: false`; the
/// classic format carries neither, so that is all we can say about it.
/// X-address input comes back with whatever it embedded.
pub fn resolve_account(address: &str) -> Result<ClassicAddress, AddressError> {
    match decode_classic_address(address) {
        Ok(_) => Ok(ClassicAddress {
            address: address.to_string(),
            tag: None,
            is_test: false,
        }),
        Err(_) => decode_x_address(address),
    }
}
