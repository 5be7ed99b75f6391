//! # Protocol Configuration & Constants
//!
//! Every magic number the ledger cares about lives here. If you're hardcoding
//! a version byte or a hash prefix somewhere else, you're doing it wrong.
//!
//! None of these values are ours to choose. They are fixed by the XRP Ledger
//! wire format, and changing any of them produces addresses and hashes that
//! no other node on the network will recognize.

// ---------------------------------------------------------------------------
// Address Encoding
// ---------------------------------------------------------------------------

/// Version byte prepended to an account ID before base58check encoding.
/// Zero, which is why every classic address starts with `r` (the first
/// character of the ripple alphabet).
pub const CLASSIC_ADDRESS_VERSION: u8 = 0x00;

/// Length of an account ID, the payload of every address. 160 bits.
pub const ACCOUNT_ID_LENGTH: usize = 20;

/// Number of checksum bytes appended by base58check. The checksum is the
/// leading slice of a double SHA-256 over version + payload.
pub const CHECKSUM_LENGTH: usize = 4;

/// Decoded length of a classic address: version + account ID + checksum.
pub const CLASSIC_ADDRESS_DECODED_LENGTH: usize = 1 + ACCOUNT_ID_LENGTH + CHECKSUM_LENGTH;

/// Two-byte network prefix for mainnet X-addresses. Encodes to a leading `X`.
pub const X_ADDRESS_PREFIX_MAIN: [u8; 2] = [0x05, 0x44];

/// Two-byte network prefix for testnet X-addresses. Encodes to a leading `T`.
pub const X_ADDRESS_PREFIX_TEST: [u8; 2] = [0x04, 0x93];

/// Width of the tag field inside an X-address. The format reserves 64 bits,
/// but only the low 32 are in use; the upper half must be zero.
pub const X_ADDRESS_TAG_FIELD_LENGTH: usize = 8;

/// Flag byte value for an X-address that carries no tag.
pub const X_ADDRESS_FLAG_NO_TAG: u8 = 0x00;

/// Flag byte value for an X-address carrying a 32-bit tag.
pub const X_ADDRESS_FLAG_TAG: u8 = 0x01;

/// Decoded length of an X-address: prefix + account ID + flag + tag + checksum.
pub const X_ADDRESS_DECODED_LENGTH: usize =
    2 + ACCOUNT_ID_LENGTH + 1 + X_ADDRESS_TAG_FIELD_LENGTH + CHECKSUM_LENGTH;

// ---------------------------------------------------------------------------
// Native Currency
// ---------------------------------------------------------------------------

/// Drops per XRP. One million, and not a drop more.
pub const DROPS_PER_XRP: u64 = 1_000_000;

/// Maximum number of fractional digits an XRP amount may carry, since a
/// drop is the smallest indivisible unit.
pub const XRP_DECIMAL_PLACES: usize = 6;

// ---------------------------------------------------------------------------
// Hashing & Signing
// ---------------------------------------------------------------------------

/// Hash prefix for transaction IDs: `"TXN\0"`.
pub const TRANSACTION_ID_PREFIX: [u8; 4] = [0x54, 0x58, 0x4E, 0x00];

/// Hash prefix for single-signing data: `"STX\0"`. The external encoder
/// prepends it in `encode_for_signing`; it is listed here for callers and
/// test encoders that need to agree with it.
pub const SIGNING_PREFIX: [u8; 4] = [0x53, 0x54, 0x58, 0x00];

/// Output length of SHA-512Half, the ledger's workhorse digest.
pub const HASH_OUTPUT_LENGTH: usize = 32;

/// Ed25519 public keys are tagged with this leading byte so they can't be
/// confused with 33-byte compressed secp256k1 keys.
pub const ED25519_PUBLIC_KEY_PREFIX: u8 = 0xED;

/// Ed25519 signature length in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

// ---------------------------------------------------------------------------
// Utility
// ---------------------------------------------------------------------------

/// Returns the X-address network prefix for the requested network.
pub const fn x_address_prefix(is_test: bool) -> [u8; 2] {
    if is_test {
        X_ADDRESS_PREFIX_TEST
    } else {
        X_ADDRESS_PREFIX_MAIN
    }
}

/// Returns a friendly network name, mainly for logging.
pub fn network_name(is_test: bool) -> &'static str {
    if is_test {
        "testnet"
    } else {
        "mainnet"
    }
}
