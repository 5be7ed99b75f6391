//! # Key Management
//!
//! Ed25519 keypairs as the ledger sees them.
//!
//! The ledger accepts two signing algorithms, secp256k1 and Ed25519, and
//! tells them apart by the public key alone: a 33-byte key starting with
//! `0xED` is Ed25519, anything else is a compressed secp256k1 point. This
//! module only deals with Ed25519. Seed and mnemonic derivation is someone
//! else's job; we start from 32 bytes of secret key material.
//!
//! ## Security considerations
//!
//! - Private keys are zeroized on drop (thanks, ed25519-dalek).
//! - Key bytes are never logged. `Debug` prints the public key only.

use ed25519_dalek::{Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

use crate::config::{ED25519_PUBLIC_KEY_PREFIX, SIGNATURE_LENGTH};

/// Errors that can occur during key operations.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid secret key bytes: expected 32 bytes of hex")]
    InvalidSecretKey,

    #[error("invalid public key bytes: not a prefixed Ed25519 point")]
    InvalidPublicKey,
}

/// An Ed25519 keypair.
///
/// `Keypair` does NOT implement `Serialize`. Exporting secret
/// material should be a deliberate act; use [`Keypair::secret_key_bytes`].
///
/// # Examples
///
/// ```
/// use xrpl_protocol::crypto::keys::Keypair;
///
/// let kp = Keypair::generate();
/// let sig = kp.sign(b"payment");
/// assert!(kp.public_key().verify(b"payment", &sig));
/// ```
pub struct Keypair {
    signing_key: SigningKey,
}

/// The public half of a keypair.
///
/// Stored as the raw 32-byte point; the ledger's `0xED` prefix is added on
/// the way out by [`PublicKey::to_ledger_bytes`] and [`PublicKey::to_hex`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    bytes: [u8; 32],
}

impl Keypair {
    /// Generate a fresh keypair using the OS cryptographic RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Constructs a keypair deterministically from a 32-byte seed.
    ///
    /// In Ed25519 the 32-byte secret key *is* the seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Reconstruct a keypair from a hex-encoded 32-byte secret key.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str).map_err(|_| KeyError::InvalidSecretKey)?;
        let seed: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self::from_seed(&seed))
    }

    /// Returns the public key associated with this keypair.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            bytes: self.signing_key.verifying_key().to_bytes(),
        }
    }

    /// Sign a message and return the raw 64-byte signature.
    ///
    /// Ed25519 is deterministic: the same key and message always produce
    /// the same signature.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Exports the raw 32-byte secret key material. Handle with care.
    pub fn secret_key_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

impl Clone for Keypair {
    fn clone(&self) -> Self {
        Self::from_seed(&self.signing_key.to_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair(pub={})", self.public_key().to_hex())
    }
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

impl PublicKey {
    /// Parse a ledger-format public key: `0xED` followed by 32 point bytes.
    ///
    /// Rejects the wrong prefix, the wrong length and bytes that don't
    /// decompress to a curve point.
    pub fn from_ledger_bytes(slice: &[u8]) -> Result<Self, KeyError> {
        let (prefix, rest) = slice.split_first().ok_or(KeyError::InvalidPublicKey)?;
        if *prefix != ED25519_PUBLIC_KEY_PREFIX {
            return Err(KeyError::InvalidPublicKey);
        }
        let bytes: [u8; 32] = rest.try_into().map_err(|_| KeyError::InvalidPublicKey)?;
        VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { bytes })
    }

    /// Parse a hex-encoded ledger-format public key.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|_| KeyError::InvalidPublicKey)?;
        Self::from_ledger_bytes(&bytes)
    }

    /// The 33-byte ledger representation: `0xED || point`.
    pub fn to_ledger_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(33);
        out.push(ED25519_PUBLIC_KEY_PREFIX);
        out.extend_from_slice(&self.bytes);
        out
    }

    /// Uppercase hex of the ledger representation. This is what goes into
    /// the `SigningPubKey` field.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.to_ledger_bytes())
    }

    /// Raw 32-byte point.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Verify a signature against this public key.
    ///
    /// Returns `false` for anything that isn't a valid signature, including
    /// signatures of the wrong length.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.bytes) else {
            return false;
        };
        let Ok(sig_bytes) = <[u8; SIGNATURE_LENGTH]>::try_from(signature) else {
            return false;
        };
        let dalek_sig = DalekSignature::from_bytes(&sig_bytes);
        verifying_key.verify(message, &dalek_sig).is_ok()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..18])
    }
}
