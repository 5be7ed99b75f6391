//! # Wallet Module
//!
//! The signing capability the rest of the crate depends on.
//!
//! The signer never holds key material itself. It asks a [`Wallet`] to sign
//! a hex digest and gets a hex signature back (or nothing, if the wallet
//! declines). That keeps hardware wallets, remote signers and HD-derived
//! keys on the far side of a four-method trait.
//!
//! ```text
//! mod.rs   — the Wallet trait and WalletError
//! local.rs — LocalWallet: an in-memory Ed25519 keypair
//! ```
//!
//! Key-to-address derivation and mnemonic handling live outside this crate.
//! [`LocalWallet`] takes its classic address at construction.

pub mod local;

use thiserror::Error;

use crate::address::AddressError;
use crate::crypto::keys::KeyError;

pub use local::LocalWallet;

/// Errors that can occur while constructing a wallet.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The supplied address is not a valid classic address.
    #[error("invalid wallet address: {0}")]
    InvalidAddress(#[from] AddressError),

    /// The supplied key material is unusable.
    #[error("invalid key material: {0}")]
    InvalidKey(#[from] KeyError),
}

/// A signing and verification capability.
///
/// Implementations must be reentrant: the signer may call them from several
/// threads at once. Nothing here is allowed to panic on bad input.
pub trait Wallet {
    /// Signs the hex-encoded `message` and returns the signature as hex.
    ///
    /// Returns `None` when the message is not valid hex or the wallet refuses
    /// to sign.
    fn sign(&self, message_hex: &str) -> Option<String>;

    /// Checks `signature_hex` over `message_hex` against this wallet's key.
    ///
    /// Any decoding or verification failure yields `false`. This never
    /// errors and never panics.
    fn verify(&self, message_hex: &str, signature_hex: &str) -> bool;

    /// The public key as the ledger expects it in `SigningPubKey`, hex encoded.
    fn public_key(&self) -> String;

    /// The classic address of the account this wallet signs for.
    fn address(&self) -> String;
}

impl<W: Wallet + ?Sized> Wallet for &W {
    fn sign(&self, message_hex: &str) -> Option<String> {
        (**self).sign(message_hex)
    }

    fn verify(&self, message_hex: &str, signature_hex: &str) -> bool {
        (**self).verify(message_hex, signature_hex)
    }

    fn public_key(&self) -> String {
        (**self).public_key()
    }

    fn address(&self) -> String {
        (**self).address()
    }
}
