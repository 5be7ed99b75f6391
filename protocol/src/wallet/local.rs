//! An in-memory Ed25519 wallet.

use std::fmt;

use crate::address::{decode_classic_address, encode_classic_address, AccountId};
use crate::crypto::keys::Keypair;

use super::{Wallet, WalletError};

/// A [`Wallet`] backed by an Ed25519 [`Keypair`] held in process memory.
///
/// # Examples
///
/// ```
/// use xrpl_protocol::crypto::keys::Keypair;
/// use xrpl_protocol::wallet::{LocalWallet, Wallet};
///
/// let wallet = LocalWallet::new(Keypair::generate(), "r9LqNeG6qHxjeUocjvVki2XR35weJ9mZgQ").unwrap();
/// let signature = wallet.sign("DEADBEEF").unwrap();
/// assert!(wallet.verify("DEADBEEF", &signature));
/// assert!(wallet.public_key().starts_with("ED"));
/// ```
#[derive(Clone)]
pub struct LocalWallet {
    keypair: Keypair,
    address: String,
}

impl LocalWallet {
    /// Creates a wallet for `classic_address`, which must be a valid classic
    /// (`r...`) address.
    pub fn new(keypair: Keypair, classic_address: &str) -> Result<Self, WalletError> {
        decode_classic_address(classic_address)?;
        Ok(Self {
            keypair,
            address: classic_address.to_string(),
        })
    }

    /// Creates a wallet for the account with the given 20-byte identifier.
    pub fn from_account_id(keypair: Keypair, account_id: &AccountId) -> Self {
        Self {
            keypair,
            address: encode_classic_address(account_id),
        }
    }

    /// Creates a wallet from a hex-encoded 32-byte secret key.
    pub fn from_secret_hex(secret_hex: &str, classic_address: &str) -> Result<Self, WalletError> {
        Self::new(Keypair::from_hex(secret_hex)?, classic_address)
    }

    /// The underlying keypair.
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}

impl Wallet for LocalWallet {
    fn sign(&self, message_hex: &str) -> Option<String> {
        let message = hex::decode(message_hex).ok()?;
        Some(hex::encode_upper(self.keypair.sign(&message)))
    }

    fn verify(&self, message_hex: &str, signature_hex: &str) -> bool {
        let (Ok(message), Ok(signature)) = (hex::decode(message_hex), hex::decode(signature_hex))
        else {
            return false;
        };
        self.keypair.public_key().verify(&message, &signature)
    }

    fn public_key(&self) -> String {
        self.keypair.public_key().to_hex()
    }

    fn address(&self) -> String {
        self.address.clone()
    }
}

impl fmt::Debug for LocalWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalWallet")
            .field("address", &self.address)
            .field("public_key", &self.keypair.public_key())
            .finish()
    }
}
