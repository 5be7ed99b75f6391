//! Transaction signing through a [`Wallet`] and an external binary encoder.
//!
//! Signing is a separate step from building because the key may not be
//! available at construction time (hardware wallet, remote signer). The
//! signer itself holds neither keys nor state: it canonicalizes, asks the
//! [`BinaryEncoder`] for the signing digest, asks the [`Wallet`] for a
//! signature, attaches it as `TxnSignature` and asks the encoder for the
//! final blob.
//!
//! The binary format (field ordering, type-length-value rules) belongs to
//! the encoder. This module only guarantees that what it hands over is
//! conformant canonical data.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace, warn};

use super::canonical::{to_canonical, CanonicalError, CanonicalTransaction};
use super::types::Transaction;
use crate::wallet::Wallet;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors reported by a [`BinaryEncoder`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A field could not be encoded.
    #[error("cannot encode field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// The encoder produced something that is not hex.
    #[error("encoder output is not valid hex")]
    NonHexOutput,

    /// Any other encoder failure.
    #[error("encoder failure: {0}")]
    Failed(String),
}

/// Errors that can occur while signing.
///
/// Incomplete transactions are not errors: [`Signer::sign_transaction`]
/// returns `Ok(None)` for those.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SigningError {
    /// The transaction has no payload. See [`CanonicalError`].
    #[error("transaction has no payload; cannot determine its TransactionType")]
    UnsupportedTransactionType,

    /// The wallet declined to sign (or could not read the digest).
    #[error("wallet declined to sign the transaction")]
    WalletRejected,

    /// The binary encoder failed.
    #[error("binary encoding failed: {0}")]
    Encoding(#[from] EncodeError),
}

impl From<CanonicalError> for SigningError {
    fn from(error: CanonicalError) -> Self {
        match error {
            CanonicalError::UnsupportedTransactionType => Self::UnsupportedTransactionType,
        }
    }
}

// ---------------------------------------------------------------------------
// Encoder seam
// ---------------------------------------------------------------------------

/// The deterministic binary encoder for canonical transactions.
///
/// Both methods return hex. Implementations must be pure: the same input
/// always produces the same output.
pub trait BinaryEncoder {
    /// Encodes the data a signature covers (signing prefix included,
    /// `TxnSignature` excluded).
    fn encode_for_signing(&self, tx: &CanonicalTransaction) -> Result<String, EncodeError>;

    /// Encodes the complete transaction, signature included.
    fn encode(&self, tx: &CanonicalTransaction) -> Result<String, EncodeError>;
}

impl<E: BinaryEncoder + ?Sized> BinaryEncoder for &E {
    fn encode_for_signing(&self, tx: &CanonicalTransaction) -> Result<String, EncodeError> {
        (**self).encode_for_signing(tx)
    }

    fn encode(&self, tx: &CanonicalTransaction) -> Result<String, EncodeError> {
        (**self).encode(tx)
    }
}

// ---------------------------------------------------------------------------
// Signed output
// ---------------------------------------------------------------------------

/// Canonical transaction data together with a detached signature and the
/// key that made it.
///
/// For callers that assemble the final blob themselves. `transaction` is
/// exactly the data the signature covers, without `TxnSignature`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// The canonical data that was signed.
    pub transaction: CanonicalTransaction,
    /// Signature over the signing digest, hex encoded.
    pub signature_hex: String,
    /// The signer's public key, hex encoded.
    pub public_key_hex: String,
}

impl SignedTransaction {
    /// The canonical data with `TxnSignature` attached, ready for the
    /// encoder.
    pub fn assemble(&self) -> CanonicalTransaction {
        self.transaction.with_signature(&self.signature_hex)
    }
}

// ---------------------------------------------------------------------------
// Signer
// ---------------------------------------------------------------------------

/// Orchestrates canonicalization, digest, signature and reassembly.
///
/// # Example
///
/// ```rust,no_run
/// use xrpl_protocol::crypto::keys::Keypair;
/// use xrpl_protocol::transaction::{
///     BinaryEncoder, CanonicalTransaction, CurrencyAmount, EncodeError, Signer, TransactionBuilder,
/// };
/// use xrpl_protocol::wallet::LocalWallet;
///
/// struct MyEncoder;
/// impl BinaryEncoder for MyEncoder {
///     fn encode_for_signing(&self, _tx: &CanonicalTransaction) -> Result<String, EncodeError> {
///         unimplemented!()
///     }
///     fn encode(&self, _tx: &CanonicalTransaction) -> Result<String, EncodeError> {
///         unimplemented!()
///     }
/// }
///
/// let wallet = LocalWallet::new(Keypair::generate(), "r9LqNeG6qHxjeUocjvVki2XR35weJ9mZgQ").unwrap();
/// let tx = TransactionBuilder::payment("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh", CurrencyAmount::Drops(1_000))
///     .account("r9LqNeG6qHxjeUocjvVki2XR35weJ9mZgQ")
///     .fee(10)
///     .sequence(1)
///     .build();
///
/// let blob = Signer::new(MyEncoder).sign_transaction(&tx, &wallet).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Signer<E> {
    encoder: E,
}

impl<E: BinaryEncoder> Signer<E> {
    /// Creates a signer that uses `encoder` for the binary format.
    pub fn new(encoder: E) -> Self {
        Self { encoder }
    }

    /// The encoder this signer delegates to.
    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Canonicalizes and signs `tx`, returning the signed transaction bytes.
    ///
    /// Returns `Ok(None)` if the transaction is incomplete or holds an
    /// invalid address, and `Err` if it has no payload, the wallet declines
    /// or the encoder fails. `tx` is not modified.
    pub fn sign_transaction<W: Wallet + ?Sized>(
        &self,
        tx: &Transaction,
        wallet: &W,
    ) -> Result<Option<Vec<u8>>, SigningError> {
        let Some(canonical) = to_canonical(tx, None)? else {
            return Ok(None);
        };
        self.sign_canonical(&canonical, wallet).map(Some)
    }

    /// Signs transaction data that is already canonical.
    ///
    /// Any existing `TxnSignature` is replaced.
    pub fn sign_canonical<W: Wallet + ?Sized>(
        &self,
        canonical: &CanonicalTransaction,
        wallet: &W,
    ) -> Result<Vec<u8>, SigningError> {
        let signature = self.request_signature(canonical, wallet)?;
        let signed = canonical.with_signature(&signature);

        let blob_hex = self.encoder.encode(&signed)?;
        let blob = hex::decode(&blob_hex).map_err(|_| EncodeError::NonHexOutput)?;

        debug!(
            transaction_type = signed.transaction_type().unwrap_or("unknown"),
            blob_len = blob.len(),
            "transaction signed"
        );
        Ok(blob)
    }

    /// Signs `tx` but returns the signature and public key alongside the
    /// canonical data instead of an encoded blob.
    pub fn sign_detached<W: Wallet + ?Sized>(
        &self,
        tx: &Transaction,
        wallet: &W,
    ) -> Result<Option<SignedTransaction>, SigningError> {
        let Some(canonical) = to_canonical(tx, None)? else {
            return Ok(None);
        };
        let signature_hex = self.request_signature(&canonical, wallet)?;

        Ok(Some(SignedTransaction {
            transaction: canonical,
            signature_hex,
            public_key_hex: wallet.public_key(),
        }))
    }

    /// Encodes the signing digest and has the wallet sign it.
    fn request_signature<W: Wallet + ?Sized>(
        &self,
        canonical: &CanonicalTransaction,
        wallet: &W,
    ) -> Result<String, SigningError> {
        let digest = self.encoder.encode_for_signing(canonical)?;
        if hex::decode(&digest).is_err() {
            return Err(EncodeError::NonHexOutput.into());
        }
        trace!(digest_len = digest.len() / 2, "signing digest encoded");

        wallet.sign(&digest).ok_or_else(|| {
            warn!(address = %wallet.address(), "wallet declined to sign");
            SigningError::WalletRejected
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
