//! Core type definitions for ledger transactions.
//!
//! A [`Transaction`] is the structured, pre-canonical form a caller builds:
//! common fields plus exactly one [`TransactionData`] payload. Nothing in
//! here is validated on construction. Validation happens once, in
//! [`super::canonical::to_canonical`], which is also where addresses get
//! normalized.
//!
//! Optional numeric fields are `Option<u32>` throughout, and that is
//! load-bearing: `None` means "leave this field out", `Some(0)` means "send
//! zero". For fields like `TransferRate` and `TickSize`, zero is the value
//! that *disables* the setting, so collapsing the two would make it
//! impossible to turn things off.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// An amount of a non-native currency, identified by code and issuer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssuedCurrencyAmount {
    /// Three-letter ISO-style code (`"USD"`) or 40-character hex code.
    pub currency: String,
    /// Decimal value as a string. Issued currencies have 15 significant
    /// digits of precision, so this is never a float.
    pub value: String,
    /// Issuing account, classic or X-address. An X-address issuer must not
    /// carry a tag.
    pub issuer: String,
}

impl IssuedCurrencyAmount {
    /// Creates a new issued-currency amount.
    pub fn new(
        currency: impl Into<String>,
        value: impl Into<String>,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            currency: currency.into(),
            value: value.into(),
            issuer: issuer.into(),
        }
    }
}

/// Either native drops or an issued-currency amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyAmount {
    /// Native currency in drops.
    Drops(u64),
    /// Issued currency.
    Issued(IssuedCurrencyAmount),
}

impl From<IssuedCurrencyAmount> for CurrencyAmount {
    fn from(amount: IssuedCurrencyAmount) -> Self {
        Self::Issued(amount)
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drops(drops) => write!(f, "{} drops", drops),
            Self::Issued(amount) => {
                write!(f, "{} {}/{}", amount.value, amount.currency, amount.issuer)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Memos, paths, signer entries
// ---------------------------------------------------------------------------

/// An arbitrary memo attached to a transaction. All sub-fields are raw bytes
/// and are hex-encoded during canonicalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    pub data: Option<Vec<u8>>,
    pub memo_type: Option<Vec<u8>>,
    pub format: Option<Vec<u8>>,
}

impl Memo {
    /// A memo carrying only UTF-8 text data.
    pub fn text(data: &str) -> Self {
        Self {
            data: Some(data.as_bytes().to_vec()),
            ..Self::default()
        }
    }
}

/// One step of a payment path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathElement {
    pub account: Option<String>,
    pub currency: Option<String>,
    pub issuer: Option<String>,
}

/// A member of a multi-signing signer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerEntry {
    pub account: String,
    pub signer_weight: u32,
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Send value from one account to another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Recipient, classic or X-address. An X-address tag becomes the
    /// `DestinationTag`.
    pub destination: Option<String>,
    pub amount: Option<CurrencyAmount>,
    pub destination_tag: Option<u32>,
    pub send_max: Option<CurrencyAmount>,
    pub deliver_min: Option<CurrencyAmount>,
    pub invoice_id: Option<Vec<u8>>,
    pub paths: Vec<Vec<PathElement>>,
}

/// Modify account settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSet {
    pub clear_flag: Option<u32>,
    /// Domain name; hex-encoded on the wire.
    pub domain: Option<String>,
    pub email_hash: Option<Vec<u8>>,
    pub message_key: Option<Vec<u8>>,
    pub set_flag: Option<u32>,
    /// `Some(0)` removes the transfer fee.
    pub transfer_rate: Option<u32>,
    /// `Some(0)` disables the tick size.
    pub tick_size: Option<u32>,
}

/// Delete the sending account, sending remaining XRP to `destination`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDelete {
    pub destination: Option<String>,
    pub destination_tag: Option<u32>,
}

/// Cancel an unredeemed check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckCancel {
    pub check_id: Option<Vec<u8>>,
}

/// How much a [`CheckCash`] redeems: an exact amount, or a flexible minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckCashValue {
    Amount(CurrencyAmount),
    DeliverMin(CurrencyAmount),
}

/// Redeem a check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckCash {
    pub check_id: Option<Vec<u8>>,
    pub value: Option<CheckCashValue>,
}

/// Create a deferred payment that the destination can cash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckCreate {
    pub destination: Option<String>,
    pub send_max: Option<CurrencyAmount>,
    pub destination_tag: Option<u32>,
    pub expiration: Option<u32>,
    pub invoice_id: Option<Vec<u8>>,
}

/// Grant or revoke deposit preauthorization. Exactly one direction per
/// transaction, hence the enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preauthorization {
    Authorize(String),
    Unauthorize(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositPreauth {
    pub authorization: Option<Preauthorization>,
}

/// Return escrowed XRP to the sender after expiry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowCancel {
    pub owner: Option<String>,
    pub offer_sequence: Option<u32>,
}

/// Sequester XRP until a time or crypto-condition releases it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowCreate {
    pub amount: Option<CurrencyAmount>,
    pub destination: Option<String>,
    pub destination_tag: Option<u32>,
    pub cancel_after: Option<u32>,
    pub finish_after: Option<u32>,
    pub condition: Option<Vec<u8>>,
}

/// Deliver escrowed XRP to its destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowFinish {
    pub owner: Option<String>,
    pub offer_sequence: Option<u32>,
    pub condition: Option<Vec<u8>>,
    pub fulfillment: Option<Vec<u8>>,
}

/// Remove an offer from the order book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferCancel {
    pub offer_sequence: Option<u32>,
}

/// Place an offer in the order book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferCreate {
    pub expiration: Option<u32>,
    pub offer_sequence: Option<u32>,
    pub taker_gets: Option<CurrencyAmount>,
    pub taker_pays: Option<CurrencyAmount>,
}

/// Assign or remove the account's regular key. `None` removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRegularKey {
    pub regular_key: Option<String>,
}

/// Create, replace or remove the account's multi-signing list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerListSet {
    pub signer_quorum: Option<u32>,
    pub signer_entries: Vec<SignerEntry>,
}

/// Create or modify a trust line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustSet {
    pub limit_amount: Option<IssuedCurrencyAmount>,
    pub quality_in: Option<u32>,
    pub quality_out: Option<u32>,
}

// ---------------------------------------------------------------------------
// TransactionData
// ---------------------------------------------------------------------------

/// The type-specific payload of a transaction.
///
/// Exactly one variant per transaction. The variant *is* the transaction
/// type; there is no separate discriminant to keep in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionData {
    Payment(Payment),
    AccountSet(AccountSet),
    AccountDelete(AccountDelete),
    CheckCancel(CheckCancel),
    CheckCash(CheckCash),
    CheckCreate(CheckCreate),
    DepositPreauth(DepositPreauth),
    EscrowCancel(EscrowCancel),
    EscrowCreate(EscrowCreate),
    EscrowFinish(EscrowFinish),
    OfferCancel(OfferCancel),
    OfferCreate(OfferCreate),
    SetRegularKey(SetRegularKey),
    SignerListSet(SignerListSet),
    TrustSet(TrustSet),
}

impl TransactionData {
    /// The canonical `TransactionType` name for this payload.
    pub fn transaction_type(&self) -> &'static str {
        match self {
            Self::Payment(_) => "Payment",
            Self::AccountSet(_) => "AccountSet",
            Self::AccountDelete(_) => "AccountDelete",
            Self::CheckCancel(_) => "CheckCancel",
            Self::CheckCash(_) => "CheckCash",
            Self::CheckCreate(_) => "CheckCreate",
            Self::DepositPreauth(_) => "DepositPreauth",
            Self::EscrowCancel(_) => "EscrowCancel",
            Self::EscrowCreate(_) => "EscrowCreate",
            Self::EscrowFinish(_) => "EscrowFinish",
            Self::OfferCancel(_) => "OfferCancel",
            Self::OfferCreate(_) => "OfferCreate",
            Self::SetRegularKey(_) => "SetRegularKey",
            Self::SignerListSet(_) => "SignerListSet",
            Self::TrustSet(_) => "TrustSet",
        }
    }
}

impl fmt::Display for TransactionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.transaction_type())
    }
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A structured, unsigned ledger transaction.
///
/// Build one by hand or with [`super::builder::TransactionBuilder`]. The
/// canonical, signing-ready form comes from
/// [`super::canonical::to_canonical`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sending account, classic or untagged X-address.
    pub account: Option<String>,

    /// Fee in drops. Required.
    pub fee: Option<u64>,

    /// Account sequence number this transaction consumes.
    pub sequence: u32,

    /// Public key the transaction will be signed with, raw bytes.
    pub signing_public_key: Vec<u8>,

    /// Highest ledger index this transaction can appear in.
    pub last_ledger_sequence: Option<u32>,

    /// Transaction-type-specific flag bits.
    pub flags: Option<u32>,

    /// Sender-side routing tag.
    pub source_tag: Option<u32>,

    pub memos: Vec<Memo>,

    /// Type-specific payload. `None` is a programming error and makes
    /// canonicalization fail hard.
    pub data: Option<TransactionData>,
}

impl Transaction {
    /// The `TransactionType` name, if a payload is set.
    pub fn transaction_type(&self) -> Option<&'static str> {
        self.data.as_ref().map(TransactionData::transaction_type)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
