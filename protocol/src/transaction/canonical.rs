//! Canonicalization: structured [`Transaction`] in, signing-ready field map
//! out.
//!
//! The output is the exact JSON object the deterministic binary encoder
//! expects: ledger field names (`Account`, `Fee`, `TransactionType`, ...),
//! classic addresses only, drops as decimal strings, byte fields as
//! uppercase hex. The encoder owns field ordering and type-length-value
//! rules; our job is to hand it conformant input and nothing else.
//!
//! ## Failure policy
//!
//! Two kinds of failure, kept apart:
//!
//! - **Bad data** (missing fee, malformed address, tagged sender, ...)
//!   produces `Ok(None)`. The caller handed us something unusable; that's
//!   an expected condition, and the reason is logged at `debug`.
//! - **No payload** produces `Err(CanonicalError::UnsupportedTransactionType)`.
//!   Every [`TransactionData`] variant is handled, so the only way to get
//!   here is a transaction constructed without a payload, which is a bug in
//!   the caller rather than bad input. This check runs first, before any
//!   field is looked at.
//!
//! ## Field presence
//!
//! A field is emitted only if its source was set. The exceptions are
//! `Sequence` and `SigningPubKey`, which are always present (`0` and `""`
//! when left at their defaults). Explicit zeros in `Option` fields are
//! emitted; `TransferRate: 0` and "no TransferRate" mean different things.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use super::types::{
    AccountDelete, AccountSet, CheckCancel, CheckCash, CheckCashValue, CheckCreate,
    CurrencyAmount, DepositPreauth, EscrowCancel, EscrowCreate, EscrowFinish,
    IssuedCurrencyAmount, Memo, OfferCancel, OfferCreate, PathElement, Payment, Preauthorization,
    SetRegularKey, SignerListSet, Transaction, TransactionData, TrustSet,
};
use crate::address::{resolve_account, AddressError};

/// Field name of the transaction signature.
pub const TXN_SIGNATURE_FIELD: &str = "TxnSignature";

/// Field name of the transaction type discriminant.
pub const TRANSACTION_TYPE_FIELD: &str = "TransactionType";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Contract violations detected during canonicalization.
///
/// Data problems never show up here; they produce `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonicalError {
    /// The transaction carries no payload, so it has no transaction type.
    #[error("transaction has no payload; cannot determine its TransactionType")]
    UnsupportedTransactionType,
}

/// Why a transaction was rejected. Internal: callers only see `None`.
#[derive(Debug, Error)]
enum Rejection {
    #[error("required field {0} is missing")]
    Missing(&'static str),

    #[error("field {field} holds an invalid address: {error}")]
    InvalidAddress {
        field: &'static str,
        error: AddressError,
    },

    #[error("field {0} must not carry a tag")]
    UnexpectedTag(&'static str),

    #[error("destination X-address tag {embedded} conflicts with DestinationTag {explicit}")]
    ConflictingDestinationTag { embedded: u32, explicit: u32 },
}

type Step<T> = Result<T, Rejection>;

// ---------------------------------------------------------------------------
// CanonicalTransaction
// ---------------------------------------------------------------------------

/// The canonical, signing-ready form of a transaction.
///
/// A thin wrapper over a JSON object keyed by ledger field names. Keys are
/// kept in a deterministic order, so two canonicalizations of the same
/// transaction are equal and serialize to identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalTransaction(Map<String, Value>);

impl CanonicalTransaction {
    /// Wraps an existing JSON object. Returns `None` for any other JSON value.
    ///
    /// No field validation happens here; this is for callers that already
    /// hold canonical data (for example, decoded from an encoder).
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Looks up a field by its ledger name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns `true` if the field is present.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// The `TransactionType` name, if present.
    pub fn transaction_type(&self) -> Option<&str> {
        self.get(TRANSACTION_TYPE_FIELD).and_then(Value::as_str)
    }

    /// The attached signature, if any.
    pub fn signature(&self) -> Option<&str> {
        self.get(TXN_SIGNATURE_FIELD).and_then(Value::as_str)
    }

    /// Returns a copy with `TxnSignature` set to `signature_hex`, replacing
    /// any previous signature. The original is left untouched.
    pub fn with_signature(&self, signature_hex: &str) -> Self {
        let mut fields = self.0.clone();
        fields.insert(
            TXN_SIGNATURE_FIELD.to_string(),
            Value::String(signature_hex.to_string()),
        );
        Self(fields)
    }

    /// Borrows the underlying field map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Converts into a plain JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Maps a structured transaction to its canonical field data.
///
/// Returns `Ok(None)` when the transaction is missing required data or
/// holds an invalid address, and `Err` when it has no payload at all. When
/// `signature` is given it is attached as `TxnSignature`.
///
/// # Example
///
/// ```
/// use xrpl_protocol::transaction::{to_canonical, CurrencyAmount, TransactionBuilder};
///
/// let tx = TransactionBuilder::payment("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh", CurrencyAmount::Drops(1000))
///     .account("r9LqNeG6qHxjeUocjvVki2XR35weJ9mZgQ")
///     .fee(10)
///     .sequence(1)
///     .build();
///
/// let canonical = to_canonical(&tx, None).unwrap().unwrap();
/// assert_eq!(canonical.get("Amount").unwrap(), "1000");
/// assert_eq!(canonical.transaction_type(), Some("Payment"));
/// ```
pub fn to_canonical(
    tx: &Transaction,
    signature: Option<&str>,
) -> Result<Option<CanonicalTransaction>, CanonicalError> {
    let data = tx
        .data
        .as_ref()
        .ok_or(CanonicalError::UnsupportedTransactionType)?;

    match canonicalize(tx, data, signature) {
        Ok(fields) => Ok(Some(CanonicalTransaction(fields))),
        Err(rejection) => {
            debug!(
                transaction_type = data.transaction_type(),
                reason = %rejection,
                "transaction cannot be canonicalized"
            );
            Ok(None)
        }
    }
}

fn canonicalize(
    tx: &Transaction,
    data: &TransactionData,
    signature: Option<&str>,
) -> Step<Map<String, Value>> {
    let mut fields = Map::new();

    fields.insert("Sequence".into(), tx.sequence.into());
    fields.insert(
        "SigningPubKey".into(),
        hex::encode_upper(&tx.signing_public_key).into(),
    );
    put(&mut fields, "LastLedgerSequence", tx.last_ledger_sequence);
    put(&mut fields, "Flags", tx.flags);
    put(&mut fields, "SourceTag", tx.source_tag);

    let account = tx.account.as_deref().ok_or(Rejection::Missing("Account"))?;
    fields.insert("Account".into(), untagged_account("Account", account)?.into());

    let fee = tx.fee.ok_or(Rejection::Missing("Fee"))?;
    fields.insert("Fee".into(), fee.to_string().into());

    let payload = match data {
        TransactionData::Payment(p) => payment(p)?,
        TransactionData::AccountSet(p) => account_set(p),
        TransactionData::AccountDelete(p) => account_delete(p)?,
        TransactionData::CheckCancel(p) => check_cancel(p)?,
        TransactionData::CheckCash(p) => check_cash(p)?,
        TransactionData::CheckCreate(p) => check_create(p)?,
        TransactionData::DepositPreauth(p) => deposit_preauth(p)?,
        TransactionData::EscrowCancel(p) => escrow_cancel(p)?,
        TransactionData::EscrowCreate(p) => escrow_create(p)?,
        TransactionData::EscrowFinish(p) => escrow_finish(p)?,
        TransactionData::OfferCancel(p) => offer_cancel(p)?,
        TransactionData::OfferCreate(p) => offer_create(p)?,
        TransactionData::SetRegularKey(p) => set_regular_key(p)?,
        TransactionData::SignerListSet(p) => signer_list_set(p)?,
        TransactionData::TrustSet(p) => trust_set(p)?,
    };
    fields.insert(
        TRANSACTION_TYPE_FIELD.into(),
        data.transaction_type().into(),
    );
    fields.extend(payload);

    if let Some(signature) = signature {
        fields.insert(TXN_SIGNATURE_FIELD.into(), signature.into());
    }

    if !tx.memos.is_empty() {
        fields.insert(
            "Memos".into(),
            Value::Array(tx.memos.iter().map(memo).collect()),
        );
    }

    Ok(fields)
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// Inserts `value` under `key` only if it is set.
fn put<V: Into<Value>>(fields: &mut Map<String, Value>, key: &str, value: Option<V>) {
    if let Some(value) = value {
        fields.insert(key.to_string(), value.into());
    }
}

fn put_hex(fields: &mut Map<String, Value>, key: &str, bytes: Option<&Vec<u8>>) {
    put(fields, key, bytes.map(hex::encode_upper));
}

fn required<'a, T>(value: &'a Option<T>, field: &'static str) -> Step<&'a T> {
    value.as_ref().ok_or(Rejection::Missing(field))
}

/// Resolves an address that must not carry a tag, returning the classic form.
fn untagged_account(field: &'static str, address: &str) -> Step<String> {
    let resolved =
        resolve_account(address).map_err(|error| Rejection::InvalidAddress { field, error })?;
    if resolved.tag.is_some() {
        return Err(Rejection::UnexpectedTag(field));
    }
    Ok(resolved.address)
}

/// Resolves a destination and inserts `Destination` and, if any,
/// `DestinationTag`. A tag embedded in an X-address is used when present;
/// it must agree with an explicitly set tag.
fn put_destination(
    fields: &mut Map<String, Value>,
    address: &str,
    explicit_tag: Option<u32>,
) -> Step<()> {
    let resolved = resolve_account(address).map_err(|error| Rejection::InvalidAddress {
        field: "Destination",
        error,
    })?;

    let tag = match (resolved.tag, explicit_tag) {
        (Some(embedded), Some(explicit)) if embedded != explicit => {
            return Err(Rejection::ConflictingDestinationTag { embedded, explicit })
        }
        (Some(embedded), _) => Some(embedded),
        (None, explicit) => explicit,
    };

    fields.insert("Destination".into(), resolved.address.into());
    put(fields, "DestinationTag", tag);
    Ok(())
}

fn issued_amount(field: &'static str, amount: &IssuedCurrencyAmount) -> Step<Value> {
    let mut object = Map::new();
    object.insert("currency".into(), amount.currency.clone().into());
    object.insert(
        "issuer".into(),
        untagged_account(field, &amount.issuer)?.into(),
    );
    object.insert("value".into(), amount.value.clone().into());
    Ok(Value::Object(object))
}

fn currency_amount(field: &'static str, amount: &CurrencyAmount) -> Step<Value> {
    match amount {
        CurrencyAmount::Drops(drops) => Ok(drops.to_string().into()),
        CurrencyAmount::Issued(issued) => issued_amount(field, issued),
    }
}

fn put_amount(
    fields: &mut Map<String, Value>,
    field: &'static str,
    amount: Option<&CurrencyAmount>,
) -> Step<()> {
    if let Some(amount) = amount {
        fields.insert(field.into(), currency_amount(field, amount)?);
    }
    Ok(())
}

fn path_element(step: &PathElement) -> Step<Value> {
    let mut object = Map::new();
    if let Some(account) = &step.account {
        object.insert("account".into(), untagged_account("Paths", account)?.into());
    }
    put(&mut object, "currency", step.currency.clone());
    if let Some(issuer) = &step.issuer {
        object.insert("issuer".into(), untagged_account("Paths", issuer)?.into());
    }
    Ok(Value::Object(object))
}

fn memo(memo: &Memo) -> Value {
    let mut inner = Map::new();
    put_hex(&mut inner, "MemoData", memo.data.as_ref());
    put_hex(&mut inner, "MemoFormat", memo.format.as_ref());
    put_hex(&mut inner, "MemoType", memo.memo_type.as_ref());

    let mut outer = Map::new();
    outer.insert("Memo".into(), Value::Object(inner));
    Value::Object(outer)
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

fn payment(p: &Payment) -> Step<Map<String, Value>> {
    let destination = required(&p.destination, "Destination")?;
    let amount = required(&p.amount, "Amount")?;

    let mut fields = Map::new();
    put_destination(&mut fields, destination, p.destination_tag)?;
    fields.insert("Amount".into(), currency_amount("Amount", amount)?);
    put_amount(&mut fields, "SendMax", p.send_max.as_ref())?;
    put_amount(&mut fields, "DeliverMin", p.deliver_min.as_ref())?;
    put_hex(&mut fields, "InvoiceID", p.invoice_id.as_ref());

    if !p.paths.is_empty() {
        let paths = p
            .paths
            .iter()
            .map(|path| path.iter().map(path_element).collect::<Step<Vec<_>>>())
            .collect::<Step<Vec<_>>>()?;
        fields.insert(
            "Paths".into(),
            Value::Array(paths.into_iter().map(Value::Array).collect()),
        );
    }

    Ok(fields)
}

fn account_set(p: &AccountSet) -> Map<String, Value> {
    let mut fields = Map::new();
    put(&mut fields, "ClearFlag", p.clear_flag);
    put(
        &mut fields,
        "Domain",
        p.domain.as_ref().map(|domain| hex::encode_upper(domain.as_bytes())),
    );
    put_hex(&mut fields, "EmailHash", p.email_hash.as_ref());
    put_hex(&mut fields, "MessageKey", p.message_key.as_ref());
    put(&mut fields, "SetFlag", p.set_flag);
    put(&mut fields, "TransferRate", p.transfer_rate);
    put(&mut fields, "TickSize", p.tick_size);
    fields
}

fn account_delete(p: &AccountDelete) -> Step<Map<String, Value>> {
    let destination = required(&p.destination, "Destination")?;
    let mut fields = Map::new();
    put_destination(&mut fields, destination, p.destination_tag)?;
    Ok(fields)
}

fn check_cancel(p: &CheckCancel) -> Step<Map<String, Value>> {
    let mut fields = Map::new();
    put_hex(
        &mut fields,
        "CheckID",
        Some(required(&p.check_id, "CheckID")?),
    );
    Ok(fields)
}

fn check_cash(p: &CheckCash) -> Step<Map<String, Value>> {
    let check_id = required(&p.check_id, "CheckID")?;
    let value = required(&p.value, "Amount or DeliverMin")?;

    let mut fields = Map::new();
    put_hex(&mut fields, "CheckID", Some(check_id));
    match value {
        CheckCashValue::Amount(amount) => {
            fields.insert("Amount".into(), currency_amount("Amount", amount)?);
        }
        CheckCashValue::DeliverMin(amount) => {
            fields.insert("DeliverMin".into(), currency_amount("DeliverMin", amount)?);
        }
    }
    Ok(fields)
}

fn check_create(p: &CheckCreate) -> Step<Map<String, Value>> {
    let destination = required(&p.destination, "Destination")?;
    let send_max = required(&p.send_max, "SendMax")?;

    let mut fields = Map::new();
    put_destination(&mut fields, destination, p.destination_tag)?;
    fields.insert("SendMax".into(), currency_amount("SendMax", send_max)?);
    put(&mut fields, "Expiration", p.expiration);
    put_hex(&mut fields, "InvoiceID", p.invoice_id.as_ref());
    Ok(fields)
}

fn deposit_preauth(p: &DepositPreauth) -> Step<Map<String, Value>> {
    let mut fields = Map::new();
    match required(&p.authorization, "Authorize or Unauthorize")? {
        Preauthorization::Authorize(address) => {
            fields.insert(
                "Authorize".into(),
                untagged_account("Authorize", address)?.into(),
            );
        }
        Preauthorization::Unauthorize(address) => {
            fields.insert(
                "Unauthorize".into(),
                untagged_account("Unauthorize", address)?.into(),
            );
        }
    }
    Ok(fields)
}

fn escrow_cancel(p: &EscrowCancel) -> Step<Map<String, Value>> {
    let owner = required(&p.owner, "Owner")?;
    let offer_sequence = *required(&p.offer_sequence, "OfferSequence")?;

    let mut fields = Map::new();
    fields.insert("Owner".into(), untagged_account("Owner", owner)?.into());
    fields.insert("OfferSequence".into(), offer_sequence.into());
    Ok(fields)
}

fn escrow_create(p: &EscrowCreate) -> Step<Map<String, Value>> {
    let amount = required(&p.amount, "Amount")?;
    let destination = required(&p.destination, "Destination")?;

    let mut fields = Map::new();
    fields.insert("Amount".into(), currency_amount("Amount", amount)?);
    put_destination(&mut fields, destination, p.destination_tag)?;
    put(&mut fields, "CancelAfter", p.cancel_after);
    put(&mut fields, "FinishAfter", p.finish_after);
    put_hex(&mut fields, "Condition", p.condition.as_ref());
    Ok(fields)
}

fn escrow_finish(p: &EscrowFinish) -> Step<Map<String, Value>> {
    let owner = required(&p.owner, "Owner")?;
    let offer_sequence = *required(&p.offer_sequence, "OfferSequence")?;

    let mut fields = Map::new();
    fields.insert("Owner".into(), untagged_account("Owner", owner)?.into());
    fields.insert("OfferSequence".into(), offer_sequence.into());
    put_hex(&mut fields, "Condition", p.condition.as_ref());
    put_hex(&mut fields, "Fulfillment", p.fulfillment.as_ref());
    Ok(fields)
}

fn offer_cancel(p: &OfferCancel) -> Step<Map<String, Value>> {
    let offer_sequence = *required(&p.offer_sequence, "OfferSequence")?;
    let mut fields = Map::new();
    fields.insert("OfferSequence".into(), offer_sequence.into());
    Ok(fields)
}

fn offer_create(p: &OfferCreate) -> Step<Map<String, Value>> {
    let taker_gets = required(&p.taker_gets, "TakerGets")?;
    let taker_pays = required(&p.taker_pays, "TakerPays")?;

    let mut fields = Map::new();
    fields.insert("TakerGets".into(), currency_amount("TakerGets", taker_gets)?);
    fields.insert("TakerPays".into(), currency_amount("TakerPays", taker_pays)?);
    put(&mut fields, "Expiration", p.expiration);
    put(&mut fields, "OfferSequence", p.offer_sequence);
    Ok(fields)
}

fn set_regular_key(p: &SetRegularKey) -> Step<Map<String, Value>> {
    let mut fields = Map::new();
    if let Some(regular_key) = &p.regular_key {
        fields.insert(
            "RegularKey".into(),
            untagged_account("RegularKey", regular_key)?.into(),
        );
    }
    Ok(fields)
}

fn signer_list_set(p: &SignerListSet) -> Step<Map<String, Value>> {
    let quorum = *required(&p.signer_quorum, "SignerQuorum")?;

    let mut fields = Map::new();
    fields.insert("SignerQuorum".into(), quorum.into());

    if !p.signer_entries.is_empty() {
        let entries = p
            .signer_entries
            .iter()
            .map(|entry| {
                let mut inner = Map::new();
                inner.insert(
                    "Account".into(),
                    untagged_account("SignerEntries", &entry.account)?.into(),
                );
                inner.insert("SignerWeight".into(), entry.signer_weight.into());
                let mut outer = Map::new();
                outer.insert("SignerEntry".into(), Value::Object(inner));
                Ok(Value::Object(outer))
            })
            .collect::<Step<Vec<_>>>()?;
        fields.insert("SignerEntries".into(), Value::Array(entries));
    }

    Ok(fields)
}

fn trust_set(p: &TrustSet) -> Step<Map<String, Value>> {
    let limit = required(&p.limit_amount, "LimitAmount")?;

    let mut fields = Map::new();
    fields.insert("LimitAmount".into(), issued_amount("LimitAmount", limit)?);
    put(&mut fields, "QualityIn", p.quality_in);
    put(&mut fields, "QualityOut", p.quality_out);
    Ok(fields)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
