//! Transaction construction via the builder pattern.
//!
//! The [`TransactionBuilder`] takes the payload up front (it decides the
//! transaction type) and the common fields fluently, then hands back a
//! plain [`Transaction`]. It does not validate and it does not sign;
//! validation belongs to [`super::canonical`] and signing to
//! [`super::signing`]. That separation keeps construction testable without
//! key material or address fixtures.

use super::types::{CurrencyAmount, Memo, Payment, Transaction, TransactionData};

/// Fluent builder for [`Transaction`] instances.
///
/// # Usage
///
/// ```
/// use xrpl_protocol::transaction::{CurrencyAmount, TransactionBuilder};
///
/// let tx = TransactionBuilder::payment("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh", CurrencyAmount::Drops(1_000))
///     .account("r9LqNeG6qHxjeUocjvVki2XR35weJ9mZgQ")
///     .fee(10)
///     .sequence(1)
///     .build();
///
/// assert_eq!(tx.transaction_type(), Some("Payment"));
/// ```
///
/// Defaults: `sequence` 0, empty signing key, no fee, no memos, and every
/// optional common field unset.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    /// Creates a new builder for the given payload.
    pub fn new(data: TransactionData) -> Self {
        Self {
            tx: Transaction {
                data: Some(data),
                ..Transaction::default()
            },
        }
    }

    /// Shorthand for a plain payment to `destination`.
    pub fn payment(destination: &str, amount: CurrencyAmount) -> Self {
        Self::new(TransactionData::Payment(Payment {
            destination: Some(destination.to_string()),
            amount: Some(amount),
            ..Payment::default()
        }))
    }

    /// Sets the sending account (classic or untagged X-address).
    pub fn account(mut self, address: &str) -> Self {
        self.tx.account = Some(address.to_string());
        self
    }

    /// Sets the fee in drops.
    pub fn fee(mut self, drops: u64) -> Self {
        self.tx.fee = Some(drops);
        self
    }

    /// Sets the account sequence number.
    pub fn sequence(mut self, sequence: u32) -> Self {
        self.tx.sequence = sequence;
        self
    }

    /// Sets the raw public key bytes the transaction will be signed with.
    pub fn signing_public_key(mut self, public_key: Vec<u8>) -> Self {
        self.tx.signing_public_key = public_key;
        self
    }

    /// Sets the last ledger index in which the transaction may be included.
    pub fn last_ledger_sequence(mut self, ledger_index: u32) -> Self {
        self.tx.last_ledger_sequence = Some(ledger_index);
        self
    }

    /// Sets the transaction flags.
    pub fn flags(mut self, flags: u32) -> Self {
        self.tx.flags = Some(flags);
        self
    }

    /// Sets the source tag.
    pub fn source_tag(mut self, tag: u32) -> Self {
        self.tx.source_tag = Some(tag);
        self
    }

    /// Appends a memo.
    pub fn memo(mut self, memo: Memo) -> Self {
        self.tx.memos.push(memo);
        self
    }

    /// Consumes the builder and produces the [`Transaction`].
    pub fn build(self) -> Transaction {
        self.tx
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::types::OfferCancel;

    #[test]
    fn builder_sets_all_fields() {
        let tx = TransactionBuilder::payment("rDest", CurrencyAmount::Drops(5))
            .account("rSource")
            .fee(12)
            .sequence(3)
            .signing_public_key(vec![0xED, 0x01])
            .last_ledger_sequence(100)
            .flags(0x8000_0000)
            .source_tag(9)
            .memo(Memo::text("one"))
            .memo(Memo::text("two"))
            .build();

        assert_eq!(tx.account.as_deref(), Some("rSource"));
        assert_eq!(tx.fee, Some(12));
        assert_eq!(tx.sequence, 3);
        assert_eq!(tx.signing_public_key, vec![0xED, 0x01]);
        assert_eq!(tx.last_ledger_sequence, Some(100));
        assert_eq!(tx.flags, Some(0x8000_0000));
        assert_eq!(tx.source_tag, Some(9));
        assert_eq!(tx.memos.len(), 2);
        assert_eq!(tx.transaction_type(), Some("Payment"));
    }

    #[test]
    fn builder_defaults_leave_optionals_unset() {
        let tx = TransactionBuilder::new(TransactionData::OfferCancel(OfferCancel {
            offer_sequence: Some(1),
        }))
        .build();

        assert!(tx.account.is_none());
        assert!(tx.fee.is_none());
        assert_eq!(tx.sequence, 0);
        assert!(tx.signing_public_key.is_empty());
        assert!(tx.last_ledger_sequence.is_none());
        assert!(tx.flags.is_none());
        assert!(tx.memos.is_empty());
    }

    #[test]
    fn payment_shorthand_fills_destination_and_amount() {
        let tx = TransactionBuilder::payment("rDest", CurrencyAmount::Drops(1_000)).build();
        match tx.data {
            Some(TransactionData::Payment(payment)) => {
                assert_eq!(payment.destination.as_deref(), Some("rDest"));
                assert_eq!(payment.amount, Some(CurrencyAmount::Drops(1_000)));
                assert!(payment.destination_tag.is_none());
            }
            other => panic!("expected a payment, got {:?}", other),
        }
    }
}
