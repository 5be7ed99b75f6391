//! # Transaction Module
//!
//! Everything between "I want to pay Bob" and a signed blob with a known
//! transaction ID.
//!
//! ## Architecture
//!
//! ```text
//! types.rs     — Transaction, the per-type payloads, amounts, memos
//! builder.rs   — Fluent TransactionBuilder for unsigned transactions
//! canonical.rs — Structured transaction -> canonical ledger field map
//! signing.rs   — Signer: digest, wallet signature, reassembly
//! hash.rs      — Transaction ID of a signed blob
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build** — Use [`TransactionBuilder`] to assemble the fields.
//! 2. **Canonicalize** — [`to_canonical`] validates and normalizes addresses
//!    and produces the encoder's input.
//! 3. **Sign** — [`Signer::sign_transaction`] runs the digest through a
//!    [`crate::wallet::Wallet`] and returns the signed bytes.
//! 4. **Identify** — [`transaction_blob_to_hash`] gives the ID under which
//!    the ledger will know the transaction.
//!
//! ## Design Decisions
//!
//! - The binary codec is not ours. [`BinaryEncoder`] is the seam; this
//!   module guarantees conformant input and nothing more.
//! - Amounts in drops are `u64`, issued values are decimal strings. No
//!   floating point anywhere near money.
//! - Incomplete transactions produce `None`. A transaction with no payload
//!   at all produces an error, because that's a bug, not bad data.

pub mod builder;
pub mod canonical;
pub mod hash;
pub mod signing;
pub mod types;

pub use builder::TransactionBuilder;
pub use canonical::{to_canonical, CanonicalError, CanonicalTransaction};
pub use hash::transaction_blob_to_hash;
pub use signing::{BinaryEncoder, EncodeError, SignedTransaction, Signer, SigningError};
pub use types::{
    CurrencyAmount, IssuedCurrencyAmount, Memo, PathElement, SignerEntry, Transaction,
    TransactionData,
};
