// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # XRPL Protocol — Transaction Preparation Core
//!
//! The client-side half of talking to the XRP Ledger: take a transaction a
//! human described, turn it into exactly the field data the ledger's binary
//! codec wants, get it signed, and say what its ID will be. No network, no
//! consensus, no opinions about which node you talk to.
//!
//! ## Architecture
//!
//! - **address** — Classic and X-address codecs. Checksums, tags, networks.
//! - **amount** — Drops and XRP, converted with exact decimal arithmetic.
//! - **transaction** — Build, canonicalize, sign, hash.
//! - **wallet** — The signing capability, plus an in-memory Ed25519 wallet.
//! - **crypto** — SHA-256, SHA-512Half and Ed25519. Don't roll your own.
//! - **config** — Protocol constants. Version bytes, prefixes, lengths.
//!
//! ## Design Philosophy
//!
//! 1. Everything is a pure function over immutable input. Share freely
//!    across threads.
//! 2. Bad input is an ordinary outcome (`None` or a typed error), never a
//!    panic.
//! 3. The binary codec and key derivation are somebody else's problem.
//!    They plug in through `BinaryEncoder` and `Wallet`.
//! 4. If it touches money, it has tests. Plural.

pub mod address;
pub mod amount;
pub mod config;
pub mod crypto;
pub mod transaction;
pub mod wallet;
