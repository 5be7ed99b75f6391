//! # Cryptographic Primitives
//!
//! Thin wrappers around audited implementations. Nothing clever happens
//! here, and nothing clever should.
//!
//! - **SHA-256** (double) for base58check address checksums.
//! - **SHA-512Half** for transaction IDs and signing hashes.
//! - **Ed25519** keypairs for the local wallet.

pub mod hash;
pub mod keys;

pub use hash::{double_sha256, prefixed_sha512_half, sha256, sha512, sha512_half};
pub use keys::{KeyError, Keypair, PublicKey};
