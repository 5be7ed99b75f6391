//! Walkthrough of the XRPL transaction preparation pipeline.
//!
//! Creates a wallet, converts a human amount, builds a payment to an
//! X-address, canonicalizes it, signs it and computes its transaction ID.
//! The binary codec is not part of this crate, so the demo uses a
//! stand-in that hex-encodes canonical JSON.
//!
//! Run with:
//!   cargo run --example demo
//!
//! Set `RUST_LOG=debug` to see the library's own log output.

use xrpl_protocol::address::{encode_x_address, resolve_account};
use xrpl_protocol::amount::{drops_to_xrp, xrp_to_drops};
use xrpl_protocol::crypto::keys::Keypair;
use xrpl_protocol::transaction::{
    to_canonical, transaction_blob_to_hash, BinaryEncoder, CanonicalTransaction, CurrencyAmount,
    EncodeError, Memo, Signer, TransactionBuilder,
};
use xrpl_protocol::wallet::{LocalWallet, Wallet};

// ---------------------------------------------------------------------------
// ANSI color constants
// ---------------------------------------------------------------------------

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const WHITE: &str = "\x1b[37m";

const BG_BLUE: &str = "\x1b[44m";

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

fn banner() {
    println!();
    println!("{BG_BLUE}{BOLD}{WHITE}                                                          {RESET}");
    println!("{BG_BLUE}{BOLD}{WHITE}    XRPL PROTOCOL  --  Transaction Preparation Demo       {RESET}");
    println!("{BG_BLUE}{BOLD}{WHITE}                                                          {RESET}");
    println!();
}

fn section(num: u32, title: &str) {
    println!();
    println!("{BOLD}{CYAN}===[{YELLOW} Step {num} {CYAN}]================================================{RESET}");
    println!("{BOLD}{WHITE}  {title}{RESET}");
}

fn kv(key: &str, value: &str) {
    println!("  {DIM}{key:<18}{RESET} {value}");
}

fn ok(text: &str) {
    println!("  {GREEN}[ok]{RESET} {text}");
}

// ---------------------------------------------------------------------------
// Stand-in encoder
// ---------------------------------------------------------------------------

struct JsonHexEncoder;

impl BinaryEncoder for JsonHexEncoder {
    fn encode_for_signing(&self, tx: &CanonicalTransaction) -> Result<String, EncodeError> {
        let mut unsigned = tx.as_map().clone();
        unsigned.remove("TxnSignature");
        serde_json::to_vec(&unsigned)
            .map(hex::encode_upper)
            .map_err(|e| EncodeError::Failed(e.to_string()))
    }

    fn encode(&self, tx: &CanonicalTransaction) -> Result<String, EncodeError> {
        serde_json::to_vec(tx)
            .map(hex::encode_upper)
            .map_err(|e| EncodeError::Failed(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    banner();

    section(1, "Wallet");
    let wallet = LocalWallet::new(Keypair::generate(), "r9LqNeG6qHxjeUocjvVki2XR35weJ9mZgQ")?;
    kv("address", &wallet.address());
    kv("public key", &wallet.public_key());

    section(2, "Destination");
    let destination = encode_x_address("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh", Some(12345), false)?;
    let resolved = resolve_account(&destination)?;
    kv("x-address", &destination);
    kv("resolves to", &resolved.to_string());

    section(3, "Amount");
    let drops = xrp_to_drops("12.5")?;
    kv("12.5 XRP", &format!("{drops} drops"));
    kv("and back", &format!("{} XRP", drops_to_xrp(&drops)?));

    section(4, "Build & canonicalize");
    let tx = TransactionBuilder::payment(&destination, CurrencyAmount::Drops(drops.parse()?))
        .account(&wallet.address())
        .fee(12)
        .sequence(1)
        .signing_public_key(hex::decode(wallet.public_key())?)
        .memo(Memo::text("coffee"))
        .build();
    let Some(canonical) = to_canonical(&tx, None)? else {
        return Err("transaction is incomplete".into());
    };
    println!("{}", serde_json::to_string_pretty(&canonical)?);

    section(5, "Sign");
    let signer = Signer::new(JsonHexEncoder);
    let blob = signer.sign_canonical(&canonical, &wallet)?;
    kv("blob size", &format!("{} bytes", blob.len()));
    ok("signed through LocalWallet");

    section(6, "Transaction ID");
    let id = transaction_blob_to_hash(&hex::encode(&blob)).ok_or("blob is not hex")?;
    kv("hash", &id);

    println!();
    ok("done");
    Ok(())
}
