//! End-to-end integration tests for the XRPL protocol core.
//!
//! These tests exercise the full preparation pipeline the way a client
//! would drive it: address handling, transaction construction,
//! canonicalization, signing through a wallet, and transaction ID
//! computation. They prove the components compose correctly through the
//! public API only.
//!
//! The real binary codec lives outside this crate, so the tests plug in a
//! stand-in that hex-encodes canonical JSON. It is deterministic and
//! reversible, which is all the signer needs from it.

use serde_json::{json, Value};

use xrpl_protocol::address::{
    decode_x_address, encode_x_address, is_valid_address, resolve_account,
};
use xrpl_protocol::amount::{drops_to_xrp, xrp_to_drops};
use xrpl_protocol::config::SIGNING_PREFIX;
use xrpl_protocol::crypto::keys::Keypair;
use xrpl_protocol::transaction::types::{AccountSet, Payment};
use xrpl_protocol::transaction::{
    to_canonical, transaction_blob_to_hash, BinaryEncoder, CanonicalTransaction, CurrencyAmount,
    EncodeError, IssuedCurrencyAmount, Memo, Signer, SigningError, Transaction,
    TransactionBuilder, TransactionData,
};
use xrpl_protocol::wallet::{LocalWallet, Wallet};

const ALICE: &str = "r9LqNeG6qHxjeUocjvVki2XR35weJ9mZgQ";
const ALICE_X_TAGGED: &str = "X7vjQVCddnQ7GCESYnYR3EdpzbcoAM6HxaxgM5qV1grUGLF";
const BOB: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
const BOB_X_TAG_12345: &str = "XVPcpSm47b1CZkf5AkKM9a84dQHe3mTAxgxfLw2qYoe7Boa";
const RFC_SECRET: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

/// Installs a tracing subscriber once per test binary. Set `RUST_LOG=debug`
/// to see why a transaction was rejected.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Stand-in binary codec: canonical JSON, hex encoded. The signing form is
/// prefixed with `STX\0` and leaves out `TxnSignature`, like the real one.
struct JsonHexEncoder;

impl BinaryEncoder for JsonHexEncoder {
    fn encode_for_signing(&self, tx: &CanonicalTransaction) -> Result<String, EncodeError> {
        let mut unsigned = tx.as_map().clone();
        unsigned.remove("TxnSignature");
        let json = serde_json::to_vec(&unsigned).map_err(|e| EncodeError::Failed(e.to_string()))?;
        let mut bytes = SIGNING_PREFIX.to_vec();
        bytes.extend_from_slice(&json);
        Ok(hex::encode_upper(bytes))
    }

    fn encode(&self, tx: &CanonicalTransaction) -> Result<String, EncodeError> {
        let json = serde_json::to_vec(tx).map_err(|e| EncodeError::Failed(e.to_string()))?;
        Ok(hex::encode_upper(json))
    }
}

/// A wallet that signs everything with `DEADBEEF`.
struct StubWallet;

impl Wallet for StubWallet {
    fn sign(&self, _message_hex: &str) -> Option<String> {
        Some("DEADBEEF".to_string())
    }
    fn verify(&self, _message_hex: &str, signature_hex: &str) -> bool {
        signature_hex == "DEADBEEF"
    }
    fn public_key(&self) -> String {
        String::new()
    }
    fn address(&self) -> String {
        ALICE.to_string()
    }
}

fn alice_wallet() -> LocalWallet {
    LocalWallet::from_secret_hex(RFC_SECRET, ALICE).expect("valid test wallet")
}

fn decode_blob(blob: &[u8]) -> CanonicalTransaction {
    let value: Value = serde_json::from_slice(blob).expect("stub blobs are JSON");
    CanonicalTransaction::from_value(value).expect("stub blobs are objects")
}

fn simple_payment(wallet: &impl Wallet) -> Transaction {
    TransactionBuilder::payment(BOB, CurrencyAmount::Drops(1000))
        .account(&wallet.address())
        .fee(10)
        .sequence(1)
        .signing_public_key(hex::decode(wallet.public_key()).expect("hex public key"))
        .build()
}

// ---------------------------------------------------------------------------
// 1. Full Payment Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn full_payment_lifecycle() {
    init_tracing();
    let wallet = alice_wallet();
    let tx = simple_payment(&wallet);

    // Canonical form.
    let canonical = to_canonical(&tx, None)
        .expect("payload is set")
        .expect("transaction is complete");
    assert_eq!(
        canonical.clone().into_value(),
        json!({
            "Account": ALICE,
            "Amount": "1000",
            "Destination": BOB,
            "Fee": "10",
            "Sequence": 1,
            "SigningPubKey": wallet.public_key(),
            "TransactionType": "Payment",
        })
    );

    // Sign.
    let signer = Signer::new(JsonHexEncoder);
    let blob = signer
        .sign_transaction(&tx, &wallet)
        .expect("signing succeeds")
        .expect("transaction is complete");

    // The signed blob is the canonical form plus a signature that verifies
    // over the signing digest.
    let signed = decode_blob(&blob);
    let signature = signed.signature().expect("signature attached").to_string();
    assert_eq!(signed.with_signature(&signature), signed);
    assert_eq!(signed.get("Account").unwrap(), ALICE);

    let digest = signer.encoder().encode_for_signing(&canonical).unwrap();
    assert!(wallet.verify(&digest, &signature));
    assert!(!wallet.verify(&digest, &"00".repeat(64)));

    // Transaction ID.
    let id = transaction_blob_to_hash(&hex::encode(&blob)).expect("blob is hex");
    assert_eq!(id.len(), 64);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
}

// ---------------------------------------------------------------------------
// 2. Stub Signing Capability
// ---------------------------------------------------------------------------

#[test]
fn stub_wallet_signature_lands_in_blob() {
    init_tracing();
    let tx = TransactionBuilder::payment(BOB, CurrencyAmount::Drops(1000))
        .account(ALICE)
        .fee(10)
        .sequence(1)
        .build();

    let blob = Signer::new(JsonHexEncoder)
        .sign_transaction(&tx, &StubWallet)
        .unwrap()
        .unwrap();
    assert_eq!(decode_blob(&blob).signature(), Some("DEADBEEF"));
}

// ---------------------------------------------------------------------------
// 3. X-Address Destinations
// ---------------------------------------------------------------------------

#[test]
fn x_address_destination_signs_with_destination_tag() {
    init_tracing();
    let wallet = alice_wallet();
    let tx = TransactionBuilder::payment(BOB_X_TAG_12345, CurrencyAmount::Drops(25))
        .account(ALICE)
        .fee(12)
        .sequence(7)
        .build();

    let blob = Signer::new(JsonHexEncoder)
        .sign_transaction(&tx, &wallet)
        .unwrap()
        .unwrap();
    let signed = decode_blob(&blob);
    assert_eq!(signed.get("Destination").unwrap(), BOB);
    assert_eq!(signed.get("DestinationTag").unwrap(), 12345);
}

#[test]
fn tagged_sender_is_absent_not_an_error() {
    init_tracing();
    let tx = TransactionBuilder::payment(BOB, CurrencyAmount::Drops(1))
        .account(ALICE_X_TAGGED)
        .fee(10)
        .build();

    assert_eq!(to_canonical(&tx, None), Ok(None));
    assert_eq!(
        Signer::new(JsonHexEncoder).sign_transaction(&tx, &alice_wallet()),
        Ok(None)
    );
}

#[test]
fn missing_payload_is_a_hard_error() {
    init_tracing();
    let tx = Transaction {
        account: Some(ALICE.to_string()),
        fee: Some(10),
        ..Transaction::default()
    };
    assert_eq!(
        Signer::new(JsonHexEncoder).sign_transaction(&tx, &StubWallet),
        Err(SigningError::UnsupportedTransactionType)
    );
}

// ---------------------------------------------------------------------------
// 4. Richer Transactions
// ---------------------------------------------------------------------------

#[test]
fn issued_currency_payment_with_memo() {
    init_tracing();
    let tx = TransactionBuilder::new(TransactionData::Payment(Payment {
        destination: Some(BOB.to_string()),
        amount: Some(IssuedCurrencyAmount::new("USD", "42.5", BOB).into()),
        send_max: Some(CurrencyAmount::Drops(50_000_000)),
        ..Payment::default()
    }))
    .account(ALICE)
    .fee(10)
    .sequence(2)
    .last_ledger_sequence(1_000)
    .memo(Memo::text("invoice 17"))
    .build();

    let blob = Signer::new(JsonHexEncoder)
        .sign_transaction(&tx, &StubWallet)
        .unwrap()
        .unwrap();
    let signed = decode_blob(&blob);
    assert_eq!(
        signed.get("Amount").unwrap(),
        &json!({"currency": "USD", "issuer": BOB, "value": "42.5"})
    );
    assert_eq!(signed.get("SendMax").unwrap(), "50000000");
    assert_eq!(signed.get("LastLedgerSequence").unwrap(), 1_000);
    assert_eq!(
        signed.get("Memos").unwrap(),
        &json!([{"Memo": {"MemoData": hex::encode_upper("invoice 17")}}])
    );
}

#[test]
fn account_set_explicit_zero_survives_signing() {
    init_tracing();
    let tx = TransactionBuilder::new(TransactionData::AccountSet(AccountSet {
        transfer_rate: Some(0),
        ..AccountSet::default()
    }))
    .account(ALICE)
    .fee(10)
    .build();

    let blob = Signer::new(JsonHexEncoder)
        .sign_transaction(&tx, &StubWallet)
        .unwrap()
        .unwrap();
    let signed = decode_blob(&blob);
    assert_eq!(signed.get("TransferRate").unwrap(), 0);
    assert!(!signed.contains("TickSize"));
}

// ---------------------------------------------------------------------------
// 5. Amounts and Addresses
// ---------------------------------------------------------------------------

#[test]
fn human_amount_to_payment_and_back() {
    let drops: u64 = xrp_to_drops("2.5").unwrap().parse().unwrap();
    let tx = TransactionBuilder::payment(BOB, CurrencyAmount::Drops(drops))
        .account(ALICE)
        .fee(10)
        .build();
    let canonical = to_canonical(&tx, None).unwrap().unwrap();
    let amount = canonical.get("Amount").unwrap().as_str().unwrap();
    assert_eq!(amount, "2500000");
    assert_eq!(drops_to_xrp(amount).unwrap(), "2.5");
}

#[test]
fn address_round_trips_across_networks() {
    for tag in [None, Some(0), Some(u32::MAX)] {
        for is_test in [false, true] {
            let x = encode_x_address(BOB, tag, is_test).unwrap();
            assert!(is_valid_address(&x));
            let decoded = decode_x_address(&x).unwrap();
            assert_eq!(decoded.address, BOB);
            assert_eq!(decoded.tag, tag);
            assert_eq!(decoded.is_test, is_test);
            assert_eq!(resolve_account(&x).unwrap(), decoded);
        }
    }
}

// ---------------------------------------------------------------------------
// 6. Known Transaction ID
// ---------------------------------------------------------------------------

#[test]
fn known_blob_hash() {
    let blob = "120000240000000561400000000000000168400000000000000C73210261BBB9D242440BA38375DAD79B146E559A9DFB99055F7077DA63AE0D643CA0E174473045022100C8BB1CE19DFB1E57CDD60947C5D7F1ACD10851B0F066C28DBAA3592475BC3808022056EEB85CC8CD41F1F1CF635C244943AD43E3CF0CE1E3B7359354AC8A62CF3F488114F8942487EDB0E4FD86190BF8DCB3AF36F608839D83141D10E382F805CD7033CC4582D2458922F0D0ACA6";
    assert_eq!(
        transaction_blob_to_hash(blob).unwrap(),
        "7B9F6E019C2A79857427B4EF968D77D683AC84F5A880830955D7BDF47F120667"
    );
}

// ---------------------------------------------------------------------------
// 7. Concurrency
// ---------------------------------------------------------------------------

#[test]
fn signer_and_wallet_are_shareable_across_threads() {
    let signer = Signer::new(JsonHexEncoder);
    let wallet = LocalWallet::new(Keypair::generate(), ALICE).unwrap();
    let tx = simple_payment(&wallet);
    let expected = signer.sign_transaction(&tx, &wallet).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| signer.sign_transaction(&tx, &wallet).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
