// Preparation-pipeline benchmarks for the XRPL protocol core.
//
// Covers the address codecs, canonicalization, the full sign round-trip
// through a local Ed25519 wallet, and transaction ID hashing at various
// blob sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use xrpl_protocol::address::{decode_classic_address, decode_x_address, encode_x_address};
use xrpl_protocol::crypto::keys::Keypair;
use xrpl_protocol::transaction::{
    to_canonical, transaction_blob_to_hash, BinaryEncoder, CanonicalTransaction, CurrencyAmount,
    EncodeError, Signer, Transaction, TransactionBuilder,
};
use xrpl_protocol::wallet::{LocalWallet, Wallet};

const ALICE: &str = "r9LqNeG6qHxjeUocjvVki2XR35weJ9mZgQ";
const BOB_X_TAG_12345: &str = "XVPcpSm47b1CZkf5AkKM9a84dQHe3mTAxgxfLw2qYoe7Boa";

struct JsonHexEncoder;

impl BinaryEncoder for JsonHexEncoder {
    fn encode_for_signing(&self, tx: &CanonicalTransaction) -> Result<String, EncodeError> {
        self.encode(tx)
    }

    fn encode(&self, tx: &CanonicalTransaction) -> Result<String, EncodeError> {
        serde_json::to_vec(tx)
            .map(hex::encode_upper)
            .map_err(|e| EncodeError::Failed(e.to_string()))
    }
}

fn payment(wallet: &LocalWallet) -> Transaction {
    TransactionBuilder::payment(BOB_X_TAG_12345, CurrencyAmount::Drops(1_000_000))
        .account(ALICE)
        .fee(12)
        .sequence(42)
        .last_ledger_sequence(80_000_000)
        .signing_public_key(hex::decode(wallet.public_key()).unwrap())
        .build()
}

fn bench_address_codec(c: &mut Criterion) {
    c.bench_function("address/decode_classic", |b| {
        b.iter(|| decode_classic_address(ALICE).unwrap());
    });
    c.bench_function("address/encode_x", |b| {
        b.iter(|| encode_x_address(ALICE, Some(12345), false).unwrap());
    });
    c.bench_function("address/decode_x", |b| {
        b.iter(|| decode_x_address(BOB_X_TAG_12345).unwrap());
    });
}

fn bench_canonicalize(c: &mut Criterion) {
    let wallet = LocalWallet::new(Keypair::generate(), ALICE).unwrap();
    let tx = payment(&wallet);

    c.bench_function("transaction/to_canonical", |b| {
        b.iter(|| to_canonical(&tx, None).unwrap().unwrap());
    });
}

fn bench_sign_transaction(c: &mut Criterion) {
    let wallet = LocalWallet::new(Keypair::generate(), ALICE).unwrap();
    let tx = payment(&wallet);
    let signer = Signer::new(JsonHexEncoder);

    c.bench_function("transaction/sign_round_trip", |b| {
        b.iter(|| signer.sign_transaction(&tx, &wallet).unwrap().unwrap());
    });
}

fn bench_blob_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("transaction/blob_to_hash");

    for size in [128usize, 512, 2048] {
        let blob = "AB".repeat(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &blob, |b, blob| {
            b.iter(|| transaction_blob_to_hash(blob).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_address_codec,
    bench_canonicalize,
    bench_sign_transaction,
    bench_blob_hash,
);
criterion_main!(benches);
