use common::{storage, LedgerError};
use soroban_sdk::{contracttype, symbol_short, Address, Bytes, BytesN, Env, String, Symbol};

// ── Storage key symbols ──────────────────────────────────────────────────────

const RECORD: Symbol = symbol_short!("RECORD");
const SIG: Symbol = symbol_short!("SIG");
const SCORED: Symbol = symbol_short!("SCORED");

// ── Types ────────────────────────────────────────────────────────────────────

/// An attested record, keyed by the content hash of its plaintext payload.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    pub owner: Address,
    /// keccak256 of the metadata supplied at creation.
    pub metadata_hash: BytesN<32>,
    pub attestation_count: u32,
    pub iris_score: u64,
    pub data_uri: String,
    pub created_at: u64,
}

// ── Storage key helpers ──────────────────────────────────────────────────────

fn record_key(data_hash: &BytesN<32>) -> (Symbol, BytesN<32>) {
    (RECORD, data_hash.clone())
}

fn sig_key(data_hash: &BytesN<32>, attester: &Address) -> (Symbol, BytesN<32>, Address) {
    (SIG, data_hash.clone(), attester.clone())
}

fn scored_key(data_hash: &BytesN<32>, provider: &Address) -> (Symbol, BytesN<32>, Address) {
    (SCORED, data_hash.clone(), provider.clone())
}

// ── Records ──────────────────────────────────────────────────────────────────

pub fn get_record(env: &Env, data_hash: &BytesN<32>) -> Option<Record> {
    env.storage().persistent().get(&record_key(data_hash))
}

pub fn load_record(env: &Env, data_hash: &BytesN<32>) -> Result<Record, LedgerError> {
    get_record(env, data_hash).ok_or(LedgerError::RecordNotFound)
}

pub fn has_record(env: &Env, data_hash: &BytesN<32>) -> bool {
    env.storage().persistent().has(&record_key(data_hash))
}

/// Creates a fresh record owned by `owner`.
pub fn create_record(
    env: &Env,
    data_hash: &BytesN<32>,
    owner: &Address,
    metadata: &Bytes,
    data_uri: &String,
) -> Result<Record, LedgerError> {
    if has_record(env, data_hash) {
        return Err(LedgerError::DuplicateRecord);
    }

    let record = Record {
        owner: owner.clone(),
        metadata_hash: env.crypto().keccak256(metadata).into(),
        attestation_count: 0,
        iris_score: 0,
        data_uri: data_uri.clone(),
        created_at: env.ledger().timestamp(),
    };
    write_record(env, data_hash, &record);

    Ok(record)
}

pub fn write_record(env: &Env, data_hash: &BytesN<32>, record: &Record) {
    let key = record_key(data_hash);
    env.storage().persistent().set(&key, record);
    storage::extend_persistent(env, &key);
}

// ── Attestations ─────────────────────────────────────────────────────────────

pub fn sig_exists(env: &Env, data_hash: &BytesN<32>, attester: &Address) -> bool {
    env.storage().persistent().has(&sig_key(data_hash, attester))
}

/// Records `attester`'s attestation and adds `provenance` to the iris score.
pub fn attest(
    env: &Env,
    data_hash: &BytesN<32>,
    record: &mut Record,
    attester: &Address,
    provenance: u64,
) -> Result<(), LedgerError> {
    if sig_exists(env, data_hash, attester) {
        return Err(LedgerError::DuplicateSignature);
    }

    record.attestation_count = record
        .attestation_count
        .checked_add(1)
        .ok_or(LedgerError::InvalidScore)?;
    record.iris_score = record
        .iris_score
        .checked_add(provenance)
        .ok_or(LedgerError::InvalidScore)?;

    let key = sig_key(data_hash, attester);
    env.storage().persistent().set(&key, &true);
    storage::extend_persistent(env, &key);
    write_record(env, data_hash, record);

    Ok(())
}

// ── External scores ──────────────────────────────────────────────────────────

pub fn is_scored(env: &Env, data_hash: &BytesN<32>, provider: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&scored_key(data_hash, provider))
}

pub fn mark_scored(env: &Env, data_hash: &BytesN<32>, provider: &Address) {
    let key = scored_key(data_hash, provider);
    env.storage().persistent().set(&key, &true);
    storage::extend_persistent(env, &key);
}
