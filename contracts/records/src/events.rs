use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String};

/// Event published when a record is created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordAddedEvent {
    pub data_hash: BytesN<32>,
    pub owner: Address,
    /// Principal that submitted the record when it is not the owner: the
    /// provider on `add_record_by_provider`, the administrator on
    /// `add_record_by_admin`. An admin-designated attester is reported only
    /// by the `SIG_ADD` event that follows.
    pub submitted_by: Option<Address>,
    pub data_uri: String,
    pub timestamp: u64,
}

/// Event published for every accepted attestation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordSigAddedEvent {
    pub data_hash: BytesN<32>,
    pub attester: Address,
    pub attestation_count: u32,
    pub iris_score: u64,
    pub timestamp: u64,
}

/// Event published when an external score provider is applied.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IrisUpdatedEvent {
    pub data_hash: BytesN<32>,
    pub provider: Address,
    pub score: u64,
    pub iris_score: u64,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address, registry: Address) {
    env.events()
        .publish((symbol_short!("INIT"), admin), registry);
}

pub fn publish_record_added(
    env: &Env,
    data_hash: BytesN<32>,
    owner: Address,
    submitted_by: Option<Address>,
    data_uri: String,
) {
    let topics = (symbol_short!("REC_ADD"), data_hash.clone(), owner.clone());
    let data = RecordAddedEvent {
        data_hash,
        owner,
        submitted_by,
        data_uri,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an attestation together with the record's running totals.
pub fn publish_sig_added(
    env: &Env,
    data_hash: BytesN<32>,
    attester: Address,
    attestation_count: u32,
    iris_score: u64,
) {
    let topics = (symbol_short!("SIG_ADD"), data_hash.clone(), attester.clone());
    let data = RecordSigAddedEvent {
        data_hash,
        attester,
        attestation_count,
        iris_score,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_iris_updated(
    env: &Env,
    data_hash: BytesN<32>,
    provider: Address,
    score: u64,
    iris_score: u64,
) {
    let topics = (symbol_short!("IRIS_UPD"), data_hash.clone(), provider.clone());
    let data = IrisUpdatedEvent {
        data_hash,
        provider,
        score,
        iris_score,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
