use soroban_sdk::{symbol_short, Address, BytesN, Env};

/// Event published when a principal self-registers.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserRegisteredEvent {
    pub user: Address,
    pub timestamp: u64,
}

/// Event published when a principal's provenance changes.
///
/// The records ledger reads provenance at attestation time, so this event is
/// what off-chain scorers follow to explain later iris scores.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProvenanceChangedEvent {
    pub user: Address,
    pub provenance: u64,
    pub source: Option<Address>,
    pub timestamp: u64,
}

/// Event published when a principal binds an attestation signing key.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SigningKeyBoundEvent {
    pub user: Address,
    pub key: BytesN<65>,
    pub replaced: Option<BytesN<65>>,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    env.events().publish((symbol_short!("INIT"),), admin);
}

pub fn publish_user_registered(env: &Env, user: Address) {
    let topics = (symbol_short!("USR_REG"), user.clone());
    let data = UserRegisteredEvent {
        user,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// `source` is the whitelist the score was imported from, `None` when the
/// administrator set it directly.
pub fn publish_provenance_changed(
    env: &Env,
    user: Address,
    provenance: u64,
    source: Option<Address>,
) {
    let topics = (symbol_short!("PROV_CHG"), user.clone());
    let data = ProvenanceChangedEvent {
        user,
        provenance,
        source,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_signing_key_bound(
    env: &Env,
    user: Address,
    key: BytesN<65>,
    replaced: Option<BytesN<65>>,
) {
    let topics = (symbol_short!("KEY_BIND"), user.clone());
    let data = SigningKeyBoundEvent {
        user,
        key,
        replaced,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
