//! Events published by the shared capabilities.
//!
//! Every contract that composes [`crate::Ownable`], [`crate::Pausable`] or
//! [`crate::Freezable`] emits these with identical topics, so indexers can
//! follow administrative actions across subsystems uniformly.

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String};

/// Event published when the administrator changes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferredEvent {
    pub previous: Address,
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when a contract is paused or resumed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub caller: Address,
    pub paused: bool,
    pub timestamp: u64,
}

/// Event published when a contract is frozen.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrozenEvent {
    pub caller: Address,
    pub timestamp: u64,
}

/// Event published for each policy consulted on behalf of a record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicyCheckedEvent {
    pub data_hash: BytesN<32>,
    pub owner: Address,
    pub data_uri: String,
    pub policy: Address,
    pub valid: bool,
    pub timestamp: u64,
}

pub fn publish_admin_transferred(env: &Env, previous: Address, admin: Address) {
    let topics = (symbol_short!("ADM_XFER"), previous.clone(), admin.clone());
    let data = AdminTransferredEvent {
        previous,
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_pause_changed(env: &Env, caller: Address, paused: bool) {
    let tag = if paused {
        symbol_short!("PAUSED")
    } else {
        symbol_short!("UNPAUSED")
    };
    let topics = (tag, caller.clone());
    let data = PauseChangedEvent {
        caller,
        paused,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_frozen(env: &Env, caller: Address) {
    let topics = (symbol_short!("FROZEN"), caller.clone());
    let data = FrozenEvent {
        caller,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes the outcome of a single policy evaluation.
pub fn publish_policy_checked(
    env: &Env,
    data_hash: BytesN<32>,
    owner: Address,
    data_uri: String,
    policy: Address,
    valid: bool,
) {
    let topics = (symbol_short!("POL_CHK"), data_hash.clone(), policy.clone());
    let data = PolicyCheckedEvent {
        data_hash,
        owner,
        data_uri,
        policy,
        valid,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
