use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

/// Event published when an owner adds or removes a delegate.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DelegateChangedEvent {
    pub owner: Address,
    pub delegate: Address,
    pub allowed: bool,
    pub timestamp: u64,
}

/// Event published when access is granted or revoked.
///
/// `actor` is the principal that submitted the change: the owner itself, or
/// the delegate acting for it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessChangedEvent {
    pub data_hash: BytesN<32>,
    pub owner: Address,
    pub viewer: Address,
    pub actor: Address,
    pub granted: bool,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address, registry: Address) {
    env.events()
        .publish((symbol_short!("INIT"), admin), registry);
}

pub fn publish_delegate_changed(env: &Env, owner: Address, delegate: Address, allowed: bool) {
    let tag = if allowed {
        symbol_short!("DLG_ADD")
    } else {
        symbol_short!("DLG_RM")
    };
    let topics = (tag, owner.clone(), delegate.clone());
    let data = DelegateChangedEvent {
        owner,
        delegate,
        allowed,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_access_changed(
    env: &Env,
    data_hash: BytesN<32>,
    owner: Address,
    viewer: Address,
    actor: Address,
    granted: bool,
) {
    let tag = if granted {
        symbol_short!("ACC_GRNT")
    } else {
        symbol_short!("ACC_RVK")
    };
    let topics = (tag, data_hash.clone(), viewer.clone());
    let data = AccessChangedEvent {
        data_hash,
        owner,
        viewer,
        actor,
        granted,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
