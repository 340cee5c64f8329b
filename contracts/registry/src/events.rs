use common::Subsystem;
use soroban_sdk::{symbol_short, Address, Env};

/// Event published when a subsystem address is (re)assigned.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractSetEvent {
    pub subsystem: Subsystem,
    pub from: Option<Address>,
    pub to: Address,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    env.events().publish((symbol_short!("INIT"),), admin);
}

/// Publishes a hot-swap of `subsystem` from its previous address to `to`.
pub fn publish_contract_set(env: &Env, subsystem: Subsystem, from: Option<Address>, to: Address) {
    let topics = (symbol_short!("CTR_SET"), subsystem.clone());
    let data = ContractSetEvent {
        subsystem,
        from,
        to,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
