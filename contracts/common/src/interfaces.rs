//! Narrow cross-contract interfaces.
//!
//! Subsystems never link each other's contract crates. They talk through
//! these `#[contractclient]` views, which expose only the queries a sibling
//! needs, plus the collaborator interfaces (score providers, policies,
//! whitelists) that external contracts implement.

use soroban_sdk::{contractclient, contracttype, Address, BytesN, Env, String};

/// Logical names under which subsystems are registered in the registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Subsystem {
    Identity,
    Records,
    Permissions,
    Policies,
    Scoring,
}

#[contractclient(name = "RegistryClient")]
pub trait RegistryInterface {
    fn get_contract(env: Env, subsystem: Subsystem) -> Option<Address>;
}

#[contractclient(name = "IdentityClient")]
pub trait IdentityInterface {
    fn is_user(env: Env, user: Address) -> bool;
    fn provenance_of(env: Env, user: Address) -> u64;
    fn principal_of_key(env: Env, key: BytesN<65>) -> Option<Address>;
}

#[contractclient(name = "RecordsClient")]
pub trait RecordsInterface {
    fn record_owner(env: Env, data_hash: BytesN<32>) -> Option<Address>;
    fn record_uri(env: Env, data_hash: BytesN<32>) -> Option<String>;
}

/// External score provider consulted by `update_iris`. The default one is
/// registered under `Subsystem::Scoring`.
#[contractclient(name = "ScoreProviderClient")]
pub trait ScoreProviderInterface {
    fn score(env: Env, data_hash: BytesN<32>) -> u64;
}

/// External predicate consulted before a conditional access grant.
#[contractclient(name = "PolicyClient")]
pub trait PolicyInterface {
    fn is_valid(env: Env, data_hash: BytesN<32>, owner: Address, data_uri: String) -> bool;
}

/// Source of expert scores that the identity registry may import.
#[contractclient(name = "WhitelistClient")]
pub trait WhitelistInterface {
    fn expert_score_of(env: Env, expert: Address) -> u64;
}
