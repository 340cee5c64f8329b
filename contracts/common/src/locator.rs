//! Registry-based service location.
//!
//! A subsystem stores only the registry address. Siblings are resolved on
//! every call so that swapping an implementation in the registry takes
//! effect immediately, without migrating any state.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{
    storage, IdentityClient, LedgerError, RecordsClient, RegistryClient, Subsystem,
};

const REGISTRY: Symbol = symbol_short!("REGISTRY");

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&REGISTRY, registry);
    storage::bump_instance(env);
}

pub fn registry(env: &Env) -> Result<Address, LedgerError> {
    env.storage()
        .instance()
        .get(&REGISTRY)
        .ok_or(LedgerError::NotInitialized)
}

/// Looks up the current address of `subsystem`.
pub fn resolve(env: &Env, subsystem: Subsystem) -> Result<Address, LedgerError> {
    let registry = registry(env)?;
    RegistryClient::new(env, &registry)
        .get_contract(&subsystem)
        .ok_or(LedgerError::SubsystemNotFound)
}

pub fn identity(env: &Env) -> Result<IdentityClient<'_>, LedgerError> {
    let address = resolve(env, Subsystem::Identity)?;
    Ok(IdentityClient::new(env, &address))
}

pub fn records(env: &Env) -> Result<RecordsClient<'_>, LedgerError> {
    let address = resolve(env, Subsystem::Records)?;
    Ok(RecordsClient::new(env, &address))
}
