use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{events, storage, LedgerError, Ownable};

const FROZEN: Symbol = symbol_short!("FROZEN");

/// Irreversible teardown capability.
///
/// Freezing replaces contract self-destruction: once set, the flag can never
/// be cleared and every mutating entry point fails with `Frozen`. Queries keep
/// answering from the preserved state. There is no balance to sweep.
pub trait Freezable: Ownable {
    fn frozen(env: &Env) -> bool {
        env.storage().instance().get(&FROZEN).unwrap_or(false)
    }

    fn require_not_frozen(env: &Env) -> Result<(), LedgerError> {
        if Self::frozen(env) {
            return Err(LedgerError::Frozen);
        }
        Ok(())
    }

    /// Freezes the contract. Administrator only; freezing twice fails.
    fn store_frozen(env: &Env, caller: &Address) -> Result<(), LedgerError> {
        Self::require_not_frozen(env)?;
        Self::require_admin(env, caller)?;

        env.storage().instance().set(&FROZEN, &true);
        storage::bump_instance(env);
        events::publish_frozen(env, caller.clone());

        Ok(())
    }
}
