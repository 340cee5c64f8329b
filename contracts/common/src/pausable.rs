use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{events, storage, Freezable, LedgerError};

const PAUSED: Symbol = symbol_short!("P_GLOB");

/// Global circuit breaker.
///
/// While paused every mutating entry point fails with `Paused`; queries are
/// never gated. A frozen contract reports `Frozen` ahead of `Paused`.
pub trait Pausable: Freezable {
    fn paused(env: &Env) -> bool {
        env.storage().instance().get(&PAUSED).unwrap_or(false)
    }

    /// Guard for every mutating entry point.
    fn require_writable(env: &Env) -> Result<(), LedgerError> {
        Self::require_not_frozen(env)?;
        if Self::paused(env) {
            return Err(LedgerError::Paused);
        }
        Ok(())
    }

    /// Sets the pause flag. Administrator only.
    fn store_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), LedgerError> {
        Self::require_not_frozen(env)?;
        Self::require_admin(env, caller)?;

        env.storage().instance().set(&PAUSED, &paused);
        storage::bump_instance(env);
        events::publish_pause_changed(env, caller.clone(), paused);

        Ok(())
    }
}
