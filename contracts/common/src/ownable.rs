use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{events, storage, LedgerError};

// ── Storage keys ─────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");

/// Single-administrator capability.
///
/// The administrator is fixed at `initialize` and stored in instance storage;
/// it only changes through [`Ownable::replace_admin`]. None of these helpers
/// call `require_auth`; entry points authenticate the caller exactly once
/// before consulting them.
pub trait Ownable {
    /// Stores the initial administrator. Fails if already initialised.
    fn init_admin(env: &Env, admin: &Address) -> Result<(), LedgerError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(LedgerError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, admin);
        env.storage().instance().set(&INITIALIZED, &true);
        storage::bump_instance(env);

        Ok(())
    }

    fn initialized(env: &Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    fn load_admin(env: &Env) -> Result<Address, LedgerError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(LedgerError::NotInitialized)
    }

    /// Fails with `Unauthorized` unless `caller` is the administrator.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), LedgerError> {
        if *caller != Self::load_admin(env)? {
            return Err(LedgerError::Unauthorized);
        }
        Ok(())
    }

    /// Hands the administrator role to `new_admin`.
    fn replace_admin(env: &Env, caller: &Address, new_admin: &Address) -> Result<(), LedgerError> {
        Self::require_admin(env, caller)?;

        env.storage().instance().set(&ADMIN, new_admin);
        storage::bump_instance(env);
        events::publish_admin_transferred(env, caller.clone(), new_admin.clone());

        Ok(())
    }
}
