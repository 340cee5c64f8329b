#![no_std]

pub mod events;

use common::{storage, Freezable, LedgerError, Ownable, Subsystem};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol};

// ── Storage keys ─────────────────────────────────────────────────────────────

const CONTRACT: Symbol = symbol_short!("CONTRACT");

fn contract_key(subsystem: &Subsystem) -> (Symbol, Subsystem) {
    (CONTRACT, subsystem.clone())
}

// ── Contract ─────────────────────────────────────────────────────────────────

/// Directory of the active implementation behind each subsystem name.
///
/// Subsystems resolve their siblings here on every call, so replacing an
/// entry hot-swaps the implementation for all callers at once.
#[contract]
pub struct RegistryContract;

impl Ownable for RegistryContract {}
impl Freezable for RegistryContract {}

#[contractimpl]
impl RegistryContract {
    /// Initialize the registry with its administrator.
    pub fn initialize(env: Env, admin: Address) -> Result<(), LedgerError> {
        Self::init_admin(&env, &admin)?;
        events::publish_initialized(&env, admin);
        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        Self::initialized(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, LedgerError> {
        Self::load_admin(&env)
    }

    pub fn transfer_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_not_frozen(&env)?;
        Self::replace_admin(&env, &caller, &new_admin)
    }

    /// Point `subsystem` at `address`, replacing any previous implementation.
    /// State owned by the previous implementation is not migrated.
    pub fn set_contract(
        env: Env,
        caller: Address,
        subsystem: Subsystem,
        address: Address,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_not_frozen(&env)?;
        Self::require_admin(&env, &caller)?;

        let key = contract_key(&subsystem);
        let previous: Option<Address> = env.storage().persistent().get(&key);
        env.storage().persistent().set(&key, &address);
        storage::extend_persistent(&env, &key);
        storage::bump_instance(&env);

        events::publish_contract_set(&env, subsystem, previous, address);

        Ok(())
    }

    /// Current address registered for `subsystem`, if any.
    pub fn get_contract(env: Env, subsystem: Subsystem) -> Option<Address> {
        env.storage().persistent().get(&contract_key(&subsystem))
    }

    /// Irreversibly freeze the registry. Lookups keep working.
    pub fn freeze(env: Env, caller: Address) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::store_frozen(&env, &caller)
    }

    pub fn is_frozen(env: Env) -> bool {
        Self::frozen(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}
