#![no_std]

pub mod events;
mod grants;

use common::{locator, policy, validation, Freezable, LedgerError, Ownable, Pausable};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

pub use grants::PermissionGrant;

/// Resolves the owner of `data_hash` through the records subsystem.
fn record_owner(env: &Env, data_hash: &BytesN<32>) -> Result<Address, LedgerError> {
    locator::records(env)?
        .record_owner(data_hash)
        .ok_or(LedgerError::RecordNotFound)
}

/// Fails unless `caller` owns the record.
fn require_owner(env: &Env, caller: &Address, data_hash: &BytesN<32>) -> Result<(), LedgerError> {
    if record_owner(env, data_hash)? != *caller {
        return Err(LedgerError::Unauthorized);
    }
    Ok(())
}

/// Fails unless `owner` owns the record and has made `caller` its delegate.
fn require_delegate(
    env: &Env,
    caller: &Address,
    owner: &Address,
    data_hash: &BytesN<32>,
) -> Result<(), LedgerError> {
    if record_owner(env, data_hash)? != *owner || !grants::is_delegate(env, owner, caller) {
        return Err(LedgerError::Unauthorized);
    }
    Ok(())
}

// ── Contract ─────────────────────────────────────────────────────────────────

/// Per-record, per-viewer access grants.
///
/// Only the record owner, or a delegate the owner appointed, may grant or
/// revoke. Ownership is looked up in the records subsystem on every call.
#[contract]
pub struct PermissionsContract;

impl Ownable for PermissionsContract {}
impl Freezable for PermissionsContract {}
impl Pausable for PermissionsContract {}

#[contractimpl]
impl PermissionsContract {
    pub fn initialize(env: Env, admin: Address, registry: Address) -> Result<(), LedgerError> {
        Self::init_admin(&env, &admin)?;
        locator::set_registry(&env, &registry);
        events::publish_initialized(&env, admin, registry);
        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        Self::initialized(&env)
    }

    pub fn get_registry(env: Env) -> Result<Address, LedgerError> {
        locator::registry(&env)
    }

    // ── Delegates ────────────────────────────────────────────────────────────

    /// Authorize `delegate` to grant and revoke on the caller's records.
    /// The caller must be a registered user. Idempotent.
    pub fn add_delegate(env: Env, caller: Address, delegate: Address) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;

        if !locator::identity(&env)?.is_user(&caller) {
            return Err(LedgerError::Unauthorized);
        }

        grants::set_delegate(&env, &caller, &delegate, true);
        events::publish_delegate_changed(&env, caller, delegate, true);

        Ok(())
    }

    pub fn remove_delegate(
        env: Env,
        caller: Address,
        delegate: Address,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;

        grants::set_delegate(&env, &caller, &delegate, false);
        events::publish_delegate_changed(&env, caller, delegate, false);

        Ok(())
    }

    // ── Grants ───────────────────────────────────────────────────────────────

    /// Grant `viewer` access to the caller's record. Re-granting overwrites
    /// the previous `data_uri`.
    pub fn grant_access(
        env: Env,
        caller: Address,
        data_hash: BytesN<32>,
        viewer: Address,
        data_uri: String,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;
        validation::validate_data_hash(&data_hash)?;
        validation::validate_data_uri(&data_uri)?;
        require_owner(&env, &caller, &data_hash)?;

        grants::grant(&env, &data_hash, &viewer, &data_uri);
        events::publish_access_changed(&env, data_hash, caller.clone(), viewer, caller, true);

        Ok(())
    }

    pub fn grant_access_by_delegate(
        env: Env,
        caller: Address,
        data_hash: BytesN<32>,
        viewer: Address,
        owner: Address,
        data_uri: String,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;
        validation::validate_data_hash(&data_hash)?;
        validation::validate_data_uri(&data_uri)?;
        require_delegate(&env, &caller, &owner, &data_hash)?;

        grants::grant(&env, &data_hash, &viewer, &data_uri);
        events::publish_access_changed(&env, data_hash, owner, viewer, caller, true);

        Ok(())
    }

    /// Grant access only if every policy in `policies` accepts
    /// `(data_hash, owner, data_uri)`. All policies are consulted and each
    /// verdict is published before the grant is accepted or rejected.
    pub fn grant_policy_based_access(
        env: Env,
        caller: Address,
        data_hash: BytesN<32>,
        viewer: Address,
        data_uri: String,
        policies: Vec<Address>,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;
        validation::validate_data_hash(&data_hash)?;
        validation::validate_data_uri(&data_uri)?;
        require_owner(&env, &caller, &data_hash)?;

        policy::require_all(&env, &data_hash, &caller, &data_uri, &policies)?;

        grants::grant(&env, &data_hash, &viewer, &data_uri);
        events::publish_access_changed(&env, data_hash, caller.clone(), viewer, caller, true);

        Ok(())
    }

    pub fn revoke_access(
        env: Env,
        caller: Address,
        data_hash: BytesN<32>,
        viewer: Address,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;
        validation::validate_data_hash(&data_hash)?;
        require_owner(&env, &caller, &data_hash)?;

        grants::revoke(&env, &data_hash, &viewer);
        events::publish_access_changed(&env, data_hash, caller.clone(), viewer, caller, false);

        Ok(())
    }

    pub fn revoke_access_by_delegate(
        env: Env,
        caller: Address,
        data_hash: BytesN<32>,
        viewer: Address,
        owner: Address,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;
        validation::validate_data_hash(&data_hash)?;
        require_delegate(&env, &caller, &owner, &data_hash)?;

        grants::revoke(&env, &data_hash, &viewer);
        events::publish_access_changed(&env, data_hash, owner, viewer, caller, false);

        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn check_access(env: Env, data_hash: BytesN<32>, viewer: Address) -> bool {
        grants::get_grant(&env, &data_hash, &viewer).granted
    }

    /// The stored grant, or a zeroed one when none exists.
    pub fn get_permission(env: Env, data_hash: BytesN<32>, viewer: Address) -> PermissionGrant {
        grants::get_grant(&env, &data_hash, &viewer)
    }

    pub fn is_delegate(env: Env, owner: Address, delegate: Address) -> bool {
        grants::is_delegate(&env, &owner, &delegate)
    }

    // ── Administration ───────────────────────────────────────────────────────

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

    pub fn pause(env: Env, caller: Address) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::store_paused(&env, &caller, true)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::store_paused(&env, &caller, false)
    }

    pub fn is_paused(env: Env) -> bool {
        Self::paused(&env)
    }

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
