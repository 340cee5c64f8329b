#![no_std]

pub mod events;
pub mod users;

use common::{Freezable, LedgerError, Ownable, WhitelistClient};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

pub use users::UserRecord;

/// Leading byte of an uncompressed SEC-1 public key.
const SEC1_UNCOMPRESSED: u8 = 0x04;

// ── Contract ─────────────────────────────────────────────────────────────────

/// Registry of principals, their provenance and their attestation keys.
#[contract]
pub struct IdentityContract;

impl Ownable for IdentityContract {}
impl Freezable for IdentityContract {}

#[contractimpl]
impl IdentityContract {
    /// Initialize the identity registry with its administrator.
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

    // ── Registration ─────────────────────────────────────────────────────────

    /// The caller registers itself. A principal can register only once.
    pub fn register(env: Env, caller: Address) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_not_frozen(&env)?;

        users::register(&env, &caller)?;
        events::publish_user_registered(&env, caller);

        Ok(())
    }

    /// Set the provenance score of a registered principal. Admin only.
    pub fn set_provenance(
        env: Env,
        caller: Address,
        user: Address,
        provenance: u64,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_not_frozen(&env)?;
        Self::require_admin(&env, &caller)?;

        users::set_provenance(&env, &user, provenance)?;
        events::publish_provenance_changed(&env, user, provenance, None);

        Ok(())
    }

    /// Import the expert score `whitelist` holds for `user` as its provenance.
    /// Admin only; the admin vouches for the whitelist by naming it.
    pub fn set_expert_score(
        env: Env,
        caller: Address,
        whitelist: Address,
        user: Address,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_not_frozen(&env)?;
        Self::require_admin(&env, &caller)?;

        if !users::is_user(&env, &user) {
            return Err(LedgerError::NotRegistered);
        }

        let score = WhitelistClient::new(&env, &whitelist).expert_score_of(&user);
        users::set_provenance(&env, &user, score)?;
        events::publish_provenance_changed(&env, user, score, Some(whitelist));

        Ok(())
    }

    /// Bind the secp256k1 public key the caller signs attestations with, in
    /// uncompressed SEC-1 form (`0x04 ++ x ++ y`). Rebinding replaces the
    /// caller's previous key.
    pub fn set_signing_key(env: Env, caller: Address, key: BytesN<65>) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_not_frozen(&env)?;

        if key.get(0) != Some(SEC1_UNCOMPRESSED) {
            return Err(LedgerError::InvalidArgument);
        }

        let replaced = users::bind_signing_key(&env, &caller, &key)?;
        events::publish_signing_key_bound(&env, caller, key, replaced);

        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn is_user(env: Env, user: Address) -> bool {
        users::is_user(&env, &user)
    }

    pub fn provenance_of(env: Env, user: Address) -> u64 {
        users::provenance_of(&env, &user)
    }

    /// True for registered principals with a positive provenance.
    pub fn is_provider(env: Env, user: Address) -> bool {
        users::provenance_of(&env, &user) > 0
    }

    pub fn get_user(env: Env, user: Address) -> Result<UserRecord, LedgerError> {
        users::get_user(&env, &user).ok_or(LedgerError::NotRegistered)
    }

    pub fn principal_of_key(env: Env, key: BytesN<65>) -> Option<Address> {
        users::principal_of_key(&env, &key)
    }

    pub fn signing_key_of(env: Env, user: Address) -> Option<BytesN<65>> {
        users::signing_key_of(&env, &user)
    }

    // ── Teardown ─────────────────────────────────────────────────────────────

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
