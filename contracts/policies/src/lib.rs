#![no_std]

use common::{
    locator, policy, storage, Freezable, LedgerError, Ownable, Pausable, RecordsClient,
};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, BytesN, Env, String, Symbol, Vec,
};

const POLICIES: Symbol = symbol_short!("POLICIES");

/// Event published when a record's policy set changes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordPolicyChangedEvent {
    pub data_hash: BytesN<32>,
    pub policy: Address,
    pub attached: bool,
    pub timestamp: u64,
}

fn policies_key(data_hash: &BytesN<32>) -> (Symbol, BytesN<32>) {
    (POLICIES, data_hash.clone())
}

fn load_policies(env: &Env, data_hash: &BytesN<32>) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&policies_key(data_hash))
        .unwrap_or(Vec::new(env))
}

fn store_policies(env: &Env, data_hash: &BytesN<32>, policies: &Vec<Address>) {
    let key = policies_key(data_hash);
    env.storage().persistent().set(&key, policies);
    storage::extend_persistent(env, &key);
}

fn publish_policy_changed(env: &Env, data_hash: BytesN<32>, policy: Address, attached: bool) {
    let tag = if attached {
        symbol_short!("POL_ADD")
    } else {
        symbol_short!("POL_RM")
    };
    let topics = (tag, data_hash.clone(), policy.clone());
    env.events().publish(
        topics,
        RecordPolicyChangedEvent {
            data_hash,
            policy,
            attached,
            timestamp: env.ledger().timestamp(),
        },
    );
}

/// Fails unless `caller` owns the record; returns the record's uri.
fn require_owner(
    records: &RecordsClient,
    caller: &Address,
    data_hash: &BytesN<32>,
) -> Result<String, LedgerError> {
    let owner = records
        .record_owner(data_hash)
        .ok_or(LedgerError::RecordNotFound)?;
    if owner != *caller {
        return Err(LedgerError::Unauthorized);
    }
    records
        .record_uri(data_hash)
        .ok_or(LedgerError::RecordNotFound)
}

// ── Contract ─────────────────────────────────────────────────────────────────

/// Policies attached to records by their owners.
///
/// A policy is an external predicate over `(data_hash, owner, data_uri)`.
/// Evaluations publish one verdict event per policy; a rejected evaluation
/// fails with `PolicyRejected`.
#[contract]
pub struct PoliciesContract;

impl Ownable for PoliciesContract {}
impl Freezable for PoliciesContract {}
impl Pausable for PoliciesContract {}

#[contractimpl]
impl PoliciesContract {
    pub fn initialize(env: Env, admin: Address, registry: Address) -> Result<(), LedgerError> {
        Self::init_admin(&env, &admin)?;
        locator::set_registry(&env, &registry);
        env.events()
            .publish((symbol_short!("INIT"), admin), registry);
        Ok(())
    }

    pub fn get_registry(env: Env) -> Result<Address, LedgerError> {
        locator::registry(&env)
    }

    /// Attach `policy` to the caller's record. The policy must accept the
    /// record as it stands. Attaching an already attached policy is a no-op.
    pub fn add_policy_to_record(
        env: Env,
        caller: Address,
        data_hash: BytesN<32>,
        policy: Address,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;

        let records = locator::records(&env)?;
        let data_uri = require_owner(&records, &caller, &data_hash)?;

        if !policy::check(&env, &data_hash, &caller, &data_uri, &policy) {
            return Err(LedgerError::PolicyRejected);
        }

        let mut attached = load_policies(&env, &data_hash);
        if attached.contains(&policy) {
            return Ok(());
        }
        attached.push_back(policy.clone());
        store_policies(&env, &data_hash, &attached);
        publish_policy_changed(&env, data_hash, policy, true);

        Ok(())
    }

    pub fn remove_policy_from_record(
        env: Env,
        caller: Address,
        data_hash: BytesN<32>,
        policy: Address,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;

        let records = locator::records(&env)?;
        require_owner(&records, &caller, &data_hash)?;

        let mut attached = load_policies(&env, &data_hash);
        if let Some(index) = attached.first_index_of(&policy) {
            attached.remove(index);
            store_policies(&env, &data_hash, &attached);
            publish_policy_changed(&env, data_hash, policy, false);
        }

        Ok(())
    }

    pub fn policies_for_record(env: Env, data_hash: BytesN<32>) -> Vec<Address> {
        load_policies(&env, &data_hash)
    }

    // ── Evaluation ───────────────────────────────────────────────────────────

    pub fn policy_is_valid(
        env: Env,
        data_hash: BytesN<32>,
        owner: Address,
        data_uri: String,
        policy: Address,
    ) -> Result<bool, LedgerError> {
        if !policy::check(&env, &data_hash, &owner, &data_uri, &policy) {
            return Err(LedgerError::PolicyRejected);
        }
        Ok(true)
    }

    pub fn policies_are_valid(
        env: Env,
        data_hash: BytesN<32>,
        owner: Address,
        data_uri: String,
        policies: Vec<Address>,
    ) -> Result<bool, LedgerError> {
        policy::require_all(&env, &data_hash, &owner, &data_uri, &policies)?;
        Ok(true)
    }

    /// Whether a prospective permission `(owner, data_uri)` satisfies every
    /// policy attached to the record. A record without policies accepts all.
    pub fn follows_existing_policies(
        env: Env,
        data_hash: BytesN<32>,
        owner: Address,
        data_uri: String,
    ) -> Result<bool, LedgerError> {
        let attached = load_policies(&env, &data_hash);
        policy::require_all(&env, &data_hash, &owner, &data_uri, &attached)?;
        Ok(true)
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
