#![no_std]

mod attestation;
pub mod events;
mod store;

use common::{
    locator, validation, Freezable, LedgerError, Ownable, Pausable, ScoreProviderClient,
    Subsystem,
};
use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, String};

pub use store::Record;

// ── Contract ─────────────────────────────────────────────────────────────────

/// Ledger of attested records.
///
/// A record is created exactly once per data hash. Accredited providers then
/// attest to it, each adding their provenance to the record's iris score;
/// external score providers may add to it once each.
#[contract]
pub struct RecordsContract;

impl Ownable for RecordsContract {}
impl Freezable for RecordsContract {}
impl Pausable for RecordsContract {}

#[contractimpl]
impl RecordsContract {
    /// Initialize the ledger with its administrator and the registry used to
    /// resolve the identity subsystem.
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

    // ── Record creation ──────────────────────────────────────────────────────

    /// Create a record owned by the caller, who must be a registered user.
    pub fn add_record(
        env: Env,
        caller: Address,
        data_hash: BytesN<32>,
        metadata: Bytes,
        data_uri: String,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;
        validation::validate_data_hash(&data_hash)?;
        validation::validate_data_uri(&data_uri)?;

        if !locator::identity(&env)?.is_user(&caller) {
            return Err(LedgerError::Unauthorized);
        }

        store::create_record(&env, &data_hash, &caller, &metadata, &data_uri)?;
        events::publish_record_added(&env, data_hash, caller, None, data_uri);

        Ok(())
    }

    /// Create a record on behalf of `owner` and attest to it as the caller,
    /// in one step. The caller must be a provider and `owner` a registered
    /// user.
    pub fn add_record_by_provider(
        env: Env,
        caller: Address,
        data_hash: BytesN<32>,
        owner: Address,
        metadata: Bytes,
        data_uri: String,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;
        validation::validate_data_hash(&data_hash)?;
        validation::validate_data_uri(&data_uri)?;

        let identity = locator::identity(&env)?;
        let provenance = identity.provenance_of(&caller);
        if provenance == 0 || !identity.is_user(&owner) {
            return Err(LedgerError::Unauthorized);
        }

        let mut record = store::create_record(&env, &data_hash, &owner, &metadata, &data_uri)?;
        store::attest(&env, &data_hash, &mut record, &caller, provenance)?;

        events::publish_record_added(
            &env,
            data_hash.clone(),
            owner,
            Some(caller.clone()),
            data_uri,
        );
        events::publish_sig_added(
            &env,
            data_hash,
            caller,
            record.attestation_count,
            record.iris_score,
        );

        Ok(())
    }

    /// Administrative creation that bypasses role checks. When `attester` is
    /// set, its attestation is recorded with its current provenance.
    pub fn add_record_by_admin(
        env: Env,
        caller: Address,
        data_hash: BytesN<32>,
        owner: Address,
        attester: Option<Address>,
        metadata: Bytes,
        data_uri: String,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;
        Self::require_admin(&env, &caller)?;
        validation::validate_data_hash(&data_hash)?;
        validation::validate_data_uri(&data_uri)?;

        let mut record = store::create_record(&env, &data_hash, &owner, &metadata, &data_uri)?;
        events::publish_record_added(
            &env,
            data_hash.clone(),
            owner,
            Some(caller),
            data_uri,
        );

        if let Some(attester) = attester {
            let provenance = locator::identity(&env)?.provenance_of(&attester);
            store::attest(&env, &data_hash, &mut record, &attester, provenance)?;
            events::publish_sig_added(
                &env,
                data_hash,
                attester,
                record.attestation_count,
                record.iris_score,
            );
        }

        Ok(())
    }

    // ── Attestation ──────────────────────────────────────────────────────────

    /// Submit an attestation collected off-chain.
    ///
    /// Anyone may relay it. `signature` is the recoverable secp256k1
    /// signature (`r ++ s ++ v`) of the record's root hash. The recovered key
    /// must be bound to a provider in the identity registry; otherwise the
    /// attestation fails with `InvalidSignature`.
    pub fn add_sig(
        env: Env,
        caller: Address,
        data_hash: BytesN<32>,
        signature: BytesN<65>,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;

        let mut record = store::load_record(&env, &data_hash)?;

        let root = attestation::root_hash(&env, &data_hash, &record.metadata_hash);
        let signer_key = attestation::recover_signer(&env, &root, &signature)
            .ok_or(LedgerError::InvalidSignature)?;

        let identity = locator::identity(&env)?;
        let signer = identity
            .principal_of_key(&signer_key)
            .ok_or(LedgerError::InvalidSignature)?;
        let provenance = identity.provenance_of(&signer);
        if provenance == 0 {
            return Err(LedgerError::InvalidSignature);
        }

        store::attest(&env, &data_hash, &mut record, &signer, provenance)?;
        events::publish_sig_added(
            &env,
            data_hash,
            signer,
            record.attestation_count,
            record.iris_score,
        );

        Ok(())
    }

    /// The caller attests directly. The caller must be a provider.
    pub fn add_sig_by_provider(
        env: Env,
        caller: Address,
        data_hash: BytesN<32>,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;

        let mut record = store::load_record(&env, &data_hash)?;

        let provenance = locator::identity(&env)?.provenance_of(&caller);
        if provenance == 0 {
            return Err(LedgerError::Unauthorized);
        }

        store::attest(&env, &data_hash, &mut record, &caller, provenance)?;
        events::publish_sig_added(
            &env,
            data_hash,
            caller,
            record.attestation_count,
            record.iris_score,
        );

        Ok(())
    }

    // ── External scoring ─────────────────────────────────────────────────────

    /// Add the score `score_provider` reports for the record. Each provider
    /// applies at most once per record and must report a positive score.
    /// Without an explicit provider, the one registered under
    /// `Subsystem::Scoring` is consulted.
    ///
    /// Restricted to the administrator: any other caller gets
    /// `Unauthorized`, so an arbitrary contract cannot be named as a score
    /// source.
    pub fn update_iris(
        env: Env,
        caller: Address,
        data_hash: BytesN<32>,
        score_provider: Option<Address>,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_writable(&env)?;
        Self::require_admin(&env, &caller)?;

        let score_provider = match score_provider {
            Some(provider) => provider,
            None => locator::resolve(&env, Subsystem::Scoring)?,
        };

        let mut record = store::load_record(&env, &data_hash)?;
        if store::is_scored(&env, &data_hash, &score_provider) {
            return Err(LedgerError::AlreadyScored);
        }

        let score = ScoreProviderClient::new(&env, &score_provider).score(&data_hash);
        if score == 0 {
            return Err(LedgerError::InvalidScore);
        }
        record.iris_score = record
            .iris_score
            .checked_add(score)
            .ok_or(LedgerError::InvalidScore)?;

        store::mark_scored(&env, &data_hash, &score_provider);
        store::write_record(&env, &data_hash, &record);
        events::publish_iris_updated(&env, data_hash, score_provider, score, record.iris_score);

        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn get_record(env: Env, data_hash: BytesN<32>) -> Result<Record, LedgerError> {
        store::load_record(&env, &data_hash)
    }

    pub fn sig_exists(env: Env, data_hash: BytesN<32>, attester: Address) -> bool {
        store::sig_exists(&env, &data_hash, &attester)
    }

    pub fn is_scored(env: Env, data_hash: BytesN<32>, score_provider: Address) -> bool {
        store::is_scored(&env, &data_hash, &score_provider)
    }

    /// The message a provider signs to attest to `data_hash`.
    pub fn root_hash(env: Env, data_hash: BytesN<32>) -> Result<BytesN<32>, LedgerError> {
        let record = store::load_record(&env, &data_hash)?;
        Ok(attestation::root_hash(&env, &data_hash, &record.metadata_hash).to_bytes())
    }

    pub fn record_owner(env: Env, data_hash: BytesN<32>) -> Option<Address> {
        store::get_record(&env, &data_hash).map(|r| r.owner)
    }

    pub fn record_uri(env: Env, data_hash: BytesN<32>) -> Option<String> {
        store::get_record(&env, &data_hash).map(|r| r.data_uri)
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

#[cfg(test)]
mod test_iris;
#[cfg(test)]
mod test_pause;
