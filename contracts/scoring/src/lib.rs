#![no_std]

use common::{storage, LedgerError, Ownable};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, BytesN, Env, Symbol};

const SCORE: Symbol = symbol_short!("SCORE");

fn score_key(data_hash: &BytesN<32>) -> (Symbol, BytesN<32>) {
    (SCORE, data_hash.clone())
}

/// Reference score provider for the records ledger.
///
/// An administrator (a reviewing body, an ML pipeline operator) publishes a
/// score per data hash; `update_iris` pulls it exactly once per record.
#[contract]
pub struct ScoringContract;

impl Ownable for ScoringContract {}

#[contractimpl]
impl ScoringContract {
    pub fn initialize(env: Env, admin: Address) -> Result<(), LedgerError> {
        Self::init_admin(&env, &admin)
    }

    pub fn get_admin(env: Env) -> Result<Address, LedgerError> {
        Self::load_admin(&env)
    }

    pub fn set_score(
        env: Env,
        caller: Address,
        data_hash: BytesN<32>,
        score: u64,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let key = score_key(&data_hash);
        env.storage().persistent().set(&key, &score);
        storage::extend_persistent(&env, &key);

        env.events()
            .publish((symbol_short!("SCORE"), data_hash), score);

        Ok(())
    }

    /// Published score for `data_hash`, zero when none was set.
    pub fn score(env: Env, data_hash: BytesN<32>) -> u64 {
        env.storage()
            .persistent()
            .get(&score_key(&data_hash))
            .unwrap_or(0)
    }
}
