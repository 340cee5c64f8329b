#![no_std]

use common::{storage, LedgerError, Ownable};
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, Symbol};

const EXPERT: Symbol = symbol_short!("EXPERT");

/// Event published when an expert's score changes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExpertScoreUpdatedEvent {
    pub expert: Address,
    pub score: u64,
    pub timestamp: u64,
}

fn expert_key(expert: &Address) -> (Symbol, Address) {
    (EXPERT, expert.clone())
}

/// Owner-curated list of expert scores.
///
/// The identity registry imports these as provenance through
/// `set_expert_score`; this contract itself never touches identities.
#[contract]
pub struct WhitelistContract;

impl Ownable for WhitelistContract {}

#[contractimpl]
impl WhitelistContract {
    pub fn initialize(env: Env, owner: Address) -> Result<(), LedgerError> {
        Self::init_admin(&env, &owner)
    }

    pub fn get_owner(env: Env) -> Result<Address, LedgerError> {
        Self::load_admin(&env)
    }

    /// Set the score of `expert`. Owner only.
    pub fn update_score(
        env: Env,
        caller: Address,
        expert: Address,
        score: u64,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let key = expert_key(&expert);
        env.storage().persistent().set(&key, &score);
        storage::extend_persistent(&env, &key);

        let topics = (symbol_short!("EXP_SCR"), expert.clone());
        env.events().publish(
            topics,
            ExpertScoreUpdatedEvent {
                expert,
                score,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Score of `expert`, zero when unknown.
    pub fn expert_score_of(env: Env, expert: Address) -> u64 {
        env.storage()
            .persistent()
            .get(&expert_key(&expert))
            .unwrap_or(0)
    }
}
