use soroban_sdk::{Address, BytesN, Env, String, Vec};

use crate::{events, LedgerError, PolicyClient};

/// Evaluates one policy collaborator and publishes the outcome.
pub fn check(
    env: &Env,
    data_hash: &BytesN<32>,
    owner: &Address,
    data_uri: &String,
    policy: &Address,
) -> bool {
    let valid = PolicyClient::new(env, policy).is_valid(data_hash, owner, data_uri);
    events::publish_policy_checked(
        env,
        data_hash.clone(),
        owner.clone(),
        data_uri.clone(),
        policy.clone(),
        valid,
    );
    valid
}

/// Evaluates every policy in `policies` and requires all of them to accept.
///
/// Evaluation does not short-circuit: each policy is consulted and audited
/// before the combined verdict is returned.
pub fn require_all(
    env: &Env,
    data_hash: &BytesN<32>,
    owner: &Address,
    data_uri: &String,
    policies: &Vec<Address>,
) -> Result<(), LedgerError> {
    let mut all_valid = true;
    for policy in policies.iter() {
        if !check(env, data_hash, owner, data_uri, &policy) {
            all_valid = false;
        }
    }

    if !all_valid {
        return Err(LedgerError::PolicyRejected);
    }
    Ok(())
}
