use common::storage;
use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String, Symbol};

const GRANT: Symbol = symbol_short!("GRANT");
const DELEGATE: Symbol = symbol_short!("DELEGATE");

/// Access state of one viewer on one record.
///
/// `data_uri` points at a copy of the payload re-encrypted for the viewer.
/// A revoked grant keeps its key with both fields zeroed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PermissionGrant {
    pub granted: bool,
    pub data_uri: String,
}

fn grant_key(data_hash: &BytesN<32>, viewer: &Address) -> (Symbol, BytesN<32>, Address) {
    (GRANT, data_hash.clone(), viewer.clone())
}

fn delegate_key(owner: &Address, delegate: &Address) -> (Symbol, Address, Address) {
    (DELEGATE, owner.clone(), delegate.clone())
}

// ── Grants ───────────────────────────────────────────────────────────────────

pub fn get_grant(env: &Env, data_hash: &BytesN<32>, viewer: &Address) -> PermissionGrant {
    env.storage()
        .persistent()
        .get(&grant_key(data_hash, viewer))
        .unwrap_or(PermissionGrant {
            granted: false,
            data_uri: String::from_str(env, ""),
        })
}

/// Grants `viewer` access, overwriting any previous grant.
pub fn grant(env: &Env, data_hash: &BytesN<32>, viewer: &Address, data_uri: &String) {
    write_grant(
        env,
        data_hash,
        viewer,
        &PermissionGrant {
            granted: true,
            data_uri: data_uri.clone(),
        },
    );
}

pub fn revoke(env: &Env, data_hash: &BytesN<32>, viewer: &Address) {
    write_grant(
        env,
        data_hash,
        viewer,
        &PermissionGrant {
            granted: false,
            data_uri: String::from_str(env, ""),
        },
    );
}

fn write_grant(env: &Env, data_hash: &BytesN<32>, viewer: &Address, grant: &PermissionGrant) {
    let key = grant_key(data_hash, viewer);
    env.storage().persistent().set(&key, grant);
    storage::extend_persistent(env, &key);
}

// ── Delegates ────────────────────────────────────────────────────────────────

pub fn is_delegate(env: &Env, owner: &Address, delegate: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&delegate_key(owner, delegate))
        .unwrap_or(false)
}

pub fn set_delegate(env: &Env, owner: &Address, delegate: &Address, allowed: bool) {
    let key = delegate_key(owner, delegate);
    env.storage().persistent().set(&key, &allowed);
    storage::extend_persistent(env, &key);
}
