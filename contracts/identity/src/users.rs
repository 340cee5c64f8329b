use common::{storage, LedgerError};
use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol};

// ── Storage key symbols ──────────────────────────────────────────────────────

const USER: Symbol = symbol_short!("USER");
const KEY_OWNER: Symbol = symbol_short!("KEY_OWN");
const USER_KEY: Symbol = symbol_short!("USR_KEY");

// ── Types ────────────────────────────────────────────────────────────────────

/// Registration state of a principal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserRecord {
    pub registered: bool,
    pub registered_at: u64,
    /// Trust weight; zero for plain users, positive for accredited providers.
    pub provenance: u64,
}

// ── Storage key helpers ──────────────────────────────────────────────────────

fn user_key(user: &Address) -> (Symbol, Address) {
    (USER, user.clone())
}

fn key_owner_key(key: &BytesN<65>) -> (Symbol, BytesN<65>) {
    (KEY_OWNER, key.clone())
}

fn user_signing_key(user: &Address) -> (Symbol, Address) {
    (USER_KEY, user.clone())
}

// ── Registration ─────────────────────────────────────────────────────────────

pub fn get_user(env: &Env, user: &Address) -> Option<UserRecord> {
    env.storage().persistent().get(&user_key(user))
}

pub fn is_user(env: &Env, user: &Address) -> bool {
    get_user(env, user).map(|u| u.registered).unwrap_or(false)
}

pub fn provenance_of(env: &Env, user: &Address) -> u64 {
    get_user(env, user).map(|u| u.provenance).unwrap_or(0)
}

pub fn register(env: &Env, user: &Address) -> Result<UserRecord, LedgerError> {
    if is_user(env, user) {
        return Err(LedgerError::AlreadyRegistered);
    }

    let record = UserRecord {
        registered: true,
        registered_at: env.ledger().timestamp(),
        provenance: 0,
    };
    write_user(env, user, &record);

    Ok(record)
}

/// Overwrites the provenance of a registered principal.
pub fn set_provenance(env: &Env, user: &Address, provenance: u64) -> Result<(), LedgerError> {
    let mut record = get_user(env, user)
        .filter(|u| u.registered)
        .ok_or(LedgerError::NotRegistered)?;

    record.provenance = provenance;
    write_user(env, user, &record);

    Ok(())
}

fn write_user(env: &Env, user: &Address, record: &UserRecord) {
    let key = user_key(user);
    env.storage().persistent().set(&key, record);
    storage::extend_persistent(env, &key);
}

// ── Signing keys ─────────────────────────────────────────────────────────────

pub fn principal_of_key(env: &Env, key: &BytesN<65>) -> Option<Address> {
    env.storage().persistent().get(&key_owner_key(key))
}

pub fn signing_key_of(env: &Env, user: &Address) -> Option<BytesN<65>> {
    env.storage().persistent().get(&user_signing_key(user))
}

/// Binds `key` to `user`, releasing any key the user held before.
///
/// Returns the released key, if any.
pub fn bind_signing_key(
    env: &Env,
    user: &Address,
    key: &BytesN<65>,
) -> Result<Option<BytesN<65>>, LedgerError> {
    if !is_user(env, user) {
        return Err(LedgerError::NotRegistered);
    }

    match principal_of_key(env, key) {
        Some(owner) if owner != *user => return Err(LedgerError::AlreadyRegistered),
        Some(_) => return Ok(None),
        None => {}
    }

    let previous = signing_key_of(env, user);
    if let Some(old) = &previous {
        env.storage().persistent().remove(&key_owner_key(old));
    }

    let owner_key = key_owner_key(key);
    env.storage().persistent().set(&owner_key, user);
    storage::extend_persistent(env, &owner_key);

    let by_user = user_signing_key(user);
    env.storage().persistent().set(&by_user, key);
    storage::extend_persistent(env, &by_user);

    Ok(previous)
}
