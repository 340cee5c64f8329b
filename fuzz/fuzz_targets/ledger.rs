#![no_main]

use arbitrary::Arbitrary;
use common::{LedgerError, Subsystem};
use identity::{IdentityContract, IdentityContractClient};
use libfuzzer_sys::fuzz_target;
use permissions::{PermissionsContract, PermissionsContractClient};
use records::{RecordsContract, RecordsContractClient};
use registry::{RegistryContract, RegistryContractClient};
use soroban_sdk::{testutils::Address as _, Address, Bytes, BytesN, Env, String};

const PRINCIPALS: usize = 6;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Register { who: u8 },
    SetProvenance { who: u8, provenance: u16 },
    AddRecord { who: u8, hash: u8, metadata: u8 },
    AddRecordByProvider { who: u8, owner: u8, hash: u8 },
    AddSigByProvider { who: u8, hash: u8 },
    AddDelegate { who: u8, delegate: u8 },
    Grant { who: u8, hash: u8, viewer: u8 },
    GrantByDelegate { who: u8, owner: u8, hash: u8, viewer: u8 },
    Revoke { who: u8, hash: u8, viewer: u8 },
    SetPaused { paused: bool },
}

fn hash_of(env: &Env, n: u8) -> BytesN<32> {
    // Slot zero maps to the all-zero hash so validation is exercised too.
    BytesN::from_array(env, &[n % 8; 32])
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let registry = RegistryContractClient::new(&env, &env.register(RegistryContract, ()));
    registry.initialize(&admin);
    let identity = IdentityContractClient::new(&env, &env.register(IdentityContract, ()));
    identity.initialize(&admin);
    let records = RecordsContractClient::new(&env, &env.register(RecordsContract, ()));
    records.initialize(&admin, &registry.address);
    let permissions =
        PermissionsContractClient::new(&env, &env.register(PermissionsContract, ()));
    permissions.initialize(&admin, &registry.address);

    registry.set_contract(&admin, &Subsystem::Identity, &identity.address);
    registry.set_contract(&admin, &Subsystem::Records, &records.address);
    registry.set_contract(&admin, &Subsystem::Permissions, &permissions.address);

    let principals: Vec<Address> = (0..PRINCIPALS).map(|_| Address::generate(&env)).collect();
    let pick = |n: u8| &principals[n as usize % PRINCIPALS];
    let uri = String::from_str(&env, "ipfs://fuzz");

    for action in actions {
        match action {
            FuzzAction::Register { who } => {
                let _ = identity.try_register(pick(who));
            }
            FuzzAction::SetProvenance { who, provenance } => {
                let _ = identity.try_set_provenance(&admin, pick(who), &(provenance as u64));
            }
            FuzzAction::AddRecord { who, hash, metadata } => {
                let metadata = Bytes::from_array(&env, &[metadata; 4]);
                let _ = records.try_add_record(pick(who), &hash_of(&env, hash), &metadata, &uri);
            }
            FuzzAction::AddRecordByProvider { who, owner, hash } => {
                let _ = records.try_add_record_by_provider(
                    pick(who),
                    &hash_of(&env, hash),
                    pick(owner),
                    &Bytes::new(&env),
                    &uri,
                );
            }
            FuzzAction::AddSigByProvider { who, hash } => {
                let _ = records.try_add_sig_by_provider(pick(who), &hash_of(&env, hash));
            }
            FuzzAction::AddDelegate { who, delegate } => {
                let _ = permissions.try_add_delegate(pick(who), pick(delegate));
            }
            FuzzAction::Grant { who, hash, viewer } => {
                let result =
                    permissions.try_grant_access(pick(who), &hash_of(&env, hash), pick(viewer), &uri);
                if result.is_ok() {
                    assert_eq!(records.record_owner(&hash_of(&env, hash)).as_ref(), Some(pick(who)));
                }
            }
            FuzzAction::GrantByDelegate { who, owner, hash, viewer } => {
                let _ = permissions.try_grant_access_by_delegate(
                    pick(who),
                    &hash_of(&env, hash),
                    pick(viewer),
                    pick(owner),
                    &uri,
                );
            }
            FuzzAction::Revoke { who, hash, viewer } => {
                let result =
                    permissions.try_revoke_access(pick(who), &hash_of(&env, hash), pick(viewer));
                if result.is_ok() {
                    assert!(!permissions.check_access(&hash_of(&env, hash), pick(viewer)));
                }
            }
            FuzzAction::SetPaused { paused } => {
                if paused {
                    let _ = records.try_pause(&admin);
                } else {
                    let _ = records.try_unpause(&admin);
                }
            }
        }

        // Every record keeps its count and score consistent with its attestations.
        for slot in 1..8u8 {
            let hash = hash_of(&env, slot);
            if let Ok(Ok(record)) = records.try_get_record(&hash) {
                let attested = principals
                    .iter()
                    .filter(|p| records.sig_exists(&hash, p))
                    .count() as u32;
                assert_eq!(record.attestation_count, attested);
                assert!(record.attestation_count > 0 || record.iris_score == 0);
            }
        }
    }

    // The all-zero hash is never accepted.
    assert_eq!(
        records.try_get_record(&hash_of(&env, 0)),
        Err(Ok(LedgerError::RecordNotFound))
    );
});
