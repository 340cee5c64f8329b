#![allow(dead_code)]

use ::common::Subsystem;
use identity::{IdentityContract, IdentityContractClient};
use permissions::{PermissionsContract, PermissionsContractClient};
use records::{RecordsContract, RecordsContractClient};
use registry::{RegistryContract, RegistryContractClient};
use soroban_sdk::{testutils::Address as _, Address, Bytes, BytesN, Env, String};

pub struct TestContext {
    pub env: Env,
    pub registry: RegistryContractClient<'static>,
    pub identity: IdentityContractClient<'static>,
    pub records: RecordsContractClient<'static>,
    pub permissions: PermissionsContractClient<'static>,
    pub admin: Address,
}

/// Deploys the full ledger and registers every subsystem with the registry.
pub fn setup_test_env() -> TestContext {
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

    TestContext {
        env,
        registry,
        identity,
        records,
        permissions,
        admin,
    }
}

pub fn create_user(ctx: &TestContext) -> Address {
    let user = Address::generate(&ctx.env);
    ctx.identity.register(&user);
    user
}

pub fn create_provider(ctx: &TestContext, provenance: u64) -> Address {
    let provider = create_user(ctx);
    ctx.identity
        .set_provenance(&ctx.admin, &provider, &provenance);
    provider
}

pub fn data_hash(ctx: &TestContext, n: u8) -> BytesN<32> {
    BytesN::from_array(&ctx.env, &[n; 32])
}

pub fn uri(ctx: &TestContext, value: &str) -> String {
    String::from_str(&ctx.env, value)
}

pub fn create_record(ctx: &TestContext, owner: &Address, hash: &BytesN<32>) {
    ctx.records.add_record(
        owner,
        hash,
        &Bytes::from_slice(&ctx.env, b"KEYWORDS"),
        &uri(ctx, "ipfs://owner-copy"),
    );
}
