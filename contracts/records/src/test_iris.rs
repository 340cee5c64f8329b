#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::test::setup;
use common::Subsystem;
use scoring::{ScoringContract, ScoringContractClient};
use soroban_sdk::{contract, contractimpl, testutils::Address as _};

/// Score provider that reports `u64::MAX` for every record.
#[contract]
pub struct SaturatingScores;

#[contractimpl]
impl SaturatingScores {
    pub fn score(_env: Env, _data_hash: BytesN<32>) -> u64 {
        u64::MAX
    }
}

fn deploy_scoring(s: &crate::test::Setup) -> ScoringContractClient<'static> {
    let scoring = ScoringContractClient::new(&s.env, &s.env.register(ScoringContract, ()));
    scoring.initialize(&s.admin);
    scoring
}

#[test]
fn test_update_iris_adds_external_score() {
    let s = setup();
    let user = s.user();
    let provider = s.provider(2);
    let data_hash = s.hash("doc");
    s.records
        .add_record(&user, &data_hash, &s.bytes("KEYWORDS"), &s.uri("uri1"));
    s.records.add_sig_by_provider(&provider, &data_hash);

    let scoring = deploy_scoring(&s);
    scoring.set_score(&s.admin, &data_hash, &40);

    s.records
        .update_iris(&s.admin, &data_hash, &Some(scoring.address.clone()));

    let record = s.records.get_record(&data_hash);
    assert_eq!(record.iris_score, 42);
    // External scores are not attestations.
    assert_eq!(record.attestation_count, 1);
    assert!(s.records.is_scored(&data_hash, &scoring.address));
}

#[test]
fn test_update_iris_once_per_provider() {
    let s = setup();
    let user = s.user();
    let data_hash = s.hash("doc");
    s.records
        .add_record(&user, &data_hash, &s.bytes("KEYWORDS"), &s.uri("uri1"));

    let first = deploy_scoring(&s);
    let second = deploy_scoring(&s);
    first.set_score(&s.admin, &data_hash, &3);
    second.set_score(&s.admin, &data_hash, &4);

    s.records.update_iris(&s.admin, &data_hash, &Some(first.address.clone()));
    assert_eq!(
        s.records
            .try_update_iris(&s.admin, &data_hash, &Some(first.address.clone())),
        Err(Ok(LedgerError::AlreadyScored))
    );

    s.records.update_iris(&s.admin, &data_hash, &Some(second.address.clone()));
    assert_eq!(s.records.get_record(&data_hash).iris_score, 7);
}

#[test]
fn test_update_iris_rejects_zero_score() {
    let s = setup();
    let user = s.user();
    let data_hash = s.hash("doc");
    s.records
        .add_record(&user, &data_hash, &s.bytes("KEYWORDS"), &s.uri("uri1"));

    let scoring = deploy_scoring(&s);
    assert_eq!(
        s.records
            .try_update_iris(&s.admin, &data_hash, &Some(scoring.address.clone())),
        Err(Ok(LedgerError::InvalidScore))
    );
    // A rejected score leaves the provider free to apply later.
    assert!(!s.records.is_scored(&data_hash, &scoring.address));

    scoring.set_score(&s.admin, &data_hash, &1);
    s.records
        .update_iris(&s.admin, &data_hash, &Some(scoring.address.clone()));
    assert_eq!(s.records.get_record(&data_hash).iris_score, 1);
}

#[test]
fn test_update_iris_overflow_is_rejected() {
    let s = setup();
    let user = s.user();
    let provider = s.provider(1);
    let data_hash = s.hash("doc");
    s.records
        .add_record(&user, &data_hash, &s.bytes("KEYWORDS"), &s.uri("uri1"));
    s.records.add_sig_by_provider(&provider, &data_hash);

    let saturating = s.env.register(SaturatingScores, ());
    assert_eq!(
        s.records.try_update_iris(&s.admin, &data_hash, &Some(saturating)),
        Err(Ok(LedgerError::InvalidScore))
    );
    assert_eq!(s.records.get_record(&data_hash).iris_score, 1);
}

#[test]
fn test_update_iris_guards() {
    let s = setup();
    let user = s.user();
    let data_hash = s.hash("doc");
    let scoring = deploy_scoring(&s);

    assert_eq!(
        s.records
            .try_update_iris(&s.admin, &data_hash, &Some(scoring.address.clone())),
        Err(Ok(LedgerError::RecordNotFound))
    );

    s.records
        .add_record(&user, &data_hash, &s.bytes("KEYWORDS"), &s.uri("uri1"));
    scoring.set_score(&s.admin, &data_hash, &5);
    assert_eq!(
        s.records.try_update_iris(&user, &data_hash, &Some(scoring.address.clone())),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_eq!(
        s.records.try_update_iris(
            &Address::generate(&s.env),
            &data_hash,
            &Some(scoring.address.clone())
        ),
        Err(Ok(LedgerError::Unauthorized))
    );
}

#[test]
fn test_update_iris_uses_registered_scoring() {
    let s = setup();
    let user = s.user();
    let data_hash = s.hash("doc");
    s.records
        .add_record(&user, &data_hash, &s.bytes("KEYWORDS"), &s.uri("uri1"));

    assert_eq!(
        s.records.try_update_iris(&s.admin, &data_hash, &None),
        Err(Ok(LedgerError::SubsystemNotFound))
    );

    let first = deploy_scoring(&s);
    first.set_score(&s.admin, &data_hash, &6);
    s.registry
        .set_contract(&s.admin, &Subsystem::Scoring, &first.address);

    s.records.update_iris(&s.admin, &data_hash, &None);
    assert!(s.records.is_scored(&data_hash, &first.address));
    assert_eq!(
        s.records.try_update_iris(&s.admin, &data_hash, &None),
        Err(Ok(LedgerError::AlreadyScored))
    );

    // Swapping the registered provider lets the new one apply once.
    let second = deploy_scoring(&s);
    second.set_score(&s.admin, &data_hash, &4);
    s.registry
        .set_contract(&s.admin, &Subsystem::Scoring, &second.address);

    s.records.update_iris(&s.admin, &data_hash, &None);
    assert_eq!(s.records.get_record(&data_hash).iris_score, 10);
}
