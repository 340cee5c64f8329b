#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::test::setup;
use soroban_sdk::testutils::Address as _;

#[test]
fn test_pause_blocks_every_write() {
    let s = setup();
    let user = s.user();
    let (_provider, key) = s.signing_provider(31, 1);
    let data_hash = s.hash("doc");
    s.records
        .add_record(&user, &data_hash, &s.bytes("KEYWORDS"), &s.uri("uri1"));
    let signature = s.sign(&key, &data_hash);

    s.records.pause(&s.admin);
    assert!(s.records.is_paused());

    let other = s.hash("other");
    assert_eq!(
        s.records
            .try_add_record(&user, &other, &s.bytes("m"), &s.uri("u")),
        Err(Ok(LedgerError::Paused))
    );
    assert_eq!(
        s.records.try_add_record_by_provider(
            &user,
            &other,
            &user,
            &s.bytes("m"),
            &s.uri("u")
        ),
        Err(Ok(LedgerError::Paused))
    );
    assert_eq!(
        s.records.try_add_record_by_admin(
            &s.admin,
            &other,
            &user,
            &None,
            &s.bytes("m"),
            &s.uri("u")
        ),
        Err(Ok(LedgerError::Paused))
    );
    assert_eq!(
        s.records.try_add_sig(&user, &data_hash, &signature),
        Err(Ok(LedgerError::Paused))
    );
    assert_eq!(
        s.records.try_add_sig_by_provider(&user, &data_hash),
        Err(Ok(LedgerError::Paused))
    );
    assert_eq!(
        s.records
            .try_update_iris(&s.admin, &data_hash, &Some(Address::generate(&s.env))),
        Err(Ok(LedgerError::Paused))
    );

    // Queries keep answering.
    assert_eq!(s.records.get_record(&data_hash).owner, user);
    assert_eq!(s.records.record_uri(&data_hash), Some(s.uri("uri1")));

    s.records.unpause(&s.admin);
    assert!(!s.records.is_paused());
    s.records.add_sig(&user, &data_hash, &signature);
    s.records
        .add_record(&user, &other, &s.bytes("m"), &s.uri("u"));
}

#[test]
fn test_only_admin_pauses() {
    let s = setup();
    let user = s.user();
    assert_eq!(
        s.records.try_pause(&user),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert!(!s.records.is_paused());
}

#[test]
fn test_transfer_admin() {
    let s = setup();
    let successor = Address::generate(&s.env);

    s.records.transfer_admin(&s.admin, &successor);
    assert_eq!(s.records.get_admin(), successor);
    assert_eq!(
        s.records.try_pause(&s.admin),
        Err(Ok(LedgerError::Unauthorized))
    );
    s.records.pause(&successor);
}

#[test]
fn test_freeze_is_terminal() {
    let s = setup();
    let user = s.user();
    let data_hash = s.hash("doc");
    s.records
        .add_record(&user, &data_hash, &s.bytes("KEYWORDS"), &s.uri("uri1"));

    assert_eq!(
        s.records.try_freeze(&user),
        Err(Ok(LedgerError::Unauthorized))
    );
    s.records.freeze(&s.admin);
    assert!(s.records.is_frozen());

    assert_eq!(
        s.records
            .try_add_record(&user, &s.hash("next"), &s.bytes("m"), &s.uri("u")),
        Err(Ok(LedgerError::Frozen))
    );
    assert_eq!(s.records.try_unpause(&s.admin), Err(Ok(LedgerError::Frozen)));
    assert_eq!(s.records.try_pause(&s.admin), Err(Ok(LedgerError::Frozen)));
    assert_eq!(
        s.records
            .try_transfer_admin(&s.admin, &Address::generate(&s.env)),
        Err(Ok(LedgerError::Frozen))
    );
    assert_eq!(s.records.try_freeze(&s.admin), Err(Ok(LedgerError::Frozen)));

    assert_eq!(s.records.get_record(&data_hash).owner, user);
}
