#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for record and attestation uniqueness.
//!
//! Invariants tested:
//! - A data hash is accepted by at most one creation call, whatever the path
//! - The first record's owner, metadata and uri survive every rejected retry
//! - An attester is counted at most once per record, however often it retries

use crate::common::*;
use ::common::LedgerError;
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::{Bytes, String};

/// The three ways a record can be created.
#[derive(Arbitrary, Clone, Copy, Debug)]
enum CreatePath {
    Owner,
    Provider,
    Admin,
}

proptest! {
    #[test]
    fn prop_data_hash_accepted_once(
        seed in 1u32..=u32::MAX,
        first in any::<CreatePath>(),
        retries in proptest::collection::vec(any::<CreatePath>(), 1..6),
    ) {
        let ctx = setup_test_env();
        let owner = create_user(&ctx);
        let (provider, _key) = create_signing_provider(&ctx, 7, 1);
        let hash = data_hash(&ctx, seed);

        let create = |path: CreatePath, metadata: &str, uri: &str| {
            let metadata = Bytes::from_slice(&ctx.env, metadata.as_bytes());
            let uri = String::from_str(&ctx.env, uri);
            match path {
                CreatePath::Owner => ctx.records.try_add_record(&owner, &hash, &metadata, &uri),
                CreatePath::Provider => ctx
                    .records
                    .try_add_record_by_provider(&provider, &hash, &owner, &metadata, &uri),
                CreatePath::Admin => ctx
                    .records
                    .try_add_record_by_admin(&ctx.admin, &hash, &owner, &None, &metadata, &uri),
            }
        };

        prop_assert!(create(first, "original", "uri-original").is_ok());
        for path in retries {
            prop_assert_eq!(
                create(path, "forged", "uri-forged"),
                Err(Ok(LedgerError::DuplicateRecord))
            );
        }

        let record = ctx.records.get_record(&hash);
        prop_assert_eq!(record.owner, owner);
        prop_assert_eq!(record.data_uri, String::from_str(&ctx.env, "uri-original"));
        let original: soroban_sdk::BytesN<32> = ctx
            .env
            .crypto()
            .keccak256(&Bytes::from_slice(&ctx.env, b"original"))
            .into();
        prop_assert_eq!(record.metadata_hash, original);
    }

    #[test]
    fn prop_attester_counted_once(resubmissions in 1usize..5usize) {
        let ctx = setup_test_env();
        let owner = create_user(&ctx);
        let (provider, key) = create_signing_provider(&ctx, 8, 3);
        let hash = data_hash(&ctx, 1);
        create_record(&ctx, &owner, &hash, "meta");

        let signature = sign_record(&ctx, &key, &hash);
        ctx.records.add_sig(&owner, &hash, &signature);

        for _ in 0..resubmissions {
            prop_assert_eq!(
                ctx.records.try_add_sig(&owner, &hash, &signature),
                Err(Ok(LedgerError::DuplicateSignature))
            );
            prop_assert_eq!(
                ctx.records.try_add_sig_by_provider(&provider, &hash),
                Err(Ok(LedgerError::DuplicateSignature))
            );
        }

        let record = ctx.records.get_record(&hash);
        prop_assert_eq!(record.attestation_count, 1);
        prop_assert_eq!(record.iris_score, 3);
    }
}
