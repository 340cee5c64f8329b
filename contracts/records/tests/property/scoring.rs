#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for iris score aggregation.
//!
//! Invariants tested:
//! - After N distinct attestations the score is the sum of the attesters'
//!   provenance at the time each attested
//! - The score never decreases, even when provenance is lowered afterwards
//! - The attestation count equals the number of distinct attesters

use crate::common::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_score_is_sum_of_provenance(
        provenances in proptest::collection::vec(1u64..1_000u64, 1..6),
    ) {
        let ctx = setup_test_env();
        let owner = create_user(&ctx);
        let hash = data_hash(&ctx, 42);
        create_record(&ctx, &owner, &hash, "meta");

        let mut expected = 0u64;
        let mut previous = 0u64;
        for (i, provenance) in provenances.iter().enumerate() {
            let (provider, key) = create_signing_provider(&ctx, 100 + i as u8, *provenance);
            ctx.records.add_sig(
                &owner,
                &hash,
                &sign_record(&ctx, &key, &hash),
            );
            expected += provenance;

            // Lowering provenance later never rewrites the accumulated score.
            ctx.identity.set_provenance(&ctx.admin, &provider, &0);

            let score = ctx.records.get_record(&hash).iris_score;
            prop_assert!(score >= previous);
            previous = score;
        }

        let record = ctx.records.get_record(&hash);
        prop_assert_eq!(record.iris_score, expected);
        prop_assert_eq!(record.attestation_count as usize, provenances.len());
    }

    #[test]
    fn prop_direct_attestations_match_signed_ones(
        provenances in proptest::collection::vec(1u64..1_000u64, 1..6),
    ) {
        let ctx = setup_test_env();
        let owner = create_user(&ctx);
        let signed = data_hash(&ctx, 1);
        let direct = data_hash(&ctx, 2);
        create_record(&ctx, &owner, &signed, "meta");
        create_record(&ctx, &owner, &direct, "meta");

        for (i, provenance) in provenances.iter().enumerate() {
            let (provider, key) = create_signing_provider(&ctx, 150 + i as u8, *provenance);
            ctx.records.add_sig(
                &owner,
                &signed,
                &sign_record(&ctx, &key, &signed),
            );
            ctx.records.add_sig_by_provider(&provider, &direct);
        }

        prop_assert_eq!(
            ctx.records.get_record(&signed).iris_score,
            ctx.records.get_record(&direct).iris_score
        );
    }
}
