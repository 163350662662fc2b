use chainwatch_core::models::{Coordinate, LocationRecord, Site};
use chainwatch_integrity::{correct, score, validate};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    prop_oneof![
        any::<f64>().prop_map(Coordinate::Number),
        "[-+]?[0-9]{1,3}(\\.[0-9]{1,6})?".prop_map(Coordinate::Text),
        ".{0,12}".prop_map(Coordinate::Text),
        Just(Coordinate::Missing),
    ]
}

fn site() -> impl Strategy<Value = Site> {
    prop_oneof![
        proptest::option::of(-1_000i64..1_000).prop_map(|stock| Site::Store { stock }),
        proptest::option::of(-1_000i64..10_000)
            .prop_map(|capacity| Site::DistributionCenter { capacity }),
    ]
}

fn record() -> impl Strategy<Value = LocationRecord> {
    (
        "[a-z0-9-]{1,8}",
        proptest::option::of("[ \\ta-zA-Z]{0,20}"),
        coordinate(),
        coordinate(),
        site(),
    )
        .prop_map(|(id, name, latitude, longitude, site)| LocationRecord {
            id,
            name,
            latitude,
            longitude,
            site,
        })
}

fn invalid_record() -> impl Strategy<Value = LocationRecord> {
    record().prop_map(|mut r| {
        r.latitude = Coordinate::text("not-a-number");
        r
    })
}

proptest! {
    #[test]
    fn correction_is_idempotent(batch in prop::collection::vec(record(), 0..20)) {
        let first = correct(&batch);
        let second = correct(&first.corrected);
        prop_assert_eq!(second.correction_count, 0);
        prop_assert_eq!(&second.corrected, &first.corrected);
    }

    #[test]
    fn corrected_batches_validate_clean(batch in prop::collection::vec(record(), 0..20)) {
        let corrected = correct(&batch).corrected;
        let outcome = validate(&corrected);
        prop_assert!(outcome.is_clean());
        prop_assert_eq!(outcome.report.score, 100);
    }

    #[test]
    fn correction_preserves_length_order_and_identity(batch in prop::collection::vec(record(), 0..20)) {
        let corrected = correct(&batch).corrected;
        prop_assert_eq!(corrected.len(), batch.len());
        for (before, after) in batch.iter().zip(&corrected) {
            prop_assert_eq!(&before.id, &after.id);
            prop_assert_eq!(before.kind(), after.kind());
        }
    }

    #[test]
    fn score_is_bounded(batch in prop::collection::vec(record(), 0..30)) {
        let report = score(&batch);
        prop_assert!(report.score <= 100);
        prop_assert!(report.valid_records <= report.total_records);
        prop_assert_eq!(report.issues_found, validate(&batch).issues.len());
    }

    #[test]
    fn adding_an_invalid_record_never_raises_score(
        batch in prop::collection::vec(record(), 0..30),
        bad in invalid_record(),
    ) {
        let before = score(&batch).score;
        let mut extended = batch.clone();
        extended.push(bad);
        prop_assert!(score(&extended).score <= before);
    }

    #[test]
    fn correction_count_matches_records_with_fixes(batch in prop::collection::vec(record(), 0..20)) {
        let outcome = correct(&batch);
        let touched: std::collections::HashSet<_> =
            outcome.applied.iter().map(|a| a.record_id.clone()).collect();
        // ids may repeat across generated records, so touched is a lower bound
        prop_assert!(touched.len() <= outcome.correction_count);
        prop_assert!(outcome.correction_count <= batch.len());
        prop_assert_eq!(outcome.correction_count == 0, outcome.applied.is_empty());
    }
}
