//! Invariants of the aggregator over arbitrary record sets.

use oculyx_cohort::{aggregate, Aggregate};
use oculyx_common::{DiagnosisFlags, DiseaseCode, Record, Sex};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = Record> {
    (
        proptest::option::of(0u32..120),
        proptest::option::of(prop_oneof![Just(Sex::Male), Just(Sex::Female)]),
        proptest::collection::vec(any::<bool>(), DiseaseCode::ALL.len()),
    )
        .prop_map(|(age, sex, bits)| {
            let flags: DiagnosisFlags = DiseaseCode::ALL
                .into_iter()
                .zip(bits)
                .filter_map(|(code, on)| on.then_some(code))
                .collect();
            Record::new(age, sex, flags)
        })
}

proptest! {
    #[test]
    fn sample_size_counts_valid_records(records in proptest::collection::vec(arb_record(), 0..60)) {
        let expected = records
            .iter()
            .filter(|r| r.age.is_some() && r.sex.is_some() && r.diagnosis.any())
            .count();
        match aggregate(&records) {
            Aggregate::Summary(s) => {
                prop_assert_eq!(s.sample_size, expected);
                prop_assert_eq!(s.excluded, records.len() - expected);
            }
            Aggregate::InsufficientData { excluded } => {
                prop_assert_eq!(expected, 0);
                prop_assert_eq!(excluded, records.len());
            }
        }
    }

    #[test]
    fn buckets_partition_the_sample(records in proptest::collection::vec(arb_record(), 1..60)) {
        if let Aggregate::Summary(s) = aggregate(&records) {
            let bucketed: usize = s.age_buckets.iter().map(|b| b.count).sum();
            prop_assert_eq!(bucketed, s.sample_size);
            prop_assert_eq!(s.age_buckets.len(), 5);
            for pair in s.age_buckets.windows(2) {
                prop_assert!(pair[0].upper_bound < pair[1].lower_bound);
            }
        }
    }

    #[test]
    fn sex_counts_sum_to_sample(records in proptest::collection::vec(arb_record(), 1..60)) {
        if let Aggregate::Summary(s) = aggregate(&records) {
            prop_assert_eq!(s.sex_counts.total(), s.sample_size);
        }
    }

    #[test]
    fn aggregation_is_idempotent(records in proptest::collection::vec(arb_record(), 0..60)) {
        let before = records.clone();
        let first = aggregate(&records);
        let second = aggregate(&records);
        prop_assert_eq!(first, second);
        prop_assert_eq!(records, before);
    }

    #[test]
    fn mean_age_lies_within_observed_range(records in proptest::collection::vec(arb_record(), 1..60)) {
        if let Aggregate::Summary(s) = aggregate(&records) {
            prop_assert!(s.age_min <= s.mean_age && s.mean_age <= s.age_max);
        }
    }
}
