//! Property-based tests for site scoring and ranking.
//!
//! # Invariants tested
//!
//! - **Score bounds:** totals for finite locations stay within `0.0..=1.0`.
//! - **Ordering:** ranked rows are sorted by descending total score.
//! - **Length:** ranking returns `min(n, candidates)` rows.
//! - **Degradation:** community impact is never negative, even when the
//!   lookup fails.

use eih_core::{DemographicDataset, DemographicRecord, Location};
use eih_scorer::{FixedTract, RandomSample, SiteScorer};
use proptest::prelude::*;

/// Upper score bound allowing for floating-point rounding in the weighted sum.
const SCORE_CEILING: f64 = 1.0 + 1e-12;

fn location_strategy() -> impl Strategy<Value = Location> {
    (37.1_f64..=37.5, -122.1_f64..=-121.6).prop_map(|(lat, lon)| Location::new(lat, lon))
}

fn record_strategy() -> impl Strategy<Value = DemographicRecord> {
    (0.0_f64..=20_000.0, 0.0_f64..=60.0, 0.0_f64..=100.0)
        .prop_map(|(density, poverty, ces)| DemographicRecord::new(density, poverty, ces))
}

fn dataset_strategy() -> impl Strategy<Value = DemographicDataset> {
    prop::collection::vec(record_strategy(), 1..8).prop_map(DemographicDataset::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn totals_stay_in_unit_range(
        location in location_strategy(),
        dataset in dataset_strategy(),
        seed in any::<u64>(),
    ) {
        let scorer = SiteScorer::with_defaults().with_lookup(RandomSample::seeded(seed));
        let result = scorer.score_location(location, &dataset);
        prop_assert!((0.0..=SCORE_CEILING).contains(&result.total_score));
        prop_assert!((0.0..=SCORE_CEILING).contains(&result.component_scores.community_impact));
    }

    #[test]
    fn ranking_is_sorted_and_truncated(
        candidates in prop::collection::vec(location_strategy(), 0..12),
        dataset in dataset_strategy(),
        n in 0_usize..15,
    ) {
        let scorer = SiteScorer::with_defaults().with_lookup(FixedTract::new(0));
        let rows = scorer.get_top_locations(&candidates, &dataset, n);
        prop_assert_eq!(rows.len(), n.min(candidates.len()));
        for pair in rows.windows(2) {
            if let [a, b] = pair {
                prop_assert!(a.total_score >= b.total_score);
            }
        }
    }

    #[test]
    fn failed_lookups_never_go_negative(location in location_strategy(), index in 8_usize..64) {
        let scorer = SiteScorer::with_defaults().with_lookup(FixedTract::new(index));
        let dataset = DemographicDataset::new(vec![DemographicRecord::new(1.0, 1.0, 1.0)]);
        prop_assert_eq!(scorer.calculate_community_impact_score(location, &dataset), 0.0);
    }
}
