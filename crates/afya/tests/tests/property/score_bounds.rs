//! Property tests: every score stays within [0, 100] and agrees with its
//! closed form.

use afya_engine::{
    rounded_points_score, top_tier_percent_score, weighted_mean_score, StatusBreakdown,
};
use afya_tests::collection;
use afya_types::Status;
use proptest::prelude::*;

fn arb_statuses() -> impl Strategy<Value = Vec<Status>> {
    prop::collection::vec(prop::sample::select(Status::ALL.to_vec()), 0..60)
}

proptest! {
    #[test]
    fn scores_are_bounded(statuses in arb_statuses()) {
        let clauses = collection(&statuses);
        let mean = weighted_mean_score(&clauses);
        let top = top_tier_percent_score(&clauses);
        prop_assert!((0.0..=100.0).contains(&mean));
        prop_assert!((0.0..=100.0).contains(&top));
        prop_assert!(rounded_points_score(&clauses) <= 100);
    }

    #[test]
    fn weighted_mean_matches_weights(statuses in arb_statuses()) {
        let clauses = collection(&statuses);
        let expected = if statuses.is_empty() {
            0.0
        } else {
            statuses.iter().map(|s| f64::from(s.weight())).sum::<f64>() / statuses.len() as f64
        };
        prop_assert!((weighted_mean_score(&clauses) - expected).abs() < 1e-9);
        prop_assert!((f64::from(rounded_points_score(&clauses)) - expected).abs() <= 0.5);
    }

    #[test]
    fn breakdown_counts_every_clause(statuses in arb_statuses()) {
        let clauses = collection(&statuses);
        let breakdown = StatusBreakdown::from_clauses(&clauses);
        prop_assert_eq!(breakdown.total(), statuses.len());
        let top = breakdown.get(Status::MostlyImplemented) + breakdown.get(Status::Optimized);
        let expected = if statuses.is_empty() {
            0.0
        } else {
            100.0 * top as f64 / statuses.len() as f64
        };
        prop_assert!((top_tier_percent_score(&clauses) - expected).abs() < 1e-9);
    }
}
