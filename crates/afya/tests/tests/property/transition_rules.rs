//! Property tests: the status lattice only ever moves one step, and MI/O are
//! never entered upward without evidence.

use afya_engine::{allowed_targets, is_valid_transition, ClauseAggregate, TransitionError};
use afya_tests::clause_at;
use afya_types::{are_adjacent, Status};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_status() -> impl Strategy<Value = Status> {
    prop::sample::select(Status::ALL.to_vec())
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn validity_is_symmetric_adjacency(a in arb_status(), b in arb_status()) {
        prop_assert_eq!(is_valid_transition(a, b), is_valid_transition(b, a));
        prop_assert_eq!(is_valid_transition(a, b), are_adjacent(a, b));
        prop_assert!(!is_valid_transition(a, a));
    }

    #[test]
    fn allowed_targets_are_accepted(current in arb_status(), evidence in any::<bool>()) {
        let agg = ClauseAggregate::new(clause_at("6.1", current, evidence));
        for target in allowed_targets(current, evidence) {
            prop_assert!(agg.check_status_change(target).is_ok());
        }
        for target in Status::ALL {
            if !allowed_targets(current, evidence).contains(&target) {
                prop_assert!(agg.check_status_change(target).is_err());
            }
        }
    }

    #[test]
    fn random_walk_without_evidence_stays_below_mi(
        steps in prop::collection::vec(arb_status(), 0..50)
    ) {
        let mut agg = ClauseAggregate::new(clause_at("8.1", Status::NotImplemented, false));
        for next in steps {
            let before = agg.status();
            match agg.attempt_status_change(next) {
                Ok(intent) => {
                    prop_assert_eq!(intent.previous, before);
                    prop_assert_eq!(agg.status(), next);
                    prop_assert_eq!(before.index().abs_diff(next.index()), 1);
                }
                Err(TransitionError::EvidenceRequired(s)) => {
                    prop_assert!(s == Status::MostlyImplemented || s == Status::Optimized);
                    prop_assert_eq!(agg.status(), before);
                }
                Err(_) => prop_assert_eq!(agg.status(), before),
            }
            prop_assert!(agg.status() <= Status::InProgress);
        }
    }

    #[test]
    fn revert_restores_previous(current in arb_status(), next in arb_status()) {
        let mut agg = ClauseAggregate::new(clause_at("9.2", current, true));
        if let Ok(intent) = agg.attempt_status_change(next) {
            prop_assert!(agg.revert(&intent));
            prop_assert_eq!(agg.status(), current);
        }
    }
}
