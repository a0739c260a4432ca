//! End-to-end test: seed a catalogue into a store, progress some clauses and
//! score the register under every policy.

use std::sync::Arc;

use afya_engine::{
    evidence_shortfall, ClauseStore, InMemoryClauseStore, ScoreReport, ScoringPolicy,
    StatusCommitter,
};
use afya_types::{EvidenceRecord, Standard, Status};

#[tokio::test]
async fn seeded_register_scores() {
    let standard = Standard::iso_27001();
    let store = Arc::new(InMemoryClauseStore::new());
    for clause in afya_catalog::seed(&standard).unwrap() {
        store.insert(clause).await.unwrap();
    }
    let committer = StatusCommitter::new(store.clone());

    let clauses = store.list(&standard).await.unwrap();
    assert_eq!(clauses.len(), 23);
    let fresh = ScoreReport::from_clauses(&clauses);
    assert_eq!(fresh.weighted_mean, 0.0);
    assert_eq!(fresh.top_tier_percent, 0.0);
    assert_eq!(fresh.rounded_points, 0);
    assert_eq!(fresh.breakdown.get(Status::NotImplemented), 23);

    // First clause all the way to O.
    let mut agg = committer.load(clauses[0].id).await.unwrap();
    committer
        .attach_evidence(&mut agg, EvidenceRecord::new("https://docs.example.org/isms-scope"))
        .await
        .unwrap();
    for next in [
        Status::Planned,
        Status::InProgress,
        Status::MostlyImplemented,
        Status::Optimized,
    ] {
        committer.change_status(&mut agg, next).await.unwrap();
    }

    let clauses = store.list(&standard).await.unwrap();
    let report = ScoreReport::from_clauses(&clauses);
    assert_eq!(report.breakdown.get(Status::Optimized), 1);
    assert!((report.weighted_mean - 100.0 / 23.0).abs() < 1e-9);
    assert!((report.top_tier_percent - 100.0 / 23.0).abs() < 1e-9);
    // 4 / 92 = 4.35%
    assert_eq!(report.rounded_points, 4);

    for policy in ScoringPolicy::ALL {
        let score = policy.apply(&clauses);
        assert!((0.0..=100.0).contains(&score), "{policy} out of range");
    }
    assert!(evidence_shortfall(&clauses).is_empty());
}

#[test]
fn policies_disagree_on_mixed_register() {
    let clauses = afya_tests::collection(&[
        Status::Planned,
        Status::InProgress,
        Status::MostlyImplemented,
    ]);
    assert_eq!(ScoringPolicy::WeightedMean.apply(&clauses), 50.0);
    assert!((ScoringPolicy::TopTierPercent.apply(&clauses) - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(
        serde_json::to_value(ScoringPolicy::TopTierPercent).unwrap(),
        serde_json::json!("top-tier-percent")
    );
}
