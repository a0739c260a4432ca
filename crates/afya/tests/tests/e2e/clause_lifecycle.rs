//! End-to-end test: one clause walked from NI to MI through the committer.
//!
//! Each illegal request is rejected without touching the store, and the
//! upgrade to MI only lands once evidence has been uploaded.

use afya_engine::{ClauseStore, CommitError, TransitionError};
use afya_tests::{clause_at, committer_for};
use afya_types::{EvidenceRecord, Status};

#[tokio::test]
async fn walk_to_mostly_implemented() {
    let (committer, store, mut agg) =
        committer_for(clause_at("8.3", Status::NotImplemented, false));

    // NI -> P
    committer.change_status(&mut agg, Status::Planned).await.unwrap();
    assert_eq!(agg.status(), Status::Planned);

    // P -> MI skips a level
    let err = committer
        .change_status(&mut agg, Status::MostlyImplemented)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CommitError::Rejected(TransitionError::IllegalStep {
            from: Status::Planned,
            to: Status::MostlyImplemented,
        })
    );
    assert_eq!(agg.status(), Status::Planned);

    // P -> IP
    committer
        .change_status(&mut agg, Status::InProgress)
        .await
        .unwrap();

    // IP -> O skips a level
    assert!(matches!(
        committer.change_status(&mut agg, Status::Optimized).await,
        Err(CommitError::Rejected(TransitionError::IllegalStep { .. }))
    ));

    // IP -> MI without evidence
    assert_eq!(
        committer
            .change_status(&mut agg, Status::MostlyImplemented)
            .await
            .unwrap_err(),
        CommitError::Rejected(TransitionError::EvidenceRequired(Status::MostlyImplemented))
    );
    assert_eq!(agg.status(), Status::InProgress);

    committer
        .attach_evidence(&mut agg, EvidenceRecord::new("evidence/waste-audit-2024.pdf"))
        .await
        .unwrap();

    // IP -> MI with evidence
    let record = committer
        .change_status(&mut agg, Status::MostlyImplemented)
        .await
        .unwrap();
    assert_eq!(record.status, Status::MostlyImplemented);

    let stored = store.get(agg.id()).await.unwrap();
    assert_eq!(stored.status, Status::MostlyImplemented);
    assert_eq!(stored.evidence.len(), 1);
}

#[tokio::test]
async fn downgrades_ignore_evidence() {
    let (committer, _store, mut agg) = committer_for(clause_at("9.1", Status::Optimized, true));

    committer
        .remove_evidence(&mut agg, &EvidenceRecord::new("evidence/register.pdf"))
        .await
        .unwrap();
    assert!(!agg.has_evidence());
    assert_eq!(agg.status(), Status::Optimized);

    for next in [
        Status::MostlyImplemented,
        Status::InProgress,
        Status::Planned,
        Status::NotImplemented,
    ] {
        committer.change_status(&mut agg, next).await.unwrap();
    }
    assert_eq!(agg.status(), Status::NotImplemented);
    assert_eq!(agg.allowed_targets(), vec![Status::Planned]);
}

#[tokio::test]
async fn same_status_is_rejected() {
    let (committer, _store, mut agg) = committer_for(clause_at("5.1", Status::InProgress, true));
    assert_eq!(
        committer
            .change_status(&mut agg, Status::InProgress)
            .await
            .unwrap_err(),
        CommitError::Rejected(TransitionError::NoOpTransition(Status::InProgress))
    );
}
