//! End-to-end test: a failed write leaves both the aggregate and the store
//! at the previous status, and a later retry succeeds.

use std::sync::Arc;

use afya_engine::{
    ClauseAggregate, ClauseStore, CommitError, FlakyClauseStore, InMemoryClauseStore,
    StatusCommitter,
};
use afya_tests::clause_at;
use afya_types::Status;

#[tokio::test]
async fn rollback_then_retry() {
    let clause = clause_at("7.3", Status::MostlyImplemented, true);
    let store = Arc::new(FlakyClauseStore::failing(
        InMemoryClauseStore::with_clauses(vec![clause.clone()]),
        "database is locked",
    ));
    let committer = StatusCommitter::new(store.clone());
    let mut agg = ClauseAggregate::new(clause.clone());

    let err = committer
        .change_status(&mut agg, Status::Optimized)
        .await
        .unwrap_err();
    match err {
        CommitError::PersistenceFailure(message) => assert!(message.contains("database is locked")),
        other => panic!("expected persistence failure, got {other:?}"),
    }
    assert_eq!(agg.status(), Status::MostlyImplemented);
    assert_eq!(
        store.get(clause.id).await.unwrap().status,
        Status::MostlyImplemented
    );
    assert_eq!(store.writes_attempted(), 1);

    store.set_failing(false);
    let record = committer
        .change_status(&mut agg, Status::Optimized)
        .await
        .unwrap();
    assert_eq!(record.status, Status::Optimized);
    assert_eq!(agg.clause(), &record);
}

#[tokio::test]
async fn failed_owner_edit_keeps_local_owner() {
    let clause = clause_at("10.1", Status::Planned, false);
    let store = Arc::new(FlakyClauseStore::failing(
        InMemoryClauseStore::with_clauses(vec![clause.clone()]),
        "read-only filesystem",
    ));
    let committer = StatusCommitter::new(store);
    let mut agg = ClauseAggregate::new(clause);

    assert!(committer.set_owner(&mut agg, "Quality Lead").await.is_err());
    assert!(agg.clause().is_unassigned());
}
