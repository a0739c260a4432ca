//! Shared fixtures for the afya end-to-end and property suites.

use std::sync::Arc;

use afya_engine::{ClauseAggregate, InMemoryClauseStore, StatusCommitter};
use afya_types::{Clause, ClauseNumber, EvidenceRecord, Standard, Status};

/// An ISO 7101 clause at `status`, with or without one evidence record.
pub fn clause_at(number: &str, status: Status, with_evidence: bool) -> Clause {
    let mut clause = Clause::new(
        Standard::iso_7101(),
        ClauseNumber::new(number),
        "Quality risk register maintained and reviewed.",
    );
    clause.status = status;
    if with_evidence {
        clause.evidence.push(EvidenceRecord::new("evidence/register.pdf"));
    }
    clause
}

/// Clauses with the given statuses, numbered 4.1, 4.2, ...
pub fn collection(statuses: &[Status]) -> Vec<Clause> {
    statuses
        .iter()
        .enumerate()
        .map(|(i, s)| clause_at(&format!("4.{}", i + 1), *s, false))
        .collect()
}

/// A committer over an in-memory store holding `clause`, plus the aggregate to drive.
pub fn committer_for(
    clause: Clause,
) -> (StatusCommitter, Arc<InMemoryClauseStore>, ClauseAggregate) {
    let store = Arc::new(InMemoryClauseStore::with_clauses(vec![clause.clone()]));
    (
        StatusCommitter::new(store.clone()),
        store,
        ClauseAggregate::new(clause),
    )
}
