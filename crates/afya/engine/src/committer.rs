use std::sync::Arc;

use afya_types::{Clause, ClauseId, EvidenceRecord, Status};
use tracing::{debug, info, warn};

use crate::aggregate::ClauseAggregate;
use crate::error::CommitError;
use crate::store::ClauseStore;

/// Drives changes on a [`ClauseAggregate`] through a [`ClauseStore`].
///
/// Status changes are optimistic: the aggregate mutates first, the write is
/// issued, and the local status is rolled back if the store fails. On
/// success the store's record is adopted verbatim. Ungated edits only land
/// locally once the store has acknowledged them.
pub struct StatusCommitter {
    store: Arc<dyn ClauseStore>,
}

impl StatusCommitter {
    pub fn new(store: Arc<dyn ClauseStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ClauseStore> {
        &self.store
    }

    /// Load a clause from the store as an aggregate.
    pub async fn load(&self, id: ClauseId) -> Result<ClauseAggregate, CommitError> {
        Ok(ClauseAggregate::new(self.store.get(id).await?))
    }

    /// Attempt `next` on the aggregate and persist it.
    pub async fn change_status(
        &self,
        aggregate: &mut ClauseAggregate,
        next: Status,
    ) -> Result<Clause, CommitError> {
        let intent = match aggregate.attempt_status_change(next) {
            Ok(intent) => intent,
            Err(rejection) => {
                debug!(
                    clause_id = %aggregate.id(),
                    current = %aggregate.status(),
                    requested = %next,
                    reason = %rejection,
                    "Status change rejected"
                );
                return Err(rejection.into());
            }
        };

        match self
            .store
            .set_status(intent.clause_id, intent.previous, intent.next)
            .await
        {
            Ok(record) => {
                info!(
                    clause_id = %intent.clause_id,
                    from = %intent.previous,
                    to = %intent.next,
                    "Clause status updated"
                );
                aggregate.adopt(record.clone());
                Ok(record)
            }
            Err(err) => {
                aggregate.revert(&intent);
                warn!(
                    clause_id = %intent.clause_id,
                    from = %intent.previous,
                    to = %intent.next,
                    error = %err,
                    "Status write failed; rolled back"
                );
                Err(err.into())
            }
        }
    }

    /// Upload an evidence reference. This is the only path that makes the
    /// evidence gate pass for persisted clauses.
    pub async fn attach_evidence(
        &self,
        aggregate: &mut ClauseAggregate,
        record: EvidenceRecord,
    ) -> Result<Clause, CommitError> {
        let updated = self
            .store
            .append_evidence(aggregate.id(), record)
            .await
            .inspect_err(|err| {
                warn!(clause_id = %aggregate.id(), error = %err, "Evidence upload failed")
            })?;
        info!(
            clause_id = %aggregate.id(),
            evidence_count = updated.evidence.len(),
            "Evidence attached"
        );
        aggregate.adopt(updated.clone());
        Ok(updated)
    }

    pub async fn remove_evidence(
        &self,
        aggregate: &mut ClauseAggregate,
        record: &EvidenceRecord,
    ) -> Result<Clause, CommitError> {
        let updated = self.store.remove_evidence(aggregate.id(), record).await?;
        info!(
            clause_id = %aggregate.id(),
            evidence_count = updated.evidence.len(),
            "Evidence removed"
        );
        aggregate.adopt(updated.clone());
        Ok(updated)
    }

    pub async fn set_owner(
        &self,
        aggregate: &mut ClauseAggregate,
        owner: &str,
    ) -> Result<Clause, CommitError> {
        let mut draft = aggregate.clone();
        draft.set_owner(owner);
        let updated = self
            .store
            .set_owner(aggregate.id(), draft.clause().owner.clone())
            .await?;
        debug!(clause_id = %aggregate.id(), owner = %updated.owner, "Owner updated");
        aggregate.adopt(updated.clone());
        Ok(updated)
    }

    pub async fn set_comments(
        &self,
        aggregate: &mut ClauseAggregate,
        comments: Option<&str>,
    ) -> Result<Clause, CommitError> {
        let mut draft = aggregate.clone();
        draft.set_comments(comments);
        let updated = self
            .store
            .set_comments(aggregate.id(), draft.clause().comments.clone())
            .await?;
        debug!(clause_id = %aggregate.id(), "Comments updated");
        aggregate.adopt(updated.clone());
        Ok(updated)
    }
}
