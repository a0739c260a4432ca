//! Clause Aggregate.
//!
//! Owns one [`Clause`] and is the only place its status changes. A status
//! change composes the validator and the evidence gate and commits locally
//! only when both pass; the returned [`StatusWriteIntent`] is what the
//! caller hands to persistence. Owner, comments and evidence edits are
//! ungated and never touch status.

use afya_types::{Clause, ClauseId, EvidenceRecord, Status, UNASSIGNED_OWNER};
use serde::{Deserialize, Serialize};

use crate::error::TransitionError;
use crate::evidence::has_evidence;
use crate::validator::{allowed_targets, check_transition};

/// A status write the caller must hand to persistence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusWriteIntent {
    pub clause_id: ClauseId,
    /// Status before the local mutation; restored on rollback.
    pub previous: Status,
    pub next: Status,
}

/// Wrapper enforcing the status rules on a single clause.
#[derive(Clone, Debug, PartialEq)]
pub struct ClauseAggregate {
    clause: Clause,
}

impl ClauseAggregate {
    pub fn new(clause: Clause) -> Self {
        Self { clause }
    }

    pub fn clause(&self) -> &Clause {
        &self.clause
    }

    pub fn into_clause(self) -> Clause {
        self.clause
    }

    pub fn id(&self) -> ClauseId {
        self.clause.id
    }

    pub fn status(&self) -> Status {
        self.clause.status
    }

    pub fn has_evidence(&self) -> bool {
        has_evidence(&self.clause)
    }

    /// Run the transition rules against `next` without mutating anything.
    pub fn check_status_change(&self, next: Status) -> Result<(), TransitionError> {
        check_transition(self.clause.status, next, self.has_evidence())
    }

    /// Move to `next` if the rules allow it.
    ///
    /// On success the local status is already `next` and the returned intent
    /// must be persisted; on rejection nothing changes.
    pub fn attempt_status_change(
        &mut self,
        next: Status,
    ) -> Result<StatusWriteIntent, TransitionError> {
        self.check_status_change(next)?;
        let previous = self.clause.status;
        self.clause.status = next;
        Ok(StatusWriteIntent {
            clause_id: self.clause.id,
            previous,
            next,
        })
    }

    /// Undo a failed write. Returns false, leaving state alone, when the
    /// intent belongs to another clause or the status has moved on since.
    pub fn revert(&mut self, intent: &StatusWriteIntent) -> bool {
        if intent.clause_id != self.clause.id || self.clause.status != intent.next {
            return false;
        }
        self.clause.status = intent.previous;
        true
    }

    /// Replace local state with the authoritative record from persistence.
    pub fn adopt(&mut self, record: Clause) {
        self.clause = record;
    }

    /// Statuses a picker should offer as selectable right now.
    pub fn allowed_targets(&self) -> Vec<Status> {
        allowed_targets(self.clause.status, self.has_evidence())
    }

    /// Blank input resets the owner to `Unassigned`.
    pub fn set_owner(&mut self, owner: &str) {
        let owner = owner.trim();
        self.clause.owner = if owner.is_empty() {
            UNASSIGNED_OWNER.to_string()
        } else {
            owner.to_string()
        };
    }

    /// Blank input clears the comments.
    pub fn set_comments(&mut self, comments: Option<&str>) {
        self.clause.comments = comments
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
    }

    pub fn attach_evidence(&mut self, record: EvidenceRecord) {
        self.clause.evidence.push(record);
    }

    /// Remove every record matching `record`. Status is left untouched.
    pub fn remove_evidence(&mut self, record: &EvidenceRecord) -> bool {
        let before = self.clause.evidence.len();
        self.clause.evidence.retain(|e| e != record);
        self.clause.evidence.len() != before
    }
}

impl From<Clause> for ClauseAggregate {
    fn from(clause: Clause) -> Self {
        Self::new(clause)
    }
}
