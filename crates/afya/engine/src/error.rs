use afya_types::{ClauseId, Status};

/// Rejections from the transition rules. Each is per-request and user-correctable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("clause is already {0}; no status change requested")]
    NoOpTransition(Status),
    #[error("only one-step status changes are allowed ({from} -> {to})")]
    IllegalStep { from: Status, to: Status },
    #[error("you must upload evidence before upgrading to MI or O (requested {0})")]
    EvidenceRequired(Status),
}

/// Errors reported by a [`ClauseStore`](crate::store::ClauseStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("clause not found: {0}")]
    NotFound(ClauseId),
    #[error("status conflict on clause {id}: expected {expected}, found {actual}")]
    Conflict {
        id: ClauseId,
        expected: Status,
        actual: Status,
    },
    /// The persisted record does not allow the requested status change.
    #[error("rejected by store: {0}")]
    Rejected(TransitionError),
    #[error("evidence {reference} is not attached to clause {id}")]
    EvidenceNotAttached { id: ClauseId, reference: String },
    #[error("duplicate clause: {0}")]
    Duplicate(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("i/o error: {0}")]
    Io(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors from committing a change through the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitError {
    #[error(transparent)]
    Rejected(#[from] TransitionError),
    /// The write failed; the local mutation has been rolled back. Carries the
    /// collaborator's message verbatim.
    #[error("{0}")]
    PersistenceFailure(String),
}

impl From<StoreError> for CommitError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Rejected(rule) => Self::Rejected(rule),
            other => Self::PersistenceFailure(other.to_string()),
        }
    }
}
