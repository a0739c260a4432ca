use afya_types::{Clause, ClauseId, EvidenceRecord, Standard, Status};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::error::StoreError;
use crate::store::{ClauseStore, InMemoryClauseStore, SeedOutcome};

/// Mock store for testing rollback paths.
///
/// Wraps an [`InMemoryClauseStore`]; while `fail_writes` is set every write
/// returns [`StoreError::Unavailable`] with the configured message. Reads
/// always succeed.
pub struct FlakyClauseStore {
    inner: InMemoryClauseStore,
    fail_writes: AtomicBool,
    message: String,
    writes_attempted: AtomicUsize,
}

impl FlakyClauseStore {
    pub fn new(inner: InMemoryClauseStore) -> Self {
        Self {
            inner,
            fail_writes: AtomicBool::new(false),
            message: "backend unavailable".into(),
            writes_attempted: AtomicUsize::new(0),
        }
    }

    /// Start in failing mode with a specific error message.
    pub fn failing(inner: InMemoryClauseStore, message: impl Into<String>) -> Self {
        let store = Self {
            message: message.into(),
            ..Self::new(inner)
        };
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_writes.store(failing, Ordering::SeqCst);
    }

    /// Number of write calls received, failed or not.
    pub fn writes_attempted(&self) -> usize {
        self.writes_attempted.load(Ordering::SeqCst)
    }

    fn gate_write(&self) -> Result<(), StoreError> {
        self.writes_attempted.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable(self.message.clone()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ClauseStore for FlakyClauseStore {
    async fn get(&self, id: ClauseId) -> Result<Clause, StoreError> {
        self.inner.get(id).await
    }

    async fn list(&self, standard: &Standard) -> Result<Vec<Clause>, StoreError> {
        self.inner.list(standard).await
    }

    async fn insert(&self, clause: Clause) -> Result<Clause, StoreError> {
        self.gate_write()?;
        self.inner.insert(clause).await
    }

    async fn seed_catalogue(
        &self,
        clauses: Vec<Clause>,
        refresh_text: bool,
    ) -> Result<SeedOutcome, StoreError> {
        self.gate_write()?;
        self.inner.seed_catalogue(clauses, refresh_text).await
    }

    async fn set_status(
        &self,
        id: ClauseId,
        expected: Status,
        next: Status,
    ) -> Result<Clause, StoreError> {
        self.gate_write()?;
        self.inner.set_status(id, expected, next).await
    }

    async fn append_evidence(
        &self,
        id: ClauseId,
        record: EvidenceRecord,
    ) -> Result<Clause, StoreError> {
        self.gate_write()?;
        self.inner.append_evidence(id, record).await
    }

    async fn remove_evidence(
        &self,
        id: ClauseId,
        record: &EvidenceRecord,
    ) -> Result<Clause, StoreError> {
        self.gate_write()?;
        self.inner.remove_evidence(id, record).await
    }

    async fn set_owner(&self, id: ClauseId, owner: String) -> Result<Clause, StoreError> {
        self.gate_write()?;
        self.inner.set_owner(id, owner).await
    }

    async fn set_comments(
        &self,
        id: ClauseId,
        comments: Option<String>,
    ) -> Result<Clause, StoreError> {
        self.gate_write()?;
        self.inner.set_comments(id, comments).await
    }
}
