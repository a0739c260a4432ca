//! Persistence collaborator contract.
//!
//! The engine never persists anything itself. A [`ClauseStore`] owns the
//! durable records, stamps `last_updated`, and returns the authoritative
//! record after every write so callers can adopt it verbatim.

use afya_types::{sort_by_number, Clause, ClauseId, EvidenceRecord, Standard, Status};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StoreError;
use crate::evidence::has_evidence;
use crate::validator::check_transition;

/// What a catalogue seed did to the register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedOutcome {
    pub inserted: usize,
    /// Existing clauses whose requirement text was replaced.
    pub refreshed: usize,
    pub unchanged: usize,
}

/// Storage backend for clause records.
#[async_trait]
pub trait ClauseStore: Send + Sync {
    /// Fetch one clause.
    async fn get(&self, id: ClauseId) -> Result<Clause, StoreError>;

    /// All clauses of a standard in numeric clause order.
    async fn list(&self, standard: &Standard) -> Result<Vec<Clause>, StoreError>;

    /// Insert a new clause. Clause numbers are unique per standard.
    async fn insert(&self, clause: Clause) -> Result<Clause, StoreError>;

    /// Seed catalogue clauses in one write. Clause numbers already present are
    /// left alone, or only get their requirement text replaced when
    /// `refresh_text` is set; status, owner, comments and evidence are kept.
    /// Nothing is written if any clause is rejected.
    async fn seed_catalogue(
        &self,
        clauses: Vec<Clause>,
        refresh_text: bool,
    ) -> Result<SeedOutcome, StoreError>;

    /// Set the status, provided the persisted status is still `expected` and
    /// the persisted record passes the transition rules.
    async fn set_status(
        &self,
        id: ClauseId,
        expected: Status,
        next: Status,
    ) -> Result<Clause, StoreError>;

    /// Append an evidence reference.
    async fn append_evidence(
        &self,
        id: ClauseId,
        record: EvidenceRecord,
    ) -> Result<Clause, StoreError>;

    /// Remove an evidence reference. Status is not touched. Fails with
    /// [`StoreError::EvidenceNotAttached`] when the reference is absent.
    async fn remove_evidence(
        &self,
        id: ClauseId,
        record: &EvidenceRecord,
    ) -> Result<Clause, StoreError>;

    async fn set_owner(&self, id: ClauseId, owner: String) -> Result<Clause, StoreError>;

    async fn set_comments(
        &self,
        id: ClauseId,
        comments: Option<String>,
    ) -> Result<Clause, StoreError>;
}

/// Apply a status write to a record map. Shared by the in-memory and file stores.
pub fn apply_status(
    clauses: &mut HashMap<ClauseId, Clause>,
    id: ClauseId,
    expected: Status,
    next: Status,
) -> Result<Clause, StoreError> {
    let clause = clauses.get_mut(&id).ok_or(StoreError::NotFound(id))?;
    if clause.status != expected {
        return Err(StoreError::Conflict {
            id,
            expected,
            actual: clause.status,
        });
    }
    check_transition(clause.status, next, has_evidence(clause))
        .map_err(StoreError::Rejected)?;
    clause.status = next;
    clause.last_updated = Some(Utc::now());
    Ok(clause.clone())
}

/// Apply an ungated edit to a record map and stamp it. The edit must not
/// mutate the clause when it returns an error.
pub fn apply_edit(
    clauses: &mut HashMap<ClauseId, Clause>,
    id: ClauseId,
    edit: impl FnOnce(&mut Clause) -> Result<(), StoreError>,
) -> Result<Clause, StoreError> {
    let clause = clauses.get_mut(&id).ok_or(StoreError::NotFound(id))?;
    edit(clause)?;
    clause.last_updated = Some(Utc::now());
    Ok(clause.clone())
}

/// Edit removing every copy of `record` from a clause.
pub fn detach_evidence(clause: &mut Clause, record: &EvidenceRecord) -> Result<(), StoreError> {
    if !clause.evidence.contains(record) {
        return Err(StoreError::EvidenceNotAttached {
            id: clause.id,
            reference: record.to_string(),
        });
    }
    clause.evidence.retain(|e| e != record);
    Ok(())
}

/// Insert into a record map, enforcing id and (standard, clause number) uniqueness.
pub fn apply_insert(
    clauses: &mut HashMap<ClauseId, Clause>,
    mut clause: Clause,
) -> Result<Clause, StoreError> {
    if clauses.contains_key(&clause.id) {
        return Err(StoreError::Duplicate(clause.id.to_string()));
    }
    if find_by_number(clauses, &clause).is_some() {
        return Err(StoreError::Duplicate(format!(
            "{} {}",
            clause.standard, clause.clause_number
        )));
    }
    clause.last_updated = Some(Utc::now());
    clauses.insert(clause.id, clause.clone());
    Ok(clause)
}

/// Merge catalogue clauses into a record map. All checks run before the
/// first change, so a rejected seed leaves the map untouched.
pub fn apply_catalogue(
    clauses: &mut HashMap<ClauseId, Clause>,
    seed: Vec<Clause>,
    refresh_text: bool,
) -> Result<SeedOutcome, StoreError> {
    let mut numbers = HashSet::new();
    for clause in &seed {
        if !numbers.insert((clause.standard.clone(), clause.clause_number.clone())) {
            return Err(StoreError::Duplicate(format!(
                "{} {}",
                clause.standard, clause.clause_number
            )));
        }
        if find_by_number(clauses, clause).is_none() && clauses.contains_key(&clause.id) {
            return Err(StoreError::Duplicate(clause.id.to_string()));
        }
    }

    let mut outcome = SeedOutcome::default();
    let now = Utc::now();
    for mut clause in seed {
        match find_by_number(clauses, &clause).and_then(|id| clauses.get_mut(&id)) {
            Some(existing) => {
                let stale = existing.description != clause.description
                    || existing.short_description != clause.short_description;
                if refresh_text && stale {
                    existing.description = clause.description;
                    existing.short_description = clause.short_description;
                    existing.last_updated = Some(now);
                    outcome.refreshed += 1;
                } else {
                    outcome.unchanged += 1;
                }
            }
            None => {
                clause.last_updated = Some(now);
                clauses.insert(clause.id, clause);
                outcome.inserted += 1;
            }
        }
    }
    Ok(outcome)
}

fn find_by_number(clauses: &HashMap<ClauseId, Clause>, clause: &Clause) -> Option<ClauseId> {
    clauses
        .values()
        .find(|c| c.standard == clause.standard && c.clause_number == clause.clause_number)
        .map(|c| c.id)
}

/// Clauses of one standard in numeric order.
pub fn select_standard(clauses: &HashMap<ClauseId, Clause>, standard: &Standard) -> Vec<Clause> {
    let mut selected: Vec<Clause> = clauses
        .values()
        .filter(|c| &c.standard == standard)
        .cloned()
        .collect();
    sort_by_number(&mut selected);
    selected
}

/// In-process store for tests and single-session tools.
#[derive(Default)]
pub struct InMemoryClauseStore {
    clauses: RwLock<HashMap<ClauseId, Clause>>,
}

impl InMemoryClauseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `clauses`.
    pub fn with_clauses(clauses: impl IntoIterator<Item = Clause>) -> Self {
        let map = clauses.into_iter().map(|c| (c.id, c)).collect();
        Self {
            clauses: RwLock::new(map),
        }
    }

    pub async fn len(&self) -> usize {
        self.clauses.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.clauses.read().await.is_empty()
    }
}

#[async_trait]
impl ClauseStore for InMemoryClauseStore {
    async fn get(&self, id: ClauseId) -> Result<Clause, StoreError> {
        self.clauses
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self, standard: &Standard) -> Result<Vec<Clause>, StoreError> {
        Ok(select_standard(&*self.clauses.read().await, standard))
    }

    async fn insert(&self, clause: Clause) -> Result<Clause, StoreError> {
        apply_insert(&mut *self.clauses.write().await, clause)
    }

    async fn seed_catalogue(
        &self,
        clauses: Vec<Clause>,
        refresh_text: bool,
    ) -> Result<SeedOutcome, StoreError> {
        let mut register = self.clauses.write().await;
        let outcome = apply_catalogue(&mut register, clauses, refresh_text)?;
        debug!(?outcome, "Catalogue seeded");
        Ok(outcome)
    }

    async fn set_status(
        &self,
        id: ClauseId,
        expected: Status,
        next: Status,
    ) -> Result<Clause, StoreError> {
        apply_status(&mut *self.clauses.write().await, id, expected, next)
    }

    async fn append_evidence(
        &self,
        id: ClauseId,
        record: EvidenceRecord,
    ) -> Result<Clause, StoreError> {
        apply_edit(&mut *self.clauses.write().await, id, |c| {
            c.evidence.push(record);
            Ok(())
        })
    }

    async fn remove_evidence(
        &self,
        id: ClauseId,
        record: &EvidenceRecord,
    ) -> Result<Clause, StoreError> {
        apply_edit(&mut *self.clauses.write().await, id, |c| {
            detach_evidence(c, record)
        })
    }

    async fn set_owner(&self, id: ClauseId, owner: String) -> Result<Clause, StoreError> {
        apply_edit(&mut *self.clauses.write().await, id, |c| {
            c.owner = owner;
            Ok(())
        })
    }

    async fn set_comments(
        &self,
        id: ClauseId,
        comments: Option<String>,
    ) -> Result<Clause, StoreError> {
        apply_edit(&mut *self.clauses.write().await, id, |c| {
            c.comments = comments;
            Ok(())
        })
    }
}
