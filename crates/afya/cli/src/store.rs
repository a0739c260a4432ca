//! JSON file backed clause store
//!
//! The whole register is one JSON document. Every access holds an advisory
//! lock on a sibling `.lock` file, shared for reads and exclusive for writes,
//! so separate `afya` processes serialise their load-change-save cycles.
//! Saves go through a uniquely named temporary file in the same directory
//! that is then renamed over the register.

use afya_engine::store::{
    apply_catalogue, apply_edit, apply_insert, apply_status, detach_evidence, select_standard,
};
use afya_engine::{ClauseStore, SeedOutcome, StoreError};
use afya_types::{Clause, ClauseId, EvidenceRecord, Standard, Status};
use async_trait::async_trait;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const FORMAT_VERSION: u32 = 1;

/// On-disk layout of the register.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RegisterFile {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    clauses: Vec<Clause>,
}

/// Clause store persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileClauseStore {
    path: PathBuf,
    lock_path: PathBuf,
    pretty: bool,
}

impl JsonFileClauseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut lock_path = path.clone().into_os_string();
        lock_path.push(".lock");
        Self {
            path,
            lock_path: lock_path.into(),
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn io_error(path: &Path, err: impl std::fmt::Display) -> StoreError {
        StoreError::Io(format!("{}: {}", path.display(), err))
    }

    /// Open the lock file and block until the lock is held. Dropping the
    /// returned handle releases it.
    fn lock(&self, exclusive: bool) -> Result<File, StoreError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.lock_path)
            .map_err(|e| Self::io_error(&self.lock_path, e))?;
        let locked = if exclusive {
            FileExt::lock_exclusive(&file)
        } else {
            FileExt::lock_shared(&file)
        };
        locked.map_err(|e| Self::io_error(&self.lock_path, e))?;
        Ok(file)
    }

    fn load(&self) -> Result<HashMap<ClauseId, Clause>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(Self::io_error(&self.path, e)),
        };
        let file: RegisterFile = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Serialization(format!("{}: {}", self.path.display(), e)))?;
        Ok(file.clauses.into_iter().map(|c| (c.id, c)).collect())
    }

    fn save(&self, clauses: &HashMap<ClauseId, Clause>) -> Result<(), StoreError> {
        let mut ordered: Vec<Clause> = clauses.values().cloned().collect();
        ordered.sort_by(|a, b| {
            (&a.standard, &a.clause_number).cmp(&(&b.standard, &b.clause_number))
        });
        let file = RegisterFile {
            version: FORMAT_VERSION,
            clauses: ordered,
        };
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(&file)
        } else {
            serde_json::to_vec(&file)
        }
        .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp =
            tempfile::NamedTempFile::new_in(dir).map_err(|e| Self::io_error(dir, e))?;
        tmp.write_all(&bytes)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| Self::io_error(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| Self::io_error(&self.path, e.error))?;
        debug!(path = %self.path.display(), clauses = clauses.len(), "Register saved");
        Ok(())
    }

    /// Run `read` on the register under a shared lock, off the async runtime.
    async fn read<T, F>(&self, read: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(HashMap<ClauseId, Clause>) -> Result<T, StoreError> + Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || {
            let _lock = store.lock(false)?;
            read(store.load()?)
        })
        .await
        .map_err(|e| StoreError::Io(format!("register task failed: {}", e)))?
    }

    /// Load, change, save; holding the exclusive lock throughout. Nothing is
    /// saved when `change` fails.
    async fn write<T, F>(&self, change: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut HashMap<ClauseId, Clause>) -> Result<T, StoreError> + Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || {
            let _lock = store.lock(true)?;
            let mut clauses = store.load()?;
            let out = change(&mut clauses)?;
            store.save(&clauses)?;
            Ok(out)
        })
        .await
        .map_err(|e| StoreError::Io(format!("register task failed: {}", e)))?
    }
}

#[async_trait]
impl ClauseStore for JsonFileClauseStore {
    async fn get(&self, id: ClauseId) -> Result<Clause, StoreError> {
        self.read(move |mut clauses| clauses.remove(&id).ok_or(StoreError::NotFound(id)))
            .await
    }

    async fn list(&self, standard: &Standard) -> Result<Vec<Clause>, StoreError> {
        let standard = standard.clone();
        self.read(move |clauses| Ok(select_standard(&clauses, &standard)))
            .await
    }

    async fn insert(&self, clause: Clause) -> Result<Clause, StoreError> {
        self.write(move |clauses| apply_insert(clauses, clause)).await
    }

    async fn seed_catalogue(
        &self,
        clauses: Vec<Clause>,
        refresh_text: bool,
    ) -> Result<SeedOutcome, StoreError> {
        self.write(move |register| apply_catalogue(register, clauses, refresh_text))
            .await
    }

    async fn set_status(
        &self,
        id: ClauseId,
        expected: Status,
        next: Status,
    ) -> Result<Clause, StoreError> {
        self.write(move |clauses| apply_status(clauses, id, expected, next))
            .await
    }

    async fn append_evidence(
        &self,
        id: ClauseId,
        record: EvidenceRecord,
    ) -> Result<Clause, StoreError> {
        self.write(move |clauses| {
            apply_edit(clauses, id, |c| {
                c.evidence.push(record);
                Ok(())
            })
        })
        .await
    }

    async fn remove_evidence(
        &self,
        id: ClauseId,
        record: &EvidenceRecord,
    ) -> Result<Clause, StoreError> {
        let record = record.clone();
        self.write(move |clauses| apply_edit(clauses, id, |c| detach_evidence(c, &record)))
            .await
    }

    async fn set_owner(&self, id: ClauseId, owner: String) -> Result<Clause, StoreError> {
        self.write(move |clauses| {
            apply_edit(clauses, id, |c| {
                c.owner = owner;
                Ok(())
            })
        })
        .await
    }

    async fn set_comments(
        &self,
        id: ClauseId,
        comments: Option<String>,
    ) -> Result<Clause, StoreError> {
        self.write(move |clauses| {
            apply_edit(clauses, id, |c| {
                c.comments = comments;
                Ok(())
            })
        })
        .await
    }
}
