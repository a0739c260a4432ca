//! Command implementations

pub mod clause;
pub mod evidence;
pub mod legend;
pub mod score;
pub mod seed;

use std::sync::Arc;

use afya_engine::{ClauseAggregate, ClauseStore, StatusCommitter};
use afya_types::{ClauseId, ClauseNumber, Standard};

use crate::config::AfyaConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

/// Everything a command needs to run.
pub struct CommandContext {
    pub store: Arc<dyn ClauseStore>,
    pub committer: StatusCommitter,
    pub config: AfyaConfig,
    pub format: OutputFormat,
}

impl CommandContext {
    pub fn new(store: Arc<dyn ClauseStore>, config: AfyaConfig, format: OutputFormat) -> Self {
        Self {
            committer: StatusCommitter::new(store.clone()),
            store,
            config,
            format,
        }
    }

    /// The standard a command should act on.
    pub fn standard(&self, requested: Option<&str>) -> Standard {
        requested
            .map(Standard::new)
            .unwrap_or_else(|| self.config.default_standard.clone())
    }

    /// Resolve a clause reference: a clause id, or a clause number within `standard`.
    pub async fn resolve(
        &self,
        reference: &str,
        standard: &Standard,
    ) -> CliResult<ClauseAggregate> {
        if let Ok(id) = reference.parse::<ClauseId>() {
            return Ok(self.committer.load(id).await?);
        }

        let number = ClauseNumber::parse(reference)?;
        self.store
            .list(standard)
            .await?
            .into_iter()
            .find(|c| c.clause_number == number)
            .map(ClauseAggregate::new)
            .ok_or_else(|| CliError::ClauseNotFound(format!("{} {}", standard, reference)))
    }
}
