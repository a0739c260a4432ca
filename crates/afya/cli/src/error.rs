//! Error types for the afya CLI

use afya_catalog::CatalogError;
use afya_engine::{CommitError, StoreError};
use afya_types::ParseError;
use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Commit(#[from] CommitError),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("clause not found: {0}")]
    ClauseNotFound(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
