#![deny(unsafe_code)]
//! # afya-engine
//!
//! Compliance Clause Status Engine.
//!
//! A clause's maturity moves one level at a time through `NI → P → IP → MI → O`,
//! and an upgrade into `MI` or `O` is only allowed once at least one evidence
//! record is attached. Clause collections fold into a compliance score under
//! an explicitly chosen policy.
//!
//! ## Key Types
//!
//! - [`ClauseAggregate`]: enforces the transition rules on one clause
//! - [`StatusCommitter`]: persists changes with rollback on write failure
//! - [`ClauseStore`] / [`InMemoryClauseStore`]: persistence collaborator
//! - [`ScoreReport`] / [`ScoringPolicy`]: weighted-mean and top-tier scores
//!
//! The engine is synchronous and store-agnostic; only the store boundary is async.

pub mod aggregate;
pub mod committer;
pub mod error;
pub mod evidence;
pub mod mocks;
pub mod score;
pub mod store;
pub mod validator;

pub use aggregate::{ClauseAggregate, StatusWriteIntent};
pub use committer::StatusCommitter;
pub use error::{CommitError, StoreError, TransitionError};
pub use evidence::{evidence_shortfall, has_evidence, requires_evidence, GATED_LEVELS};
pub use mocks::FlakyClauseStore;
pub use score::{
    rounded_points_score, top_tier_percent_score, weighted_mean_score, ScoreReport,
    ScoringPolicy, StatusBreakdown,
};
pub use store::{ClauseStore, InMemoryClauseStore, SeedOutcome};
pub use validator::{allowed_targets, check_transition, is_upgrade, is_valid_transition};
