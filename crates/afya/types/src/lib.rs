#![deny(unsafe_code)]
//! # afya-types
//!
//! Core data model for the AfyaNumeriq compliance clause engine.
//!
//! ## Key Types
//!
//! - [`Status`]: five-level maturity lattice `NI < P < IP < MI < O`
//! - [`Clause`]: aggregate root holding status, owner, comments, evidence
//! - [`EvidenceRecord`]: opaque reference to an uploaded artifact
//! - [`ClauseNumber`]: `<major>.<minor>` with numeric ordering
//! - [`Standard`]: slug naming a clause catalogue (`iso-7101`, `iso-27001`)

pub mod clause;
pub mod error;
pub mod status;

pub use clause::{
    sort_by_number, summarize, Clause, ClauseId, ClauseNumber, EvidenceRecord, Standard,
    SHORT_DESCRIPTION_LIMIT, UNASSIGNED_OWNER,
};
pub use error::ParseError;
pub use status::{are_adjacent, index_of, weight_of, Status};
