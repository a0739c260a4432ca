//! The five-level maturity lattice.
//!
//! `NI < P < IP < MI < O`. Ordering is total and adjacency is defined
//! strictly by position: a clause moves one level at a time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Maturity status of a compliance clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Not Implemented.
    #[serde(rename = "NI")]
    NotImplemented,
    /// Planned.
    #[serde(rename = "P")]
    Planned,
    /// In Progress.
    #[serde(rename = "IP")]
    InProgress,
    /// Mostly Implemented.
    #[serde(rename = "MI")]
    MostlyImplemented,
    /// Optimized.
    #[serde(rename = "O")]
    Optimized,
}

impl Status {
    /// All statuses in canonical lattice order.
    pub const ALL: [Status; 5] = [
        Status::NotImplemented,
        Status::Planned,
        Status::InProgress,
        Status::MostlyImplemented,
        Status::Optimized,
    ];

    /// Position in the lattice, 0..=4.
    pub fn index(self) -> usize {
        match self {
            Self::NotImplemented => 0,
            Self::Planned => 1,
            Self::InProgress => 2,
            Self::MostlyImplemented => 3,
            Self::Optimized => 4,
        }
    }

    /// Scoring weight in {0, 25, 50, 75, 100}. Never consulted for transition legality.
    pub fn weight(self) -> u32 {
        self.index() as u32 * 25
    }

    /// Short code as persisted (`NI`, `P`, `IP`, `MI`, `O`).
    pub fn code(self) -> &'static str {
        match self {
            Self::NotImplemented => "NI",
            Self::Planned => "P",
            Self::InProgress => "IP",
            Self::MostlyImplemented => "MI",
            Self::Optimized => "O",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotImplemented => "Not Implemented",
            Self::Planned => "Planned",
            Self::InProgress => "In Progress",
            Self::MostlyImplemented => "Mostly Implemented",
            Self::Optimized => "Optimized",
        }
    }

    /// Legend text describing what the level means.
    pub fn description(self) -> &'static str {
        match self {
            Self::NotImplemented => "No work has started on this requirement.",
            Self::Planned => "Work is scheduled and an owner is identified.",
            Self::InProgress => "Implementation is under way; evidence is being gathered.",
            Self::MostlyImplemented => {
                "The requirement is largely met and supported by uploaded evidence."
            }
            Self::Optimized => "Fully implemented, evidenced and continually improved.",
        }
    }

    /// Status at a lattice position.
    pub fn from_index(index: usize) -> Option<Status> {
        Self::ALL.get(index).copied()
    }

    /// One level up, or `None` at the top.
    pub fn next(self) -> Option<Status> {
        Self::from_index(self.index() + 1)
    }

    /// One level down, or `None` at the bottom.
    pub fn previous(self) -> Option<Status> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::NotImplemented
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Status {
    type Err = ParseError;

    /// Accepts the short code or the long label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|st| {
                st.code().eq_ignore_ascii_case(needle) || st.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseError::UnknownStatus(s.to_string()))
    }
}

/// Lattice position of `status`.
pub fn index_of(status: Status) -> usize {
    status.index()
}

/// Scoring weight of `status`.
pub fn weight_of(status: Status) -> u32 {
    status.weight()
}

/// True iff `a` and `b` are exactly one lattice position apart. Symmetric.
pub fn are_adjacent(a: Status, b: Status) -> bool {
    a.index().abs_diff(b.index()) == 1
}
