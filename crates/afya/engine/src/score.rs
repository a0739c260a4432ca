//! Compliance Score Aggregator.
//!
//! Two scoring policies coexist and are exposed under distinct names so each
//! call site picks one explicitly:
//!
//! - [`weighted_mean_score`]: mean of the status weights (0..=100).
//! - [`top_tier_percent_score`]: share of clauses at `MI` or `O`.
//!
//! [`rounded_points_score`] is the integer dashboard rendering of the
//! weighted mean.

use afya_types::{Clause, Status};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mean of `weight_of(status)` over `clauses`; `0.0` when empty.
pub fn weighted_mean_score(clauses: &[Clause]) -> f64 {
    if clauses.is_empty() {
        return 0.0;
    }
    let total: u64 = clauses.iter().map(|c| u64::from(c.status.weight())).sum();
    total as f64 / clauses.len() as f64
}

/// Percentage of clauses at `MI` or `O`; `0.0` when empty.
pub fn top_tier_percent_score(clauses: &[Clause]) -> f64 {
    if clauses.is_empty() {
        return 0.0;
    }
    let implemented = clauses
        .iter()
        .filter(|c| c.status >= Status::MostlyImplemented)
        .count();
    100.0 * implemented as f64 / clauses.len() as f64
}

/// Dashboard score: `round(100 * earned / (4 * n))` with one point per level,
/// ties rounded to even. `0` when empty.
pub fn rounded_points_score(clauses: &[Clause]) -> u32 {
    let max_points = clauses.len() * (Status::ALL.len() - 1);
    if max_points == 0 {
        return 0;
    }
    let earned: usize = clauses.iter().map(|c| c.status.index()).sum();
    (earned as f64 / max_points as f64 * 100.0).round_ties_even() as u32
}

/// Which aggregation a caller wants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringPolicy {
    WeightedMean,
    TopTierPercent,
    RoundedPoints,
}

impl ScoringPolicy {
    pub const ALL: [ScoringPolicy; 3] = [
        ScoringPolicy::WeightedMean,
        ScoringPolicy::TopTierPercent,
        ScoringPolicy::RoundedPoints,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::WeightedMean => "weighted-mean",
            Self::TopTierPercent => "top-tier-percent",
            Self::RoundedPoints => "rounded-points",
        }
    }

    pub fn apply(self, clauses: &[Clause]) -> f64 {
        match self {
            Self::WeightedMean => weighted_mean_score(clauses),
            Self::TopTierPercent => top_tier_percent_score(clauses),
            Self::RoundedPoints => f64::from(rounded_points_score(clauses)),
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weighted-mean" | "weighted" | "mean" => Ok(Self::WeightedMean),
            "top-tier-percent" | "top-tier" | "implemented" => Ok(Self::TopTierPercent),
            "rounded-points" | "points" | "dashboard" => Ok(Self::RoundedPoints),
            other => Err(format!("unknown scoring policy: {other}")),
        }
    }
}

/// Number of clauses at each status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    #[serde(rename = "NI")]
    pub not_implemented: usize,
    #[serde(rename = "P")]
    pub planned: usize,
    #[serde(rename = "IP")]
    pub in_progress: usize,
    #[serde(rename = "MI")]
    pub mostly_implemented: usize,
    #[serde(rename = "O")]
    pub optimized: usize,
}

impl StatusBreakdown {
    pub fn from_clauses(clauses: &[Clause]) -> Self {
        let mut breakdown = Self::default();
        for clause in clauses {
            *breakdown.slot(clause.status) += 1;
        }
        breakdown
    }

    fn slot(&mut self, status: Status) -> &mut usize {
        match status {
            Status::NotImplemented => &mut self.not_implemented,
            Status::Planned => &mut self.planned,
            Status::InProgress => &mut self.in_progress,
            Status::MostlyImplemented => &mut self.mostly_implemented,
            Status::Optimized => &mut self.optimized,
        }
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::NotImplemented => self.not_implemented,
            Status::Planned => self.planned,
            Status::InProgress => self.in_progress,
            Status::MostlyImplemented => self.mostly_implemented,
            Status::Optimized => self.optimized,
        }
    }

    pub fn total(&self) -> usize {
        Status::ALL.iter().map(|s| self.get(*s)).sum()
    }
}

/// Every score for one collection, for dashboards and reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub total: usize,
    pub breakdown: StatusBreakdown,
    pub weighted_mean: f64,
    pub top_tier_percent: f64,
    pub rounded_points: u32,
}

impl ScoreReport {
    pub fn from_clauses(clauses: &[Clause]) -> Self {
        Self {
            total: clauses.len(),
            breakdown: StatusBreakdown::from_clauses(clauses),
            weighted_mean: weighted_mean_score(clauses),
            top_tier_percent: top_tier_percent_score(clauses),
            rounded_points: rounded_points_score(clauses),
        }
    }
}
