//! Compliance score reporting

use afya_engine::{ScoringPolicy, StatusBreakdown};
use afya_types::{Clause, Standard, Status};
use colored::*;
use serde::Serialize;
use tabled::{Table, Tabled};

use super::CommandContext;
use crate::error::CliResult;
use crate::output::{print_json, OutputFormat};

/// One policy's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolicyScore {
    pub policy: ScoringPolicy,
    pub score: f64,
}

/// Scores of a register under the selected policies.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    pub standard: Standard,
    pub total: usize,
    pub breakdown: StatusBreakdown,
    pub scores: Vec<PolicyScore>,
}

impl ScoreSummary {
    pub fn new(standard: Standard, clauses: &[Clause], policies: &[ScoringPolicy]) -> Self {
        Self {
            standard,
            total: clauses.len(),
            breakdown: StatusBreakdown::from_clauses(clauses),
            scores: policies
                .iter()
                .map(|&policy| PolicyScore {
                    policy,
                    score: policy.apply(clauses),
                })
                .collect(),
        }
    }

    pub fn score(&self, policy: ScoringPolicy) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.policy == policy)
            .map(|s| s.score)
    }
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Clauses")]
    count: usize,
}

/// Score a standard's register under `policy`, or under every policy in
/// `scoring.policies` when none is given.
pub async fn execute(
    ctx: &CommandContext,
    standard: Option<String>,
    policy: Option<ScoringPolicy>,
) -> CliResult<ScoreSummary> {
    let standard = ctx.standard(standard.as_deref());
    let clauses = ctx.store.list(&standard).await?;
    let policies = match policy {
        Some(policy) => vec![policy],
        None => ctx.config.scoring.policies.clone(),
    };
    let summary = ScoreSummary::new(standard, &clauses, &policies);

    match ctx.format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Table => print_summary(&summary),
    }
    Ok(summary)
}

fn print_summary(summary: &ScoreSummary) {
    println!("{}", format!("{} compliance", summary.standard).bold());
    println!("Total clauses: {}", summary.total);
    for PolicyScore { policy, score } in &summary.scores {
        match policy {
            ScoringPolicy::RoundedPoints => println!("{}: {:.0}%", policy, score),
            _ => println!("{}: {:.1}%", policy, score),
        }
    }

    let rows: Vec<BreakdownRow> = Status::ALL
        .iter()
        .map(|s| BreakdownRow {
            status: format!("{} ({})", s.label(), s.code()),
            count: summary.breakdown.get(*s),
        })
        .collect();
    println!("{}", Table::new(rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AfyaConfig;
    use afya_engine::InMemoryClauseStore;
    use std::sync::Arc;

    fn context(config: AfyaConfig, format: OutputFormat) -> CommandContext {
        let mut clauses = afya_catalog::seed(&Standard::iso_7101()).unwrap();
        clauses[0].status = Status::Optimized;
        clauses[1].status = Status::MostlyImplemented;
        CommandContext::new(
            Arc::new(InMemoryClauseStore::with_clauses(clauses)),
            config,
            format,
        )
    }

    #[tokio::test]
    async fn scores_seeded_register_under_every_policy() {
        let ctx = context(AfyaConfig::default(), OutputFormat::Json);

        let summary = execute(&ctx, None, None).await.unwrap();
        assert_eq!(summary.total, 34);
        assert_eq!(summary.breakdown.get(Status::NotImplemented), 32);
        assert_eq!(summary.scores.len(), 3);
        let mean = summary.score(ScoringPolicy::WeightedMean).unwrap();
        assert!((mean - 175.0 / 34.0).abs() < 1e-9);
        let top = summary.score(ScoringPolicy::TopTierPercent).unwrap();
        assert!((top - 200.0 / 34.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn configured_policies_limit_the_report() {
        let mut config = AfyaConfig::default();
        config.scoring.policies = vec![ScoringPolicy::WeightedMean];
        let ctx = context(config, OutputFormat::Table);

        let summary = execute(&ctx, None, None).await.unwrap();
        assert_eq!(summary.scores.len(), 1);
        assert!(summary.score(ScoringPolicy::TopTierPercent).is_none());

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["scores"].as_array().unwrap().len(), 1);
        assert_eq!(json["scores"][0]["policy"], "weighted-mean");
    }

    #[tokio::test]
    async fn explicit_policy_overrides_config() {
        let ctx = context(AfyaConfig::default(), OutputFormat::Table);
        let summary = execute(&ctx, None, Some(ScoringPolicy::RoundedPoints))
            .await
            .unwrap();
        // 7 points of 136
        assert_eq!(
            summary.scores,
            vec![PolicyScore {
                policy: ScoringPolicy::RoundedPoints,
                score: 5.0,
            }]
        );
    }

    #[tokio::test]
    async fn empty_register_scores_zero() {
        let ctx = CommandContext::new(
            Arc::new(InMemoryClauseStore::new()),
            AfyaConfig::default(),
            OutputFormat::Table,
        );
        let summary = execute(&ctx, Some("iso-27001".into()), None).await.unwrap();
        assert_eq!(summary.total, 0);
        assert!(summary.scores.iter().all(|s| s.score == 0.0));
    }
}
