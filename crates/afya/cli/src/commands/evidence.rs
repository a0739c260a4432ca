//! Evidence commands

use afya_types::{Clause, EvidenceRecord};
use clap::Subcommand;

use super::CommandContext;
use crate::error::CliResult;
use crate::output::{print_json, print_success, OutputFormat};

/// Evidence subcommands
#[derive(Subcommand)]
pub enum EvidenceCommands {
    /// Attach an evidence reference (URI or file name) to a clause
    Add {
        /// Clause number or ID
        clause: String,
        /// Evidence reference
        reference: String,
    },

    /// Remove an evidence reference. The clause status is not changed.
    Remove {
        /// Clause number or ID
        clause: String,
        /// Evidence reference
        reference: String,
    },
}

/// Execute an evidence command
pub async fn execute(
    command: EvidenceCommands,
    ctx: &CommandContext,
    standard: Option<String>,
) -> CliResult<Clause> {
    let standard = ctx.standard(standard.as_deref());
    let (record, verb) = match command {
        EvidenceCommands::Add { clause, reference } => {
            let mut aggregate = ctx.resolve(&clause, &standard).await?;
            let record = ctx
                .committer
                .attach_evidence(&mut aggregate, EvidenceRecord::new(reference))
                .await?;
            (record, "attached to")
        }
        EvidenceCommands::Remove { clause, reference } => {
            let mut aggregate = ctx.resolve(&clause, &standard).await?;
            let record = ctx
                .committer
                .remove_evidence(&mut aggregate, &EvidenceRecord::new(reference))
                .await?;
            (record, "removed from")
        }
    };

    match ctx.format {
        OutputFormat::Json => print_json(&record),
        OutputFormat::Table => print_success(&format!(
            "Evidence {} clause {} ({} on file)",
            verb,
            record.clause_number,
            record.evidence.len()
        )),
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::clause::transition;
    use crate::config::AfyaConfig;
    use crate::error::CliError;
    use afya_engine::{CommitError, InMemoryClauseStore};
    use afya_types::{Standard, Status};
    use std::sync::Arc;

    #[tokio::test]
    async fn add_then_remove_keeps_status() {
        let mut clause = afya_catalog::seed(&Standard::iso_7101()).unwrap().remove(0);
        clause.status = Status::InProgress;
        let ctx = CommandContext::new(
            Arc::new(InMemoryClauseStore::with_clauses(vec![clause])),
            AfyaConfig::default(),
            OutputFormat::Json,
        );

        let add = EvidenceCommands::Add {
            clause: "4.1".into(),
            reference: "evidence/context-register.xlsx".into(),
        };
        assert_eq!(execute(add, &ctx, None).await.unwrap().evidence.len(), 1);

        transition(&ctx, "4.1", Status::MostlyImplemented, None)
            .await
            .unwrap();

        let remove = EvidenceCommands::Remove {
            clause: "4.1".into(),
            reference: "evidence/context-register.xlsx".into(),
        };
        let record = execute(remove, &ctx, None).await.unwrap();
        assert!(record.evidence.is_empty());
        assert_eq!(record.status, Status::MostlyImplemented);
    }

    #[tokio::test]
    async fn removing_unattached_reference_is_an_error() {
        let clause = afya_catalog::seed(&Standard::iso_7101()).unwrap().remove(0);
        let ctx = CommandContext::new(
            Arc::new(InMemoryClauseStore::with_clauses(vec![clause])),
            AfyaConfig::default(),
            OutputFormat::Table,
        );

        let remove = EvidenceCommands::Remove {
            clause: "4.1".into(),
            reference: "evidence/not-uploaded.pdf".into(),
        };
        let err = execute(remove, &ctx, None).await.unwrap_err();
        assert!(matches!(err, CliError::Commit(CommitError::PersistenceFailure(_))));
        assert!(err.to_string().contains("evidence/not-uploaded.pdf"));
    }
}
