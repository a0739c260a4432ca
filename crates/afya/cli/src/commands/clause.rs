//! Clause listing, inspection and status/owner/comment changes

use afya_engine::evidence_shortfall;
use afya_types::{Clause, Status};

use super::CommandContext;
use crate::error::CliResult;
use crate::output::{
    colorize_status, print_clause, print_json, print_output, print_success, print_warning,
    ClauseRow, OutputFormat,
};

/// List clauses of a standard, optionally filtered by status.
pub async fn list(
    ctx: &CommandContext,
    standard: Option<String>,
    status: Option<Status>,
) -> CliResult<Vec<Clause>> {
    let standard = ctx.standard(standard.as_deref());
    let clauses: Vec<Clause> = ctx
        .store
        .list(&standard)
        .await?
        .into_iter()
        .filter(|c| status.map_or(true, |s| c.status == s))
        .collect();

    print_output(clauses.iter().map(ClauseRow::from).collect(), ctx.format);

    if let OutputFormat::Table = ctx.format {
        let short = evidence_shortfall(&clauses);
        if !short.is_empty() {
            print_warning(&format!(
                "{} clause(s) at MI/O have no evidence attached",
                short.len()
            ));
        }
    }
    Ok(clauses)
}

/// Show one clause with the statuses it may move to next.
pub async fn show(
    ctx: &CommandContext,
    reference: &str,
    standard: Option<String>,
) -> CliResult<Clause> {
    let standard = ctx.standard(standard.as_deref());
    let aggregate = ctx.resolve(reference, &standard).await?;
    print_clause(aggregate.clause(), &aggregate.allowed_targets(), ctx.format);
    Ok(aggregate.into_clause())
}

/// Request a status change.
pub async fn transition(
    ctx: &CommandContext,
    reference: &str,
    next: Status,
    standard: Option<String>,
) -> CliResult<Clause> {
    let standard = ctx.standard(standard.as_deref());
    let mut aggregate = ctx.resolve(reference, &standard).await?;
    let record = ctx.committer.change_status(&mut aggregate, next).await?;

    match ctx.format {
        OutputFormat::Json => print_json(&record),
        OutputFormat::Table => print_success(&format!(
            "Clause {} set to {}",
            record.clause_number,
            colorize_status(record.status)
        )),
    }
    Ok(record)
}

/// Set or reset the owner.
pub async fn owner(
    ctx: &CommandContext,
    reference: &str,
    owner: &str,
    standard: Option<String>,
) -> CliResult<Clause> {
    let standard = ctx.standard(standard.as_deref());
    let mut aggregate = ctx.resolve(reference, &standard).await?;
    let record = ctx.committer.set_owner(&mut aggregate, owner).await?;

    match ctx.format {
        OutputFormat::Json => print_json(&record),
        OutputFormat::Table => print_success(&format!(
            "Clause {} owner: {}",
            record.clause_number, record.owner
        )),
    }
    Ok(record)
}

/// Set or clear the comments.
pub async fn comments(
    ctx: &CommandContext,
    reference: &str,
    text: Option<&str>,
    standard: Option<String>,
) -> CliResult<Clause> {
    let standard = ctx.standard(standard.as_deref());
    let mut aggregate = ctx.resolve(reference, &standard).await?;
    let record = ctx.committer.set_comments(&mut aggregate, text).await?;

    match ctx.format {
        OutputFormat::Json => print_json(&record),
        OutputFormat::Table => match &record.comments {
            Some(_) => print_success(&format!(
                "Clause {} comments updated",
                record.clause_number
            )),
            None => print_success(&format!(
                "Clause {} comments cleared",
                record.clause_number
            )),
        },
    }
    Ok(record)
}
