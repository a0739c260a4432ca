//! Seed a register from a built-in catalogue

use afya_engine::SeedOutcome;
use tracing::info;

use super::CommandContext;
use crate::error::CliResult;
use crate::output::{print_json, print_success, OutputFormat};

/// Seed `standard` into the store in a single write.
///
/// Only clause numbers missing from the register are added. With
/// `update_existing`, clauses already present get the catalogue's
/// requirement text; their status, owner, comments and evidence are kept.
pub async fn execute(
    ctx: &CommandContext,
    standard: Option<String>,
    update_existing: bool,
) -> CliResult<SeedOutcome> {
    let standard = ctx.standard(standard.as_deref());
    let clauses = afya_catalog::seed(&standard)?;
    let outcome = ctx.store.seed_catalogue(clauses, update_existing).await?;

    info!(
        standard = %standard,
        inserted = outcome.inserted,
        refreshed = outcome.refreshed,
        unchanged = outcome.unchanged,
        "Seeded clause catalogue"
    );
    match ctx.format {
        OutputFormat::Json => print_json(&outcome),
        OutputFormat::Table => print_success(&format!(
            "Seeded {}: {} added, {} refreshed, {} unchanged",
            standard, outcome.inserted, outcome.refreshed, outcome.unchanged
        )),
    }
    Ok(outcome)
}
