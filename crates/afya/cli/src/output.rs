//! Output formatting utilities

use afya_types::{Clause, Status};
use colored::*;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Table row for a clause listing
#[derive(Tabled, Serialize)]
pub struct ClauseRow {
    #[tabled(rename = "Clause")]
    pub number: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Owner")]
    pub owner: String,
    #[tabled(rename = "Evidence")]
    pub evidence: usize,
    #[tabled(rename = "Requirement")]
    pub summary: String,
    #[tabled(rename = "ID")]
    pub id: String,
}

impl From<&Clause> for ClauseRow {
    fn from(clause: &Clause) -> Self {
        Self {
            number: clause.clause_number.to_string(),
            status: clause.status.code().to_string(),
            owner: clause.owner.clone(),
            evidence: clause.evidence.len(),
            summary: truncate(&clause.short_description, 60),
            id: clause.id.to_string(),
        }
    }
}

/// Table row for the status legend
#[derive(Tabled, Serialize)]
pub struct LegendRow {
    #[tabled(rename = "Code")]
    pub code: &'static str,
    #[tabled(rename = "Status")]
    pub label: &'static str,
    #[tabled(rename = "Weight")]
    pub weight: u32,
    #[tabled(rename = "Evidence to enter")]
    pub gated: &'static str,
    #[tabled(rename = "Meaning")]
    pub description: &'static str,
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    } else {
        text.to_string()
    }
}

/// Print a vector of items in the specified format
pub fn print_output<T: Serialize + Tabled>(data: Vec<T>, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No results".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => print_json(&data),
    }
}

/// Print a single item as JSON
pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => print_error(&format!("failed to render JSON: {}", e)),
    }
}

/// Print a clause in full
pub fn print_clause(clause: &Clause, allowed: &[Status], format: OutputFormat) {
    if let OutputFormat::Json = format {
        print_json(clause);
        return;
    }

    println!(
        "{} {} {}",
        clause.standard.as_str().to_uppercase().bold(),
        clause.clause_number.to_string().bold(),
        colorize_status(clause.status)
    );
    println!("ID: {}", clause.id);
    println!("Owner: {}", clause.owner);
    if let Some(updated) = clause.last_updated {
        println!("Last updated: {}", updated.format("%Y-%m-%d %H:%M UTC"));
    }
    println!("\n{}", clause.description);
    if let Some(comments) = &clause.comments {
        println!("\nComments: {}", comments.italic());
    }

    println!("\nEvidence:");
    if clause.evidence.is_empty() {
        println!("  {}", "none".dimmed());
    }
    for record in &clause.evidence {
        println!("  • {} {}", record.file_name(), format!("({})", record).dimmed());
    }

    let targets: Vec<&str> = allowed.iter().map(|s| s.code()).collect();
    if targets.is_empty() {
        println!("\nNext status: {}", "none".dimmed());
    } else {
        println!("\nNext status: {}", targets.join(", "));
    }
}

/// Colour a status badge
pub fn colorize_status(status: Status) -> ColoredString {
    let badge = format!("[{}]", status.label());
    match status {
        Status::NotImplemented => badge.red(),
        Status::Planned => badge.dimmed(),
        Status::InProgress => badge.yellow(),
        Status::MostlyImplemented => badge.green(),
        Status::Optimized => badge.bright_green().bold(),
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}
