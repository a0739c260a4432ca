//! afya - compliance clause register CLI
//!
//! Tracks the implementation maturity of ISO 7101 and ISO 27001 clauses:
//! - Seed a register from the built-in clause catalogues
//! - Move clauses one status level at a time, gated on evidence at MI/O
//! - Attach and remove evidence, assign owners, keep comments
//! - Report compliance scores under each scoring policy

use std::sync::Arc;

use afya_engine::ScoringPolicy;
use afya_types::Status;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;
mod store;

use commands::{clause, evidence, legend, score, seed, CommandContext};
use config::AfyaConfig;
use error::CliResult;
use output::{print_error, print_json, OutputFormat};
use store::JsonFileClauseStore;

/// afya CLI application
#[derive(Parser)]
#[command(name = "afya")]
#[command(about = "AfyaNumeriq - compliance clause register", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "AFYA_CONFIG")]
    config: Option<String>,

    /// Register file (overrides storage.data_path)
    #[arg(short, long, env = "AFYA_DATA")]
    data: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Seed the register from a built-in clause catalogue
    Seed {
        /// Standard to seed (iso-7101, iso-27001)
        #[arg(short, long)]
        standard: Option<String>,

        /// Refresh the requirement text of clauses already in the register,
        /// keeping their status, owner, comments and evidence
        #[arg(long)]
        update_existing: bool,
    },

    /// List clauses
    #[command(alias = "ls")]
    List {
        #[arg(short, long)]
        standard: Option<String>,

        /// Only clauses at this status (code or label)
        #[arg(long)]
        status: Option<Status>,
    },

    /// Show one clause
    Show {
        /// Clause number or ID
        clause: String,

        #[arg(short, long)]
        standard: Option<String>,
    },

    /// Move a clause to an adjacent status
    #[command(alias = "set")]
    Transition {
        /// Clause number or ID
        clause: String,

        /// Target status (NI, P, IP, MI, O)
        status: Status,

        #[arg(short, long)]
        standard: Option<String>,
    },

    /// Manage evidence
    Evidence {
        #[arg(short, long, global = true)]
        standard: Option<String>,

        #[command(subcommand)]
        command: evidence::EvidenceCommands,
    },

    /// Assign a clause owner; an empty name resets it
    Owner {
        clause: String,
        owner: String,

        #[arg(short, long)]
        standard: Option<String>,
    },

    /// Set or clear clause comments
    Comments {
        clause: String,

        /// Comment text; omit to clear
        text: Option<String>,

        #[arg(short, long)]
        standard: Option<String>,
    },

    /// Compliance score
    Score {
        #[arg(short, long)]
        standard: Option<String>,

        /// Report a single policy (weighted-mean, top-tier-percent, rounded-points)
        #[arg(short, long)]
        policy: Option<ScoringPolicy>,
    },

    /// Status levels, weights and evidence gates
    Legend,

    /// Show configuration
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = AfyaConfig::load(cli.config.as_deref())?;
    if let Some(data) = &cli.data {
        config.storage.data_path = data.into();
    }

    init_tracing(&config, cli.verbose, cli.log_json);

    let store = JsonFileClauseStore::new(&config.storage.data_path)
        .with_pretty(config.storage.pretty);
    let ctx = CommandContext::new(Arc::new(store), config, cli.output);

    match cli.command {
        Commands::Seed {
            standard,
            update_existing,
        } => {
            seed::execute(&ctx, standard, update_existing).await?;
        }
        Commands::List { standard, status } => {
            clause::list(&ctx, standard, status).await?;
        }
        Commands::Show { clause: reference, standard } => {
            clause::show(&ctx, &reference, standard).await?;
        }
        Commands::Transition {
            clause: reference,
            status,
            standard,
        } => {
            clause::transition(&ctx, &reference, status, standard).await?;
        }
        Commands::Evidence { standard, command } => {
            evidence::execute(command, &ctx, standard).await?;
        }
        Commands::Owner {
            clause: reference,
            owner,
            standard,
        } => {
            clause::owner(&ctx, &reference, &owner, standard).await?;
        }
        Commands::Comments {
            clause: reference,
            text,
            standard,
        } => {
            clause::comments(&ctx, &reference, text.as_deref(), standard).await?;
        }
        Commands::Score { standard, policy } => {
            score::execute(&ctx, standard, policy).await?;
        }
        Commands::Legend => legend::execute(ctx.format),
        Commands::Config => match ctx.format {
            OutputFormat::Json => print_json(&ctx.config),
            OutputFormat::Table => {
                println!("Register: {}", ctx.config.storage.data_path.display());
                println!("Default standard: {}", ctx.config.default_standard);
                println!("Config: {:?}", ctx.config);
            }
        },
    }
    Ok(())
}

fn init_tracing(config: &AfyaConfig, verbose: bool, json: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.into());

    // Logs go to stderr so JSON output on stdout stays machine-readable.
    if json || config.logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
