//! SuiteInspect CLI
//!
//! Security-assessment orchestrator for a cloud office suite tenant.

mod commands;
mod snapshot;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// SuiteInspect - tenant security assessment
#[derive(Parser)]
#[command(name = "suiteinspect")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run inspectors and render the HTML report
    Scan(commands::scan::ScanArgs),

    /// List discovered inspectors
    List(commands::list::ListArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    match cli.command {
        Commands::Scan(args) => commands::scan::run(args),
        Commands::List(args) => commands::list::run(args),
    }
}
