//! Sidenav CLI - sidebar ordering for documentation trees.
//!
//! Provides commands for:
//! - `resolve`: Print the fully ordered documentation tree
//! - `check`: Report ordering configuration drift without printing the tree

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ResolveArgs};
use output::Output;

/// Sidenav - sidebar ordering for documentation trees.
#[derive(Parser)]
#[command(name = "sidenav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and print the ordered documentation tree.
    Resolve(ResolveArgs),
    /// Check the ordering configuration against the documentation tree.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for the active command
    let verbose = match &cli.command {
        Commands::Resolve(args) => args.verbose,
        Commands::Check(args) => args.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Resolve(args) => args.execute(&output),
        Commands::Check(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
