//! Operator CLI for the complaint triage engine.
//!
//! Subcommands:
//! - `triage`: run one complaint through the pipeline
//! - `validate`: shape-check a config file and/or model artifact bundle

mod triage_cmd;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "triage", version, about = "Civic-complaint triage engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Triage a single complaint and print the result
    Triage(triage_cmd::TriageArgs),

    /// Validate a config file and/or model artifact bundle
    Validate(validate::ValidateArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Triage(args) => triage_cmd::execute(args),
        Commands::Validate(args) => validate::execute(args),
    }
}
