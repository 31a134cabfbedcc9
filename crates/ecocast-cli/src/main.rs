//! `ecocast`: runs the energy → water → CO₂ cascade from the command line.
//!
//! Artifacts are loaded once per invocation from the paths in the
//! configuration file; results go to stdout, logs to stderr.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use ecocast_cascade::tracing_setup::init_tracing;

use crate::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = commands::load_config(cli.config.as_deref())?;
    init_tracing(&config.observability);

    match cli.command {
        Commands::Predict(args) => commands::predict::execute(&config, &args, cli.format),
        Commands::Batch(args) => commands::batch::execute(&config, &args, cli.format),
        Commands::Explain(args) => commands::explain::execute(&config, &args, cli.format),
        Commands::Schema(args) => commands::schema::execute(&config, &args, cli.format),
    }
}
