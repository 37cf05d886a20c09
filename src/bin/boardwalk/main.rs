//! Boardwalk CLI - IDE metadata exporter for embedded build environments

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging; stdout is reserved for the exported records
    let filter = if cli.verbose {
        EnvFilter::new("boardwalk=debug")
    } else {
        EnvFilter::new("boardwalk=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Dump(args) => commands::dump::execute(args),
        Commands::Includes(args) => commands::includes::execute(args),
        Commands::Defines(args) => commands::defines::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
