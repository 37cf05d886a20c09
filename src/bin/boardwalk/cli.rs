//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Boardwalk - IDE metadata exporter for embedded build environments
#[derive(Parser)]
#[command(name = "boardwalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export the full IDE metadata record as JSON
    Dump(DumpArgs),

    /// List resolved include search paths
    Includes(IncludesArgs),

    /// List resolved preprocessor defines
    Defines(DefinesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct DumpArgs {
    /// Path to the environment snapshot (defaults to an upward search
    /// for boardwalk.toml)
    #[arg(long)]
    pub env: Option<PathBuf>,

    /// Board manifest JSON overriding the snapshot's board section
    #[arg(long)]
    pub board: Option<PathBuf>,

    /// Pretty-print the JSON record
    #[arg(long)]
    pub pretty: bool,

    /// Write the record to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct IncludesArgs {
    /// Path to the environment snapshot (defaults to an upward search
    /// for boardwalk.toml)
    #[arg(long)]
    pub env: Option<PathBuf>,
}

#[derive(Args)]
pub struct DefinesArgs {
    /// Path to the environment snapshot (defaults to an upward search
    /// for boardwalk.toml)
    #[arg(long)]
    pub env: Option<PathBuf>,

    /// Board manifest JSON overriding the snapshot's board section
    #[arg(long)]
    pub board: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
