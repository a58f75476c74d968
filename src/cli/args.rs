//! Command line argument parsing for the setsearch CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// setsearch - boolean set queries over an in-memory inverted index
#[derive(Parser, Debug, Clone)]
#[command(name = "setsearch")]
#[command(about = "Boolean set queries over an in-memory inverted index")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SetSearchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Corpus file of alternating identifier and text lines
    #[arg(
        short,
        long,
        value_name = "CORPUS_FILE",
        env = "SETSEARCH_CORPUS",
        global = true
    )]
    pub corpus: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SetSearchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the index and show its statistics
    Stats,

    /// Evaluate one or more queries
    Query(QueryArgs),

    /// Read queries from standard input until an empty line
    Interactive(InteractiveArgs),
}

/// Arguments for one-shot queries
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// Query strings, e.g. "fish +red -blue"
    #[arg(value_name = "QUERY", required = true)]
    pub queries: Vec<String>,

    /// Keep the result order of the underlying set instead of sorting
    #[arg(long)]
    pub unsorted: bool,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Prompt shown before each query (overrides the config file)
    #[arg(long)]
    pub prompt: Option<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
