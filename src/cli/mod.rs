//! CLI argument parsing for graphbench
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod format;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{RunArgs, ShowArgs};
pub use output::OutputFormat;

/// Graphbench - timing comparison of Dijkstra, Bellman-Ford and BFS
/// on adjacency-matrix and adjacency-list graphs
#[derive(Parser, Debug)]
#[command(name = "graphbench")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. "debug", "graphbench_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Benchmark configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the timing sweep and write the results file
    Run(RunArgs),

    /// Generate one graph and print an algorithm's result
    Show(ShowArgs),

    /// Print the effective benchmark configuration
    Config,
}
