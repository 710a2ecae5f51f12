//! CLI argument parsing for waygraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{DistancesArgs, LevelsArgs, PathArgs, ReachArgs, WaysArgs};
pub use waygraph_core::format::OutputFormat;
use parse::parse_format;

/// Waygraph - shortest paths, way counts and BFS levels over graph documents
#[derive(Parser, Debug)]
#[command(name = "waygraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Solver config file (defaults to the user config directory)
    #[arg(long, global = true, env = "WAYGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Minimal distance from the source to every reachable node
    Distances(DistancesArgs),

    /// BFS levels (edge counts) from one or more sources
    Levels(LevelsArgs),

    /// Distances plus the number of minimum-cost paths to each node
    Ways(WaysArgs),

    /// One minimum-cost path between two nodes
    Path(PathArgs),

    /// Nodes reachable from the source
    Reach(ReachArgs),
}
