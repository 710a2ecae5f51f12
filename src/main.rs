//! Waygraph - shortest-path CLI over graph documents
//!
//! Loads an edge list or a grid maze and answers distance, way-count,
//! BFS-level, path and reachability queries from a source node.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use waygraph_core::error::{ExitCode as WaygraphExitCode, WaygraphError};
use waygraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(WaygraphExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// clap fails before `Cli.format` exists, so a JSON request is read from argv
fn parse_failure(err: clap::Error) -> ExitCode {
    let wants_json = std::env::args()
        .collect::<Vec<_>>()
        .windows(2)
        .any(|pair| pair[0] == "--format" && pair[1] == "json")
        || std::env::args().any(|arg| arg == "--format=json");

    if !wants_json || matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.exit();
    }

    let usage = WaygraphError::UsageError(err.to_string());
    eprintln!("{}", usage.to_json());
    ExitCode::from(usage.exit_code() as u8)
}
