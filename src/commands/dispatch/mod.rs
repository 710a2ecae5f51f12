//! Command dispatch logic for waygraph

use std::time::Instant;

use crate::cli::Cli;
use waygraph_core::config::SolverConfig;
use waygraph_core::error::Result;

mod command;
mod commands;
mod macros;

pub(crate) use macros::trace_phase;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = SolverConfig::resolve(cli.config.as_deref())?;
    let ctx = CommandContext::new(cli, &config, start);
    trace_phase!(ctx, "resolve_config");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
