//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use waygraph_core::config::SolverConfig;
use waygraph_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a SolverConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a SolverConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        if ctx.cli.quiet {
            return Ok(());
        }
        println!("waygraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest distances, way counts and BFS levels over graph documents.");
        println!();
        println!("Run `waygraph --help` for usage information.");
        Ok(())
    }
}
