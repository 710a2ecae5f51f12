//! Command implementations for all waygraph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{distances, levels, path, reach, ways};
use waygraph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Distances(args) => distances::execute(ctx, args),
            Commands::Levels(args) => levels::execute(ctx, args),
            Commands::Ways(args) => ways::execute(ctx, args),
            Commands::Path(args) => path::execute(ctx, args),
            Commands::Reach(args) => reach::execute(ctx, args),
        }
    }
}
