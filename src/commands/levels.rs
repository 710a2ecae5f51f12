//! `waygraph levels` - BFS levels from one or more sources

use serde_json::json;
use waygraph_core::document::LoadedGraph;
use waygraph_core::error::Result;
use waygraph_core::graph::{bfs_levels_from, Cell, GraphProvider};

use crate::cli::{LevelsArgs, OutputFormat};
use crate::commands::dispatch::{trace_phase, CommandContext};
use crate::commands::format::{print_json, print_rows};
use crate::commands::graph::{load_graph, CliNode};

/// Execute the levels command
pub fn execute(ctx: &CommandContext, args: &LevelsArgs) -> Result<()> {
    let loaded = load_graph(&args.file, ctx.config)?;
    trace_phase!(ctx, "load_graph");

    match &loaded {
        LoadedGraph::Explicit(graph) => run::<String, _>(ctx, graph, &args.source),
        LoadedGraph::Grid(graph) => run::<Cell, _>(ctx, graph, &args.source),
    }
}

fn run<N, G>(ctx: &CommandContext, graph: &G, raw_sources: &[String]) -> Result<()>
where
    N: CliNode,
    G: GraphProvider<N>,
{
    let sources = raw_sources
        .iter()
        .map(|raw| N::parse_arg(raw))
        .collect::<Result<Vec<N>>>()?;
    let levels = bfs_levels_from(graph, &sources)?;
    trace_phase!(ctx, "bfs");

    let rows = levels.to_sorted();
    match ctx.cli.format {
        OutputFormat::Json => {
            let entries: Vec<_> = rows
                .iter()
                .map(|(node, level)| json!({ "node": node.to_string(), "level": level }))
                .collect();
            let sources: Vec<String> = sources.iter().map(ToString::to_string).collect();
            print_json(&json!({
                "sources": sources,
                "reached": rows.len(),
                "levels": entries,
            }))?;
        }
        OutputFormat::Human => print_rows(&rows),
    }
    Ok(())
}
