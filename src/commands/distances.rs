//! `waygraph distances` - minimal distance to every reachable node

use serde_json::json;
use waygraph_core::document::LoadedGraph;
use waygraph_core::error::Result;
use waygraph_core::graph::{solve, Algorithm, Cell, GraphProvider};

use crate::cli::{DistancesArgs, OutputFormat};
use crate::commands::dispatch::{trace_phase, CommandContext};
use crate::commands::format::{print_json, print_rows};
use crate::commands::graph::{load_graph, CliNode};

/// Execute the distances command
pub fn execute(ctx: &CommandContext, args: &DistancesArgs) -> Result<()> {
    let loaded = load_graph(&args.file, ctx.config)?;
    trace_phase!(ctx, "load_graph");

    let algorithm = args.algorithm.unwrap_or(ctx.config.solver.algorithm);
    match &loaded {
        LoadedGraph::Explicit(graph) => run::<String, _>(ctx, graph, &args.source, algorithm),
        LoadedGraph::Grid(graph) => run::<Cell, _>(ctx, graph, &args.source, algorithm),
    }
}

fn run<N, G>(ctx: &CommandContext, graph: &G, raw_source: &str, algorithm: Algorithm) -> Result<()>
where
    N: CliNode,
    G: GraphProvider<N>,
{
    let source = N::parse_arg(raw_source)?;
    let (distances, chosen) = solve(graph, &source, algorithm)?;
    trace_phase!(ctx, "solve");

    let rows = distances.to_sorted();
    match ctx.cli.format {
        OutputFormat::Json => {
            let entries: Vec<_> = rows
                .iter()
                .map(|(node, distance)| json!({ "node": node.to_string(), "distance": distance }))
                .collect();
            print_json(&json!({
                "source": source.to_string(),
                "algorithm": chosen.to_string(),
                "reached": rows.len(),
                "distances": entries,
            }))?;
        }
        OutputFormat::Human => print_rows(&rows),
    }
    Ok(())
}
