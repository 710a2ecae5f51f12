//! `waygraph ways` - distances plus minimum-cost path counts

use serde_json::json;
use waygraph_core::document::LoadedGraph;
use waygraph_core::error::Result;
use waygraph_core::graph::{shortest_distances_with_way_counts, Cell, GraphProvider};

use crate::cli::{OutputFormat, WaysArgs};
use crate::commands::dispatch::{trace_phase, CommandContext};
use crate::commands::format::print_json;
use crate::commands::graph::{load_graph, CliNode};

/// Execute the ways command
pub fn execute(ctx: &CommandContext, args: &WaysArgs) -> Result<()> {
    let loaded = load_graph(&args.file, ctx.config)?;
    trace_phase!(ctx, "load_graph");

    let modulus = args.modulus.unwrap_or(ctx.config.solver.way_modulus);
    match &loaded {
        LoadedGraph::Explicit(graph) => run::<String, _>(ctx, graph, &args.source, modulus),
        LoadedGraph::Grid(graph) => run::<Cell, _>(ctx, graph, &args.source, modulus),
    }
}

fn run<N, G>(ctx: &CommandContext, graph: &G, raw_source: &str, modulus: u64) -> Result<()>
where
    N: CliNode,
    G: GraphProvider<N>,
{
    let source = N::parse_arg(raw_source)?;
    let (distances, ways) = shortest_distances_with_way_counts(graph, &source, modulus)?;
    trace_phase!(ctx, "count_ways");

    // Both tables cover exactly the finalized nodes
    let rows: Vec<(N, u64, u64)> = distances
        .to_sorted()
        .into_iter()
        .map(|(node, distance)| {
            let count = ways.get(&node).unwrap_or(0);
            (node, distance, count)
        })
        .collect();

    match ctx.cli.format {
        OutputFormat::Json => {
            let entries: Vec<_> = rows
                .iter()
                .map(|(node, distance, count)| {
                    json!({ "node": node.to_string(), "distance": distance, "ways": count })
                })
                .collect();
            print_json(&json!({
                "source": source.to_string(),
                "modulus": ways.modulus(),
                "reached": rows.len(),
                "nodes": entries,
            }))?;
        }
        OutputFormat::Human => {
            for (node, distance, count) in &rows {
                println!("{}\t{}\t{}", node, distance, count);
            }
        }
    }
    Ok(())
}
