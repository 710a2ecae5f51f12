//! `waygraph reach` - nodes reachable from a source

use serde_json::json;
use waygraph_core::document::LoadedGraph;
use waygraph_core::error::Result;
use waygraph_core::graph::{reachable, Cell, GraphProvider};

use crate::cli::{OutputFormat, ReachArgs};
use crate::commands::dispatch::{trace_phase, CommandContext};
use crate::commands::format::print_json;
use crate::commands::graph::{load_graph, CliNode};

/// Execute the reach command
pub fn execute(ctx: &CommandContext, args: &ReachArgs) -> Result<()> {
    let loaded = load_graph(&args.file, ctx.config)?;
    trace_phase!(ctx, "load_graph");

    match &loaded {
        LoadedGraph::Explicit(graph) => run::<String, _>(ctx, graph, &args.source),
        LoadedGraph::Grid(graph) => run::<Cell, _>(ctx, graph, &args.source),
    }
}

fn run<N, G>(ctx: &CommandContext, graph: &G, raw_source: &str) -> Result<()>
where
    N: CliNode,
    G: GraphProvider<N>,
{
    let source = N::parse_arg(raw_source)?;
    let mut nodes: Vec<N> = reachable(graph, &source)?.into_iter().collect();
    nodes.sort();
    trace_phase!(ctx, "reach");

    match ctx.cli.format {
        OutputFormat::Json => {
            let names: Vec<String> = nodes.iter().map(ToString::to_string).collect();
            print_json(&json!({
                "source": source.to_string(),
                "count": names.len(),
                "nodes": names,
            }))?;
        }
        OutputFormat::Human => {
            for node in &nodes {
                println!("{}", node);
            }
        }
    }
    Ok(())
}
