//! `waygraph path` - one minimum-cost route between two nodes

use serde_json::json;
use waygraph_core::document::LoadedGraph;
use waygraph_core::error::Result;
use waygraph_core::graph::{shortest_path, Cell, GraphProvider};

use crate::cli::{OutputFormat, PathArgs};
use crate::commands::dispatch::{trace_phase, CommandContext};
use crate::commands::format::print_json;
use crate::commands::graph::{load_graph, CliNode};

/// Execute the path command; an unreachable target is not an error
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let loaded = load_graph(&args.file, ctx.config)?;
    trace_phase!(ctx, "load_graph");

    match &loaded {
        LoadedGraph::Explicit(graph) => run::<String, _>(ctx, graph, args),
        LoadedGraph::Grid(graph) => run::<Cell, _>(ctx, graph, args),
    }
}

fn run<N, G>(ctx: &CommandContext, graph: &G, args: &PathArgs) -> Result<()>
where
    N: CliNode,
    G: GraphProvider<N>,
{
    let source = N::parse_arg(&args.source)?;
    let target = N::parse_arg(&args.target)?;
    let path = shortest_path(graph, &source, &target)?;
    trace_phase!(ctx, "shortest_path");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = match &path {
                Some(path) => {
                    let nodes: Vec<String> = path.nodes.iter().map(ToString::to_string).collect();
                    json!({
                        "source": source.to_string(),
                        "target": target.to_string(),
                        "found": true,
                        "cost": path.cost,
                        "hops": path.hops(),
                        "nodes": nodes,
                    })
                }
                None => json!({
                    "source": source.to_string(),
                    "target": target.to_string(),
                    "found": false,
                }),
            };
            print_json(&output)?;
        }
        OutputFormat::Human => match &path {
            Some(path) => {
                let nodes: Vec<String> = path.nodes.iter().map(ToString::to_string).collect();
                println!("{}", nodes.join(" -> "));
                if !ctx.cli.quiet {
                    println!("cost\t{}", path.cost);
                }
            }
            None => {
                if !ctx.cli.quiet {
                    println!("no path from {} to {}", source, target);
                }
            }
        },
    }
    Ok(())
}
