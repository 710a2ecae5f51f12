mod reconstruct;

use crate::error::Result;
use crate::graph::algos::dijkstra::dijkstra_until;
use crate::graph::algos::shared::ensure_member;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Node, Path};

pub use reconstruct::path_to;

/// Minimum-cost route from `source` to `target`.
///
/// Runs Dijkstra and stops as soon as `target` is finalized. Returns
/// `Ok(None)` when the target is unreachable; a source or target outside
/// the graph is `InvalidInput`.
#[tracing::instrument(skip(graph))]
pub fn shortest_path<N, G>(graph: &G, source: &N, target: &N) -> Result<Option<Path<N>>>
where
    N: Node,
    G: GraphProvider<N> + ?Sized,
{
    ensure_member(graph, target, "target")?;
    let result = dijkstra_until(graph, source, target)?;

    let Some(cost) = result.distances.get(target) else {
        tracing::debug!(finalized = result.stats.finalized, "target unreachable");
        return Ok(None);
    };
    let nodes = path_to(&result.predecessors, source, target);
    Ok(nodes.map(|nodes| Path { nodes, cost }))
}
