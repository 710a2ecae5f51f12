use crate::error::Result;
use crate::graph::algos::shared::ensure_member;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Node;
use std::collections::HashSet;

/// Every node reachable from `source`, the source included.
///
/// Depth-first with an explicit stack, so arbitrarily deep graphs cannot
/// exhaust the call stack. Each node is expanded once.
#[tracing::instrument(skip(graph))]
pub fn reachable<N, G>(graph: &G, source: &N) -> Result<HashSet<N>>
where
    N: Node,
    G: GraphProvider<N> + ?Sized,
{
    ensure_member(graph, source, "source")?;

    let mut visited = HashSet::from([source.clone()]);
    let mut stack = vec![source.clone()];

    while let Some(node) = stack.pop() {
        for (neighbor, _) in graph.expand(&node) {
            if visited.insert(neighbor.clone()) {
                stack.push(neighbor);
            }
        }
    }

    tracing::debug!(reached = visited.len(), "reachable");
    Ok(visited)
}
