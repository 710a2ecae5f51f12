use crate::error::{Result, WaygraphError};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Node;

/// Fail with `InvalidInput` unless `node` belongs to the graph
pub fn ensure_member<N, G>(graph: &G, node: &N, role: &str) -> Result<()>
where
    N: Node,
    G: GraphProvider<N> + ?Sized,
{
    if graph.contains(node) {
        Ok(())
    } else {
        Err(WaygraphError::node_not_in_graph(role, node))
    }
}
