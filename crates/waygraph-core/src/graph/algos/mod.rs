//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dijkstra`: Binary-heap shortest paths with optional way counting
//! - `bfs`: Level-order search for unit-cost graphs
//! - `zero_one`: Deque-based search for 0/1 weights
//! - `reach`: Iterative depth-first reachability
//! - `shared`: Common utilities used by multiple algorithms

pub mod bfs;
pub mod dijkstra;
pub mod reach;
pub mod shared;
pub mod zero_one;

pub use bfs::{bfs_levels, bfs_levels_from};
pub use dijkstra::{dijkstra, shortest_distances, shortest_distances_with_way_counts};
pub use reach::reachable;
pub use zero_one::zero_one_distances;

use crate::error::Result;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Algorithm, DistanceTable, Node};

/// Shortest distances using `algorithm`, resolving `Auto` from the graph's
/// weight profile. Returns the table and the algorithm that actually ran.
#[tracing::instrument(skip(graph))]
pub fn solve<N, G>(
    graph: &G,
    source: &N,
    algorithm: Algorithm,
) -> Result<(DistanceTable<N>, Algorithm)>
where
    N: Node,
    G: GraphProvider<N> + ?Sized,
{
    let chosen = algorithm.resolve(graph.weight_profile());
    tracing::debug!(requested = %algorithm, chosen = %chosen, "solve");
    let distances = match chosen {
        Algorithm::Bfs => bfs_levels(graph, source)?,
        Algorithm::ZeroOne => zero_one_distances(graph, source)?,
        Algorithm::Dijkstra | Algorithm::Auto => shortest_distances(graph, source)?,
    };
    Ok((distances, chosen))
}
