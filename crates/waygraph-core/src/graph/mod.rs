//! Shortest-path and reachability engine
//!
//! Works over any [`GraphProvider`]: explicit adjacency lists and matrices,
//! grids, or lazily expanded state spaces.
//! - Dijkstra for non-negative weights, with optional way counting
//! - BFS levels and 0-1 BFS for the uniform and 0/1 special cases
//! - Path reconstruction and iterative reachability

pub mod adjacency;
pub mod algos;
pub mod grid;
pub mod implicit;
pub mod path;
pub mod traversal;
pub mod types;

pub use adjacency::{AdjacencyList, AdjacencyMatrix};
pub use algos::{
    bfs_levels, bfs_levels_from, dijkstra, reachable, shortest_distances,
    shortest_distances_with_way_counts, solve, zero_one_distances,
};
pub use grid::{Cell, Connectivity, GridGraph};
pub use implicit::ImplicitGraph;
pub use path::shortest_path;
pub use traversal::GraphProvider;
pub use types::{
    Algorithm, Distance, DistanceTable, Node, Path, Predecessors, SearchStats, ShortestPaths,
    WaysTable, Weight, WeightProfile,
};
