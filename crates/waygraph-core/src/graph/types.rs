use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Non-negative edge weight
pub type Weight = u64;

/// Accumulated path cost; sums saturate at `Distance::MAX`
pub type Distance = u64;

/// Anything usable as a graph node: integer indices, strings, grid cells,
/// or composite states such as `(position, bitmask)`.
pub trait Node: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Node for T {}

/// Minimal distance from the source for every reachable node.
///
/// Unreachable nodes are absent; there is no "infinite" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable<N: Node> {
    distances: HashMap<N, Distance>,
}

impl<N: Node> DistanceTable<N> {
    pub(crate) fn from_map(distances: HashMap<N, Distance>) -> Self {
        Self { distances }
    }

    pub fn get(&self, node: &N) -> Option<Distance> {
        self.distances.get(node).copied()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.distances.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, Distance)> {
        self.distances.iter().map(|(node, &d)| (node, d))
    }

    /// Entries ordered by node, for stable output
    pub fn to_sorted(&self) -> Vec<(N, Distance)>
    where
        N: Ord,
    {
        let mut entries: Vec<(N, Distance)> =
            self.distances.iter().map(|(n, &d)| (n.clone(), d)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

/// Number of distinct minimum-cost paths per finalized node, modulo `modulus`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaysTable<N: Node> {
    counts: HashMap<N, u64>,
    modulus: u64,
}

impl<N: Node> WaysTable<N> {
    pub(crate) fn from_map(counts: HashMap<N, u64>, modulus: u64) -> Self {
        Self { counts, modulus }
    }

    pub fn get(&self, node: &N) -> Option<u64> {
        self.counts.get(node).copied()
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, u64)> {
        self.counts.iter().map(|(node, &c)| (node, c))
    }

    pub fn to_sorted(&self) -> Vec<(N, u64)>
    where
        N: Ord,
    {
        let mut entries: Vec<(N, u64)> =
            self.counts.iter().map(|(n, &c)| (n.clone(), c)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

/// Shortest-path parent of each reached node (the source has none)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predecessors<N: Node> {
    parents: HashMap<N, N>,
}

impl<N: Node> Predecessors<N> {
    pub(crate) fn from_map(parents: HashMap<N, N>) -> Self {
        Self { parents }
    }

    pub fn get(&self, node: &N) -> Option<&N> {
        self.parents.get(node)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Per-invocation work counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes whose distance was frozen
    pub finalized: usize,
    /// Calls to `GraphProvider::expand`
    pub expansions: usize,
    /// Edges examined during relaxation
    pub relaxations: usize,
    /// Superseded frontier entries discarded on pop
    pub stale_pops: usize,
}

/// Complete Dijkstra output
#[derive(Debug, Clone)]
pub struct ShortestPaths<N: Node> {
    pub distances: DistanceTable<N>,
    pub predecessors: Predecessors<N>,
    pub stats: SearchStats,
}

/// A reconstructed minimum-cost route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path<N: Node> {
    /// Nodes from source to target, both included
    pub nodes: Vec<N>,
    pub cost: Distance,
}

impl<N: Node> Path<N> {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Summary of the edge weights a graph contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightProfile {
    /// No edges at all
    Empty,
    /// Every weight is exactly 1
    Unit,
    /// Every weight is 0 or 1
    ZeroOne,
    /// Anything else
    General,
}

impl WeightProfile {
    /// Fold one more weight into the profile
    pub fn with_weight(self, weight: Weight) -> Self {
        match (self, weight) {
            (WeightProfile::General, _) => WeightProfile::General,
            (WeightProfile::Empty | WeightProfile::Unit, 1) => WeightProfile::Unit,
            (_, 0 | 1) => WeightProfile::ZeroOne,
            _ => WeightProfile::General,
        }
    }

    pub fn from_weights(weights: impl IntoIterator<Item = Weight>) -> Self {
        weights
            .into_iter()
            .fold(WeightProfile::Empty, WeightProfile::with_weight)
    }
}

/// Search strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Pick from the graph's weight profile
    #[default]
    Auto,
    /// Binary-heap Dijkstra
    Dijkstra,
    /// FIFO level-order search, every edge counts as one hop
    Bfs,
    /// Deque-based search for 0/1 weights
    ZeroOne,
}

impl Algorithm {
    /// Resolve `Auto` against a weight profile; concrete choices pass through
    pub fn resolve(self, profile: Option<WeightProfile>) -> Algorithm {
        match (self, profile) {
            (Algorithm::Auto, Some(WeightProfile::Empty | WeightProfile::Unit)) => Algorithm::Bfs,
            (Algorithm::Auto, Some(WeightProfile::ZeroOne)) => Algorithm::ZeroOne,
            (Algorithm::Auto, _) => Algorithm::Dijkstra,
            (other, _) => other,
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Algorithm::Auto),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bfs" => Ok(Algorithm::Bfs),
            "zero-one" | "0-1" => Ok(Algorithm::ZeroOne),
            other => Err(format!(
                "unknown algorithm '{}' (expected: auto, dijkstra, bfs, zero-one)",
                other
            )),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Algorithm::Auto => "auto",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Bfs => "bfs",
            Algorithm::ZeroOne => "zero-one",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_profile_unit() {
        assert_eq!(WeightProfile::from_weights([1, 1, 1]), WeightProfile::Unit);
    }

    #[test]
    fn test_weight_profile_zero_one() {
        assert_eq!(WeightProfile::from_weights([1, 0, 1]), WeightProfile::ZeroOne);
        assert_eq!(WeightProfile::from_weights([0]), WeightProfile::ZeroOne);
    }

    #[test]
    fn test_weight_profile_general_is_sticky() {
        assert_eq!(
            WeightProfile::from_weights([1, 5, 0, 1]),
            WeightProfile::General
        );
    }

    #[test]
    fn test_weight_profile_empty() {
        assert_eq!(WeightProfile::from_weights([]), WeightProfile::Empty);
    }

    #[test]
    fn test_algorithm_resolve_auto() {
        assert_eq!(
            Algorithm::Auto.resolve(Some(WeightProfile::Unit)),
            Algorithm::Bfs
        );
        assert_eq!(
            Algorithm::Auto.resolve(Some(WeightProfile::ZeroOne)),
            Algorithm::ZeroOne
        );
        assert_eq!(
            Algorithm::Auto.resolve(Some(WeightProfile::General)),
            Algorithm::Dijkstra
        );
        assert_eq!(Algorithm::Auto.resolve(None), Algorithm::Dijkstra);
    }

    #[test]
    fn test_algorithm_explicit_choice_wins() {
        assert_eq!(
            Algorithm::Dijkstra.resolve(Some(WeightProfile::Unit)),
            Algorithm::Dijkstra
        );
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("BFS".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!("0-1".parse::<Algorithm>(), Ok(Algorithm::ZeroOne));
        assert!("astar".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_path_hops() {
        let path = Path {
            nodes: vec![0, 2, 1, 3],
            cost: 3,
        };
        assert_eq!(path.hops(), 3);
    }
}
