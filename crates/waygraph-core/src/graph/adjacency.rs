//! Explicit graph representations: adjacency list and dense matrix

use crate::bail_input;
use crate::error::Result;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Node, Weight, WeightProfile};
use std::collections::HashMap;

/// Adjacency mapping from each node to its ordered outgoing edges
#[derive(Debug, Clone)]
pub struct AdjacencyList<N: Node> {
    adjacency: HashMap<N, Vec<(N, Weight)>>,
    edge_count: usize,
}

impl<N: Node> Default for AdjacencyList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> AdjacencyList<N> {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Build a directed graph from `(from, to, weight)` triples
    pub fn from_edges(edges: impl IntoIterator<Item = (N, N, Weight)>) -> Self {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Register a node, which may stay isolated
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Add a directed edge; both endpoints join the node universe
    pub fn add_edge(&mut self, from: N, to: N, weight: Weight) {
        self.add_node(to.clone());
        self.adjacency.entry(from).or_default().push((to, weight));
        self.edge_count += 1;
    }

    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: Weight) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    /// Remove every `from -> to` edge. Returns how many were removed.
    pub fn remove_edge(&mut self, from: &N, to: &N) -> usize {
        let Some(edges) = self.adjacency.get_mut(from) else {
            return 0;
        };
        let before = edges.len();
        edges.retain(|(target, _)| target != to);
        let removed = before - edges.len();
        self.edge_count -= removed;
        removed
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn edges_from(&self, node: &N) -> &[(N, Weight)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<N: Node> GraphProvider<N> for AdjacencyList<N> {
    fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn expand(&self, node: &N) -> Vec<(N, Weight)> {
        self.edges_from(node).to_vec()
    }

    fn weight_profile(&self) -> Option<WeightProfile> {
        Some(WeightProfile::from_weights(
            self.adjacency
                .values()
                .flat_map(|edges| edges.iter().map(|&(_, w)| w)),
        ))
    }
}

/// Dense `n x n` weight matrix over nodes `0..n`; `None` means no edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    weights: Vec<Vec<Option<Weight>>>,
}

impl AdjacencyMatrix {
    pub fn new(weights: Vec<Vec<Option<Weight>>>) -> Result<Self> {
        let n = weights.len();
        if let Some((row, cells)) = weights.iter().enumerate().find(|(_, r)| r.len() != n) {
            bail_input!(
                "adjacency matrix must be square: row {} has {} entries, expected {}",
                row,
                cells.len(),
                n
            );
        }
        Ok(Self { weights })
    }

    pub fn node_count(&self) -> usize {
        self.weights.len()
    }
}

impl GraphProvider<usize> for AdjacencyMatrix {
    fn contains(&self, node: &usize) -> bool {
        *node < self.weights.len()
    }

    fn expand(&self, node: &usize) -> Vec<(usize, Weight)> {
        self.weights
            .get(*node)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(to, w)| w.map(|w| (to, w)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn weight_profile(&self) -> Option<WeightProfile> {
        Some(WeightProfile::from_weights(
            self.weights.iter().flatten().filter_map(|w| *w),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_registers_both_endpoints() {
        let mut graph = AdjacencyList::new();
        graph.add_edge("a", "b", 3);
        assert!(graph.contains(&"a"));
        assert!(graph.contains(&"b"));
        assert!(!graph.contains(&"c"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_isolated_node_is_member() {
        let mut graph: AdjacencyList<u32> = AdjacencyList::new();
        graph.add_node(5);
        assert!(graph.contains(&5));
        assert!(graph.expand(&5).is_empty());
    }

    #[test]
    fn test_expand_preserves_insertion_order() {
        let graph = AdjacencyList::from_edges([(0, 3, 1), (0, 1, 2), (0, 2, 3)]);
        assert_eq!(graph.expand(&0), vec![(3, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_undirected_edge() {
        let mut graph = AdjacencyList::new();
        graph.add_undirected_edge(1, 2, 7);
        assert_eq!(graph.expand(&1), vec![(2, 7)]);
        assert_eq!(graph.expand(&2), vec![(1, 7)]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_remove_edge_removes_parallel_edges() {
        let mut graph = AdjacencyList::from_edges([(0, 1, 1), (0, 1, 4), (0, 2, 1)]);
        assert_eq!(graph.remove_edge(&0, &1), 2);
        assert_eq!(graph.expand(&0), vec![(2, 1)]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.remove_edge(&9, &1), 0);
    }

    #[test]
    fn test_list_weight_profile() {
        let unit = AdjacencyList::from_edges([(0, 1, 1), (1, 2, 1)]);
        assert_eq!(unit.weight_profile(), Some(WeightProfile::Unit));
        let general = AdjacencyList::from_edges([(0, 1, 1), (1, 2, 9)]);
        assert_eq!(general.weight_profile(), Some(WeightProfile::General));
    }

    #[test]
    fn test_matrix_expand() {
        let matrix = AdjacencyMatrix::new(vec![
            vec![None, Some(4), Some(1)],
            vec![None, None, None],
            vec![None, Some(1), None],
        ])
        .unwrap();
        assert_eq!(matrix.node_count(), 3);
        assert_eq!(matrix.expand(&0), vec![(1, 4), (2, 1)]);
        assert!(matrix.contains(&2));
        assert!(!matrix.contains(&3));
        assert!(matrix.expand(&3).is_empty());
    }

    #[test]
    fn test_matrix_must_be_square() {
        let err = AdjacencyMatrix::new(vec![vec![None, None], vec![None]]).unwrap_err();
        assert!(err.to_string().contains("square"));
    }
}
