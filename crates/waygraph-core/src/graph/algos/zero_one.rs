use crate::error::{Result, WaygraphError};
use crate::graph::algos::shared::ensure_member;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Distance, DistanceTable, Node, SearchStats};
use crate::log_search_stats;
use std::collections::{HashMap, HashSet, VecDeque};

/// Shortest distances for graphs whose weights are all 0 or 1.
///
/// Zero-cost neighbors go to the front of a deque and unit-cost ones to
/// the back, so the deque stays sorted without a heap. Stale entries are
/// skipped on pop like in Dijkstra. Any other weight fails with
/// `UnsupportedWeight`.
#[tracing::instrument(skip(graph))]
pub fn zero_one_distances<N, G>(graph: &G, source: &N) -> Result<DistanceTable<N>>
where
    N: Node,
    G: GraphProvider<N> + ?Sized,
{
    ensure_member(graph, source, "source")?;

    let mut best: HashMap<N, Distance> = HashMap::from([(source.clone(), 0)]);
    let mut finalized: HashSet<N> = HashSet::new();
    let mut deque: VecDeque<(N, Distance)> = VecDeque::from([(source.clone(), 0)]);
    let mut stats = SearchStats::default();

    while let Some((node, distance)) = deque.pop_front() {
        if finalized.contains(&node) {
            stats.stale_pops += 1;
            continue;
        }
        finalized.insert(node.clone());
        stats.finalized += 1;
        stats.expansions += 1;

        for (neighbor, weight) in graph.expand(&node) {
            stats.relaxations += 1;
            if weight > 1 {
                return Err(WaygraphError::UnsupportedWeight {
                    algorithm: "0-1 BFS".to_string(),
                    weight,
                });
            }
            let candidate = distance + weight;
            if best.get(&neighbor).is_some_and(|&current| current <= candidate) {
                continue;
            }
            best.insert(neighbor.clone(), candidate);
            if weight == 0 {
                deque.push_front((neighbor, candidate));
            } else {
                deque.push_back((neighbor, candidate));
            }
        }
    }

    log_search_stats!(&stats, "zero_one_bfs");
    Ok(DistanceTable::from_map(best))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algos::dijkstra::shortest_distances;
    use crate::graph::grid::{Cell, Connectivity};
    use crate::graph::{AdjacencyList, GridGraph, ImplicitGraph};

    #[test]
    fn test_matches_dijkstra_on_zero_one_graph() {
        let graph = AdjacencyList::from_edges([
            (0, 1, 1),
            (0, 2, 0),
            (2, 1, 0),
            (1, 3, 1),
            (2, 4, 1),
            (4, 3, 0),
            (3, 5, 1),
        ]);
        let expected = shortest_distances(&graph, &0).unwrap();
        let actual = zero_one_distances(&graph, &0).unwrap();
        assert_eq!(actual, expected);
        assert_eq!(actual.get(&1), Some(0));
        assert_eq!(actual.get(&3), Some(1));
    }

    #[test]
    fn test_rejects_heavier_weights() {
        let graph = AdjacencyList::from_edges([(0, 1, 2)]);
        let err = zero_one_distances(&graph, &0).unwrap_err();
        assert!(matches!(
            err,
            WaygraphError::UnsupportedWeight { weight: 2, .. }
        ));
    }

    #[test]
    fn test_wall_breaking_grid() {
        // Moving into a wall costs 1, into an open cell 0: fewest walls to break
        let lines = [".#.", "##.", "..#"];
        let grid = GridGraph::parse(&lines, &['.', '#'], Connectivity::Four).unwrap();
        let walls: Vec<Vec<bool>> = lines
            .iter()
            .map(|l| l.chars().map(|c| c == '#').collect())
            .collect();
        let graph = ImplicitGraph::new(
            |cell: &Cell| grid.contains(cell),
            |cell: &Cell| {
                grid.expand(cell)
                    .into_iter()
                    .map(|(next, _)| (next, u64::from(walls[next.row][next.col])))
                    .collect()
            },
        );
        let distances = zero_one_distances(&graph, &Cell::new(0, 0)).unwrap();
        assert_eq!(distances.get(&Cell::new(0, 2)), Some(1));
        assert_eq!(distances.get(&Cell::new(2, 0)), Some(1));
        assert_eq!(distances.get(&Cell::new(1, 2)), Some(1));
        assert_eq!(distances.get(&Cell::new(2, 2)), Some(2));
    }

    #[test]
    fn test_missing_source() {
        let graph = AdjacencyList::from_edges([(0, 1, 1)]);
        assert!(matches!(
            zero_one_distances(&graph, &3).unwrap_err(),
            WaygraphError::InvalidInput { .. }
        ));
    }
}
