//! Path reconstruction from shortest-path parents

use crate::graph::types::{Node, Predecessors};

/// Walk parents back from `target` to `source`.
///
/// Returns `None` when the chain breaks before reaching `source`, or runs
/// longer than the number of recorded parents (a corrupt, cyclic table).
pub fn path_to<N: Node>(
    predecessors: &Predecessors<N>,
    source: &N,
    target: &N,
) -> Option<Vec<N>> {
    let mut nodes = vec![target.clone()];
    let mut current = target;

    while current != source {
        if nodes.len() > predecessors.len() {
            return None;
        }
        current = predecessors.get(current)?;
        nodes.push(current.clone());
    }

    nodes.reverse();
    Some(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parents(pairs: &[(u32, u32)]) -> Predecessors<u32> {
        Predecessors::from_map(pairs.iter().copied().collect::<HashMap<_, _>>())
    }

    #[test]
    fn test_path_to_source_is_single_node() {
        assert_eq!(path_to(&parents(&[]), &4, &4), Some(vec![4]));
    }

    #[test]
    fn test_path_follows_parents() {
        let table = parents(&[(2, 0), (1, 2), (3, 1)]);
        assert_eq!(path_to(&table, &0, &3), Some(vec![0, 2, 1, 3]));
    }

    #[test]
    fn test_broken_chain() {
        let table = parents(&[(3, 1)]);
        assert_eq!(path_to(&table, &0, &3), None);
    }

    #[test]
    fn test_cyclic_table_terminates() {
        let table = parents(&[(1, 2), (2, 1)]);
        assert_eq!(path_to(&table, &0, &1), None);
    }
}
