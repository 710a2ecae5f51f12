use crate::bail_input;
use crate::error::Result;
use crate::graph::algos::shared::ensure_member;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Distance, DistanceTable, Node, SearchStats};
use crate::{log_search_stats, trace_time};
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// State tracked during level-order traversal
struct BfsState<N> {
    levels: HashMap<N, Distance>,
    queue: VecDeque<N>,
    stats: SearchStats,
}

impl<N: Node> BfsState<N> {
    fn new() -> Self {
        Self {
            levels: HashMap::new(),
            queue: VecDeque::new(),
            stats: SearchStats::default(),
        }
    }

    /// Record `node` at `level` unless it was already discovered
    fn discover(&mut self, node: N, level: Distance) {
        if self.levels.contains_key(&node) {
            return;
        }
        self.levels.insert(node.clone(), level);
        self.queue.push_back(node);
    }
}

/// Hop count from `source` to every reachable node.
///
/// Every edge counts as one level whatever weight it stores. Uses a FIFO
/// frontier: a node is final the moment it is first discovered.
#[tracing::instrument(skip(graph))]
pub fn bfs_levels<N, G>(graph: &G, source: &N) -> Result<DistanceTable<N>>
where
    N: Node,
    G: GraphProvider<N> + ?Sized,
{
    bfs_levels_from(graph, std::slice::from_ref(source))
}

/// Multi-source variant of [`bfs_levels`]: every source starts at level 0
#[tracing::instrument(skip(graph, sources), fields(sources = sources.len()))]
pub fn bfs_levels_from<N, G>(graph: &G, sources: &[N]) -> Result<DistanceTable<N>>
where
    N: Node,
    G: GraphProvider<N> + ?Sized,
{
    if sources.is_empty() {
        bail_input!("at least one source node is required");
    }
    for source in sources {
        ensure_member(graph, source, "source")?;
    }

    let start = Instant::now();
    let mut state = BfsState::new();
    for source in sources {
        state.discover(source.clone(), 0);
    }

    while let Some(node) = state.queue.pop_front() {
        let level = state.levels.get(&node).copied().unwrap_or_default();
        state.stats.finalized += 1;
        state.stats.expansions += 1;
        for (neighbor, _) in graph.expand(&node) {
            state.stats.relaxations += 1;
            state.discover(neighbor, level + 1);
        }
    }

    log_search_stats!(&state.stats, "bfs");
    trace_time!(start, "bfs", reached = state.levels.len());
    Ok(DistanceTable::from_map(state.levels))
}
