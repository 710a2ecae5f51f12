use crate::error::{Result, WaygraphError};
use crate::graph::algos::shared::ensure_member;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{
    Distance, DistanceTable, Node, Predecessors, SearchStats, ShortestPaths, WaysTable, Weight,
};
use crate::{bail_input, log_search_stats, trace_time};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone)]
pub(crate) struct HeapEntry<N> {
    pub(crate) node: N,
    pub(crate) distance: Distance,
}

impl<N> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<N> Eq for HeapEntry<N> {}

impl<N> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance.cmp(&other.distance)
    }
}

/// Expansions kept for way counting, in finalization order
struct WayCounter<N> {
    expanded: Vec<(N, Vec<(N, Weight)>)>,
    modulus: u64,
}

impl<N: Node> WayCounter<N> {
    /// Count minimum-cost paths over the tight edges (`dist[u] + w == dist[v]`)
    /// in topological order. Tight edges form a DAG unless a zero-weight
    /// cycle is reachable, in which case the count is unbounded.
    fn count(&self, best: &HashMap<N, Distance>, source: &N) -> Result<HashMap<N, u64>> {
        let n = self.expanded.len();
        let index: HashMap<&N, usize> = self
            .expanded
            .iter()
            .enumerate()
            .map(|(i, (node, _))| (node, i))
            .collect();

        let mut tight: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut indegree = vec![0usize; n];
        for (from, (node, edges)) in self.expanded.iter().enumerate() {
            let Some(&base) = best.get(node) else {
                continue;
            };
            for (neighbor, weight) in edges {
                if best.get(neighbor) != Some(&base.saturating_add(*weight)) {
                    continue;
                }
                if let Some(&to) = index.get(neighbor) {
                    tight[from].push(to);
                    indegree[to] += 1;
                }
            }
        }

        let mut counts = vec![0u64; n];
        if let Some(&s) = index.get(source) {
            counts[s] = 1 % self.modulus;
        }
        let mut queue: VecDeque<usize> = (0..n).filter(|&i| indegree[i] == 0).collect();
        let mut processed = 0;
        while let Some(from) = queue.pop_front() {
            processed += 1;
            for &to in &tight[from] {
                counts[to] = add_mod(counts[to], counts[from], self.modulus);
                indegree[to] -= 1;
                if indegree[to] == 0 {
                    queue.push_back(to);
                }
            }
        }

        if processed < n {
            if let Some(stuck) = (0..n).find(|&i| indegree[i] > 0) {
                return Err(WaygraphError::AmbiguousWayCount {
                    node: format!("{:?}", self.expanded[stuck].0),
                });
            }
        }

        Ok(self
            .expanded
            .iter()
            .zip(counts)
            .map(|((node, _), count)| (node.clone(), count))
            .collect())
    }
}

fn add_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((u128::from(a) + u128::from(b)) % u128::from(modulus)) as u64
}

/// State tracked during one Dijkstra run
struct DijkstraState<N> {
    best: HashMap<N, Distance>,
    finalized: HashSet<N>,
    heap: BinaryHeap<Reverse<HeapEntry<N>>>,
    predecessors: HashMap<N, N>,
    ways: Option<WayCounter<N>>,
    stats: SearchStats,
}

impl<N: Node> DijkstraState<N> {
    fn new(source: N, modulus: Option<u64>) -> Self {
        let mut state = Self {
            best: HashMap::new(),
            finalized: HashSet::new(),
            heap: BinaryHeap::new(),
            predecessors: HashMap::new(),
            ways: modulus.map(|modulus| WayCounter {
                expanded: Vec::new(),
                modulus,
            }),
            stats: SearchStats::default(),
        };
        state.best.insert(source.clone(), 0);
        state.heap.push(Reverse(HeapEntry {
            node: source,
            distance: 0,
        }));
        state
    }

    /// Pop the closest node that is not yet finalized, skipping stale entries
    fn pop_next(&mut self) -> Option<(N, Distance)> {
        while let Some(Reverse(HeapEntry { node, distance })) = self.heap.pop() {
            let superseded = self.best.get(&node).is_some_and(|&best| distance > best);
            if superseded || self.finalized.contains(&node) {
                self.stats.stale_pops += 1;
                continue;
            }
            self.finalized.insert(node.clone());
            self.stats.finalized += 1;
            return Some((node, distance));
        }
        None
    }

    /// Relax `node -> neighbor`; `node` is already finalized at `distance`
    fn relax(&mut self, node: &N, distance: Distance, neighbor: &N, weight: Weight) {
        self.stats.relaxations += 1;
        let candidate = distance.saturating_add(weight);

        if self
            .best
            .get(neighbor)
            .is_some_and(|&current| candidate >= current)
        {
            return;
        }
        self.best.insert(neighbor.clone(), candidate);
        self.predecessors.insert(neighbor.clone(), node.clone());
        self.heap.push(Reverse(HeapEntry {
            node: neighbor.clone(),
            distance: candidate,
        }));
    }

    /// Keep only finalized nodes; tentative entries can remain after an early stop
    fn finalized_distances(&self) -> HashMap<N, Distance> {
        self.best
            .iter()
            .filter(|(node, _)| self.finalized.contains(*node))
            .map(|(node, &d)| (node.clone(), d))
            .collect()
    }
}

/// Run Dijkstra from `source`, stopping early once `target` is finalized
fn run<N, G>(
    graph: &G,
    source: &N,
    target: Option<&N>,
    modulus: Option<u64>,
) -> Result<DijkstraState<N>>
where
    N: Node,
    G: GraphProvider<N> + ?Sized,
{
    ensure_member(graph, source, "source")?;
    let start = Instant::now();
    let mut state = DijkstraState::new(source.clone(), modulus);

    while let Some((node, distance)) = state.pop_next() {
        if target == Some(&node) {
            break;
        }
        state.stats.expansions += 1;
        let edges = graph.expand(&node);
        for (neighbor, weight) in &edges {
            state.relax(&node, distance, neighbor, *weight);
        }
        if let Some(ways) = state.ways.as_mut() {
            ways.expanded.push((node, edges));
        }
    }

    log_search_stats!(&state.stats, "dijkstra");
    trace_time!(start, "dijkstra", finalized = state.stats.finalized);
    Ok(state)
}

/// Minimal distance from `source` to every reachable node.
///
/// Unreachable nodes are absent from the table. Fails with `InvalidInput`
/// when `source` is not a member of the graph.
#[tracing::instrument(skip(graph))]
pub fn shortest_distances<N, G>(graph: &G, source: &N) -> Result<DistanceTable<N>>
where
    N: Node,
    G: GraphProvider<N> + ?Sized,
{
    Ok(dijkstra(graph, source)?.distances)
}

/// Shortest distances plus the number of distinct minimum-cost paths to
/// each node, taken modulo `modulus`. Parallel edges count separately.
///
/// Fails with `AmbiguousWayCount` when a zero-weight cycle is reachable,
/// since the number of minimum-cost walks is then unbounded.
#[tracing::instrument(skip(graph))]
pub fn shortest_distances_with_way_counts<N, G>(
    graph: &G,
    source: &N,
    modulus: u64,
) -> Result<(DistanceTable<N>, WaysTable<N>)>
where
    N: Node,
    G: GraphProvider<N> + ?Sized,
{
    if modulus == 0 {
        bail_input!("way-count modulus must be at least 1");
    }
    let state = run(graph, source, None, Some(modulus))?;
    let counts = match &state.ways {
        Some(ways) => ways.count(&state.best, source)?,
        None => HashMap::new(),
    };
    Ok((
        DistanceTable::from_map(state.best),
        WaysTable::from_map(counts, modulus),
    ))
}

/// Full single-source result: distances, shortest-path parents and counters
#[tracing::instrument(skip(graph))]
pub fn dijkstra<N, G>(graph: &G, source: &N) -> Result<ShortestPaths<N>>
where
    N: Node,
    G: GraphProvider<N> + ?Sized,
{
    let state = run(graph, source, None, None)?;
    Ok(ShortestPaths {
        distances: DistanceTable::from_map(state.best),
        predecessors: Predecessors::from_map(state.predecessors),
        stats: state.stats,
    })
}

/// Dijkstra that stops once `target` is finalized.
///
/// The distance table holds finalized nodes only.
pub(crate) fn dijkstra_until<N, G>(graph: &G, source: &N, target: &N) -> Result<ShortestPaths<N>>
where
    N: Node,
    G: GraphProvider<N> + ?Sized,
{
    let state = run(graph, source, Some(target), None)?;
    let distances = state.finalized_distances();
    let predecessors = state
        .predecessors
        .into_iter()
        .filter(|(node, _)| distances.contains_key(node))
        .collect();
    Ok(ShortestPaths {
        distances: DistanceTable::from_map(distances),
        predecessors: Predecessors::from_map(predecessors),
        stats: state.stats,
    })
}
