use crate::graph::types::{Node, Weight, WeightProfile};

/// Trait for providing graph adjacency to the solvers.
///
/// Explicit graphs answer from stored edges; implicit graphs compute
/// neighbors on demand. Solvers call `expand` at most once per node.
pub trait GraphProvider<N: Node> {
    /// Whether `node` belongs to the graph's node universe
    fn contains(&self, node: &N) -> bool;

    /// Outgoing `(neighbor, weight)` pairs of `node`
    fn expand(&self, node: &N) -> Vec<(N, Weight)>;

    /// Weight summary, when it can be known without a search
    fn weight_profile(&self) -> Option<WeightProfile> {
        None
    }
}

impl<N: Node, G: GraphProvider<N> + ?Sized> GraphProvider<N> for &G {
    fn contains(&self, node: &N) -> bool {
        (**self).contains(node)
    }

    fn expand(&self, node: &N) -> Vec<(N, Weight)> {
        (**self).expand(node)
    }

    fn weight_profile(&self) -> Option<WeightProfile> {
        (**self).weight_profile()
    }
}
