//! Lazily expanded graphs over state spaces too large to materialize

use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Node, Weight};
use std::marker::PhantomData;

fn accept_all<N>(_: &N) -> bool {
    true
}

/// Graph defined by a membership test and a transition function.
///
/// Nothing is stored: `expand` runs the transition closure each time a
/// solver finalizes a node. Transitions to states outside the membership
/// test are dropped.
pub struct ImplicitGraph<N, C, E> {
    contains: C,
    expand: E,
    _node: PhantomData<fn(&N)>,
}

impl<N, C, E> ImplicitGraph<N, C, E>
where
    N: Node,
    C: Fn(&N) -> bool,
    E: Fn(&N) -> Vec<(N, Weight)>,
{
    pub fn new(contains: C, expand: E) -> Self {
        Self {
            contains,
            expand,
            _node: PhantomData,
        }
    }
}

impl<N, E> ImplicitGraph<N, fn(&N) -> bool, E>
where
    N: Node,
    E: Fn(&N) -> Vec<(N, Weight)>,
{
    /// Every value of `N` is a member
    pub fn unbounded(expand: E) -> Self {
        Self {
            contains: accept_all::<N>,
            expand,
            _node: PhantomData,
        }
    }
}

impl<N, C, E> GraphProvider<N> for ImplicitGraph<N, C, E>
where
    N: Node,
    C: Fn(&N) -> bool,
    E: Fn(&N) -> Vec<(N, Weight)>,
{
    fn contains(&self, node: &N) -> bool {
        (self.contains)(node)
    }

    fn expand(&self, node: &N) -> Vec<(N, Weight)> {
        let mut neighbors = (self.expand)(node);
        neighbors.retain(|(next, _)| (self.contains)(next));
        neighbors
    }
}
