//! Borrowed views over a [`Graph`]: one added edge, or one removed node.
//!
//! Neither view mutates or copies the graph it wraps, so the base graph
//! stays untouched while trial variants are scored.

use super::types::{Graph, Topology};

/// A graph plus one extra undirected edge.
#[derive(Debug, Clone, Copy)]
pub struct TrialGraph<'a> {
    base: &'a Graph,
    src: usize,
    dst: usize,
    weight: f64,
}

impl<'a> TrialGraph<'a> {
    pub(crate) fn new(base: &'a Graph, src: usize, dst: usize, weight: f64) -> Self {
        Self {
            base,
            src,
            dst,
            weight,
        }
    }

    /// The added edge.
    pub fn added_edge(&self) -> (usize, usize) {
        (self.src.min(self.dst), self.src.max(self.dst))
    }
}

impl Topology for TrialGraph<'_> {
    fn node_count(&self) -> usize {
        self.base.node_count()
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let extra = if node == self.src {
            Some((self.dst, self.weight))
        } else if node == self.dst {
            Some((self.src, self.weight))
        } else {
            None
        };
        self.base.neighbors(node).chain(extra)
    }
}

/// A topology with one node deleted and the remaining ids shifted down.
///
/// Node `i` of the view is node `i` of the inner topology for
/// `i < removed`, and node `i + 1` otherwise.
#[derive(Debug, Clone, Copy)]
pub struct NodeRemoved<'a, T> {
    inner: &'a T,
    removed: usize,
}

impl<'a, T: Topology> NodeRemoved<'a, T> {
    /// Hides `removed` from `inner`.
    ///
    /// # Panics
    ///
    /// Panics if `removed` is not a node of `inner`.
    pub fn new(inner: &'a T, removed: usize) -> Self {
        assert!(
            removed < inner.node_count(),
            "removed node {removed} out of range"
        );
        Self { inner, removed }
    }

    /// Maps a view id back to the inner topology.
    pub fn original_id(&self, node: usize) -> usize {
        if node < self.removed {
            node
        } else {
            node + 1
        }
    }
}

impl<T: Topology> Topology for NodeRemoved<'_, T> {
    fn node_count(&self) -> usize {
        self.inner.node_count() - 1
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let removed = self.removed;
        self.inner
            .neighbors(self.original_id(node))
            .filter_map(move |(u, w)| match u.cmp(&removed) {
                std::cmp::Ordering::Less => Some((u, w)),
                std::cmp::Ordering::Equal => None,
                std::cmp::Ordering::Greater => Some((u - 1, w)),
            })
    }
}
