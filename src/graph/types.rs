//! Undirected graph storage and the read-only [`Topology`] seam.

use crate::error::{NwiError, Result};

use super::views::TrialGraph;

/// Weight given to edges added without an explicit cost.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Read-only adjacency access shared by the base graph and its views.
///
/// Nodes are indexed `0..node_count()`. Every undirected edge must be
/// reported from both endpoints with the same weight.
pub trait Topology {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Neighbors of `node` with the weight of the connecting edge.
    fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_;
}

/// Undirected graph over nodes `0..n` with a unique edge set.
///
/// # Examples
///
/// ```
/// use nwi_vns::graph::{Graph, Topology};
///
/// let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.has_edge(2, 1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<(usize, f64)>>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `node_count` isolated nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Builds a unit-weight graph from an edge list. Duplicates are ignored.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(node_count);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// The cycle `0 - 1 - ... - (n-1) - 0`.
    pub fn cycle(node_count: usize) -> Result<Self> {
        if node_count < 3 {
            return Err(NwiError::TooFewNodes {
                nodes: node_count,
                required: 3,
            });
        }
        let edges: Vec<(usize, usize)> = (0..node_count)
            .map(|i| (i, (i + 1) % node_count))
            .collect();
        Self::from_edges(node_count, &edges)
    }

    /// Adds a unit-weight edge. Returns `false` if the edge already existed.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Adds an edge with an explicit nonnegative cost.
    ///
    /// Returns `false` (and keeps the existing weight) if the edge already
    /// existed.
    pub fn add_weighted_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<bool> {
        self.check_endpoints(u, v)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(NwiError::InvalidWeight {
                src: u.min(v),
                dst: u.max(v),
                weight,
            });
        }
        if self.has_edge(u, v) {
            return Ok(false);
        }
        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        self.edge_count += 1;
        Ok(true)
    }

    /// Whether `u` and `v` are adjacent.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|adj| adj.iter().any(|&(w, _)| w == v))
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edges as `(src, dst, weight)` with `src < dst`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, adj)| {
            adj.iter()
                .filter(move |&&(v, _)| u < v)
                .map(move |&(v, w)| (u, v, w))
        })
    }

    /// Degree of `node`.
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency.get(node).map_or(0, Vec::len)
    }

    /// Views this graph with one extra unit-weight edge, without copying it.
    pub fn with_edge(&self, u: usize, v: usize) -> Result<TrialGraph<'_>> {
        self.check_endpoints(u, v)?;
        Ok(TrialGraph::new(self, u, v, DEFAULT_WEIGHT))
    }

    fn check_endpoints(&self, u: usize, v: usize) -> Result<()> {
        let node_count = self.adjacency.len();
        for node in [u, v] {
            if node >= node_count {
                return Err(NwiError::NodeOutOfRange { node, node_count });
            }
        }
        if u == v {
            return Err(NwiError::SelfLoop { node: u });
        }
        Ok(())
    }
}

impl Topology for Graph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adjacency[node].iter().copied()
    }
}
