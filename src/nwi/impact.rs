//! Nodal Wiener Impact.
//!
//! For each node `v`: `impact[v] = W(G - v) + T(v) - W(G)`, where `T(v)` is
//! the sum of distances from `v` to every node. `G - v` is a borrowed
//! [`NodeRemoved`] view, so the evaluated graph is never modified.

use crate::error::{NwiError, Result};
use crate::graph::{NodeRemoved, Topology};

use super::distance::{wiener_index, DistanceMatrix};

/// Per-node impact vector of one graph snapshot, with its sum.
///
/// # Examples
///
/// ```
/// use nwi_vns::graph::Graph;
/// use nwi_vns::nwi::NodalImpact;
///
/// let impact = NodalImpact::evaluate(&Graph::cycle(5).unwrap()).unwrap();
/// assert_eq!(impact.impacts(), &[1.0; 5]);
/// assert_eq!(impact.sum(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NodalImpact {
    impacts: Vec<f64>,
    sum: f64,
}

impl NodalImpact {
    /// Computes distances for `topology` and then its impact vector.
    pub fn evaluate<T: Topology>(topology: &T) -> Result<Self> {
        let distances = DistanceMatrix::compute(topology)?;
        Self::with_distances(topology, &distances)
    }

    /// Computes the impact vector reusing an already computed distance matrix.
    ///
    /// A node whose removal disconnects the graph yields
    /// [`NwiError::NotRobust`].
    pub fn with_distances<T: Topology>(topology: &T, distances: &DistanceMatrix) -> Result<Self> {
        let n = topology.node_count();
        if n < 2 {
            return Err(NwiError::TooFewNodes {
                nodes: n,
                required: 2,
            });
        }
        debug_assert_eq!(distances.node_count(), n);

        let wiener = distances.wiener_index();
        let mut impacts = Vec::with_capacity(n);
        for node in 0..n {
            let removed = wiener_index(&NodeRemoved::new(topology, node)).map_err(|e| match e {
                NwiError::Unreachable { .. } => NwiError::NotRobust { node },
                other => other,
            })?;
            impacts.push(removed + distances.total_distance(node) - wiener);
        }
        let sum = impacts.iter().sum();

        Ok(Self { impacts, sum })
    }

    /// Impact of every node, indexed by node id.
    pub fn impacts(&self) -> &[f64] {
        &self.impacts
    }

    /// `Σ impact`.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Largest single impact.
    pub fn max(&self) -> f64 {
        self.impacts
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.impacts.len()
    }

    /// Always false for a successfully evaluated graph.
    pub fn is_empty(&self) -> bool {
        self.impacts.is_empty()
    }

    /// Node ids ordered by ascending impact; ties keep ascending id order.
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.impacts.len()).collect();
        order.sort_by(|&a, &b| self.impacts[a].total_cmp(&self.impacts[b]));
        order
    }
}
