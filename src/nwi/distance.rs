//! All-pairs shortest paths and the Wiener index.
//!
//! Distances come from one Dijkstra run per source, so any finite
//! nonnegative edge weights are supported. An unreachable pair is an
//! error: the Wiener index is only defined on connected graphs.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{NwiError, Result};
use crate::graph::Topology;

/// Tolerance used when matching a distance to an integer order.
pub const DISTANCE_EPS: f64 = 1e-9;

/// Symmetric `n × n` shortest-path matrix of one graph snapshot.
///
/// # Examples
///
/// ```
/// use nwi_vns::graph::Graph;
/// use nwi_vns::nwi::DistanceMatrix;
///
/// let cycle = Graph::cycle(4).unwrap();
/// let dist = DistanceMatrix::compute(&cycle).unwrap();
/// assert_eq!(dist.get(0, 2), 2.0);
/// assert_eq!(dist.wiener_index(), 8.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
    wiener: f64,
}

impl DistanceMatrix {
    /// Computes every pairwise distance of `topology`.
    ///
    /// Fails with [`NwiError::Unreachable`] on the first pair that has no
    /// path.
    pub fn compute<T: Topology>(topology: &T) -> Result<Self> {
        let n = topology.node_count();
        let mut data = vec![0.0; n * n];
        let mut heap = BinaryHeap::new();

        for source in 0..n {
            let row = &mut data[source * n..(source + 1) * n];
            single_source(topology, source, row, &mut heap);
            if let Some(to) = row.iter().position(|d| d.is_infinite()) {
                return Err(NwiError::Unreachable { from: source, to });
            }
        }

        // Mirror the upper triangle so the matrix is exactly symmetric even
        // when weighted paths sum in a different order from each end.
        let mut wiener = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let d = data[i * n + j];
                data[j * n + i] = d;
                wiener += d;
            }
        }

        Ok(Self { n, data, wiener })
    }

    /// Number of nodes covered.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Shortest-path length between `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Distances from `source` to every node.
    pub fn row(&self, source: usize) -> &[f64] {
        &self.data[source * self.n..(source + 1) * self.n]
    }

    /// `W(G) = Σ_{i<j} dist(i, j)`.
    pub fn wiener_index(&self) -> f64 {
        self.wiener
    }

    /// Sum of distances from `node` to every node, itself included.
    pub fn total_distance(&self, node: usize) -> f64 {
        self.row(node).iter().sum()
    }

    /// Nodes whose distance from `source` equals `order`.
    pub fn nodes_at(&self, source: usize, order: usize) -> impl Iterator<Item = usize> + '_ {
        let target = order as f64;
        self.row(source)
            .iter()
            .enumerate()
            .filter(move |&(_, &d)| (d - target).abs() < DISTANCE_EPS)
            .map(|(node, _)| node)
    }
}

/// Wiener index of `topology` without keeping the distance matrix.
pub fn wiener_index<T: Topology>(topology: &T) -> Result<f64> {
    let n = topology.node_count();
    let mut row = vec![0.0; n];
    let mut heap = BinaryHeap::new();
    let mut wiener = 0.0;

    for source in 0..n {
        single_source(topology, source, &mut row, &mut heap);
        for (to, &d) in row.iter().enumerate().skip(source + 1) {
            if d.is_infinite() {
                return Err(NwiError::Unreachable { from: source, to });
            }
            wiener += d;
        }
    }
    Ok(wiener)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    dist: f64,
    node: usize,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    // Reversed so BinaryHeap pops the closest node first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn single_source<T: Topology>(
    topology: &T,
    source: usize,
    dist: &mut [f64],
    heap: &mut BinaryHeap<Frontier>,
) {
    dist.fill(f64::INFINITY);
    heap.clear();
    dist[source] = 0.0;
    heap.push(Frontier {
        dist: 0.0,
        node: source,
    });

    while let Some(Frontier { dist: d, node }) = heap.pop() {
        if d > dist[node] {
            continue;
        }
        for (next, weight) in topology.neighbors(node) {
            let candidate = d + weight;
            if candidate < dist[next] {
                dist[next] = candidate;
                heap.push(Frontier {
                    dist: candidate,
                    node: next,
                });
            }
        }
    }
}
