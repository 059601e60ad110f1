//! Reachability checks guarding the nodal-impact precondition.
//!
//! Nodal impact removes each node in turn and needs the rest of the graph
//! to stay connected. [`ensure_robust`] checks that up front so the search
//! fails with a clear error instead of deep inside an evaluation.

use std::collections::VecDeque;

use crate::error::{NwiError, Result};

use super::types::Topology;
use super::views::NodeRemoved;

/// Returns the lowest node not reachable from node 0, if any.
pub fn first_unreached<T: Topology>(topology: &T) -> Option<usize> {
    let n = topology.node_count();
    if n == 0 {
        return None;
    }
    let mut seen = vec![false; n];
    let mut queue = VecDeque::from([0]);
    seen[0] = true;
    while let Some(node) = queue.pop_front() {
        for (next, _) in topology.neighbors(node) {
            if !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }
    seen.iter().position(|&s| !s)
}

/// Whether every node is reachable from every other.
pub fn is_connected<T: Topology>(topology: &T) -> bool {
    first_unreached(topology).is_none()
}

/// Rejects graphs on which nodal impact is undefined.
///
/// The graph must have at least two nodes, be connected, and stay connected
/// after deleting any single node.
pub fn ensure_robust<T: Topology>(topology: &T) -> Result<()> {
    let n = topology.node_count();
    if n < 2 {
        return Err(NwiError::TooFewNodes {
            nodes: n,
            required: 2,
        });
    }
    if let Some(to) = first_unreached(topology) {
        return Err(NwiError::Unreachable { from: 0, to });
    }
    for node in 0..n {
        if !is_connected(&NodeRemoved::new(topology, node)) {
            return Err(NwiError::NotRobust { node });
        }
    }
    Ok(())
}
