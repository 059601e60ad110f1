//! Error types for nwi-vns.

use thiserror::Error;

/// Result type alias for nwi-vns operations.
pub type Result<T> = std::result::Result<T, NwiError>;

/// Unified error type for graph construction, metric evaluation and search.
///
/// Every variant aborts the run; nothing here is transient.
#[derive(Debug, Error)]
pub enum NwiError {
    /// Too few nodes: the metric needs two, a cycle needs three.
    #[error("graph has {nodes} node(s), at least {required} are required")]
    TooFewNodes {
        /// Number of nodes in the rejected graph.
        nodes: usize,
        /// Smallest node count accepted.
        required: usize,
    },

    /// An edge endpoint lies outside `0..node_count`.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange {
        /// Offending node id.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },

    /// Self-loops carry no distance information and are rejected.
    #[error("self-loop on node {node}")]
    SelfLoop {
        /// Node the loop was attached to.
        node: usize,
    },

    /// Edge weights must be finite and nonnegative.
    #[error("edge ({src}, {dst}) has invalid weight {weight}")]
    InvalidWeight {
        /// Lower endpoint.
        src: usize,
        /// Upper endpoint.
        dst: usize,
        /// Rejected weight.
        weight: f64,
    },

    /// Shortest-path distances are undefined between these nodes.
    #[error("node {to} is unreachable from node {from}")]
    Unreachable {
        /// Source of the failed search.
        from: usize,
        /// First node the search could not reach.
        to: usize,
    },

    /// Removing `node` disconnects the graph, so its nodal impact is undefined.
    #[error("removing node {node} disconnects the graph")]
    NotRobust {
        /// Cut vertex.
        node: usize,
    },

    /// Malformed edge-list record.
    #[error("edge list line {line}: {message}")]
    EdgeList {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the record.
        message: String,
    },

    /// Failed to read an edge-list file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
