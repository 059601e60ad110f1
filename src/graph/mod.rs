//! Graph storage, borrowed views, and connectivity checks.
//!
//! [`Graph`] owns the adjacency lists. [`TrialGraph`] (one added edge) and
//! [`NodeRemoved`] (one deleted node) borrow it, and everything that reads
//! a graph does so through the [`Topology`] trait so it works on all three.

mod connectivity;
mod edgelist;
mod types;
mod views;

pub use connectivity::{ensure_robust, first_unreached, is_connected};
pub use edgelist::{parse_edge_list, read_edge_list};
pub use types::{Graph, Topology, DEFAULT_WEIGHT};
pub use views::{NodeRemoved, TrialGraph};
