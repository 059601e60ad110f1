//! Nodal Wiener Impact (NWI) and the search for the edge that lowers it most.
//!
//! Provides:
//!
//! - **Graph**: undirected graphs with opaque nonnegative edge weights,
//!   borrowed views that add one edge or hide one node, and edge-list
//!   loading.
//! - **NWI**: all-pairs shortest paths, the Wiener index, and the per-node
//!   impact `W(G - v) + T(v) - W(G)`.
//! - **Variable Neighborhood Search (VNS)**: scans distance-order
//!   neighborhoods around two root vertices for the single edge addition
//!   that minimizes the sum or the maximum of the nodal impacts.
//!
//! # Example
//!
//! ```
//! use nwi_vns::graph::Graph;
//! use nwi_vns::vns::{CostFunction, VnsConfig, VnsRunner};
//!
//! let ring = Graph::cycle(6).unwrap();
//! let config = VnsConfig::default().with_cost_function(CostFunction::MaxImpact);
//! let outcome = VnsRunner::run(&ring, &config).unwrap();
//! assert!(outcome.best_cost <= outcome.initial_cost);
//! ```
//!
//! Every graph handed to the search must stay connected after deleting
//! any single node; anything else is rejected before the search starts.

pub mod error;
pub mod graph;
pub mod nwi;
pub mod vns;

pub use error::{NwiError, Result};
