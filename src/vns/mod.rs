//! Variable Neighborhood Search for the best single edge addition.
//!
//! Neighborhood structures are distance-order pairs `(d1, d2)`: structure
//! k proposes every new edge between a node `d1` hops from the first root
//! and a node `d2` hops from the second. Scans run through the structures
//! in order. When an edge lowers the cost, its endpoints become the new
//! roots and the sweep restarts at the first structure. Otherwise it
//! moves on to the next one.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.

mod config;
mod cost;
mod events;
mod initial;
mod neighborhood;
mod runner;
mod types;

pub use config::VnsConfig;
pub use cost::{evaluate_candidates, Improvement};
pub use events::{LogSink, MemorySink, SearchEvent, SearchLog, WriterSink};
pub use initial::{select_initial_vertices, InitialSelection};
pub use neighborhood::{candidate_edges, generate_neighborhood_list};
pub use runner::{VnsOutcome, VnsRunner};
pub use types::{CandidateEdge, CostFunction, InitialVertices, NeighborhoodStructure, StopReason};
