//! Distance Oracle and Nodal Wiener Impact evaluation.
//!
//! Both are recomputed from scratch for every graph snapshot they are
//! given; nothing is cached between snapshots.

mod distance;
mod impact;

pub use distance::{wiener_index, DistanceMatrix, DISTANCE_EPS};
pub use impact::NodalImpact;
