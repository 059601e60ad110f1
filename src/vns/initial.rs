//! Choosing the first pair of root vertices.

use rand::Rng;

use crate::nwi::NodalImpact;

use super::types::InitialVertices;

/// Roots for the first scan, with the base graph's impact summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialSelection {
    /// First root.
    pub v1: usize,
    /// Second root.
    pub v2: usize,
    /// `max(impact)` of the base graph.
    pub max_impact: f64,
    /// `Σ impact` of the base graph.
    pub impact_sum: f64,
}

/// Picks two distinct roots according to `strategy`.
///
/// `GreatestImpact` ranks nodes by ascending impact (ties by ascending id)
/// and takes the last entry as `v1` and the one before it as `v2`.
pub fn select_initial_vertices<R: Rng>(
    strategy: InitialVertices,
    impact: &NodalImpact,
    rng: &mut R,
) -> InitialSelection {
    let n = impact.len();
    debug_assert!(n >= 2, "nodal impact covers at least two nodes");

    let (v1, v2) = match strategy {
        InitialVertices::Random => {
            let v1 = rng.random_range(0..n);
            let mut v2 = rng.random_range(0..n - 1);
            if v2 >= v1 {
                v2 += 1;
            }
            (v1, v2)
        }
        InitialVertices::GreatestImpact => {
            let ranking = impact.ranking();
            (ranking[n - 1], ranking[n - 2])
        }
    };

    InitialSelection {
        v1,
        v2,
        max_impact: impact.max(),
        impact_sum: impact.sum(),
    }
}
