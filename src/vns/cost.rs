//! Scoring a batch of candidate edges.

use crate::error::Result;
use crate::graph::Graph;
use crate::nwi::NodalImpact;

use super::types::{CandidateEdge, CostFunction};

/// A candidate edge whose trial graph beat the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Improvement {
    /// The added edge.
    pub edge: CandidateEdge,
    /// Cost of `graph + edge`.
    pub cost: f64,
}

/// Scores each candidate on `graph + candidate` in iteration order.
///
/// Every candidate is compared against the same `threshold`, not against
/// earlier improvements in the batch, so the *last* improving candidate is
/// returned. `None` means no candidate beat the threshold.
pub fn evaluate_candidates<'a, I>(
    graph: &Graph,
    candidates: I,
    threshold: f64,
    cost_function: CostFunction,
) -> Result<Option<Improvement>>
where
    I: IntoIterator<Item = &'a CandidateEdge>,
{
    let mut winner = None;
    for &edge in candidates {
        let trial = graph.with_edge(edge.src(), edge.dst())?;
        let cost = cost_function.cost(&NodalImpact::evaluate(&trial)?);
        if cost < threshold {
            winner = Some(Improvement { edge, cost });
        }
    }
    Ok(winner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: usize, b: usize) -> CandidateEdge {
        CandidateEdge::new(a, b).unwrap()
    }

    #[test]
    fn test_last_improving_candidate_wins() {
        // C6 sums: base 12, long chord (0, 3) → 4, short chord (1, 5) → 9
        let g = Graph::cycle(6).unwrap();
        assert_eq!(NodalImpact::evaluate(&g).unwrap().sum(), 12.0);
        let long = NodalImpact::evaluate(&g.with_edge(0, 3).unwrap()).unwrap();
        let short = NodalImpact::evaluate(&g.with_edge(1, 5).unwrap()).unwrap();
        assert_eq!(long.sum(), 4.0);
        assert_eq!(short.sum(), 9.0);

        let batch = [edge(0, 3), edge(1, 5)];
        let found = evaluate_candidates(&g, &batch, 12.0, CostFunction::SumOfImpacts)
            .unwrap()
            .unwrap();
        assert_eq!(found.edge, edge(1, 5));
        assert_eq!(found.cost, 9.0);
    }

    #[test]
    fn test_no_improvement() {
        let g = Graph::cycle(5).unwrap();
        let batch = [edge(0, 2), edge(1, 3)];
        let found = evaluate_candidates(&g, &batch, 2.0, CostFunction::SumOfImpacts).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_empty_batch() {
        let g = Graph::cycle(5).unwrap();
        let batch: Vec<CandidateEdge> = Vec::new();
        let found = evaluate_candidates(&g, &batch, 5.0, CostFunction::MaxImpact).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_max_impact_cost() {
        let g = Graph::cycle(5).unwrap();
        let found = evaluate_candidates(&g, &[edge(0, 3)], 1.5, CostFunction::MaxImpact)
            .unwrap()
            .unwrap();
        assert_eq!(found.cost, 1.0);
    }
}
