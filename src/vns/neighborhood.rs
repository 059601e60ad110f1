//! Neighborhood structures and the candidate edges they induce.

use std::collections::BTreeSet;

use crate::graph::Graph;
use crate::nwi::DistanceMatrix;

use super::types::{CandidateEdge, NeighborhoodStructure};

/// Builds the ordered list of neighborhood structures to scan.
///
/// The largest distance order is `ceil(2W / (n(n-1)))`, the average
/// distance of the graph. Orders are swept triangularly: for each
/// `fixed` in `1..=max_order`, the pairs `(fixed, b)` and `(b, fixed)` for
/// `b < fixed`, followed by `(fixed, fixed)`.
///
/// # Examples
///
/// ```
/// use nwi_vns::vns::{generate_neighborhood_list, NeighborhoodStructure};
///
/// // average distance 1.0 → a single order
/// let list = generate_neighborhood_list(3, 3.0);
/// let pairs: Vec<(usize, usize)> = list.iter().map(|s| (s.d1, s.d2)).collect();
/// assert_eq!(pairs, vec![(1, 0), (0, 1), (1, 1)]);
/// ```
pub fn generate_neighborhood_list(node_count: usize, wiener: f64) -> Vec<NeighborhoodStructure> {
    if node_count < 2 {
        return Vec::new();
    }
    let pairs = (node_count * (node_count - 1)) as f64;
    let max_order = (2.0 * wiener / pairs).ceil().max(0.0) as usize;

    let mut neighborhoods = Vec::new();
    let mut fixed = 1;
    let mut beginning = 0;
    while fixed <= max_order {
        if fixed == beginning {
            neighborhoods.push(NeighborhoodStructure::new(fixed, beginning));
            fixed += 1;
            beginning = 0;
        } else {
            neighborhoods.push(NeighborhoodStructure::new(fixed, beginning));
            neighborhoods.push(NeighborhoodStructure::new(beginning, fixed));
            beginning += 1;
        }
    }
    neighborhoods
}

/// New edges joining a node at distance `d1` from `v1` with a node at
/// distance `d2` from `v2`.
///
/// Self-pairs and existing edges are excluded. The set is ordered by
/// `(src, dst)`.
pub fn candidate_edges(
    graph: &Graph,
    distances: &DistanceMatrix,
    v1: usize,
    v2: usize,
    structure: NeighborhoodStructure,
) -> BTreeSet<CandidateEdge> {
    let around_v1: Vec<usize> = distances.nodes_at(v1, structure.d1).collect();
    let around_v2: Vec<usize> = distances.nodes_at(v2, structure.d2).collect();

    let mut edges = BTreeSet::new();
    for &u1 in &around_v1 {
        for &u2 in &around_v2 {
            if let Some(edge) = CandidateEdge::new(u1, u2) {
                if !graph.has_edge(edge.src(), edge.dst()) {
                    edges.insert(edge);
                }
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pairs(list: &[NeighborhoodStructure]) -> Vec<(usize, usize)> {
        list.iter().map(|s| (s.d1, s.d2)).collect()
    }

    #[test]
    fn test_five_cycle_list() {
        // W(C5) = 15, average distance 1.5 → orders up to 2
        let list = generate_neighborhood_list(5, 15.0);
        assert_eq!(
            pairs(&list),
            vec![(1, 0), (0, 1), (1, 1), (2, 0), (0, 2), (2, 1), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn test_list_length_is_square() {
        // every pair in [0, m]² except (0, 0)
        for m in 1..6 {
            let n = 10;
            let wiener = (m * n * (n - 1) / 2) as f64;
            let list = generate_neighborhood_list(n, wiener);
            assert_eq!(list.len(), (m + 1) * (m + 1) - 1);
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(generate_neighborhood_list(1, 0.0).is_empty());
        assert!(generate_neighborhood_list(0, 0.0).is_empty());
    }

    #[test]
    fn test_candidates_on_five_cycle() {
        let g = Graph::cycle(5).unwrap();
        let d = DistanceMatrix::compute(&g).unwrap();

        let edges = candidate_edges(&g, &d, 4, 3, NeighborhoodStructure::new(1, 0));
        assert_eq!(edges.into_iter().collect::<Vec<_>>(), vec![CandidateEdge::new(0, 3).unwrap()]);

        let edges = candidate_edges(&g, &d, 0, 3, NeighborhoodStructure::new(1, 1));
        let found: Vec<(usize, usize)> = edges.iter().map(|e| (e.src(), e.dst())).collect();
        assert_eq!(found, vec![(1, 4), (2, 4)]);
    }

    #[test]
    fn test_mirrored_pairs_collapse() {
        // N1 = N2 = {1, 4}: (1, 4) and (4, 1) are the same edge
        let g = Graph::cycle(5).unwrap();
        let d = DistanceMatrix::compute(&g).unwrap();
        let edges = candidate_edges(&g, &d, 0, 0, NeighborhoodStructure::new(1, 1));
        assert_eq!(edges.into_iter().collect::<Vec<_>>(), vec![CandidateEdge::new(1, 4).unwrap()]);
    }

    #[test]
    fn test_no_candidates_on_complete_graph() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let d = DistanceMatrix::compute(&g).unwrap();
        for s in generate_neighborhood_list(3, d.wiener_index()) {
            assert!(candidate_edges(&g, &d, 2, 1, s).is_empty());
        }
    }

    proptest! {
        #[test]
        fn prop_list_deterministic(n in 2usize..40, w in 1.0f64..2000.0) {
            prop_assert_eq!(generate_neighborhood_list(n, w), generate_neighborhood_list(n, w));
        }

        #[test]
        fn prop_candidates_match_pairwise_scan(
            n in 4usize..12,
            chords in prop::collection::vec((0usize..12, 0usize..12), 0..6),
            v1 in 0usize..12,
            v2 in 0usize..12,
            d1 in 0usize..4,
            d2 in 0usize..4,
        ) {
            let mut g = Graph::cycle(n).unwrap();
            for (u, v) in chords {
                if u < n && v < n && u != v {
                    g.add_edge(u, v).unwrap();
                }
            }
            let d = DistanceMatrix::compute(&g).unwrap();
            let (v1, v2) = (v1 % n, v2 % n);

            // every (a, b) with dist(v1, a) = d1 and dist(v2, b) = d2, duplicates kept
            let raw: Vec<(usize, usize)> = (0..n)
                .filter(|&a| d.get(v1, a) == d1 as f64)
                .flat_map(|a| {
                    (0..n)
                        .filter(|&b| d.get(v2, b) == d2 as f64)
                        .map(move |b| (a.min(b), a.max(b)))
                })
                .filter(|&(a, b)| a != b && !g.has_edge(a, b))
                .collect();
            let mut expected = raw.clone();
            expected.sort_unstable();
            expected.dedup();

            let edges = candidate_edges(&g, &d, v1, v2, NeighborhoodStructure::new(d1, d2));
            let found: Vec<(usize, usize)> = edges.iter().map(|e| (e.src(), e.dst())).collect();

            prop_assert_eq!(&found, &expected);
            prop_assert!(found.len() <= raw.len());
            for &(a, b) in &found {
                prop_assert!(a < b);
                prop_assert!(!g.has_edge(a, b));
            }
        }
    }
}
