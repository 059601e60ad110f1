//! Edge-addition Variable Neighborhood Search execution engine.
//!
//! # Algorithm
//!
//! 1. Validate the graph, compute its distances and nodal impact
//! 2. Pick roots `(v1, v2)` and seed the best cost from the base impact
//! 3. Generate the neighborhood list once from `(n, W)`; set k = 0
//! 4. While k < number of structures:
//!    a. Enumerate candidate edges around `(v1, v2)` for structure k and
//!    drop those already tested in this run
//!    b. Score the remaining candidates against the best cost
//!    c. **Move or not**: on strict improvement take the edge, make its
//!    endpoints the new roots and set k = 0; otherwise k = k + 1
//! 5. Return the best edge (if any) and its cost
//!
//! Candidates always join two nodes of the base graph: each trial is the
//! base graph plus exactly one edge.
//!
//! # Termination
//!
//! Every improvement comes from a candidate scored for the first time, and
//! each candidate is scored at most once per run, so there are at most
//! `n(n-1)/2` improvements. Between two improvements k only grows, so at
//! most `len(neighborhoods)` scans separate them.

use std::collections::HashSet;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::graph::{ensure_robust, Graph, Topology};
use crate::nwi::{DistanceMatrix, NodalImpact};

use super::config::VnsConfig;
use super::cost::evaluate_candidates;
use super::events::{LogSink, SearchEvent, SearchLog};
use super::initial::select_initial_vertices;
use super::neighborhood::{candidate_edges, generate_neighborhood_list};
use super::types::{CandidateEdge, CostFunction, NeighborhoodStructure, StopReason};

const DEFAULT_SEED: u64 = 42;

/// Result of a search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VnsOutcome {
    /// Best edge found; `None` when nothing beat the initial cost.
    pub best_edge: Option<CandidateEdge>,
    /// Cost of the best solution (the initial cost when `best_edge` is `None`).
    pub best_cost: f64,
    /// Cost of the unmodified graph.
    pub initial_cost: f64,
    /// Roots of the first scan.
    pub initial_roots: (usize, usize),
    /// Neighborhood list used for the run.
    pub neighborhoods: Vec<NeighborhoodStructure>,
    /// Neighborhood scans executed.
    pub scans: usize,
    /// Candidate edges scored.
    pub evaluations: usize,
    /// Number of strict improvements.
    pub improvements: usize,
    /// Best cost after each scan.
    pub cost_history: Vec<f64>,
    /// Why the run ended.
    pub stop_reason: StopReason,
}

/// Edge-addition VNS runner.
pub struct VnsRunner;

impl VnsRunner {
    /// Runs the search, reporting progress through the `log` facade.
    ///
    /// # Examples
    ///
    /// ```
    /// use nwi_vns::graph::Graph;
    /// use nwi_vns::vns::{VnsConfig, VnsRunner};
    ///
    /// let cycle = Graph::cycle(5).unwrap();
    /// let outcome = VnsRunner::run(&cycle, &VnsConfig::default()).unwrap();
    /// assert!(outcome.best_cost < outcome.initial_cost);
    /// ```
    pub fn run(graph: &Graph, config: &VnsConfig) -> Result<VnsOutcome> {
        Self::run_with_log(graph, config, &mut LogSink)
    }

    /// Runs the search, reporting progress to `log`.
    pub fn run_with_log<L: SearchLog + ?Sized>(
        graph: &Graph,
        config: &VnsConfig,
        log: &mut L,
    ) -> Result<VnsOutcome> {
        ensure_robust(graph)?;
        let started = Instant::now();

        let distances = DistanceMatrix::compute(graph)?;
        let base = NodalImpact::with_distances(graph, &distances)?;

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(DEFAULT_SEED));
        let selection = select_initial_vertices(config.initial_vertices, &base, &mut rng);
        log.record(&SearchEvent::InitialVertices {
            strategy: config.initial_vertices,
            v1: selection.v1,
            v2: selection.v2,
        });

        let neighborhoods = generate_neighborhood_list(graph.node_count(), distances.wiener_index());
        log.record(&SearchEvent::NeighborhoodsGenerated {
            structures: neighborhoods.clone(),
        });

        let initial_cost = match config.cost_function {
            CostFunction::SumOfImpacts => selection.impact_sum,
            CostFunction::MaxImpact => selection.max_impact,
        };
        log.record(&SearchEvent::InitialCost {
            cost_function: config.cost_function,
            cost: initial_cost,
        });

        let (mut v1, mut v2) = (selection.v1, selection.v2);
        let mut best_edge = None;
        let mut best_cost = initial_cost;
        let mut tested: HashSet<CandidateEdge> = HashSet::new();
        let mut cost_history = Vec::new();
        let mut scans = 0;
        let mut evaluations = 0;
        let mut improvements = 0;
        let mut k = 0;

        let stop_reason = loop {
            if k >= neighborhoods.len() {
                break StopReason::Exhausted;
            }
            if config.max_scans.is_some_and(|max| scans >= max) {
                break StopReason::ScanBudget;
            }
            if config.time_limit.is_some_and(|limit| started.elapsed() >= limit) {
                break StopReason::TimeLimit;
            }

            let structure = neighborhoods[k];
            // insert() is false for edges scored in an earlier scan
            let batch: Vec<CandidateEdge> = candidate_edges(graph, &distances, v1, v2, structure)
                .into_iter()
                .filter(|edge| tested.insert(*edge))
                .collect();
            log.record(&SearchEvent::Scan {
                index: k,
                v1,
                v2,
                structure,
                candidates: batch.len(),
            });

            let found = evaluate_candidates(graph, &batch, best_cost, config.cost_function)?;
            scans += 1;
            evaluations += batch.len();

            match found {
                Some(improvement) => {
                    best_edge = Some(improvement.edge);
                    best_cost = improvement.cost;
                    v1 = improvement.edge.src();
                    v2 = improvement.edge.dst();
                    improvements += 1;
                    k = 0;
                    log.record(&SearchEvent::Improvement {
                        v1,
                        v2,
                        cost: best_cost,
                    });
                }
                None => k += 1,
            }
            cost_history.push(best_cost);
        };

        log.record(&SearchEvent::Finished {
            best_edge,
            best_cost,
            evaluations,
            stop_reason,
        });

        Ok(VnsOutcome {
            best_edge,
            best_cost,
            initial_cost,
            initial_roots: (selection.v1, selection.v2),
            neighborhoods,
            scans,
            evaluations,
            improvements,
            cost_history,
            stop_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NwiError;
    use crate::vns::{InitialVertices, MemorySink};
    use proptest::prelude::*;
    use std::time::Duration;

    fn triangle() -> Graph {
        Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap()
    }

    /// Lowest cost over every possible single edge addition.
    fn brute_force(graph: &Graph, cost_function: CostFunction) -> Option<(CandidateEdge, f64)> {
        let n = graph.node_count();
        let mut best: Option<(CandidateEdge, f64)> = None;
        for u in 0..n {
            for v in (u + 1)..n {
                if graph.has_edge(u, v) {
                    continue;
                }
                let trial = graph.with_edge(u, v).unwrap();
                let cost = cost_function.cost(&NodalImpact::evaluate(&trial).unwrap());
                if best.map_or(true, |(_, c)| cost < c) {
                    best = Some((CandidateEdge::new(u, v).unwrap(), cost));
                }
            }
        }
        best
    }

    #[test]
    fn test_five_cycle_sum_greatest_impact() {
        let g = Graph::cycle(5).unwrap();
        let config = VnsConfig::default()
            .with_cost_function(CostFunction::SumOfImpacts)
            .with_initial_vertices(InitialVertices::GreatestImpact);

        let outcome = VnsRunner::run(&g, &config).unwrap();

        let (_, expected) = brute_force(&g, CostFunction::SumOfImpacts).unwrap();
        assert!((expected - 2.0).abs() < 1e-9);
        assert_eq!(outcome.best_edge, CandidateEdge::new(0, 3));
        assert!((outcome.best_cost - expected).abs() < 1e-9);
        assert!((outcome.initial_cost - 5.0).abs() < 1e-9);
        assert_eq!(outcome.initial_roots, (4, 3));
        assert_eq!(outcome.neighborhoods.len(), 8);
        assert_eq!(outcome.improvements, 1);
        // every chord of C5 is scored exactly once
        assert_eq!(outcome.evaluations, 5);
        assert_eq!(outcome.scans, 9);
        assert_eq!(outcome.stop_reason, StopReason::Exhausted);
    }

    #[test]
    fn test_twenty_cycle_max_random() {
        let g = Graph::cycle(20).unwrap();
        let base_max = NodalImpact::evaluate(&g).unwrap().max();
        let config = VnsConfig::default()
            .with_cost_function(CostFunction::MaxImpact)
            .with_initial_vertices(InitialVertices::Random)
            .with_seed(2020);

        let outcome = VnsRunner::run(&g, &config).unwrap();

        assert!((outcome.initial_cost - base_max).abs() < 1e-9);
        assert!(outcome.best_cost <= base_max);
        if let Some(edge) = outcome.best_edge {
            let trial = g.with_edge(edge.src(), edge.dst()).unwrap();
            let check = NodalImpact::evaluate(&trial).unwrap().max();
            assert!((check - outcome.best_cost).abs() < 1e-9);
        }
    }

    #[test]
    fn test_triangle_has_no_improving_edge() {
        let outcome = VnsRunner::run(&triangle(), &VnsConfig::default()).unwrap();
        assert!(outcome.best_edge.is_none());
        assert_eq!(outcome.best_cost, outcome.initial_cost);
        assert_eq!(outcome.evaluations, 0);
        assert_eq!(outcome.scans, outcome.neighborhoods.len());
    }

    #[test]
    fn test_event_stream() {
        let mut sink = MemorySink::new();
        let outcome =
            VnsRunner::run_with_log(&Graph::cycle(5).unwrap(), &VnsConfig::default(), &mut sink)
                .unwrap();
        let events = sink.into_events();

        assert!(matches!(
            events[0],
            SearchEvent::InitialVertices { v1: 4, v2: 3, .. }
        ));
        assert!(matches!(events[1], SearchEvent::NeighborhoodsGenerated { .. }));
        assert!(matches!(events[2], SearchEvent::InitialCost { .. }));
        assert!(matches!(
            events.last(),
            Some(SearchEvent::Finished {
                stop_reason: StopReason::Exhausted,
                ..
            })
        ));

        let scans = events
            .iter()
            .filter(|e| matches!(e, SearchEvent::Scan { .. }))
            .count();
        assert_eq!(scans, outcome.scans);
        let improvements: Vec<&SearchEvent> = events
            .iter()
            .filter(|e| matches!(e, SearchEvent::Improvement { .. }))
            .collect();
        assert_eq!(
            improvements,
            vec![&SearchEvent::Improvement {
                v1: 0,
                v2: 3,
                cost: 2.0
            }]
        );
    }

    #[test]
    fn test_scan_budget() {
        let config = VnsConfig::default().with_max_scans(1);
        let outcome = VnsRunner::run(&Graph::cycle(5).unwrap(), &config).unwrap();
        assert_eq!(outcome.scans, 1);
        assert_eq!(outcome.stop_reason, StopReason::ScanBudget);
    }

    #[test]
    fn test_time_limit() {
        let config = VnsConfig::default().with_time_limit(Duration::ZERO);
        let outcome = VnsRunner::run(&Graph::cycle(5).unwrap(), &config).unwrap();
        assert_eq!(outcome.scans, 0);
        assert!(outcome.best_edge.is_none());
        assert_eq!(outcome.stop_reason, StopReason::TimeLimit);
    }

    #[test]
    fn test_rejects_fragile_graph() {
        let path = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert!(matches!(
            VnsRunner::run(&path, &VnsConfig::default()),
            Err(NwiError::NotRobust { node: 1 })
        ));
        assert!(matches!(
            VnsRunner::run(&Graph::new(1), &VnsConfig::default()),
            Err(NwiError::TooFewNodes {
                nodes: 1,
                required: 2
            })
        ));
    }

    #[test]
    fn test_random_strategy_reproducible() {
        let g = Graph::cycle(8).unwrap();
        let config = VnsConfig::default()
            .with_initial_vertices(InitialVertices::Random)
            .with_seed(5);
        let a = VnsRunner::run(&g, &config).unwrap();
        let b = VnsRunner::run(&g, &config).unwrap();
        assert_eq!(a.initial_roots, b.initial_roots);
        assert_eq!(a.best_edge, b.best_edge);
        assert_eq!(a.cost_history, b.cost_history);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_best_cost_non_increasing(
            n in 4usize..9,
            chords in prop::collection::vec((0usize..9, 0usize..9), 0..3),
            seed in 0u64..1000,
            use_max in any::<bool>(),
        ) {
            let mut g = Graph::cycle(n).unwrap();
            for (u, v) in chords {
                if u < n && v < n && u != v {
                    g.add_edge(u, v).unwrap();
                }
            }
            let cost_function = if use_max { CostFunction::MaxImpact } else { CostFunction::SumOfImpacts };
            let config = VnsConfig::default()
                .with_cost_function(cost_function)
                .with_initial_vertices(InitialVertices::Random)
                .with_seed(seed);

            let outcome = VnsRunner::run(&g, &config).unwrap();

            prop_assert!(outcome.best_cost <= outcome.initial_cost);
            let mut previous = outcome.initial_cost;
            for &cost in &outcome.cost_history {
                prop_assert!(cost <= previous);
                previous = cost;
            }
            prop_assert!(outcome.evaluations <= n * (n - 1) / 2);
            if let Some((_, optimum)) = brute_force(&g, cost_function) {
                prop_assert!(outcome.best_cost >= optimum - 1e-9);
            }
        }
    }
}
