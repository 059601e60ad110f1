//! Edge-addition VNS configuration.

use std::time::Duration;

use super::types::{CostFunction, InitialVertices};

/// Configuration parameters for the edge-addition search.
///
/// Both budgets are optional guards; without them the run continues until
/// every neighborhood structure has been scanned without improvement.
///
/// # Examples
///
/// ```
/// use nwi_vns::vns::{CostFunction, InitialVertices, VnsConfig};
///
/// let config = VnsConfig::default()
///     .with_cost_function(CostFunction::MaxImpact)
///     .with_initial_vertices(InitialVertices::Random)
///     .with_seed(7);
/// assert_eq!(config.cost_function, CostFunction::MaxImpact);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct VnsConfig {
    /// Objective to minimize.
    pub cost_function: CostFunction,
    /// Strategy for the first pair of root vertices.
    pub initial_vertices: InitialVertices,
    /// Random seed for [`InitialVertices::Random`] (None for default seed).
    pub seed: Option<u64>,
    /// Maximum number of neighborhood scans.
    pub max_scans: Option<usize>,
    /// Maximum wall-clock time, checked before each scan.
    pub time_limit: Option<Duration>,
}

impl Default for VnsConfig {
    fn default() -> Self {
        Self {
            cost_function: CostFunction::SumOfImpacts,
            initial_vertices: InitialVertices::GreatestImpact,
            seed: None,
            max_scans: None,
            time_limit: None,
        }
    }
}

impl VnsConfig {
    /// Sets the objective.
    pub fn with_cost_function(mut self, cost_function: CostFunction) -> Self {
        self.cost_function = cost_function;
        self
    }

    /// Sets the initial root strategy.
    pub fn with_initial_vertices(mut self, initial_vertices: InitialVertices) -> Self {
        self.initial_vertices = initial_vertices;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the number of scans.
    pub fn with_max_scans(mut self, n: usize) -> Self {
        self.max_scans = Some(n);
        self
    }

    /// Caps the wall-clock time.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}
