//! Value types shared by the edge-addition search.

use std::fmt;

use crate::nwi::NodalImpact;

/// Scalar objective derived from a nodal impact vector. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostFunction {
    /// `Σ impact`.
    #[default]
    SumOfImpacts,
    /// `max(impact)`.
    MaxImpact,
}

impl CostFunction {
    /// Cost of an evaluated snapshot under this objective.
    pub fn cost(self, impact: &NodalImpact) -> f64 {
        match self {
            CostFunction::SumOfImpacts => impact.sum(),
            CostFunction::MaxImpact => impact.max(),
        }
    }
}

impl fmt::Display for CostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostFunction::SumOfImpacts => f.write_str("sum of impacts"),
            CostFunction::MaxImpact => f.write_str("max impact"),
        }
    }
}

/// How the two root vertices of the first scan are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialVertices {
    /// Two distinct vertices drawn uniformly at random.
    Random,
    /// The two vertices with the largest nodal impact.
    #[default]
    GreatestImpact,
}

impl fmt::Display for InitialVertices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitialVertices::Random => f.write_str("random"),
            InitialVertices::GreatestImpact => f.write_str("greatest impact"),
        }
    }
}

/// Distance-order pair `(d1, d2)`: candidate endpoints lie at distance `d1`
/// from the first root and `d2` from the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborhoodStructure {
    /// Distance order around the first root.
    pub d1: usize,
    /// Distance order around the second root.
    pub d2: usize,
}

impl NeighborhoodStructure {
    /// Creates the structure `(d1, d2)`.
    pub fn new(d1: usize, d2: usize) -> Self {
        Self { d1, d2 }
    }
}

impl fmt::Display for NeighborhoodStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.d1, self.d2)
    }
}

/// A canonical undirected node pair with `src < dst`.
///
/// Ordering is lexicographic on `(src, dst)`, which is also the order in
/// which candidate batches are evaluated.
///
/// # Examples
///
/// ```
/// use nwi_vns::vns::CandidateEdge;
///
/// let edge = CandidateEdge::new(4, 1).unwrap();
/// assert_eq!((edge.src(), edge.dst()), (1, 4));
/// assert!(CandidateEdge::new(2, 2).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateEdge {
    src: usize,
    dst: usize,
}

impl CandidateEdge {
    /// Canonicalizes `(a, b)`; `None` for a self-pair.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { src: a, dst: b }),
            std::cmp::Ordering::Greater => Some(Self { src: b, dst: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Lower endpoint.
    pub fn src(&self) -> usize {
        self.src
    }

    /// Upper endpoint.
    pub fn dst(&self) -> usize {
        self.dst
    }
}

impl fmt::Display for CandidateEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.src, self.dst)
    }
}

/// Why a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// Every neighborhood structure was scanned without improvement.
    Exhausted,
    /// The configured scan budget ran out.
    ScanBudget,
    /// The configured wall-clock budget ran out.
    TimeLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Exhausted => f.write_str("neighborhoods exhausted"),
            StopReason::ScanBudget => f.write_str("scan budget reached"),
            StopReason::TimeLimit => f.write_str("time limit reached"),
        }
    }
}
