//! Search log: structured events and the sinks that receive them.
//!
//! The runner reports progress through a caller-supplied [`SearchLog`]
//! instead of writing to a fixed destination. Events arrive in the order
//! they happen.

use std::fmt;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use super::types::{CandidateEdge, CostFunction, InitialVertices, NeighborhoodStructure, StopReason};

/// One step of a search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// The neighborhood list for this run.
    NeighborhoodsGenerated {
        /// Structures in scan order.
        structures: Vec<NeighborhoodStructure>,
    },
    /// Roots of the first scan.
    InitialVertices {
        /// Strategy that produced them.
        strategy: InitialVertices,
        /// First root.
        v1: usize,
        /// Second root.
        v2: usize,
    },
    /// Cost of the unmodified graph.
    InitialCost {
        /// Objective in use.
        cost_function: CostFunction,
        /// Its value.
        cost: f64,
    },
    /// A neighborhood scan is about to be scored.
    Scan {
        /// Position in the neighborhood list.
        index: usize,
        /// First root.
        v1: usize,
        /// Second root.
        v2: usize,
        /// Structure being scanned.
        structure: NeighborhoodStructure,
        /// Candidates not seen in earlier scans.
        candidates: usize,
    },
    /// A strictly better edge was found.
    Improvement {
        /// New first root (lower endpoint of the edge).
        v1: usize,
        /// New second root (upper endpoint of the edge).
        v2: usize,
        /// New best cost.
        cost: f64,
    },
    /// The run ended.
    Finished {
        /// Best edge, if any improved on the initial cost.
        best_edge: Option<CandidateEdge>,
        /// Best cost.
        best_cost: f64,
        /// Candidates scored over the run.
        evaluations: usize,
        /// Why the run ended.
        stop_reason: StopReason,
    },
}

impl fmt::Display for SearchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchEvent::NeighborhoodsGenerated { structures } => {
                f.write_str("neighborhood list generated: [")?;
                for (i, s) in structures.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{s}")?;
                }
                f.write_str("]")
            }
            SearchEvent::InitialVertices { strategy, v1, v2 } => {
                write!(f, "initial vertices ({strategy}): {v1} and {v2}")
            }
            SearchEvent::InitialCost {
                cost_function,
                cost,
            } => write!(f, "cost function: {cost_function}, initial value {cost}"),
            SearchEvent::Scan {
                index,
                v1,
                v2,
                structure,
                candidates,
            } => write!(
                f,
                "scan {index}: vertices {v1} and {v2}, structure {structure}, {candidates} new candidate(s)"
            ),
            SearchEvent::Improvement { v1, v2, cost } => {
                write!(f, "better solution found: vertices {v1} and {v2}, cost {cost}")
            }
            SearchEvent::Finished {
                best_edge,
                best_cost,
                evaluations,
                stop_reason,
            } => {
                match best_edge {
                    Some(edge) => write!(f, "finished ({stop_reason}): best edge {edge}")?,
                    None => write!(f, "finished ({stop_reason}): no improving edge")?,
                }
                write!(f, ", cost {best_cost}, {evaluations} evaluation(s)")
            }
        }
    }
}

/// Destination for search events.
pub trait SearchLog {
    /// Receives the next event.
    fn record(&mut self, event: &SearchEvent);
}

impl<L: SearchLog + ?Sized> SearchLog for &mut L {
    fn record(&mut self, event: &SearchEvent) {
        (**self).record(event);
    }
}

/// Fans every event out to both sinks, first `A` then `B`.
impl<A: SearchLog, B: SearchLog> SearchLog for (A, B) {
    fn record(&mut self, event: &SearchEvent) {
        self.0.record(event);
        self.1.record(event);
    }
}

/// Forwards events to the `log` facade.
///
/// Scan events go out at debug level, everything else at info.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SearchLog for LogSink {
    fn record(&mut self, event: &SearchEvent) {
        match event {
            SearchEvent::Scan { .. } => log::debug!("{event}"),
            _ => log::info!("{event}"),
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Vec<SearchEvent>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// Consumes the sink, returning its events.
    pub fn into_events(self) -> Vec<SearchEvent> {
        self.events
    }
}

impl SearchLog for MemorySink {
    fn record(&mut self, event: &SearchEvent) {
        self.events.push(event.clone());
    }
}

/// Writes `"<unix seconds>.<millis>: <event>"` lines to any writer.
///
/// Writing stops at the first I/O error, which [`WriterSink::finish`]
/// then returns.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> WriterSink<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flushes and returns the writer, or the first error encountered.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> SearchLog for WriterSink<W> {
    fn record(&mut self, event: &SearchEvent) {
        if self.error.is_some() {
            return;
        }
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        if let Err(e) = writeln!(
            self.writer,
            "{}.{:03}: {event}",
            now.as_secs(),
            now.subsec_millis()
        ) {
            self.error = Some(e);
        }
    }
}
