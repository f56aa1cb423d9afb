//! Optional side channel reporting how each player was placed
//!
//! Sinks only observe; the arrangement is the same whichever sink is used.

use super::types::{FieldPosition, Role, Strategy};

/// One placement decision
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementTrace {
    pub roster_index: usize,
    pub player_id: u64,
    pub strategy: Strategy,
    /// Role used by the heuristic mapper; `None` for grid placements
    pub role: Option<Role>,
    /// Index within the role's line; `None` for grid and goalkeeper placements
    pub slot: Option<usize>,
    pub position: FieldPosition,
}

/// Receiver of placement decisions
pub trait TraceSink {
    fn record(&mut self, trace: &PlacementTrace);
}

/// Discards every event
#[derive(Debug, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _trace: &PlacementTrace) {}
}

/// Forwards events to the `log` facade at debug level
#[derive(Debug, Default)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn record(&mut self, trace: &PlacementTrace) {
        log::debug!(
            "player #{} (id {}) placed by {}{} at ({:.1}, {:.1})",
            trace.roster_index,
            trace.player_id,
            trace.strategy,
            match (trace.role, trace.slot) {
                (Some(role), Some(slot)) => format!(" as {} {}", role, slot),
                (Some(role), None) => format!(" as {}", role),
                _ => String::new(),
            },
            trace.position.x,
            trace.position.y
        );
    }
}

/// Collects events, e.g. for an explain view
impl TraceSink for Vec<PlacementTrace> {
    fn record(&mut self, trace: &PlacementTrace) {
        self.push(trace.clone());
    }
}
