//! Building the two-phase event timeline for one search run.

use pathviz_core::Point;
use pathviz_search::VisitedNode;

use crate::event::{EventKind, TimedEvent};

/// Delays between consecutive events of each phase, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timing {
    pub visit_delay_ms: u64,
    pub path_delay_ms: u64,
}

impl Default for Timing {
    /// Fast exploration sweep, slower path highlight.
    fn default() -> Self {
        Self {
            visit_delay_ms: 10,
            path_delay_ms: 50,
        }
    }
}

/// Lay out the full event timeline for one search run.
///
/// Phase 1 emits a [`EventKind::Visited`] event for trace element `i` at
/// `i * visit_delay_ms`. Phase 2 begins where phase 1 ends, at
/// `visited.len() * visit_delay_ms`, and emits a [`EventKind::Path`]
/// event for path element `j` at that offset plus `j * path_delay_ms`.
///
/// The result is in input order with non-decreasing times; no reordering,
/// no coalescing. An empty path (the unreachable outcome) produces phase 1
/// only, so callers animate the exploration and then simply stop instead
/// of highlighting a fake path.
pub fn schedule(visited: &[VisitedNode], path: &[Point], timing: Timing) -> Vec<TimedEvent> {
    let mut events = Vec::with_capacity(visited.len() + path.len());

    for (i, v) in visited.iter().enumerate() {
        events.push(TimedEvent {
            kind: EventKind::Visited,
            pos: v.pos,
            at_ms: i as u64 * timing.visit_delay_ms,
        });
    }

    let phase1_end = visited.len() as u64 * timing.visit_delay_ms;
    for (j, &p) in path.iter().enumerate() {
        events.push(TimedEvent {
            kind: EventKind::Path,
            pos: p,
            at_ms: phase1_end + j as u64 * timing.path_delay_ms,
        });
    }

    log::debug!(
        "schedule: {} visit + {} path event(s), span {} ms",
        visited.len(),
        path.len(),
        events.last().map_or(0, |e| e.at_ms),
    );
    events
}
