//! Timed animation events.

use pathviz_core::Point;

/// The kind of a scheduled animation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EventKind {
    /// A cell was finalized during the search (exploration phase).
    Visited,
    /// A cell lies on the reconstructed shortest path (highlight phase).
    Path,
}

/// One discrete cell state change, due `at_ms` milliseconds after
/// playback start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedEvent {
    pub kind: EventKind,
    pub pos: Point,
    pub at_ms: u64,
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn timed_event_round_trip() {
        let ev = TimedEvent {
            kind: EventKind::Path,
            pos: Point::new(4, 2),
            at_ms: 350,
        };
        let json = serde_json::to_string(&ev).unwrap();
        assert!(json.contains("\"path\""));
        let back: TimedEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(ev, back);
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EventKind::Visited).unwrap(),
            "\"visited\""
        );
        assert_eq!(serde_json::to_string(&EventKind::Path).unwrap(), "\"path\"");
    }
}
