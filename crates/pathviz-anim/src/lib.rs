//! **pathviz-anim** — deterministic animation schedule and playback.
//!
//! Turns one search run's outputs (visitation trace + reconstructed path)
//! into a single timeline of discrete, timestamped events, then replays
//! that timeline against an external sink:
//!
//! - [`schedule`] lays out the two back-to-back phases, exploration
//!   ([`EventKind::Visited`]) then path highlight ([`EventKind::Path`]),
//!   as a time-ordered `Vec<TimedEvent>`;
//! - [`Player`] delivers the events at their deadlines over an `mpsc`
//!   channel, one run at a time, with cooperative cancellation
//!   ([`Context`]): starting a new run always cancels the pending events
//!   of the previous one.
//!
//! The scheduler renders nothing itself; the sink is the presentation
//! collaborator.

mod event;
mod player;
mod schedule;

pub use event::{EventKind, TimedEvent};
pub use player::{Context, Player};
pub use schedule::{Timing, schedule};
