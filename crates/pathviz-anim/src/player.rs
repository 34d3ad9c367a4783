//! Cancellable timed playback of an event schedule.
//!
//! A [`Player`] drives one schedule at a time against an external sink.
//! The search and scheduling are already done by the time `play` is
//! called; playback is a single timer thread sleeping to each event's
//! deadline. Starting a new run cancels the previous run's pending events
//! first, so a superseded run can never interleave with its successor.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::event::TimedEvent;

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A simple cooperative-cancellation token backed by an [`AtomicBool`].
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// Plays event schedules into an `mpsc` sink, one run at a time.
pub struct Player {
    current: Option<Context>,
    handle: Option<JoinHandle<()>>,
}

impl Player {
    /// Create an idle player.
    pub fn new() -> Self {
        Self {
            current: None,
            handle: None,
        }
    }

    /// Begin playing `events` (already in schedule order) into `tx`.
    ///
    /// Any in-flight run is cancelled first. A timer thread then sleeps to
    /// each event's deadline, measured from the moment playback starts,
    /// and sends the event to the sink; the call itself returns
    /// immediately. The run ends when the events are exhausted, its
    /// context is cancelled, or the sink disconnects. The token is
    /// re-checked after every sleep, so no pending event of a cancelled
    /// run is delivered.
    ///
    /// Each run should get its own channel; the returned [`Context`] lets
    /// the caller cancel this run without touching the player.
    pub fn play(&mut self, events: Vec<TimedEvent>, tx: Sender<TimedEvent>) -> Context {
        self.cancel();

        let ctx = Context::new();
        let run_ctx = ctx.clone();
        log::debug!("play: starting run with {} event(s)", events.len());

        let handle = thread::spawn(move || {
            let started = Instant::now();
            for ev in events {
                let due = Duration::from_millis(ev.at_ms);
                let elapsed = started.elapsed();
                if due > elapsed {
                    thread::sleep(due - elapsed);
                }
                if run_ctx.is_done() {
                    log::debug!("play: run cancelled, dropping pending events");
                    return;
                }
                if tx.send(ev).is_err() {
                    // Sink disconnected; nobody is watching anymore.
                    return;
                }
            }
        });

        self.current = Some(ctx.clone());
        self.handle = Some(handle);
        ctx
    }

    /// Cancel the in-flight run, if any.
    ///
    /// Pending events are dropped; the timer thread notices at its next
    /// deadline and winds down on its own.
    pub fn cancel(&mut self) {
        if let Some(ctx) = self.current.take() {
            ctx.cancel();
        }
        self.handle = None;
    }

    /// Block until the current run has finished delivering.
    ///
    /// Returns immediately if no run is in flight. Cancelled runs are
    /// detached and cannot be waited on.
    pub fn wait(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        self.current = None;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Player {
    /// Dropping the player cancels whatever is still pending.
    fn drop(&mut self) {
        self.cancel();
    }
}
