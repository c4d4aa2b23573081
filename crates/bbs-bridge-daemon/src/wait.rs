//! Deciding when the remote has finished redrawing.
//!
//! The link carries no framing or acknowledgement, so a command is
//! considered answered once the screen has moved away from what it showed
//! when the command was sent and then held still for a few polls. A wait
//! never fails: if the screen does not settle in time the caller simply
//! proceeds with whatever is on it.

use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;
use std::time::Duration;

use bbs_bridge_core::ScreenSnapshot;
use bbs_bridge_core::ScreenSource;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitSettings {
    pub poll_interval: Duration,
    /// Identical polls required after the first change.
    pub stable_polls: u32,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(50),
            stable_polls: 2,
        }
    }
}

/// How a wait ended. Callers treat both outcomes the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Settled { polls: u32 },
    DeadlineReached { polls: u32 },
}

fn content_hash(snapshot: &ScreenSnapshot) -> u64 {
    let mut hasher = DefaultHasher::new();
    snapshot.hash(&mut hasher);
    hasher.finish()
}

/// Tracks successive polls against the screen seen when the wait began.
pub struct QuiescenceTracker {
    start: u64,
    last: u64,
    stable: u32,
    required: u32,
}

impl QuiescenceTracker {
    pub fn new(start: &ScreenSnapshot, required: u32) -> Self {
        let start = content_hash(start);
        Self {
            start,
            last: start,
            stable: 0,
            required,
        }
    }

    /// Record one poll; true once the screen has changed and then held still.
    pub fn observe(&mut self, current: &ScreenSnapshot) -> bool {
        let current = content_hash(current);
        if current == self.start {
            return false;
        }
        if current == self.last {
            self.stable += 1;
        } else {
            self.stable = 0;
            self.last = current;
        }
        self.stable >= self.required
    }
}

/// Poll `source` until it settles or `deadline` has elapsed, measuring change
/// against what it shows right now.
pub async fn await_stable_screen<S>(
    source: &S,
    deadline: Duration,
    settings: &WaitSettings,
) -> WaitOutcome
where
    S: ScreenSource + ?Sized,
{
    let baseline = source.snapshot();
    await_stable_screen_since(source, &baseline, deadline, settings).await
}

/// Like [`await_stable_screen`], with the starting content captured by the
/// caller. Commands take the baseline before sending so a reply that lands
/// during the send still counts as a change.
pub async fn await_stable_screen_since<S>(
    source: &S,
    baseline: &ScreenSnapshot,
    deadline: Duration,
    settings: &WaitSettings,
) -> WaitOutcome
where
    S: ScreenSource + ?Sized,
{
    let started = Instant::now();
    let mut tracker = QuiescenceTracker::new(baseline, settings.stable_polls);
    let mut polls = 0;

    loop {
        tokio::time::sleep(settings.poll_interval).await;
        polls += 1;
        let elapsed = started.elapsed();

        if tracker.observe(&source.snapshot()) {
            debug!(polls, elapsed_ms = elapsed.as_millis() as u64, "Screen settled");
            return WaitOutcome::Settled { polls };
        }
        if elapsed >= deadline {
            debug!(polls, deadline_ms = deadline.as_millis() as u64, "Screen wait hit deadline");
            return WaitOutcome::DeadlineReached { polls };
        }
    }
}
