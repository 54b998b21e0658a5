//! Rate limiting for noisy UI events.
//!
//! Both helpers are driven by timestamps supplied by the caller, so they
//! work against any clock.

use std::time::{Duration, Instant};

/// What to do with an event offered to a [`Throttle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Handle it now
    Run,
    /// Handle it once `Duration` has passed, then call [`Throttle::flush`]
    Defer(Duration),
    /// A deferred run is already pending and will see this event's effect
    Drop,
}

/// Throttle with leading and trailing edges.
///
/// The first event of a burst runs at once. Events inside the window
/// collapse into a single deferred run at its end, so the state after the
/// last event is always handled.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    open_at: Option<Instant>,
    trailing: bool,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            open_at: None,
            trailing: false,
        }
    }

    /// Decide how to handle an event arriving at `now`
    pub fn gate(&mut self, now: Instant) -> Gate {
        match self.open_at {
            Some(open_at) if now < open_at => {
                if self.trailing {
                    Gate::Drop
                } else {
                    self.trailing = true;
                    Gate::Defer(open_at - now)
                }
            }
            _ => {
                self.open_at = Some(now + self.limit);
                Gate::Run
            }
        }
    }

    /// Mark the deferred run as done; it opens a new window
    pub fn flush(&mut self, now: Instant) {
        self.trailing = false;
        self.open_at = Some(now + self.limit);
    }
}

/// Trailing-edge debounce: only the last value of a burst is delivered,
/// once `wait` has passed without a newer one.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    wait: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debounce<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Record a value, restarting the quiet period
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.wait, value));
    }

    /// Take the pending value if its quiet period is over
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().map(|(due, _)| *due)?;
        if now < due {
            return None;
        }
        self.pending.take().map(|(_, value)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
