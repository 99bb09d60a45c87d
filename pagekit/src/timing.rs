//! Rate limiting helpers for noisy events (scroll, resize, typing).
//!
//! Both helpers are plain state machines over a caller-supplied time, so
//! they work with any `Clock`.

use std::time::Duration;

/// Trailing-edge debounce: fires once, `wait` after the last call.
#[derive(Debug, Clone)]
pub struct Debounce {
    wait: Duration,
    due: Option<Duration>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self { wait, due: None }
    }

    /// Register a call at `now`, pushing the deadline back.
    pub fn call(&mut self, now: Duration) {
        self.due = Some(now + self.wait);
    }

    /// Returns true exactly once when the deadline has passed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }
}

/// Leading-edge throttle: admits a call, then rejects calls until `limit`
/// has elapsed.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    reopens_at: Option<Duration>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            reopens_at: None,
        }
    }

    /// Returns true if a call at `now` should run.
    pub fn try_call(&mut self, now: Duration) -> bool {
        if self.reopens_at.is_some_and(|at| now < at) {
            return false;
        }
        self.reopens_at = Some(now + self.limit);
        true
    }

    pub fn reset(&mut self) {
        self.reopens_at = None;
    }
}
