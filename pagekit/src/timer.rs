//! Cancellable one-shot timers.

use std::time::Duration;

use crate::behavior::BehaviorId;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub id: TimerId,
    pub owner: BehaviorId,
    pub deadline: Duration,
}

/// Pending timers, ordered by deadline then by scheduling order.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a timer for `owner` firing `delay` after `now`.
    pub fn schedule(&mut self, owner: BehaviorId, now: Duration, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Timer {
            id,
            owner,
            deadline: now + delay,
        });
        id
    }

    /// Cancel a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    /// Cancel every timer belonging to `owner`. Returns how many were dropped.
    pub fn cancel_owner(&mut self, owner: BehaviorId) -> usize {
        let before = self.pending.len();
        self.pending.retain(|t| t.owner != owner);
        before - self.pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|t| t.deadline).min()
    }

    /// The id the next scheduled timer will get. Timers created from here on
    /// compare greater or equal.
    pub fn watermark(&self) -> TimerId {
        TimerId(self.next_id)
    }

    /// Remove and return the earliest timer due at `now` that was scheduled
    /// before `before`.
    pub fn pop_due(&mut self, now: Duration, before: TimerId) -> Option<Timer> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now && t.id < before)
            .min_by_key(|(_, t)| (t.deadline, t.id))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(index))
    }
}
