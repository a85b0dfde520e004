//! Virtual-clock queue of deferred actions.
//!
//! Actions are queued with a delay relative to the scheduler's clock and
//! handed back, one at a time and in due order, as the host advances time.
//! Nothing runs on its own: the owner decides when time passes, which keeps
//! every mutation atomic and testable without real sleeps.

use std::time::Duration;

#[derive(Debug)]
struct Scheduled<A> {
    due: Duration,
    seq: u64,
    action: A,
}

#[derive(Debug)]
pub struct Scheduler<A> {
    now: Duration,
    seq: u64,
    pending: Vec<Scheduled<A>>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, action: A) {
        self.seq += 1;
        self.pending.push(Scheduled {
            due: self.now + delay,
            seq: self.seq,
            action,
        });
    }

    /// Time left until the earliest pending action is due.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|p| p.due)
            .min()
            .map(|due| due.saturating_sub(self.now))
    }

    /// Removes the earliest action due at or before `until` and moves the
    /// clock to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<A> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let next = self.pending.remove(idx);
        if next.due > self.now {
            self.now = next.due;
        }
        Some(next.action)
    }

    pub fn advance_to(&mut self, t: Duration) {
        if t > self.now {
            self.now = t;
        }
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
