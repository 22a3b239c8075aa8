//! Last-write-wins debouncing driven by an explicit clock.

use std::time::{Duration, Instant};

/// Holds at most one pending value and releases it once `delay` has passed
/// without a newer value being scheduled.
#[derive(Debug)]
pub struct Debouncer<V> {
    delay: Duration,
    pending: Option<(V, Instant)>,
}

impl<V> Debouncer<V> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms the timer for `value`, replacing any pending value.
    pub fn schedule(&mut self, value: V, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Returns the pending value if its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<V> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|(_, deadline)| now >= *deadline);
        if due {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// Releases the pending value immediately, ignoring the deadline.
    pub fn flush(&mut self) -> Option<V> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Drops the pending value without releasing it.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<V> Drop for Debouncer<V> {
    fn drop(&mut self) {
        if self.cancel() {
            log::trace!("Discarded pending debounced value on teardown");
        }
    }
}
