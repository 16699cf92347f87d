// Periodic refresh timer.
// Polled from the event loop; fires at most once per poll.

use std::time::{Duration, Instant};

/// Default interval between automatic refreshes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    next_due: Instant,
}

impl RefreshTimer {
    /// Start a timer whose first firing is one interval after `now`.
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Returns true if the timer is due, and schedules the next firing.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }

    /// Time left until the next firing.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
