use std::time::{Duration, Instant};

/// Interval at which the UI thread drains the result inbox.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Fixed-interval schedule for the result poller.
///
/// Unlike [`crate::Debouncer`] it is never cancelled: every due tick
/// schedules the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollClock {
    interval: Duration,
    next_due: Instant,
}

impl PollClock {
    /// The first poll is due immediately at `start`.
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next_due: start,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&mut self, now: Instant) -> bool {
        if now >= self.next_due {
            self.next_due = now + self.interval;
            true
        } else {
            false
        }
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
