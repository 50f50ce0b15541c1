//! Capped exponential backoff between probe attempts.

use std::time::Duration;

/// Delay schedule for retrying probes while a server is still starting up.
///
/// Grows by x1.5 per attempt from the starting delay up to the cap, then
/// stays there.
#[derive(Debug, Clone)]
pub struct Backoff {
    next_ms: u64,
    cap_ms: u64,
}

impl Backoff {
    /// Schedule with an explicit start and cap, in milliseconds.
    pub fn new(start_ms: u64, cap_ms: u64) -> Self {
        Self {
            next_ms: start_ms.min(cap_ms),
            cap_ms,
        }
    }

    /// The standard probe schedule: 1s, 1.5s, 2.25s, ... capped at 5s.
    pub fn probe() -> Self {
        Self::new(1_000, 5_000)
    }

    /// The next delay, advancing the schedule.
    pub fn next_delay(&mut self) -> Duration {
        let delay = self.next_ms;
        self.next_ms = (self.next_ms + self.next_ms / 2).min(self.cap_ms);
        Duration::from_millis(delay)
    }
}
