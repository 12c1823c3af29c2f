//! Rate-limiting gates for event-driven callers.
//!
//! `Throttle` passes the first event and swallows the rest of a window;
//! `Debounce` waits for a quiet period before firing once. Both are driven
//! by explicit instants rather than wall-clock reads.

use std::time::{Duration, Instant};

/// Leading-edge throttle: one pass per `limit` window.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self { limit, last: None }
    }

    /// Returns true if the caller may proceed at `now`
    pub fn allow(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.limit => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// Trailing-edge debounce: fires once after `quiet` with no new triggers.
#[derive(Debug, Clone)]
pub struct Debounce {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, deadline: None }
    }

    /// Record an event; any pending deadline is replaced
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// Poll the gate; returns true exactly once when the quiet period ends
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_passes_first_and_blocks_window() {
        let mut throttle = Throttle::new(Duration::from_millis(16));
        let t0 = Instant::now();

        assert!(throttle.allow(t0));
        assert!(!throttle.allow(t0 + Duration::from_millis(5)));
        assert!(!throttle.allow(t0 + Duration::from_millis(15)));
        assert!(throttle.allow(t0 + Duration::from_millis(16)));
    }

    #[test]
    fn test_debounce_fires_after_quiet_period() {
        let mut debounce = Debounce::new(Duration::from_millis(250));
        let t0 = Instant::now();

        debounce.trigger(t0);
        assert!(!debounce.ready(t0 + Duration::from_millis(100)));

        // A new trigger pushes the deadline out
        debounce.trigger(t0 + Duration::from_millis(100));
        assert!(!debounce.ready(t0 + Duration::from_millis(260)));
        assert!(debounce.ready(t0 + Duration::from_millis(350)));

        // Fires only once
        assert!(!debounce.ready(t0 + Duration::from_millis(400)));
    }
}
