//! Animated numeric counter for the stats section.
//!
//! Interpolates a displayed number from 0 to a parsed target over a fixed
//! duration with quartic ease-out, one instance per counter element. The
//! state machine makes the two guards explicit: `Animating` blocks
//! re-entrant starts, leaving `Idle` blocks ambient re-triggering.

use std::time::{Duration, Instant};

use super::easing::EasingType;
use super::timing::progress;

/// Highlight lingers this long after the count finishes
const HIGHLIGHT_TAIL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorState {
    /// Never animated, or explicitly reset; eligible for ambient triggering
    Idle,
    /// Counting up; further starts are ignored
    Animating,
    /// Finished (or soft-reset); replayable only on explicit request
    Completed,
}

#[derive(Debug, Clone)]
pub struct Rotator {
    target: f64,
    duration: Duration,
    state: RotatorState,
    started: Option<Instant>,
    current: f64,
    highlight_until: Option<Instant>,
}

impl Rotator {
    pub fn new(target: f64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            state: RotatorState::Idle,
            started: None,
            current: 0.0,
            highlight_until: None,
        }
    }

    /// Parse a counter target from content text; `None` skips the element
    /// during discovery
    pub fn parse_target(text: &str) -> Option<f64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        text.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    pub fn from_text(text: &str, duration: Duration) -> Option<Self> {
        Self::parse_target(text).map(|target| Self::new(target, duration))
    }

    pub fn state(&self) -> RotatorState {
        self.state
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state == RotatorState::Animating
    }

    /// True from the moment an animation starts until the next full reset
    #[inline]
    pub fn has_animated(&self) -> bool {
        self.state != RotatorState::Idle
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Begin counting from 0 at `now`. No-op while already animating; a
    /// completed rotator restarts. Ambient triggers are filtered by
    /// `has_animated` at the call site, so only explicit replays reach here.
    pub fn start(&mut self, now: Instant) {
        if self.state == RotatorState::Animating {
            return;
        }
        self.state = RotatorState::Animating;
        self.started = Some(now);
        self.current = 0.0;
        self.highlight_until = None;
    }

    /// Advance one frame. Completion snaps the display to the exact target
    /// rather than the last interpolated value.
    pub fn update(&mut self, now: Instant) {
        let started = match (self.state, self.started) {
            (RotatorState::Animating, Some(started)) => started,
            _ => return,
        };

        let t = progress(started, now, self.duration);
        self.current = self.target * EasingType::QuartOut.apply(t);

        if t >= 1.0 {
            self.current = self.target;
            self.state = RotatorState::Completed;
            self.started = None;
            self.highlight_until = Some(now + HIGHLIGHT_TAIL);
        }
    }

    /// Displayed text for the current frame.
    ///
    /// Targets >= 10 count in floored integers and land on the exact
    /// integer; targets < 10 carry one decimal digit throughout.
    pub fn display(&self) -> String {
        match self.state {
            RotatorState::Idle => "0".to_string(),
            RotatorState::Animating => {
                if self.target >= 10.0 {
                    format!("{}", self.current.floor() as i64)
                } else {
                    format!("{:.1}", self.current)
                }
            }
            RotatorState::Completed => {
                // Zero after a soft reset, the exact target otherwise
                if self.current == 0.0 {
                    "0".to_string()
                } else if self.target.fract() == 0.0 {
                    format!("{}", self.target as i64)
                } else {
                    format!("{:.1}", self.target)
                }
            }
        }
    }

    /// Transient visual emphasis tied to the animation window
    pub fn highlighted(&self, now: Instant) -> bool {
        self.state == RotatorState::Animating
            || self.highlight_until.map(|until| now < until).unwrap_or(false)
    }

    /// Full reset: display 0, both guards cleared, ambient triggers rearm
    pub fn reset(&mut self) {
        self.state = RotatorState::Idle;
        self.started = None;
        self.current = 0.0;
        self.highlight_until = None;
    }

    /// Clear the display and cancel any running animation without rearming
    /// ambient triggers: a soft-reset rotator replays only on explicit
    /// request.
    pub fn soft_reset(&mut self) {
        if self.state == RotatorState::Animating {
            self.state = RotatorState::Completed;
        }
        self.started = None;
        self.current = 0.0;
        self.highlight_until = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotator(target: f64) -> Rotator {
        Rotator::new(target, Duration::from_millis(2000))
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(Rotator::parse_target("42"), Some(42.0));
        assert_eq!(Rotator::parse_target(" 4.5 "), Some(4.5));
        assert_eq!(Rotator::parse_target("fast"), None);
        assert_eq!(Rotator::parse_target(""), None);
        assert_eq!(Rotator::parse_target("NaN"), None);
    }

    #[test]
    fn test_integer_target_completes_exact() {
        let mut rot = rotator(42.0);
        let t0 = Instant::now();
        rot.start(t0);

        rot.update(t0 + Duration::from_millis(500));
        assert!(rot.is_animating());

        rot.update(t0 + Duration::from_millis(2000));
        assert_eq!(rot.state(), RotatorState::Completed);
        assert_eq!(rot.display(), "42");
    }

    #[test]
    fn test_small_target_one_decimal_throughout() {
        let mut rot = rotator(4.5);
        let t0 = Instant::now();
        rot.start(t0);

        for ms in [100u64, 500, 1000, 1500] {
            rot.update(t0 + Duration::from_millis(ms));
            let text = rot.display();
            let decimals = text.split('.').nth(1).map(str::len).unwrap_or(0);
            assert_eq!(decimals, 1, "at {}ms: {}", ms, text);
        }

        rot.update(t0 + Duration::from_millis(2000));
        assert_eq!(rot.display(), "4.5");
    }

    #[test]
    fn test_animating_display_floors_integers() {
        let mut rot = rotator(100.0);
        let t0 = Instant::now();
        rot.start(t0);
        rot.update(t0 + Duration::from_millis(300));
        let shown: i64 = rot.display().parse().unwrap();
        assert!(shown < 100);
    }

    #[test]
    fn test_start_is_not_reentrant() {
        let mut rot = rotator(42.0);
        let t0 = Instant::now();
        rot.start(t0);
        rot.update(t0 + Duration::from_millis(1000));
        let mid = rot.display();

        // A second start mid-flight must not restart the trajectory
        rot.start(t0 + Duration::from_millis(1000));
        rot.update(t0 + Duration::from_millis(1000));
        assert_eq!(rot.display(), mid);
    }

    #[test]
    fn test_reset_then_start_replays() {
        let mut rot = rotator(42.0);
        let t0 = Instant::now();
        rot.start(t0);
        rot.update(t0 + Duration::from_millis(2000));
        assert!(rot.has_animated());

        rot.reset();
        assert!(!rot.has_animated());
        assert_eq!(rot.display(), "0");

        let t1 = t0 + Duration::from_millis(3000);
        rot.start(t1);
        assert!(rot.has_animated());
        rot.update(t1 + Duration::from_millis(2000));
        assert_eq!(rot.display(), "42");
    }

    #[test]
    fn test_soft_reset_keeps_replay_guard() {
        let mut rot = rotator(42.0);
        let t0 = Instant::now();
        rot.start(t0);
        rot.update(t0 + Duration::from_millis(2000));

        rot.soft_reset();
        assert!(rot.has_animated());
        assert_eq!(rot.display(), "0");

        // Explicit replay still works
        let t1 = t0 + Duration::from_millis(5000);
        rot.start(t1);
        rot.update(t1 + Duration::from_millis(2000));
        assert_eq!(rot.display(), "42");
    }

    #[test]
    fn test_highlight_window() {
        let mut rot = rotator(42.0);
        let t0 = Instant::now();
        rot.start(t0);
        rot.update(t0 + Duration::from_millis(100));
        assert!(rot.highlighted(t0 + Duration::from_millis(100)));

        let done = t0 + Duration::from_millis(2000);
        rot.update(done);
        assert!(rot.highlighted(done + Duration::from_millis(400)));
        assert!(!rot.highlighted(done + Duration::from_millis(600)));
    }
}
