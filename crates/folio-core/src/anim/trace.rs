//! Looping line-art reveal.
//!
//! Strokes draw in with a per-stroke stagger, markers fade in slightly
//! behind them, and after a rest the whole figure resets and replays. The
//! cycle is derived from elapsed time, so there are no timers to cancel.

use std::time::{Duration, Instant};

const STROKE_STAGGER: Duration = Duration::from_millis(40);
const STROKE_DRAW: Duration = Duration::from_millis(1000);
const MARKER_OFFSET: Duration = Duration::from_millis(100);
const MARKER_FADE: Duration = Duration::from_millis(500);
const REST: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct TraceAnimation {
    strokes: usize,
    markers: usize,
    started: Option<Instant>,
}

impl TraceAnimation {
    pub fn new(strokes: usize, markers: usize) -> Self {
        Self {
            strokes,
            markers,
            started: None,
        }
    }

    /// Begin looping; idempotent once running
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.started = None;
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    fn cycle_len(&self) -> Duration {
        let stroke_lane = STROKE_STAGGER * self.strokes.saturating_sub(1) as u32 + STROKE_DRAW;
        let marker_lane = STROKE_STAGGER * self.markers.saturating_sub(1) as u32
            + MARKER_OFFSET
            + MARKER_FADE;
        stroke_lane.max(marker_lane) + REST
    }

    fn cycle_elapsed(&self, now: Instant) -> Option<Duration> {
        let started = self.started?;
        let len = self.cycle_len();
        if len.is_zero() {
            return Some(Duration::ZERO);
        }
        let elapsed = now.saturating_duration_since(started);
        Some(Duration::from_nanos(
            (elapsed.as_nanos() % len.as_nanos()) as u64,
        ))
    }

    /// Draw progress of stroke `i` in [0, 1] for the current cycle
    pub fn stroke_progress(&self, i: usize, now: Instant) -> f64 {
        let elapsed = match self.cycle_elapsed(now) {
            Some(e) => e,
            None => return 0.0,
        };
        let delay = STROKE_STAGGER * i as u32;
        ratio(elapsed, delay, STROKE_DRAW)
    }

    /// Opacity of marker `j` in [0, 1] for the current cycle
    pub fn marker_opacity(&self, j: usize, now: Instant) -> f64 {
        let elapsed = match self.cycle_elapsed(now) {
            Some(e) => e,
            None => return 0.0,
        };
        let delay = STROKE_STAGGER * j as u32 + MARKER_OFFSET;
        ratio(elapsed, delay, MARKER_FADE)
    }
}

fn ratio(elapsed: Duration, delay: Duration, span: Duration) -> f64 {
    if elapsed <= delay {
        return 0.0;
    }
    let active = elapsed - delay;
    if span.is_zero() {
        return 1.0;
    }
    (active.as_secs_f64() / span.as_secs_f64()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_running_until_started() {
        let trace = TraceAnimation::new(3, 2);
        assert!((trace.stroke_progress(0, Instant::now())).abs() < 0.001);
    }

    #[test]
    fn test_strokes_stagger() {
        let mut trace = TraceAnimation::new(3, 0);
        let t0 = Instant::now();
        trace.start(t0);

        let at = t0 + Duration::from_millis(60);
        let first = trace.stroke_progress(0, at);
        let second = trace.stroke_progress(1, at);
        let third = trace.stroke_progress(2, at);
        assert!(first > second);
        assert!(second > third);
    }

    #[test]
    fn test_marker_lags_stroke() {
        let mut trace = TraceAnimation::new(1, 1);
        let t0 = Instant::now();
        trace.start(t0);

        let at = t0 + Duration::from_millis(50);
        assert!(trace.stroke_progress(0, at) > 0.0);
        assert!((trace.marker_opacity(0, at)).abs() < 0.001);
    }

    #[test]
    fn test_cycle_wraps_and_replays() {
        let mut trace = TraceAnimation::new(2, 1);
        let t0 = Instant::now();
        trace.start(t0);

        let len = trace.cycle_len();
        // Just before the loop point everything is settled
        assert!((trace.stroke_progress(0, t0 + len - Duration::from_millis(1)) - 1.0).abs() < 0.001);
        // Just after it the figure has reset
        assert!(trace.stroke_progress(0, t0 + len + Duration::from_millis(1)) < 0.1);
    }
}
