//! Time calculation utilities for frame-driven animations.
//!
//! Every function takes the current instant explicitly so state machines can
//! be driven by a virtual clock in tests.

use std::time::{Duration, Instant};

/// Animation progress in [0.0, 1.0] at `now` for an animation that began at
/// `start`. A zero duration is already complete.
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Check if an animation that began at `start` is complete at `now`
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for row positions
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(from as f64, to as f64, t).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0)).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(0, 100, 0.0), 0);
        assert_eq!(lerp_u16(0, 100, 0.5), 50);
        assert_eq!(lerp_u16(100, 0, 1.0), 0);
    }

    #[test]
    fn test_progress_with_virtual_clock() {
        let start = Instant::now();
        let duration = Duration::from_millis(1000);
        assert!((progress(start, start, duration)).abs() < 0.001);
        assert!(
            (progress(start, start + Duration::from_millis(500), duration) - 0.5).abs() < 0.001
        );
        assert!(
            (progress(start, start + Duration::from_millis(2000), duration) - 1.0).abs() < 0.001
        );
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_now_before_start_clamps() {
        let start = Instant::now() + Duration::from_secs(10);
        let now = Instant::now();
        assert!((progress(start, now, Duration::from_secs(1))).abs() < 0.001);
    }
}
