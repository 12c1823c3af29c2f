//! Pure easing functions mapping progress [0, 1] to eased output [0, 1].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    Linear,
    /// Quartic ease-out, used by the numeric rotators
    QuartOut,
    /// Quartic ease-in-out, used by programmatic scrolling
    QuartInOut,
}

impl EasingType {
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::QuartOut => quart_ease_out(t),
            EasingType::QuartInOut => quart_ease_in_out(t),
        }
    }
}

/// f(t) = 1 - (1-t)⁴
#[inline]
fn quart_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv
}

/// Accelerate through the first half, decelerate through the second
#[inline]
fn quart_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv * inv / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        for easing in [EasingType::Linear, EasingType::QuartOut, EasingType::QuartInOut] {
            assert!((easing.apply(0.0)).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [EasingType::Linear, EasingType::QuartOut, EasingType::QuartInOut] {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_input_clamped() {
        assert!((EasingType::QuartOut.apply(-0.5)).abs() < 0.001);
        assert!((EasingType::QuartOut.apply(1.5) - 1.0).abs() < 0.001);
    }
}
