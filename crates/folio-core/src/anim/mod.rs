//! Frame-driven animation primitives.
//!
//! Pure building blocks first (easing, timing, rate gates), then the
//! stateful effects built from them (rotator, typing, trace). Every state
//! machine advances through an explicit `update(now)` so a test can drive it
//! with a virtual clock.

pub mod easing;
pub mod rate;
pub mod timing;

pub mod rotator;
pub mod trace;
pub mod typing;

pub use easing::EasingType;
pub use rate::{Debounce, Throttle};
pub use rotator::{Rotator, RotatorState};
pub use trace::TraceAnimation;
pub use typing::TypingEffect;
