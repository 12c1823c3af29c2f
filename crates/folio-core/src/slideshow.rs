//! Cyclic slideshow with autoplay, indicator navigation and swipe gestures.
//!
//! Slide indices wrap modulo the slide count in both directions. Transitions
//! run through an explicit phase machine: fade the current slide out, swap
//! the index with a directional entry offset, fade the new slide in. Manual
//! control pauses autoplay and schedules a resumption after a cooldown;
//! timers are replaced, never duplicated.

use std::time::{Duration, Instant};

use crate::config::SlideshowConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePhase {
    /// Fully settled on the current index
    Steady,
    /// Current slide fading out; the index swaps when the fade ends
    FadingOut {
        target: usize,
        direction: SlideDirection,
    },
    /// New slide sliding in from its directional offset
    FadingIn { direction: SlideDirection },
}

#[derive(Debug, Clone)]
pub struct Slideshow {
    len: usize,
    current: usize,
    phase: SlidePhase,
    phase_since: Instant,
    autoplay: bool,
    next_auto: Option<Instant>,
    resume_at: Option<Instant>,
    swipe_origin: Option<u16>,
    config: SlideshowConfig,
}

impl Slideshow {
    /// A slideshow over `len` slides. With zero slides the component is
    /// inert: every operation is a no-op and no timers run.
    pub fn new(len: usize, config: SlideshowConfig, now: Instant) -> Self {
        let next_auto = if len > 1 {
            Some(now + Duration::from_millis(config.interval_ms))
        } else {
            None
        };
        Self {
            len,
            current: 0,
            phase: SlidePhase::Steady,
            phase_since: now,
            autoplay: len > 1,
            next_auto,
            resume_at: None,
            swipe_origin: None,
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    /// Fade progress of the active phase in [0, 1]
    pub fn phase_progress(&self, now: Instant) -> f64 {
        let fade = Duration::from_millis(self.config.fade_ms);
        crate::anim::timing::progress(self.phase_since, now, fade)
    }

    fn wrap(&self, index: i64) -> usize {
        let len = self.len as i64;
        (((index % len) + len) % len) as usize
    }

    /// Begin a transition to `index` (wrapping). Same-index and mid-fade
    /// requests are ignored.
    pub fn change_to(&mut self, index: i64, now: Instant) {
        if self.len == 0 {
            return;
        }
        let target = self.wrap(index);
        if target == self.current || self.phase != SlidePhase::Steady {
            return;
        }
        let direction = if index > self.current as i64 {
            SlideDirection::Next
        } else {
            SlideDirection::Prev
        };
        self.phase = SlidePhase::FadingOut { target, direction };
        self.phase_since = now;
    }

    pub fn next(&mut self, now: Instant) {
        self.change_to(self.current as i64 + 1, now);
    }

    pub fn prev(&mut self, now: Instant) {
        self.change_to(self.current as i64 - 1, now);
    }

    /// Indicator click or external request: manual transition, autoplay
    /// resumes after the cooldown.
    pub fn select(&mut self, index: usize, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.change_to(index as i64, now);
        self.pause_with_resume(now);
    }

    /// Arrow-control advance: like `next` but pauses autoplay with a
    /// resume, matching indicator behavior.
    pub fn manual_next(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.next(now);
        self.pause_with_resume(now);
    }

    pub fn manual_prev(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.prev(now);
        self.pause_with_resume(now);
    }

    /// Pointer entered the slideshow; autoplay stops until it leaves
    pub fn hover_start(&mut self) {
        self.autoplay = false;
        self.next_auto = None;
        self.resume_at = None;
    }

    pub fn hover_end(&mut self, now: Instant) {
        if self.len > 1 {
            self.resume_autoplay(now);
        }
    }

    /// Horizontal gesture begins at column `x`
    pub fn touch_start(&mut self, x: u16) {
        if self.len == 0 {
            return;
        }
        self.autoplay = false;
        self.next_auto = None;
        self.swipe_origin = Some(x);
    }

    /// Gesture ends at column `x`; a drag exceeding the minimum distance
    /// advances one slide in the drag direction.
    pub fn touch_end(&mut self, x: u16, now: Instant) {
        let origin = match self.swipe_origin.take() {
            Some(origin) => origin,
            None => return,
        };
        let distance = origin as i32 - x as i32;
        if distance.unsigned_abs() as u16 > self.config.min_swipe_cols {
            if distance > 0 {
                self.next(now);
            } else {
                self.prev(now);
            }
        }
        self.pause_with_resume(now);
    }

    fn pause_with_resume(&mut self, now: Instant) {
        self.autoplay = false;
        self.next_auto = None;
        // Replaces any earlier resume timer
        self.resume_at = Some(now + Duration::from_millis(self.config.resume_cooldown_ms));
    }

    fn resume_autoplay(&mut self, now: Instant) {
        self.autoplay = true;
        self.resume_at = None;
        self.next_auto = Some(now + Duration::from_millis(self.config.interval_ms));
    }

    /// Advance timers and the transition phase machine
    pub fn update(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }

        if let Some(resume) = self.resume_at {
            if now >= resume {
                self.resume_autoplay(now);
            }
        }

        let fade = Duration::from_millis(self.config.fade_ms);
        match self.phase {
            SlidePhase::FadingOut { target, direction } => {
                if now.saturating_duration_since(self.phase_since) >= fade {
                    self.current = target;
                    self.phase = SlidePhase::FadingIn { direction };
                    self.phase_since = now;
                }
            }
            SlidePhase::FadingIn { .. } => {
                if now.saturating_duration_since(self.phase_since) >= fade {
                    self.phase = SlidePhase::Steady;
                    self.phase_since = now;
                }
            }
            SlidePhase::Steady => {
                if self.autoplay {
                    if let Some(due) = self.next_auto {
                        if now >= due {
                            self.next_auto = Some(due + Duration::from_millis(self.config.interval_ms));
                            self.next(now);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SlideshowConfig {
        SlideshowConfig {
            interval_ms: 5000,
            fade_ms: 800,
            resume_cooldown_ms: 3000,
            min_swipe_cols: 50,
        }
    }

    /// Step a slideshow through simulated time in small increments
    fn run_until(show: &mut Slideshow, t0: Instant, ms: u64) {
        let mut t = 0;
        while t <= ms {
            show.update(t0 + Duration::from_millis(t));
            t += 50;
        }
    }

    #[test]
    fn test_wraps_forward_and_backward() {
        let t0 = Instant::now();
        let mut show = Slideshow::new(3, config(), t0);

        // Advancing past the last index wraps to 0
        show.change_to(2, t0);
        run_until(&mut show, t0, 2000);
        assert_eq!(show.current(), 2);

        let t1 = t0 + Duration::from_millis(2000);
        show.next(t1);
        run_until(&mut show, t1, 2000);
        assert_eq!(show.current(), 0);

        // Retreating from 0 wraps to the last index
        let t2 = t1 + Duration::from_millis(2000);
        show.prev(t2);
        run_until(&mut show, t2, 2000);
        assert_eq!(show.current(), 2);
    }

    #[test]
    fn test_autoplay_full_cycle() {
        let t0 = Instant::now();
        let mut show = Slideshow::new(3, config(), t0);

        // Three slides at a 5000ms interval: a full cycle lands back on 0
        run_until(&mut show, t0, 16_000);
        assert_eq!(show.current(), 0);
    }

    #[test]
    fn test_same_index_is_noop() {
        let t0 = Instant::now();
        let mut show = Slideshow::new(3, config(), t0);
        show.change_to(0, t0);
        assert_eq!(show.phase(), SlidePhase::Steady);
    }

    #[test]
    fn test_swipe_advances_once_per_gesture() {
        let t0 = Instant::now();
        let mut show = Slideshow::new(3, config(), t0);

        // 80-column leftward drag exceeds the 50-column minimum
        show.touch_start(100);
        show.touch_end(20, t0);
        run_until(&mut show, t0, 2000);
        assert_eq!(show.current(), 1);

        // The gesture is consumed; a stray end event does nothing
        show.touch_end(0, t0 + Duration::from_millis(2000));
        run_until(&mut show, t0 + Duration::from_millis(2000), 2000);
        assert_eq!(show.current(), 1);
    }

    #[test]
    fn test_short_swipe_ignored() {
        let t0 = Instant::now();
        let mut show = Slideshow::new(3, config(), t0);
        show.touch_start(100);
        show.touch_end(70, t0);
        run_until(&mut show, t0, 2000);
        assert_eq!(show.current(), 0);
    }

    #[test]
    fn test_rightward_swipe_goes_back() {
        let t0 = Instant::now();
        let mut show = Slideshow::new(3, config(), t0);
        show.touch_start(20);
        show.touch_end(100, t0);
        run_until(&mut show, t0, 2000);
        assert_eq!(show.current(), 2);
    }

    #[test]
    fn test_manual_select_pauses_then_resumes_autoplay() {
        let t0 = Instant::now();
        let mut show = Slideshow::new(3, config(), t0);

        show.select(1, t0);
        assert!(!show.is_autoplaying());

        // Cooldown passes, autoplay resumes and advances again
        run_until(&mut show, t0, 3100);
        assert!(show.is_autoplaying());
        run_until(&mut show, t0, 10_000);
        assert_eq!(show.current(), 2);
    }

    #[test]
    fn test_hover_pauses_autoplay() {
        let t0 = Instant::now();
        let mut show = Slideshow::new(3, config(), t0);
        show.hover_start();
        run_until(&mut show, t0, 12_000);
        assert_eq!(show.current(), 0);

        show.hover_end(t0 + Duration::from_millis(12_000));
        assert!(show.is_autoplaying());
    }

    #[test]
    fn test_empty_slideshow_inert() {
        let t0 = Instant::now();
        let mut show = Slideshow::new(0, config(), t0);
        show.next(t0);
        show.select(2, t0);
        show.touch_start(10);
        show.touch_end(90, t0);
        run_until(&mut show, t0, 10_000);
        assert_eq!(show.current(), 0);
        assert!(!show.is_autoplaying());
    }
}
