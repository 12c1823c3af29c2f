//! Page controller.
//!
//! Owns navigation, the slideshow, the rotator set, both visibility
//! observers and the supplementary effects, and advances all of them once
//! per frame. Constructed by the application entry point; other layers hold
//! a reference instead of reaching into globals.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::anim::rate::Debounce;
use crate::anim::{Rotator, TraceAnimation, TypingEffect};
use crate::config::AppConfig;
use crate::content::Portfolio;
use crate::nav::{NavController, NavEffect, Section};
use crate::observe::{ObserverEvent, ObserverProfile, VisibilityObserver, WatchedElement};
use crate::slideshow::Slideshow;
use crate::theme::ThemeMode;

/// Ripple pulse length on the theme toggle
const RIPPLE: Duration = Duration::from_millis(600);
/// Back-to-top bounce pulse length
const BOUNCE: Duration = Duration::from_millis(1000);

/// Geometry computed by the rendering layer for the current width
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub sections: Vec<Section>,
    /// Generic reveal elements (sections, cards, the line-art figure)
    pub revealed: Vec<WatchedElement>,
    /// Counter elements; keys must match rotator keys ("stat-<index>")
    pub rotators: Vec<WatchedElement>,
    pub total_height: u16,
    pub viewport: u16,
}

/// Back-to-top control state derived from scroll position
#[derive(Debug, Clone)]
pub struct BackToTop {
    visible: bool,
    pulse_until: Option<Instant>,
}

impl BackToTop {
    fn new() -> Self {
        Self { visible: false, pulse_until: None }
    }

    fn sample(&mut self, scroll: u16, threshold: u16, now: Instant) {
        let visible = scroll > threshold;
        if visible && !self.visible {
            // Bounce once when the control appears
            self.pulse_until = Some(now + BOUNCE);
        }
        self.visible = visible;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn pulsing(&self, now: Instant) -> bool {
        self.pulse_until.map(|until| now < until).unwrap_or(false)
    }
}

/// Contact form stub: validates locally, logs, confirms. No I/O.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    confirmation: Option<String>,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Please enter your name".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') || email.starts_with('@') {
            return Err("Please enter a valid email address".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("Please enter a message".to_string());
        }
        Ok(())
    }

    /// Log the submission and reset the fields
    pub fn submit(&mut self) -> Result<(), String> {
        self.validate()?;
        tracing::info!(
            name = %self.name.trim(),
            email = %self.email.trim(),
            "contact form submitted"
        );
        self.confirmation =
            Some("Thank you for your message! I will get back to you soon.".to_string());
        self.name.clear();
        self.email.clear();
        self.message.clear();
        Ok(())
    }

    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }

    pub fn dismiss_confirmation(&mut self) {
        self.confirmation = None;
    }
}

/// Parallax row offset for a background element
pub fn parallax_offset(scroll: u16, speed: f64) -> i32 {
    -((scroll as f64 * speed).round() as i32)
}

pub struct PageController {
    pub nav: NavController,
    pub slideshow: Slideshow,
    pub typing: TypingEffect,
    pub trace: TraceAnimation,

    rotators: HashMap<String, Rotator>,
    rotator_observer: VisibilityObserver,
    reveal_observer: VisibilityObserver,
    revealed: HashSet<String>,

    back_to_top: BackToTop,
    pub contact: ContactForm,

    theme_mode: ThemeMode,
    ripple_until: Option<Instant>,

    paused: bool,
    resize_debounce: Debounce,
    needs_layout: bool,

    back_to_top_min: u16,
    anchor_scroll: Duration,
}

impl PageController {
    /// Wire the page in a fixed order: navigation, observers, components,
    /// supplementary effects.
    pub fn new(
        portfolio: &Portfolio,
        config: &AppConfig,
        theme_mode: ThemeMode,
        now: Instant,
    ) -> Self {
        let motion = &config.motion;
        let nav = NavController::new(motion.clone());

        let stagger = Duration::from_millis(motion.stagger_ms);
        let reveal_observer = VisibilityObserver::new(ObserverProfile {
            threshold: motion.observer_threshold,
            bottom_margin: motion.observer_margin,
            reset_margin: motion.reset_margin,
            stagger,
        });
        let rotator_observer = VisibilityObserver::new(ObserverProfile {
            threshold: motion.rotator_threshold,
            bottom_margin: motion.rotator_margin,
            reset_margin: motion.reset_margin,
            stagger,
        });

        // Counters with non-numeric targets are skipped at discovery
        let rotator_duration = Duration::from_millis(motion.rotator_ms);
        let mut rotators = HashMap::new();
        for (i, stat) in portfolio.stats.iter().enumerate() {
            if let Some(rotator) = Rotator::from_text(&stat.target, rotator_duration) {
                rotators.insert(format!("stat-{i}"), rotator);
            }
        }

        let slideshow = Slideshow::new(portfolio.projects.len(), config.slideshow.clone(), now);
        let typing = TypingEffect::new(portfolio.roles.clone(), now);
        let trace = TraceAnimation::new(4, 3);

        Self {
            nav,
            slideshow,
            typing,
            trace,
            rotators,
            rotator_observer,
            reveal_observer,
            revealed: HashSet::new(),
            back_to_top: BackToTop::new(),
            contact: ContactForm::default(),
            theme_mode,
            ripple_until: None,
            paused: false,
            resize_debounce: Debounce::new(Duration::from_millis(motion.resize_debounce_ms)),
            needs_layout: true,
            back_to_top_min: motion.back_to_top_min,
            anchor_scroll: Duration::from_millis(motion.anchor_scroll_ms),
        }
    }

    /// Install freshly computed geometry; observers are rebuilt because the
    /// viewport changed under them.
    pub fn set_layout(&mut self, layout: PageLayout) {
        self.nav
            .set_layout(layout.sections, layout.viewport, layout.total_height);
        self.reveal_observer.rebuild(layout.revealed);
        self.rotator_observer.rebuild(layout.rotators);
        self.needs_layout = false;
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Viewport geometry changed; re-layout after the quiet period
    pub fn notify_resize(&mut self, now: Instant) {
        self.resize_debounce.trigger(now);
    }

    /// Advance every animation and drain due timers. One call per frame.
    pub fn update(&mut self, now: Instant) {
        if self.resize_debounce.ready(now) {
            self.needs_layout = true;
        }
        if self.paused {
            return;
        }

        for effect in self.nav.update(now) {
            match effect {
                NavEffect::SectionSettled(section) => {
                    self.rotator_observer.trigger_section(&section, now);
                }
            }
        }

        let scroll = self.nav.scroll();
        let viewport = self.nav.viewport();

        for event in self.reveal_observer.sample(scroll, viewport, now) {
            if let ObserverEvent::Reset(key) = event {
                self.revealed.remove(&key);
                if key == "lineart" {
                    self.trace.stop();
                }
            }
        }
        for event in self.reveal_observer.update(now) {
            if let ObserverEvent::Trigger(key) = event {
                if key == "lineart" {
                    self.trace.start(now);
                }
                self.revealed.insert(key);
            }
        }

        for event in self.rotator_observer.sample(scroll, viewport, now) {
            if let ObserverEvent::Reset(key) = event {
                if let Some(rotator) = self.rotators.get_mut(&key) {
                    rotator.reset();
                }
            }
        }
        for event in self.rotator_observer.update(now) {
            if let ObserverEvent::Trigger(key) = event {
                if let Some(rotator) = self.rotators.get_mut(&key) {
                    // Ambient triggers respect the replay guard
                    if !rotator.has_animated() {
                        rotator.start(now);
                    }
                }
            }
        }

        for rotator in self.rotators.values_mut() {
            rotator.update(now);
        }

        self.slideshow.update(now);
        self.typing.update(now);
        self.back_to_top
            .sample(self.nav.scroll(), self.back_to_top_min, now);
    }

    // -- public API for other scripts/layers --------------------------------

    /// Jump the slideshow to a slide; autoplay resumes after the cooldown
    pub fn go_to_slide(&mut self, index: usize, now: Instant) {
        self.slideshow.select(index, now);
    }

    pub fn scroll_to_section(&mut self, id: &str, now: Instant) -> bool {
        self.nav.scroll_to_section(id, now)
    }

    pub fn current_active(&self) -> Option<&str> {
        self.nav.current_active()
    }

    /// Smooth-scroll to an arbitrary anchor row without changing the
    /// active section
    pub fn scroll_to_row(&mut self, row: u16, now: Instant) {
        self.nav.scroll_to_row(row, self.anchor_scroll, now);
    }

    /// Smooth-scroll to the top; used by the back-to-top control
    pub fn back_to_top_activate(&mut self, now: Instant) {
        self.nav.scroll_to_row(0, self.anchor_scroll, now);
    }

    pub fn back_to_top(&self) -> &BackToTop {
        &self.back_to_top
    }

    /// Scroll progress through the page in [0, 1] for the progress ring
    pub fn scroll_progress(&self) -> f64 {
        let max = self.nav.max_scroll();
        if max == 0 {
            0.0
        } else {
            (self.nav.scroll() as f64 / max as f64).clamp(0.0, 1.0)
        }
    }

    pub fn near_bottom(&self) -> bool {
        let max = self.nav.max_scroll();
        max > 0 && self.nav.scroll() + 2 >= max
    }

    // -- theme ---------------------------------------------------------------

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Flip the theme and start the toggle ripple; the caller persists the
    /// returned preference.
    pub fn toggle_theme(&mut self, now: Instant) -> ThemeMode {
        self.theme_mode = self.theme_mode.toggled();
        self.ripple_until = Some(now + RIPPLE);
        self.theme_mode
    }

    pub fn ripple_active(&self, now: Instant) -> bool {
        self.ripple_until.map(|until| now < until).unwrap_or(false)
    }

    // -- rotators ------------------------------------------------------------

    pub fn rotator_display(&self, key: &str) -> Option<String> {
        self.rotators.get(key).map(|r| r.display())
    }

    pub fn rotator_highlighted(&self, key: &str, now: Instant) -> bool {
        self.rotators
            .get(key)
            .map(|r| r.highlighted(now))
            .unwrap_or(false)
    }

    /// Explicitly replay one rotator
    pub fn replay_rotator(&mut self, key: &str, now: Instant) {
        if let Some(rotator) = self.rotators.get_mut(key) {
            rotator.reset();
            rotator.start(now);
        }
    }

    /// Card activation: replay the counters under the given page row
    pub fn replay_rotator_at(&mut self, row: u16, now: Instant) {
        for key in self.rotator_observer.keys_at(row) {
            self.replay_rotator(&key, now);
        }
    }

    /// Soft-reset and replay every rotator currently in view
    pub fn replay_visible_rotators(&mut self, now: Instant) {
        let visible = self
            .rotator_observer
            .visible_keys(self.nav.scroll(), self.nav.viewport());
        for key in visible {
            if let Some(rotator) = self.rotators.get_mut(&key) {
                rotator.soft_reset();
                rotator.start(now);
            }
        }
    }

    // -- reveals -------------------------------------------------------------

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    // -- global animation suspension ----------------------------------------

    /// Terminal lost focus: freeze all animation state
    pub fn pause_animations(&mut self) {
        self.paused = true;
    }

    pub fn resume_animations(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether any animation needs the fast frame tick
    pub fn needs_fast_tick(&self) -> bool {
        !self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        let sections = vec![
            Section { id: "home".into(), top: 0, height: 40, group: None },
            Section { id: "stats".into(), top: 40, height: 30, group: None },
            Section { id: "contact".into(), top: 70, height: 40, group: None },
        ];
        let rotators = vec![
            WatchedElement {
                key: "stat-0".into(),
                section: "stats".into(),
                sibling_index: 0,
                top: 45,
                height: 4,
            },
            WatchedElement {
                key: "stat-1".into(),
                section: "stats".into(),
                sibling_index: 1,
                top: 50,
                height: 4,
            },
        ];
        let revealed = vec![WatchedElement {
            key: "lineart".into(),
            section: "home".into(),
            sibling_index: 0,
            top: 20,
            height: 8,
        }];
        PageLayout {
            sections,
            revealed,
            rotators,
            total_height: 110,
            viewport: 30,
        }
    }

    fn controller(now: Instant) -> PageController {
        let portfolio = Portfolio::default();
        let config = AppConfig::default();
        let mut page = PageController::new(&portfolio, &config, ThemeMode::Light, now);
        page.set_layout(layout());
        page
    }

    fn run(page: &mut PageController, t0: Instant, from_ms: u64, to_ms: u64) {
        let mut t = from_ms;
        while t <= to_ms {
            page.update(t0 + Duration::from_millis(t));
            t += 16;
        }
    }

    #[test]
    fn test_navigation_settle_triggers_section_rotators() {
        let t0 = Instant::now();
        let mut page = controller(t0);

        assert!(page.scroll_to_section("stats", t0));
        // Travel (800ms) + settle (200ms) + stagger for the second rotator
        run(&mut page, t0, 0, 1400);

        assert!(page.rotators.get("stat-0").unwrap().has_animated());
        assert!(page.rotators.get("stat-1").unwrap().has_animated());
    }

    #[test]
    fn test_unknown_section_is_diagnosed_not_fatal() {
        let t0 = Instant::now();
        let mut page = controller(t0);
        let before = page.current_active().map(str::to_string);
        assert!(!page.scroll_to_section("blog", t0));
        assert_eq!(page.current_active().map(str::to_string), before);
    }

    #[test]
    fn test_lineart_starts_when_revealed() {
        let t0 = Instant::now();
        let mut page = controller(t0);

        // The figure at rows 20..28 enters once we scroll toward it
        page.nav.set_scroll(10);
        run(&mut page, t0, 0, 300);
        assert!(page.trace.is_running());
        assert!(page.is_revealed("lineart"));
    }

    #[test]
    fn test_theme_toggle_flips_and_ripples() {
        let t0 = Instant::now();
        let mut page = controller(t0);

        assert_eq!(page.toggle_theme(t0), ThemeMode::Dark);
        assert!(page.ripple_active(t0 + Duration::from_millis(500)));
        assert!(!page.ripple_active(t0 + Duration::from_millis(700)));
        assert_eq!(page.toggle_theme(t0), ThemeMode::Light);
    }

    #[test]
    fn test_back_to_top_appears_past_threshold() {
        let t0 = Instant::now();
        let mut page = controller(t0);

        page.nav.set_scroll(10);
        page.update(t0);
        assert!(!page.back_to_top().visible());

        page.nav.set_scroll(40);
        page.update(t0 + Duration::from_millis(20));
        assert!(page.back_to_top().visible());
        assert!(page.back_to_top().pulsing(t0 + Duration::from_millis(500)));

        page.back_to_top_activate(t0 + Duration::from_millis(30));
        run(&mut page, t0, 30, 1100);
        assert_eq!(page.nav.scroll(), 0);
    }

    #[test]
    fn test_pause_freezes_animations() {
        let t0 = Instant::now();
        let mut page = controller(t0);

        page.pause_animations();
        run(&mut page, t0, 0, 6000);
        // Autoplay would have advanced the slideshow by now
        assert_eq!(page.slideshow.current(), 0);

        page.resume_animations();
        assert!(page.needs_fast_tick());
    }

    #[test]
    fn test_resize_requests_layout_after_debounce() {
        let t0 = Instant::now();
        let mut page = controller(t0);
        assert!(!page.needs_layout());

        page.notify_resize(t0);
        page.update(t0 + Duration::from_millis(100));
        assert!(!page.needs_layout());

        page.update(t0 + Duration::from_millis(260));
        assert!(page.needs_layout());

        page.set_layout(layout());
        assert!(!page.needs_layout());
    }

    #[test]
    fn test_click_replays_only_the_hit_counter() {
        let t0 = Instant::now();
        let mut page = controller(t0);

        // Row 46 lies inside stat-0 (rows 45..49) but not stat-1 (50..54)
        page.replay_rotator_at(46, t0);
        assert!(page.rotators.get("stat-0").unwrap().is_animating());
        assert!(!page.rotators.get("stat-1").unwrap().has_animated());
    }

    #[test]
    fn test_contact_form_validation_and_submit() {
        let mut form = ContactForm::default();
        assert!(form.submit().is_err());

        form.name = "Ada".into();
        form.email = "ada@example.com".into();
        form.message = "Hello there".into();
        assert!(form.submit().is_ok());
        assert!(form.confirmation().is_some());
        assert!(form.name.is_empty());

        form.dismiss_confirmation();
        assert!(form.confirmation().is_none());
    }

    #[test]
    fn test_parallax_offset() {
        assert_eq!(parallax_offset(0, 0.5), 0);
        assert_eq!(parallax_offset(10, 0.5), -5);
        assert_eq!(parallax_offset(100, 0.2), -20);
    }
}
