//! Navigation and scroll control.
//!
//! Single source of truth for the active section and header visibility.
//! Programmatic navigation animates the scroll position with quartic
//! ease-in-out and suppresses ambient section detection until a settle delay
//! after the animation lands; ambient scrolling drives header show/hide from
//! throttled position samples.

use std::time::{Duration, Instant};

use crate::anim::easing::EasingType;
use crate::anim::rate::Throttle;
use crate::anim::timing::{is_complete, lerp_u16, progress};
use crate::config::MotionConfig;

/// A page region with row geometry computed at layout time
#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    pub top: u16,
    pub height: u16,
    /// Group this section belongs to (activates a grouped parent control)
    pub group: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Desktop,
    Mobile,
}

/// A clickable navigation control bound to a section
#[derive(Debug, Clone)]
pub struct NavLink {
    pub section: String,
    pub kind: LinkKind,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVisibility {
    /// Near the top: no shadow, always shown
    Resting,
    /// Scrolled down: header slid away
    Hidden,
    /// Scrolling up (or navigating): shown with elevated shadow
    Elevated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Side effects surfaced by `update` for the orchestrator to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEffect {
    /// Programmatic navigation settled on this section; fire its pending
    /// rotators
    SectionSettled(String),
}

#[derive(Debug, Clone)]
struct ScrollAnimation {
    started: Instant,
    from: u16,
    to: u16,
    duration: Duration,
}

#[derive(Debug)]
pub struct NavController {
    sections: Vec<Section>,
    desktop_links: Vec<NavLink>,
    mobile_links: Vec<NavLink>,
    current_active: Option<String>,
    /// Grouped parent control state (e.g. a dropdown covering several
    /// sections); active while the active section belongs to the group
    active_group: Option<String>,

    scroll: u16,
    max_scroll: u16,
    viewport: u16,

    /// Programmatic scroll in progress; ambient detection yields to it
    programmatic: bool,
    last_nav_at: Option<Instant>,
    animation: Option<ScrollAnimation>,
    settle_at: Option<Instant>,
    settle_section: Option<String>,

    header: HeaderVisibility,
    last_sample: u16,
    direction: ScrollDirection,
    throttle: Throttle,

    /// Visited fragments; rapid navigations replace the top entry
    history: Vec<String>,

    motion: MotionConfig,
}

impl NavController {
    pub fn new(motion: MotionConfig) -> Self {
        let throttle = Throttle::new(Duration::from_millis(motion.throttle_ms));
        Self {
            sections: Vec::new(),
            desktop_links: Vec::new(),
            mobile_links: Vec::new(),
            current_active: None,
            active_group: None,
            scroll: 0,
            max_scroll: 0,
            viewport: 0,
            programmatic: false,
            last_nav_at: None,
            animation: None,
            settle_at: None,
            settle_section: None,
            header: HeaderVisibility::Resting,
            last_sample: 0,
            direction: ScrollDirection::Down,
            throttle,
            history: Vec::new(),
            motion,
        }
    }

    /// Install section geometry and build both nav link variants. Called at
    /// startup and again after every re-layout.
    pub fn set_layout(&mut self, sections: Vec<Section>, viewport: u16, total_height: u16) {
        let keep_links = self.desktop_links.len() == sections.len();
        if !keep_links {
            self.desktop_links = sections
                .iter()
                .map(|s| NavLink {
                    section: s.id.clone(),
                    kind: LinkKind::Desktop,
                    active: false,
                })
                .collect();
            self.mobile_links = sections
                .iter()
                .map(|s| NavLink {
                    section: s.id.clone(),
                    kind: LinkKind::Mobile,
                    active: false,
                })
                .collect();
        }
        self.sections = sections;
        self.viewport = viewport;
        self.max_scroll = total_height.saturating_sub(viewport);
        self.scroll = self.scroll.min(self.max_scroll);

        if let Some(active) = self.current_active.clone() {
            self.apply_link_state(&active);
        } else if let Some(first) = self.sections.first() {
            let id = first.id.clone();
            self.set_active(&id);
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn desktop_links(&self) -> &[NavLink] {
        &self.desktop_links
    }

    pub fn mobile_links(&self) -> &[NavLink] {
        &self.mobile_links
    }

    pub fn current_active(&self) -> Option<&str> {
        self.current_active.as_deref()
    }

    pub fn active_group(&self) -> Option<&str> {
        self.active_group.as_deref()
    }

    pub fn header(&self) -> HeaderVisibility {
        self.header
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn max_scroll(&self) -> u16 {
        self.max_scroll
    }

    pub fn viewport(&self) -> u16 {
        self.viewport
    }

    pub fn is_programmatic(&self) -> bool {
        self.programmatic
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some() || self.settle_at.is_some()
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Current location fragment, if any navigation has been recorded
    pub fn fragment(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Mark a section active. Idempotent; clears all link variants, marks
    /// the matching desktop and mobile links, and mirrors the grouped
    /// parent control.
    pub fn set_active(&mut self, id: &str) -> bool {
        if self.current_active.as_deref() == Some(id) {
            return false;
        }
        self.current_active = Some(id.to_string());
        self.apply_link_state(id);
        true
    }

    fn apply_link_state(&mut self, id: &str) {
        for link in self.desktop_links.iter_mut().chain(self.mobile_links.iter_mut()) {
            link.active = link.section == id;
        }
        self.active_group = self.section(id).and_then(|s| s.group.clone());
    }

    /// Navigate to a section: set it active optimistically, animate the
    /// scroll, and record the fragment. Unknown identifiers log a
    /// diagnostic and change nothing.
    pub fn scroll_to_section(&mut self, id: &str, now: Instant) -> bool {
        let target = match self.section(id) {
            Some(section) => {
                // The topmost section targets absolute 0 to avoid offset drift
                if self.sections.first().map(|s| s.id == section.id).unwrap_or(false) {
                    0
                } else {
                    section.top.saturating_sub(self.motion.nav_offset)
                }
            }
            None => {
                tracing::warn!(section = id, "navigation target not found");
                return false;
            }
        };

        self.set_active(id);
        self.record_fragment(id, now);
        self.programmatic = true;
        self.last_nav_at = Some(now);
        // Keep the header visible while the page travels
        self.header = HeaderVisibility::Elevated;
        self.settle_section = Some(id.to_string());
        self.settle_at = None;
        self.start_animation(target, Duration::from_millis(self.motion.nav_scroll_ms), now);
        true
    }

    /// Smooth-scroll to an absolute row without changing the active link
    /// (anchor targets, back-to-top).
    pub fn scroll_to_row(&mut self, row: u16, duration: Duration, now: Instant) {
        self.start_animation(row.min(self.max_scroll), duration, now);
    }

    fn start_animation(&mut self, target: u16, duration: Duration, now: Instant) {
        let target = target.min(self.max_scroll);
        if target == self.scroll {
            self.animation = None;
            // Still settle so rotator triggering and flag clearing run
            if self.programmatic {
                self.settle_at = Some(now + Duration::from_millis(self.motion.settle_ms));
            }
            return;
        }
        self.animation = Some(ScrollAnimation {
            started: now,
            from: self.scroll,
            to: target,
            duration,
        });
    }

    fn record_fragment(&mut self, id: &str, now: Instant) {
        let cooldown = Duration::from_millis(self.motion.nav_cooldown_ms);
        let rapid = self
            .last_nav_at
            .map(|at| now.saturating_duration_since(at) < cooldown)
            .unwrap_or(false);

        if rapid {
            // Rapid sequential navigations coalesce into one entry
            if let Some(last) = self.history.last_mut() {
                *last = id.to_string();
                return;
            }
        }
        if self.history.last().map(String::as_str) != Some(id) {
            self.history.push(id.to_string());
        }
    }

    /// Pop the fragment history and navigate to the previous entry
    pub fn back(&mut self, now: Instant) -> bool {
        if self.history.len() < 2 {
            return false;
        }
        self.history.pop();
        let id = match self.history.last() {
            Some(id) => id.clone(),
            None => return false,
        };
        // Re-navigate without recording a new entry
        let saved = self.history.clone();
        let ok = self.scroll_to_section(&id, now);
        self.history = saved;
        ok
    }

    /// Manual scroll input (wheel/keys). Cancels any programmatic travel;
    /// the user always wins.
    pub fn scroll_by(&mut self, delta: i32) {
        if self.animation.is_some() || self.programmatic {
            self.animation = None;
            self.settle_at = None;
            self.settle_section = None;
            self.programmatic = false;
        }
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll as i32) as u16;
        self.scroll = next;
    }

    /// Set the scroll position directly (tests, restore)
    pub fn set_scroll(&mut self, scroll: u16) {
        self.scroll = scroll.min(self.max_scroll);
    }

    /// Advance the scroll animation and settle timer, then sample ambient
    /// scroll state. Returns effects for the orchestrator.
    pub fn update(&mut self, now: Instant) -> Vec<NavEffect> {
        let mut effects = Vec::new();

        if let Some(ref anim) = self.animation {
            if is_complete(anim.started, now, anim.duration) {
                self.scroll = anim.to;
                self.animation = None;
                if self.programmatic {
                    self.settle_at = Some(now + Duration::from_millis(self.motion.settle_ms));
                }
            } else {
                let t = progress(anim.started, now, anim.duration);
                let eased = EasingType::QuartInOut.apply(t);
                self.scroll = lerp_u16(anim.from, anim.to, eased);
            }
        }

        if let Some(settle) = self.settle_at {
            if now >= settle {
                self.settle_at = None;
                self.programmatic = false;
                self.hide_header_after_navigation();
                if let Some(section) = self.settle_section.take() {
                    effects.push(NavEffect::SectionSettled(section));
                }
            }
        }

        if self.throttle.allow(now) {
            self.sample_scroll();
        }

        effects
    }

    /// Header hides right after navigation unless the page is near the top
    fn hide_header_after_navigation(&mut self) {
        if self.scroll > self.motion.header_hide_min {
            self.header = HeaderVisibility::Hidden;
        }
    }

    /// One throttled ambient sample: noise-filter the delta, derive the
    /// direction, update the header and (outside programmatic travel) the
    /// active section.
    fn sample_scroll(&mut self) {
        let current = self.scroll;
        let delta = current.abs_diff(self.last_sample);
        if delta < self.motion.scroll_delta_min {
            return;
        }

        self.direction = if current > self.last_sample {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };

        if current > self.motion.header_hide_min {
            match self.direction {
                ScrollDirection::Down if !self.programmatic => {
                    self.header = HeaderVisibility::Hidden;
                }
                ScrollDirection::Up => {
                    self.header = HeaderVisibility::Elevated;
                }
                _ => {}
            }
        } else {
            self.header = HeaderVisibility::Resting;
        }

        if !self.programmatic {
            if let Some(id) = self.section_at(current) {
                self.set_active(&id);
            }
        }

        self.last_sample = current;
    }

    /// Section under the reading position for a given scroll offset
    fn section_at(&self, scroll: u16) -> Option<String> {
        let probe = scroll + self.motion.nav_offset + self.viewport / 3;
        self.sections
            .iter()
            .rev()
            .find(|s| s.top <= probe)
            .or_else(|| self.sections.first())
            .map(|s| s.id.clone())
    }
}
