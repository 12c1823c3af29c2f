//! Viewport visibility observation.
//!
//! Tracks row-range elements against the scrolled viewport and decides when
//! their effects fire. Entering view schedules a trigger after a stagger
//! delay proportional to the element's position among siblings in the same
//! section; leaving view beyond a reset margin (hysteresis, not a plain
//! boolean leave) rearms the element for replay.

use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Threshold/margin profile. General reveals and rotator triggers use
/// different profiles.
#[derive(Debug, Clone)]
pub struct ObserverProfile {
    /// Visible-ratio threshold in [0, 1] required to count as entered
    pub threshold: f64,
    /// Rows trimmed from the viewport bottom before the ratio is computed
    pub bottom_margin: u16,
    /// Rows past either viewport edge before the effect resets
    pub reset_margin: u16,
    /// Per-sibling trigger delay
    pub stagger: Duration,
}

/// A row range watched by the observer
#[derive(Debug, Clone)]
pub struct WatchedElement {
    pub key: String,
    pub section: String,
    /// Index among watched siblings of the same section; drives the stagger
    pub sibling_index: usize,
    pub top: u16,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserverEvent {
    /// The element's effect should fire (guard flags are the caller's)
    Trigger(String),
    /// The element left far enough to rearm for replay
    Reset(String),
}

#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    profile: ObserverProfile,
    elements: Vec<WatchedElement>,
    triggered: HashSet<String>,
    pending: Vec<(String, Instant)>,
}

impl VisibilityObserver {
    pub fn new(profile: ObserverProfile) -> Self {
        Self {
            profile,
            elements: Vec::new(),
            triggered: HashSet::new(),
            pending: Vec::new(),
        }
    }

    /// Replace the watched set. Used at startup and after a resize;
    /// already-fired elements stay fired until a reset rearms them.
    pub fn rebuild(&mut self, elements: Vec<WatchedElement>) {
        self.pending.clear();
        let keys: HashSet<&String> = elements.iter().map(|e| &e.key).collect();
        self.triggered.retain(|k| keys.contains(k));
        self.elements = elements;
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Evaluate visibility at the given scroll position. Resets are emitted
    /// immediately; triggers are scheduled with their stagger delay and
    /// surface later through `update`.
    pub fn sample(&mut self, scroll: u16, viewport: u16, now: Instant) -> Vec<ObserverEvent> {
        let mut events = Vec::new();
        let view_top = scroll;
        let view_bottom = scroll + viewport.saturating_sub(self.profile.bottom_margin);

        for element in &self.elements {
            let top = element.top;
            let bottom = element.top + element.height.max(1);

            let overlap = bottom.min(view_bottom).saturating_sub(top.max(view_top));
            let ratio = overlap as f64 / element.height.max(1) as f64;

            if ratio >= self.profile.threshold {
                let scheduled = self.pending.iter().any(|(k, _)| k == &element.key);
                if !self.triggered.contains(&element.key) && !scheduled {
                    let delay = self.profile.stagger * element.sibling_index as u32;
                    self.pending.push((element.key.clone(), now + delay));
                }
            } else {
                let gone_above =
                    bottom < view_top.saturating_sub(self.profile.reset_margin);
                let gone_below = top > scroll + viewport + self.profile.reset_margin;
                if gone_above || gone_below {
                    self.pending.retain(|(k, _)| k != &element.key);
                    if self.triggered.remove(&element.key) {
                        events.push(ObserverEvent::Reset(element.key.clone()));
                    }
                }
            }
        }

        events
    }

    /// Drain trigger timers that have come due
    pub fn update(&mut self, now: Instant) -> Vec<ObserverEvent> {
        let mut events = Vec::new();
        let mut remaining = Vec::with_capacity(self.pending.len());

        for (key, due) in self.pending.drain(..) {
            if now >= due {
                self.triggered.insert(key.clone());
                events.push(ObserverEvent::Trigger(key));
            } else {
                remaining.push((key, due));
            }
        }

        self.pending = remaining;
        events
    }

    /// Keys of elements overlapping the viewport at all (no threshold)
    pub fn visible_keys(&self, scroll: u16, viewport: u16) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.top < scroll + viewport && e.top + e.height.max(1) > scroll)
            .map(|e| e.key.clone())
            .collect()
    }

    /// Keys of elements whose row range contains `row`
    pub fn keys_at(&self, row: u16) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.top <= row && row < e.top + e.height.max(1))
            .map(|e| e.key.clone())
            .collect()
    }

    /// Immediately fire every not-yet-triggered element of a section, with
    /// stagger. Used after programmatic navigation lands on a section.
    pub fn trigger_section(&mut self, section: &str, now: Instant) {
        let mut keys: Vec<(String, usize)> = self
            .elements
            .iter()
            .filter(|e| e.section == section && !self.triggered.contains(&e.key))
            .map(|e| (e.key.clone(), e.sibling_index))
            .collect();
        keys.sort_by_key(|(_, idx)| *idx);

        for (key, idx) in keys {
            if !self.pending.iter().any(|(k, _)| k == &key) {
                self.pending.push((key, now + self.profile.stagger * idx as u32));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ObserverProfile {
        ObserverProfile {
            threshold: 0.5,
            bottom_margin: 6,
            reset_margin: 12,
            stagger: Duration::from_millis(150),
        }
    }

    fn element(key: &str, section: &str, idx: usize, top: u16, height: u16) -> WatchedElement {
        WatchedElement {
            key: key.to_string(),
            section: section.to_string(),
            sibling_index: idx,
            top,
            height,
        }
    }

    #[test]
    fn test_trigger_fires_after_stagger() {
        let mut observer = VisibilityObserver::new(profile());
        observer.rebuild(vec![
            element("a", "stats", 0, 10, 4),
            element("b", "stats", 1, 14, 4),
        ]);

        let t0 = Instant::now();
        let events = observer.sample(8, 30, t0);
        assert!(events.is_empty());

        // First sibling is due immediately, second after one stagger step
        let fired = observer.update(t0);
        assert_eq!(fired, vec![ObserverEvent::Trigger("a".to_string())]);

        let fired = observer.update(t0 + Duration::from_millis(150));
        assert_eq!(fired, vec![ObserverEvent::Trigger("b".to_string())]);
    }

    #[test]
    fn test_no_retrigger_without_reset() {
        let mut observer = VisibilityObserver::new(profile());
        observer.rebuild(vec![element("a", "stats", 0, 10, 4)]);

        let t0 = Instant::now();
        observer.sample(8, 30, t0);
        assert_eq!(observer.update(t0).len(), 1);

        // Leave view slightly (within the reset margin), then return
        observer.sample(20, 30, t0 + Duration::from_millis(10));
        observer.sample(8, 30, t0 + Duration::from_millis(20));
        assert!(observer.update(t0 + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_reset_beyond_margin_rearms() {
        let mut observer = VisibilityObserver::new(profile());
        observer.rebuild(vec![element("a", "stats", 0, 40, 4)]);

        let t0 = Instant::now();
        observer.sample(38, 30, t0);
        assert_eq!(observer.update(t0).len(), 1);

        // Scroll far past the element: bottom(44) < scroll - reset_margin
        let events = observer.sample(60, 30, t0 + Duration::from_millis(10));
        assert_eq!(events, vec![ObserverEvent::Reset("a".to_string())]);

        // Coming back retriggers
        observer.sample(38, 30, t0 + Duration::from_millis(20));
        assert_eq!(observer.update(t0 + Duration::from_secs(1)).len(), 1);
    }

    #[test]
    fn test_partial_visibility_below_threshold() {
        let mut observer = VisibilityObserver::new(profile());
        observer.rebuild(vec![element("a", "stats", 0, 28, 10)]);

        // Element mostly below the fold: only 2 of 10 rows visible
        let t0 = Instant::now();
        observer.sample(0, 36, t0);
        assert!(observer.update(t0 + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_keys_at_row() {
        let mut observer = VisibilityObserver::new(profile());
        observer.rebuild(vec![
            element("a", "stats", 0, 10, 4),
            element("b", "stats", 1, 14, 4),
        ]);
        assert_eq!(observer.keys_at(11), vec!["a".to_string()]);
        assert_eq!(observer.keys_at(14), vec!["b".to_string()]);
        assert!(observer.keys_at(30).is_empty());
    }

    #[test]
    fn test_trigger_section_skips_already_fired() {
        let mut observer = VisibilityObserver::new(profile());
        observer.rebuild(vec![
            element("a", "stats", 0, 10, 4),
            element("b", "stats", 1, 14, 4),
        ]);

        let t0 = Instant::now();
        observer.sample(8, 30, t0);
        observer.update(t0 + Duration::from_secs(1)); // both fired

        observer.trigger_section("stats", t0 + Duration::from_secs(2));
        assert!(observer.update(t0 + Duration::from_secs(5)).is_empty());
    }
}
