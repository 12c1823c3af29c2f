//! Typing-text hero effect.
//!
//! Types each role character by character, holds the full word, deletes it
//! and moves to the next role, wrapping forever. With no roles the effect is
//! inert.

use std::time::{Duration, Instant};

const TYPE_DELAY: Duration = Duration::from_millis(100);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const HOLD_DELAY: Duration = Duration::from_millis(2000);
const REST_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
    Resting,
}

#[derive(Debug, Clone)]
pub struct TypingEffect {
    roles: Vec<String>,
    role: usize,
    shown: usize,
    phase: Phase,
    next_at: Option<Instant>,
}

impl TypingEffect {
    pub fn new(roles: Vec<String>, now: Instant) -> Self {
        let next_at = if roles.is_empty() {
            None
        } else {
            Some(now + TYPE_DELAY)
        };
        Self {
            roles,
            role: 0,
            shown: 0,
            phase: Phase::Typing,
            next_at,
        }
    }

    /// Currently visible prefix of the active role
    pub fn text(&self) -> String {
        self.roles
            .get(self.role)
            .map(|role| role.chars().take(self.shown).collect())
            .unwrap_or_default()
    }

    /// Advance past any due steps up to `now`
    pub fn update(&mut self, now: Instant) {
        while let Some(due) = self.next_at {
            if now < due {
                break;
            }
            self.step(due);
        }
    }

    fn step(&mut self, now: Instant) {
        let role_len = match self.roles.get(self.role) {
            Some(role) => role.chars().count(),
            None => {
                self.next_at = None;
                return;
            }
        };

        match self.phase {
            Phase::Typing => {
                self.shown += 1;
                if self.shown >= role_len {
                    self.shown = role_len;
                    self.phase = Phase::Holding;
                    self.next_at = Some(now + HOLD_DELAY);
                } else {
                    self.next_at = Some(now + TYPE_DELAY);
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.next_at = Some(now + DELETE_DELAY);
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.role = (self.role + 1) % self.roles.len();
                    self.phase = Phase::Resting;
                    self.next_at = Some(now + REST_DELAY);
                } else {
                    self.next_at = Some(now + DELETE_DELAY);
                }
            }
            Phase::Resting => {
                self.phase = Phase::Typing;
                self.next_at = Some(now + TYPE_DELAY);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roles_inert() {
        let t0 = Instant::now();
        let mut typing = TypingEffect::new(vec![], t0);
        typing.update(t0 + Duration::from_secs(60));
        assert_eq!(typing.text(), "");
    }

    #[test]
    fn test_types_full_word() {
        let t0 = Instant::now();
        let mut typing = TypingEffect::new(vec!["Dev".to_string()], t0);

        // 3 chars at 100ms each
        typing.update(t0 + Duration::from_millis(320));
        assert_eq!(typing.text(), "Dev");
    }

    #[test]
    fn test_deletes_and_wraps_to_next_role() {
        let t0 = Instant::now();
        let mut typing = TypingEffect::new(vec!["Ab".to_string(), "Cd".to_string()], t0);

        // Type "Ab" (200ms), hold (2000ms), delete 2 chars (50ms each),
        // rest (500ms), then start typing "Cd"
        typing.update(t0 + Duration::from_millis(200 + 2000 + 50 + 100 + 500 + 100));
        assert!(typing.text().starts_with('C'), "got {:?}", typing.text());
    }

    #[test]
    fn test_wraps_modulo_role_count() {
        let t0 = Instant::now();
        let mut typing = TypingEffect::new(vec!["A".to_string()], t0);
        // Several full cycles on a single role keep cycling back to it
        typing.update(t0 + Duration::from_secs(30));
        typing.update(t0 + Duration::from_secs(31));
        assert!(typing.text().len() <= 1);
    }
}
