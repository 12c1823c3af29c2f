use std::path::PathBuf;
use std::time::Instant;

use folio_core::config::AppConfig;
use folio_core::content::Portfolio;
use folio_core::page::PageController;
use folio_core::theme::{save_preference, ThemeMode};

use crate::theme::{load_palette, Palette};

/// Contact form field under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Editing the contact form
    Contact(ContactField),
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Portfolio content rendered by the page
    pub portfolio: Portfolio,
    /// Application configuration
    pub config: AppConfig,
    /// Page orchestrator: navigation, counters, slideshow, observers
    pub page: PageController,
    /// Active color palette, swapped on theme toggle
    pub palette: Palette,
    /// Current application mode
    pub mode: Mode,
    /// Selected skill category tab index
    pub selected_category: usize,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Absolute row range of the slideshow, for drag gestures
    pub slideshow_rows: Option<(u16, u16)>,
    /// Whether the pointer currently rests over the slideshow
    pub slideshow_hover: bool,
    /// Where the theme preference is persisted; None skips persistence
    pub theme_path: Option<PathBuf>,
}

impl App {
    pub fn new(
        portfolio: Portfolio,
        config: AppConfig,
        theme_mode: ThemeMode,
        theme_path: Option<PathBuf>,
        now: Instant,
    ) -> Self {
        let page = PageController::new(&portfolio, &config, theme_mode, now);
        let palette = load_palette(theme_mode);
        Self {
            portfolio,
            config,
            page,
            palette,
            mode: Mode::Normal,
            selected_category: 0,
            should_quit: false,
            status_message: None,
            pending_key: None,
            slideshow_rows: None,
            slideshow_hover: false,
            theme_path,
        }
    }

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, Mode::Contact(_))
    }

    /// Flip the theme, swap the palette and persist the preference
    pub fn toggle_theme(&mut self, now: Instant) {
        let mode = self.page.toggle_theme(now);
        self.palette = load_palette(mode);
        if let Some(ref path) = self.theme_path {
            if let Err(e) = save_preference(path, mode) {
                tracing::warn!(error = %e, "failed to persist theme preference");
            }
        }
        self.status_message = Some(format!("{} theme", mode.as_str()));
    }

    /// Navigate to the section after the active one, wrapping
    pub fn next_section(&mut self, now: Instant) {
        if let Some(id) = self.neighbor_section(1) {
            self.page.scroll_to_section(&id, now);
        }
    }

    /// Navigate to the section before the active one, wrapping
    pub fn prev_section(&mut self, now: Instant) {
        if let Some(id) = self.neighbor_section(-1) {
            self.page.scroll_to_section(&id, now);
        }
    }

    fn neighbor_section(&self, step: i64) -> Option<String> {
        let sections = self.page.nav.sections();
        if sections.is_empty() {
            return None;
        }
        let current = self
            .page
            .current_active()
            .and_then(|id| sections.iter().position(|s| s.id == id))
            .unwrap_or(0) as i64;
        let len = sections.len() as i64;
        let next = (((current + step) % len) + len) % len;
        Some(sections[next as usize].id.clone())
    }

    /// Navigate to the nth section (1-based, from the number row)
    pub fn go_to_section(&mut self, n: usize, now: Instant) {
        let id = self
            .page
            .nav
            .sections()
            .get(n.saturating_sub(1))
            .map(|s| s.id.clone());
        match id {
            Some(id) => {
                self.page.scroll_to_section(&id, now);
            }
            None => {
                self.status_message = Some(format!("no section {n}"));
            }
        }
    }

    pub fn next_category(&mut self) {
        let len = self.portfolio.skill_categories.len();
        if len > 0 {
            self.selected_category = (self.selected_category + 1) % len;
        }
    }

    pub fn prev_category(&mut self) {
        let len = self.portfolio.skill_categories.len();
        if len > 0 {
            self.selected_category = (self.selected_category + len - 1) % len;
        }
    }

    pub fn current_category(&self) -> &str {
        self.portfolio
            .skill_categories
            .get(self.selected_category)
            .map(String::as_str)
            .unwrap_or("All")
    }

    /// Type into the focused contact field
    pub fn contact_input(&mut self, c: char) {
        if let Mode::Contact(field) = self.mode {
            let target = self.contact_field_mut(field);
            target.push(c);
        }
    }

    pub fn contact_backspace(&mut self) {
        if let Mode::Contact(field) = self.mode {
            let target = self.contact_field_mut(field);
            target.pop();
        }
    }

    fn contact_field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.page.contact.name,
            ContactField::Email => &mut self.page.contact.email,
            ContactField::Message => &mut self.page.contact.message,
        }
    }

    /// Enter in the contact form: advance fields, submit from the last one
    pub fn contact_advance(&mut self) {
        if let Mode::Contact(field) = self.mode {
            if field == ContactField::Message {
                match self.page.contact.submit() {
                    Ok(()) => {
                        self.mode = Mode::Normal;
                        self.status_message = Some("message sent".to_string());
                    }
                    Err(e) => self.status_message = Some(e),
                }
            } else {
                self.mode = Mode::Contact(field.next());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(
            Portfolio::default(),
            AppConfig::default(),
            ThemeMode::Light,
            None,
            Instant::now(),
        )
    }

    #[test]
    fn test_category_cycle_wraps() {
        let mut app = app();
        let len = app.portfolio.skill_categories.len();
        assert_eq!(app.current_category(), "All");
        for _ in 0..len {
            app.next_category();
        }
        assert_eq!(app.selected_category, 0);
        app.prev_category();
        assert_eq!(app.selected_category, len - 1);
    }

    #[test]
    fn test_contact_field_cycle_and_submit() {
        let mut app = app();
        app.mode = Mode::Contact(ContactField::Name);
        for c in "Ada".chars() {
            app.contact_input(c);
        }
        app.contact_advance();
        assert_eq!(app.mode, Mode::Contact(ContactField::Email));
        for c in "ada@example.com".chars() {
            app.contact_input(c);
        }
        app.contact_advance();
        for c in "Hi".chars() {
            app.contact_input(c);
        }
        app.contact_advance();
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.page.contact.confirmation().is_some());
    }

    #[test]
    fn test_submit_with_empty_fields_stays_in_form() {
        let mut app = app();
        app.mode = Mode::Contact(ContactField::Message);
        app.contact_advance();
        assert_eq!(app.mode, Mode::Contact(ContactField::Message));
        assert!(app.status_message.is_some());
    }
}
