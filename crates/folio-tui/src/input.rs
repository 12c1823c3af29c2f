use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    JumpToTop,
    JumpToBottom,
    BackToTop, // Smooth-scroll to the top via the back-to-top control
    PendingG,  // First 'g' press, waiting for second 'g'
    NextSection,
    PrevSection,
    GoToSection(usize), // Number row jump, 1-based
    HistoryBack,        // Return to the previously visited section
    NextSlide,
    PrevSlide,
    NextCategory,
    PrevCategory,
    ToggleTheme,
    ReplayCounters, // Re-run the stat counters currently in view
    EnterContact,
    ToggleHelp,
    ExitMode,
    InputChar(char),
    Backspace,
    NextField,
    Confirm,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.is_input_mode() {
        return handle_contact_mode(key);
    }

    if app.mode == Mode::Help {
        // Any key exits help
        return Action::ExitMode;
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::PageDown, KeyModifiers::NONE) => Action::ScrollHalfPageDown,
        (KeyCode::PageUp, KeyModifiers::NONE) => Action::ScrollHalfPageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,
        (KeyCode::Home, KeyModifiers::NONE) => Action::JumpToTop,
        (KeyCode::End, KeyModifiers::NONE) => Action::JumpToBottom,
        (KeyCode::Char('B'), KeyModifiers::SHIFT) => Action::BackToTop,

        // Section navigation
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextSection,
        (KeyCode::BackTab, KeyModifiers::SHIFT) => Action::PrevSection,
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::GoToSection(c as usize - '0' as usize)
        }
        (KeyCode::Char('b'), KeyModifiers::NONE) => Action::HistoryBack,

        // Slideshow
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextSlide,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PrevSlide,
        (KeyCode::Right, KeyModifiers::NONE) => Action::NextSlide,
        (KeyCode::Left, KeyModifiers::NONE) => Action::PrevSlide,

        // Skill category tabs
        (KeyCode::Char(']'), KeyModifiers::NONE) => Action::NextCategory,
        (KeyCode::Char('['), KeyModifiers::NONE) => Action::PrevCategory,

        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::ToggleTheme,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::ReplayCounters,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::EnterContact,
        (KeyCode::Char('?'), _) => Action::ToggleHelp,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::ExitMode,

        _ => Action::None,
    }
}

/// Keys while the contact form has focus
fn handle_contact_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::ExitMode,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Tab, _) => Action::NextField,
        (KeyCode::Enter, _) => Action::Confirm,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ContactField;
    use folio_core::config::AppConfig;
    use folio_core::content::Portfolio;
    use folio_core::theme::ThemeMode;
    use std::time::Instant;

    fn app() -> App {
        App::new(
            Portfolio::default(),
            AppConfig::default(),
            ThemeMode::Light,
            None,
            Instant::now(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_gg_requires_double_press() {
        let mut app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::JumpToTop);
    }

    #[test]
    fn test_number_row_maps_to_sections() {
        let app = app();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3')), &app),
            Action::GoToSection(3)
        );
    }

    #[test]
    fn test_contact_mode_captures_text() {
        let mut app = app();
        app.mode = Mode::Contact(ContactField::Name);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &app),
            Action::InputChar('q')
        );
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::ExitMode);
    }

    #[test]
    fn test_help_exits_on_any_key() {
        let mut app = app();
        app.mode = Mode::Help;
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &app), Action::ExitMode);
    }
}
