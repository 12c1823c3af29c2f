use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use folio_core::theme::load_preference;
use folio_core::AppConfig;
use folio_tui::{
    app::{App, ContactField, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    widgets,
};

pub fn run(config: AppConfig, content_path: Option<PathBuf>) -> Result<()> {
    let portfolio = super::load_portfolio(content_path)?;

    let theme_path = AppConfig::theme_path();
    let theme_mode = load_preference(&theme_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle("Folio")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(
        portfolio,
        config.clone(),
        theme_mode,
        Some(theme_path),
        Instant::now(),
    );

    let event_handler = EventHandler::new(config.ui.tick_rate_ms, config.ui.animation_fps as u64);

    // Checked at the END of each iteration to pick the NEXT poll rate
    let mut needs_fast_update = true;

    // Main loop
    loop {
        let now = Instant::now();
        app.page.update(now);

        terminal.draw(|frame| widgets::render(frame, &mut app, now))?;

        if let Some(event) = event_handler.next(needs_fast_update)? {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action, now);
                }
                AppEvent::Mouse(mouse) => handle_mouse(&mut app, mouse, now),
                AppEvent::Resize(_, _) => app.page.notify_resize(now),
                AppEvent::FocusGained => app.page.resume_animations(),
                AppEvent::FocusLost => app.page.pause_animations(),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.page.needs_fast_tick();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_action(app: &mut App, action: Action, now: Instant) {
    // Clear pending key on any action except PendingG
    if action != Action::PendingG && action != Action::JumpToTop {
        app.pending_key = None;
    }
    if !matches!(action, Action::None) {
        app.status_message = None;
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollDown => app.page.nav.scroll_by(2),
        Action::ScrollUp => app.page.nav.scroll_by(-2),
        Action::ScrollHalfPageDown => {
            app.page.nav.scroll_by(app.page.nav.viewport() as i32 / 2);
        }
        Action::ScrollHalfPageUp => {
            app.page.nav.scroll_by(-(app.page.nav.viewport() as i32 / 2));
        }
        Action::JumpToTop | Action::BackToTop => {
            app.pending_key = None;
            app.page.back_to_top_activate(now);
        }
        Action::JumpToBottom => {
            let bottom = app.page.nav.max_scroll();
            app.page.scroll_to_row(bottom, now);
        }
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::NextSection => app.next_section(now),
        Action::PrevSection => app.prev_section(now),
        Action::GoToSection(n) => app.go_to_section(n, now),
        Action::HistoryBack => {
            if !app.page.nav.back(now) {
                app.status_message = Some("no earlier section".to_string());
            }
        }
        Action::NextSlide => app.page.slideshow.manual_next(now),
        Action::PrevSlide => app.page.slideshow.manual_prev(now),
        Action::NextCategory => app.next_category(),
        Action::PrevCategory => app.prev_category(),
        Action::ToggleTheme => app.toggle_theme(now),
        Action::ReplayCounters => {
            app.page.replay_visible_rotators(now);
            app.status_message = Some("counters replayed".to_string());
        }
        Action::EnterContact => {
            app.page.contact.dismiss_confirmation();
            app.page.scroll_to_section("contact", now);
            app.mode = Mode::Contact(ContactField::Name);
        }
        Action::ToggleHelp => {
            app.mode = if app.mode == Mode::Help {
                Mode::Normal
            } else {
                Mode::Help
            };
        }
        Action::ExitMode => {
            app.mode = Mode::Normal;
            app.page.contact.dismiss_confirmation();
        }
        Action::InputChar(c) => app.contact_input(c),
        Action::Backspace => app.contact_backspace(),
        Action::NextField => {
            if let Mode::Contact(field) = app.mode {
                app.mode = Mode::Contact(field.next());
            }
        }
        Action::Confirm => app.contact_advance(),
        Action::None => {}
    }
}

/// Mouse input: wheel scrolling everywhere, hover and horizontal drags over
/// the slideshow.
fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    let over_slideshow = |app: &App, row: u16| {
        let absolute = app.page.nav.scroll() + row;
        app.slideshow_rows
            .map(|(top, bottom)| absolute >= top && absolute <= bottom)
            .unwrap_or(false)
    };

    match mouse.kind {
        MouseEventKind::ScrollDown => app.page.nav.scroll_by(3),
        MouseEventKind::ScrollUp => app.page.nav.scroll_by(-3),
        MouseEventKind::Down(MouseButton::Left) => {
            let absolute = app.page.nav.scroll() + mouse.row;
            if app.slideshow_rows.map(|(_, bottom)| absolute == bottom).unwrap_or(false) {
                // The bottom row of the slideshow holds the indicators
                if let Some(i) = indicator_at(mouse.column, app.page.slideshow.len()) {
                    app.page.go_to_slide(i, now);
                }
            } else if over_slideshow(app, mouse.row) {
                app.page.slideshow.touch_start(mouse.column);
            } else {
                // Clicking a stat card replays its counter
                app.page.replay_rotator_at(absolute, now);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.page.slideshow.touch_end(mouse.column, now);
        }
        MouseEventKind::Moved => {
            let over = over_slideshow(app, mouse.row);
            if over && !app.slideshow_hover {
                app.page.slideshow.hover_start();
            } else if !over && app.slideshow_hover {
                app.page.slideshow.hover_end(now);
            }
            app.slideshow_hover = over;
        }
        _ => {}
    }
}

/// Map a column on the indicator row to a slide index. The row reads
/// "    ◀ h ● ○ ○  l ▶" with one dot per slide starting at column 8.
fn indicator_at(column: u16, len: usize) -> Option<usize> {
    const FIRST_DOT: u16 = 8;
    if len == 0 || column < FIRST_DOT {
        return None;
    }
    let index = ((column - FIRST_DOT) / 2) as usize;
    (index < len).then_some(index)
}
