//! Page composition and top-level rendering.
//!
//! The portfolio renders as one tall column of lines. Each section widget
//! appends its lines to a `PageComposer`, which records section and watched
//! element geometry as it goes; the finished layout feeds the controller's
//! observers while the lines are drawn through a scrolled window.

use std::time::Instant;

use folio_core::nav::{HeaderVisibility, Section};
use folio_core::observe::WatchedElement;
use folio_core::page::{parallax_offset, PageLayout};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};
use crate::widgets::{contact, experience, hero, skills, slideshow, stats};
use crate::widgets::{HeaderWidget, HelpWidget, StatusBarWidget};

/// Rows reserved for the header overlay
pub const HEADER_ROWS: u16 = 2;

pub struct PageComposer {
    pub width: u16,
    lines: Vec<Line<'static>>,
    sections: Vec<Section>,
    revealed: Vec<WatchedElement>,
    rotators: Vec<WatchedElement>,
    section_start: Option<(String, u16, Option<String>)>,
    slideshow_rows: Option<(u16, u16)>,
}

impl PageComposer {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            lines: Vec::new(),
            sections: Vec::new(),
            revealed: Vec::new(),
            rotators: Vec::new(),
            section_start: None,
            slideshow_rows: None,
        }
    }

    /// Current absolute row (the next line pushed lands here)
    pub fn row(&self) -> u16 {
        self.lines.len() as u16
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn begin_section(&mut self, id: &str, group: Option<String>) {
        self.section_start = Some((id.to_string(), self.row(), group));
    }

    /// Close the open section, recording its geometry and a reveal element
    /// covering the whole section.
    pub fn end_section(&mut self) {
        if let Some((id, top, group)) = self.section_start.take() {
            let height = self.row().saturating_sub(top);
            self.revealed.push(WatchedElement {
                key: format!("section-{id}"),
                section: id.clone(),
                sibling_index: 0,
                top,
                height,
            });
            self.sections.push(Section { id, top, height, group });
        }
    }

    pub fn watch_reveal(&mut self, key: &str, section: &str, sibling_index: usize, top: u16, height: u16) {
        self.revealed.push(WatchedElement {
            key: key.to_string(),
            section: section.to_string(),
            sibling_index,
            top,
            height,
        });
    }

    pub fn watch_rotator(&mut self, key: &str, section: &str, sibling_index: usize, top: u16, height: u16) {
        self.rotators.push(WatchedElement {
            key: key.to_string(),
            section: section.to_string(),
            sibling_index,
            top,
            height,
        });
    }

    pub fn mark_slideshow(&mut self, top: u16, bottom: u16) {
        self.slideshow_rows = Some((top, bottom));
    }

    pub fn finish(self, viewport: u16) -> ComposedPage {
        let total_height = self.lines.len() as u16;
        ComposedPage {
            lines: self.lines,
            slideshow_rows: self.slideshow_rows,
            layout: PageLayout {
                sections: self.sections,
                revealed: self.revealed,
                rotators: self.rotators,
                total_height,
                viewport,
            },
        }
    }
}

pub struct ComposedPage {
    pub lines: Vec<Line<'static>>,
    pub layout: PageLayout,
    /// Absolute row range of the slideshow, for drag gestures
    pub slideshow_rows: Option<(u16, u16)>,
}

/// Build the full page column for the given width
pub fn compose_page(app: &App, width: u16, viewport: u16, now: Instant) -> ComposedPage {
    let mut composer = PageComposer::new(width);

    hero::build(&mut composer, app, now);
    stats::build(&mut composer, app, now);
    skills::build(&mut composer, app);
    slideshow::build(&mut composer, app, now);
    experience::build(&mut composer, app);
    contact::build(&mut composer, app);

    // Footer
    composer.blank();
    composer.push(Line::styled(
        format!("  © 2026 {} · built for the terminal", app.portfolio.name),
        Style::default().fg(app.palette.faint),
    ));
    composer.blank();

    composer.finish(viewport)
}

/// Draw one frame: the scrolled page window, the header overlay, the
/// back-to-top hint, the status bar, and any modal overlay.
pub fn render(frame: &mut Frame, app: &mut App, now: Instant) {
    let area = frame.area();
    if area.height <= 1 {
        return;
    }
    let content = Rect::new(area.x, area.y, area.width, area.height - 1);
    let status = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    frame.render_widget(
        ratatui::widgets::Block::default().style(Style::default().bg(app.palette.bg)),
        area,
    );

    let composed = compose_page(app, content.width, content.height, now);
    app.slideshow_rows = composed.slideshow_rows;
    if app.page.needs_layout() {
        app.page.set_layout(composed.layout.clone());
    }

    let scroll = app.page.nav.scroll() as usize;
    let window: Vec<Line> = composed
        .lines
        .iter()
        .skip(scroll)
        .take(content.height as usize)
        .cloned()
        .collect();
    frame.render_widget(
        Paragraph::new(window).style(Style::default().bg(app.palette.bg).fg(app.palette.text)),
        content,
    );

    // Decorative accents near the right edge drift slower than the page
    if content.width > 6 {
        let faint = Style::default().fg(app.palette.faint);
        for (doc_row, speed) in [(6u16, 0.3), (34, 0.5), (78, 0.2)] {
            let offset = parallax_offset(app.page.nav.scroll(), speed);
            let screen = doc_row as i32 - app.page.nav.scroll() as i32 - offset;
            if screen >= HEADER_ROWS as i32 && screen < content.height as i32 - 1 {
                let cell = Rect::new(content.x + content.width - 3, content.y + screen as u16, 1, 1);
                frame.render_widget(Paragraph::new("✧").style(faint), cell);
            }
        }
    }

    if app.page.nav.header() != HeaderVisibility::Hidden && content.height > HEADER_ROWS {
        let header_area = Rect::new(content.x, content.y, content.width, HEADER_ROWS);
        HeaderWidget::render(frame, header_area, app, now);
    }

    if app.page.back_to_top().visible() && content.width > 10 {
        let hint_area = Rect::new(
            content.x + content.width - 9,
            content.y + content.height - 1,
            9,
            1,
        );
        let style = if app.page.back_to_top().pulsing(now) {
            Style::default()
                .fg(app.palette.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.palette.accent)
        };
        // The arrow doubles up once the reader has hit the bottom
        let hint = if app.page.near_bottom() {
            " ⇈ top B "
        } else {
            " ↑ top B "
        };
        frame.render_widget(Paragraph::new(hint).style(style), hint_area);
    }

    StatusBarWidget::render(frame, status, app);

    if app.mode == Mode::Help {
        HelpWidget::render(frame, area, app);
    }
}

/// Word-wrap to display columns, preserving explicit line breaks
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut out = Vec::new();
    for raw in text.lines() {
        let mut line = String::new();
        let mut used = 0usize;
        for word in raw.split_whitespace() {
            let w = word.width();
            if used > 0 && used + 1 + w > width {
                out.push(std::mem::take(&mut line));
                used = 0;
            }
            if used > 0 {
                line.push(' ');
                used += 1;
            }
            line.push_str(word);
            used += w;
        }
        out.push(line);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::config::AppConfig;
    use folio_core::content::Portfolio;
    use folio_core::theme::ThemeMode;

    fn app() -> App {
        App::new(
            Portfolio::default(),
            AppConfig::default(),
            ThemeMode::Dark,
            None,
            Instant::now(),
        )
    }

    #[test]
    fn test_compose_covers_all_sections() {
        let app = app();
        let composed = compose_page(&app, 80, 30, Instant::now());
        let ids: Vec<&str> = composed
            .layout
            .sections
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["home", "stats", "skills", "projects", "experience", "contact"]
        );
        assert_eq!(composed.layout.total_height, composed.lines.len() as u16);
    }

    #[test]
    fn test_sections_tile_the_page() {
        let app = app();
        let composed = compose_page(&app, 80, 30, Instant::now());
        for pair in composed.layout.sections.windows(2) {
            assert!(pair[0].top + pair[0].height <= pair[1].top);
        }
    }

    #[test]
    fn test_rotator_keys_match_controller() {
        let app = app();
        let composed = compose_page(&app, 80, 30, Instant::now());
        for (i, _) in app.portfolio.stats.iter().enumerate() {
            let key = format!("stat-{i}");
            assert!(
                composed.layout.rotators.iter().any(|e| e.key == key),
                "missing {key}"
            );
        }
    }

    #[test]
    fn test_lineart_is_watched() {
        let app = app();
        let composed = compose_page(&app, 80, 30, Instant::now());
        assert!(composed.layout.revealed.iter().any(|e| e.key == "lineart"));
    }

    #[test]
    fn test_slideshow_bottom_row_holds_indicators() {
        let app = app();
        let composed = compose_page(&app, 80, 30, Instant::now());
        let (top, bottom) = composed.slideshow_rows.unwrap();
        assert!(top < bottom);

        // Clicks dispatch indicator selection on the bottom row, so the
        // dots must actually live there
        let text: String = composed.lines[bottom as usize]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains('●'), "bottom row holds {text:?}");
    }

    #[test]
    fn test_contact_extras_keep_geometry_stable() {
        let mut app = app();
        let t0 = Instant::now();
        let before = compose_page(&app, 80, 30, t0);

        // Submit the form and scroll to the bottom: the confirmation
        // banner and the end-of-page nudge appear without moving rows
        app.page.contact.name = "Ada".into();
        app.page.contact.email = "ada@example.com".into();
        app.page.contact.message = "Hi".into();
        app.page.contact.submit().unwrap();
        app.page.set_layout(before.layout.clone());
        app.page.nav.set_scroll(app.page.nav.max_scroll());

        let after = compose_page(&app, 80, 30, t0);
        assert_eq!(before.layout.total_height, after.layout.total_height);
        for (a, b) in before.layout.sections.iter().zip(&after.layout.sections) {
            assert_eq!((a.top, a.height), (b.top, b.height), "section {}", a.id);
        }
    }

    #[test]
    fn test_wrap_respects_width() {
        let wrapped = wrap("one two three four five six seven", 10);
        assert!(wrapped.iter().all(|l| l.width() <= 10));
        assert_eq!(wrapped.join(" "), "one two three four five six seven");
    }
}
