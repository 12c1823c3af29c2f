//! Sticky header: brand, nav links, theme toggle and the scroll progress
//! ring. The controller decides visibility; this widget only draws the
//! Resting and Elevated variants (Hidden is simply not rendered).

use std::time::Instant;

use folio_core::nav::HeaderVisibility;
use folio_core::theme::ThemeMode;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let palette = &app.palette;
        let bar = Style::default().bg(palette.surface);

        let mut spans = vec![
            Span::styled(
                " ✦ ".to_string(),
                bar.fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{}  ", app.portfolio.name),
                bar.fg(palette.text).add_modifier(Modifier::BOLD),
            ),
        ];

        // Full section names when the terminal is wide enough, the compact
        // link variant otherwise
        let compact = area.width < 70;
        let links = if compact {
            app.page.nav.mobile_links()
        } else {
            app.page.nav.desktop_links()
        };
        for (i, link) in links.iter().enumerate() {
            let style = if link.active {
                bar.fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                bar.fg(palette.muted)
            };
            let label: &str = if compact {
                link.section.get(..1).unwrap_or(&link.section)
            } else {
                &link.section
            };
            spans.push(Span::styled(format!("{} {} ", i + 1, label), style));
            spans.push(Span::styled(" ".to_string(), bar));
        }

        if let Some(group) = app.page.nav.active_group() {
            spans.push(Span::styled(
                format!("[{group}] "),
                bar.fg(palette.highlight),
            ));
        }

        // Theme toggle, rippling right after a flip
        let glyph = match app.page.theme_mode() {
            ThemeMode::Light => "☀",
            ThemeMode::Dark => "☾",
        };
        let theme_style = if app.page.ripple_active(now) {
            bar.fg(palette.highlight).add_modifier(Modifier::BOLD)
        } else {
            bar.fg(palette.muted)
        };
        spans.push(Span::styled(format!(" {glyph} t "), theme_style));

        // Scroll progress ring
        let progress = app.page.scroll_progress();
        let ring = match (progress * 4.0).round() as u8 {
            0 => "○",
            1 => "◔",
            2 => "◑",
            3 => "◕",
            _ => "●",
        };
        spans.push(Span::styled(
            format!(" {ring} "),
            bar.fg(palette.ring_color(progress)),
        ));

        let shadow = match app.page.nav.header() {
            HeaderVisibility::Elevated => Line::styled(
                "▀".repeat(area.width as usize),
                Style::default().fg(palette.surface),
            ),
            _ => Line::styled(
                " ".repeat(area.width as usize),
                Style::default().bg(palette.bg),
            ),
        };

        let lines = vec![Line::from(spans).style(bar), shadow];
        frame.render_widget(Paragraph::new(lines), area);
    }
}
