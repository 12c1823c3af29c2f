use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct HelpWidget;

const KEYS: &[(&str, &str)] = &[
    ("j / k, ↓ / ↑", "scroll"),
    ("Ctrl+d / Ctrl+u", "half page"),
    ("gg / G", "top / bottom"),
    ("Tab / Shift+Tab", "next / previous section"),
    ("1-9", "jump to section"),
    ("b", "back to the previous section"),
    ("h / l, ← / →", "previous / next slide"),
    ("[ / ]", "skill category"),
    ("t", "toggle light / dark theme"),
    ("r", "replay counters in view"),
    ("c", "contact form"),
    ("B", "back to top"),
    ("q", "quit"),
];

impl HelpWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let palette = &app.palette;
        let width = 46.min(area.width.saturating_sub(2));
        let height = (KEYS.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        let mut lines = vec![Line::default()];
        for (key, what) in KEYS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {key:<16} "),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled((*what).to_string(), Style::default().fg(palette.text)),
            ]));
        }

        let block = Block::default()
            .title(" keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.surface));

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}
