use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let palette = &app.palette;
        let mode_str = match app.mode {
            Mode::Normal => {
                if app.page.is_paused() {
                    "PAUSED"
                } else {
                    "NORMAL"
                }
            }
            Mode::Contact(_) => "CONTACT",
            Mode::Help => "HELP",
        };

        let section = app.page.current_active().unwrap_or("-");
        let percent = (app.page.scroll_progress() * 100.0).round() as u16;

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {msg}")
        } else {
            format!(" {mode_str} | {section} | {percent}%")
        };

        let help_hint = " q:quit j/k:scroll Tab:section t:theme ?:help ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(palette.text).bg(palette.surface),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(palette.surface),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(palette.muted).bg(palette.surface),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
