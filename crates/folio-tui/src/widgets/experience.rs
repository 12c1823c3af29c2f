//! Experience timeline. Entries reveal with the section stagger; an entry
//! that has not fired yet renders dimmed instead of hidden so the layout
//! never jumps.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::widgets::page::{wrap, PageComposer};

pub fn build(composer: &mut PageComposer, app: &App) {
    let palette = &app.palette;
    composer.begin_section("experience", None);
    composer.blank();
    composer.push(Line::styled(
        "  ── Experience ──".to_string(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ));
    composer.blank();

    for (i, entry) in app.portfolio.experience.iter().enumerate() {
        let key = format!("exp-{i}");
        let revealed = app.page.is_revealed(&key);
        let top = composer.row();

        let (title_style, text_style) = if revealed {
            (
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(palette.muted),
            )
        } else {
            (
                Style::default().fg(palette.faint),
                Style::default().fg(palette.faint),
            )
        };

        composer.push(Line::from(vec![
            Span::styled("  ● ".to_string(), Style::default().fg(palette.accent)),
            Span::styled(format!("{} — {}", entry.title, entry.company), title_style),
        ]));
        composer.push(Line::from(vec![
            Span::styled("  │ ".to_string(), Style::default().fg(palette.faint)),
            Span::styled(entry.period.clone(), Style::default().fg(palette.accent_alt)),
        ]));
        for line in wrap(&entry.description, composer.width.saturating_sub(6)) {
            composer.push(Line::from(vec![
                Span::styled("  │ ".to_string(), Style::default().fg(palette.faint)),
                Span::styled(line, text_style),
            ]));
        }
        for duty in &entry.responsibilities {
            composer.push(Line::from(vec![
                Span::styled("  │   - ".to_string(), Style::default().fg(palette.faint)),
                Span::styled(duty.clone(), text_style),
            ]));
        }
        composer.blank();

        let height = composer.row() - top;
        composer.watch_reveal(&key, "experience", i, top, height);
    }

    composer.end_section();
}
