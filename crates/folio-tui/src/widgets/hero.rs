//! Hero section: name, cycling typed role, tagline and the looping
//! line-art figure.

use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::widgets::page::{wrap, PageComposer};

const FIGURE: [&str; 4] = [
    "╭──────────────────╮",
    "│   $ cargo run    │",
    "╰──────────────────╯",
    "   ▔▔▔▔▔▔▔▔▔▔▔▔",
];

pub fn build(composer: &mut PageComposer, app: &App, now: Instant) {
    let palette = &app.palette;
    composer.begin_section("home", None);

    composer.blank();
    composer.blank();
    composer.push(Line::styled(
        "  Hi, I'm".to_string(),
        Style::default().fg(palette.muted),
    ));
    composer.push(Line::styled(
        format!("  {}", app.portfolio.name),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ));
    composer.blank();

    // Typed role with a block cursor
    composer.push(Line::from(vec![
        Span::styled("  > ".to_string(), Style::default().fg(palette.faint)),
        Span::styled(
            app.page.typing.text(),
            Style::default().fg(palette.accent),
        ),
        Span::styled("▌".to_string(), Style::default().fg(palette.accent_alt)),
    ]));
    composer.blank();

    for line in wrap(&app.portfolio.tagline, composer.width.saturating_sub(4)) {
        composer.push(Line::styled(
            format!("  {line}"),
            Style::default().fg(palette.muted),
        ));
    }
    composer.blank();

    // Line-art figure: strokes reveal left to right, markers fade in after
    let figure_top = composer.row();
    let running = app.page.trace.is_running();
    for (i, stroke) in FIGURE.iter().enumerate() {
        let total = stroke.chars().count();
        let progress = if running {
            app.page.trace.stroke_progress(i, now)
        } else {
            0.0
        };
        let shown = (progress * total as f64).round() as usize;
        let visible: String = stroke.chars().take(shown).collect();
        composer.push(Line::styled(
            format!("  {visible}"),
            Style::default().fg(palette.accent_alt),
        ));
    }
    let mut markers = vec![Span::raw("   ".to_string())];
    for j in 0..3 {
        let opacity = if running {
            app.page.trace.marker_opacity(j, now)
        } else {
            0.0
        };
        let style = if opacity < 0.1 {
            Style::default().fg(palette.bg)
        } else if opacity < 0.6 {
            Style::default().fg(palette.faint)
        } else {
            Style::default().fg(palette.highlight)
        };
        markers.push(Span::styled("✦".to_string(), style));
        markers.push(Span::raw("      ".to_string()));
    }
    composer.push(Line::from(markers));
    let figure_height = composer.row() - figure_top;
    composer.watch_reveal("lineart", "home", 0, figure_top, figure_height);

    composer.blank();
    for line in wrap(&app.portfolio.about, composer.width.saturating_sub(4)) {
        composer.push(Line::styled(
            format!("  {line}"),
            Style::default().fg(palette.text),
        ));
    }
    composer.blank();

    composer.end_section();
}
