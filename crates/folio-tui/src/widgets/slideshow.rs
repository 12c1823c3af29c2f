//! Projects slideshow. Fades are rendered as a dimmed pass and a slide-in
//! indentation from the travel direction; indicators mirror the controller
//! state and respond to h/l or a horizontal drag.

use std::time::Instant;

use folio_core::slideshow::{SlideDirection, SlidePhase};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::widgets::page::{wrap, PageComposer};

/// Body rows reserved per slide so the section height is stable
const SLIDE_BODY_ROWS: usize = 7;

pub fn build(composer: &mut PageComposer, app: &App, now: Instant) {
    let palette = &app.palette;
    composer.begin_section("projects", None);
    composer.blank();
    composer.push(Line::styled(
        "  ── Projects ──".to_string(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ));
    composer.blank();

    let show = &app.page.slideshow;
    if show.is_empty() {
        composer.push(Line::styled(
            "  nothing here yet".to_string(),
            Style::default().fg(palette.faint),
        ));
        composer.blank();
        composer.end_section();
        return;
    }

    let top = composer.row();
    let phase = show.phase();
    let progress = show.phase_progress(now);

    // Entry offset shrinks as the fade-in completes
    let indent = match phase {
        SlidePhase::FadingIn { direction } => {
            let cols = ((1.0 - progress) * 6.0).round() as usize;
            match direction {
                SlideDirection::Next => cols,
                SlideDirection::Prev => 0,
            }
        }
        _ => 0,
    };
    let dimmed = !matches!(phase, SlidePhase::Steady);
    let body_style = if dimmed {
        Style::default().fg(palette.faint)
    } else {
        Style::default().fg(palette.text)
    };
    let pad = " ".repeat(4 + indent);

    let project = &app.portfolio.projects[show.current()];
    let mut rows: Vec<Line> = Vec::new();
    rows.push(Line::from(vec![
        Span::raw(pad.clone()),
        Span::styled(
            project.title.clone(),
            body_style.add_modifier(Modifier::BOLD),
        ),
    ]));
    for line in wrap(&project.description, composer.width.saturating_sub(8)) {
        rows.push(Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(line, body_style),
        ]));
    }
    rows.push(Line::from(vec![
        Span::raw(pad.clone()),
        Span::styled(
            project.technologies.join(" · "),
            Style::default().fg(palette.accent_alt),
        ),
    ]));
    for detail in &project.details {
        rows.push(Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(format!("• {detail}"), Style::default().fg(palette.muted)),
        ]));
    }

    rows.truncate(SLIDE_BODY_ROWS);
    while rows.len() < SLIDE_BODY_ROWS {
        rows.push(Line::default());
    }
    for row in rows {
        composer.push(row);
    }

    // Indicators
    let mut spans = vec![
        Span::raw("    ".to_string()),
        Span::styled("◀ h ".to_string(), Style::default().fg(palette.faint)),
    ];
    for i in 0..show.len() {
        let glyph = if i == show.current() { "●" } else { "○" };
        let style = if i == show.current() {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.faint)
        };
        spans.push(Span::styled(format!("{glyph} "), style));
    }
    spans.push(Span::styled(" l ▶".to_string(), Style::default().fg(palette.faint)));
    if !show.is_autoplaying() {
        spans.push(Span::styled(
            "  ⏸".to_string(),
            Style::default().fg(palette.muted),
        ));
    }
    // The indicator line is the last row of the gesture region, so clicks
    // on the dots dispatch as indicator selection rather than drags
    composer.mark_slideshow(top, composer.row());
    composer.push(Line::from(spans));

    composer.blank();
    composer.end_section();
}
