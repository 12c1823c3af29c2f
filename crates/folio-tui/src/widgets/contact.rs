//! Contact section: the three-field form, its confirmation banner and the
//! closing note. The focused field carries a cursor while the form is in
//! input mode.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::{App, ContactField, Mode};
use crate::widgets::page::{wrap, PageComposer};

pub fn build(composer: &mut PageComposer, app: &App) {
    let palette = &app.palette;
    composer.begin_section("contact", None);
    composer.blank();
    composer.push(Line::styled(
        "  ── Contact ──".to_string(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ));
    composer.blank();

    for line in wrap(&app.portfolio.contact_note, composer.width.saturating_sub(4)) {
        composer.push(Line::styled(
            format!("  {line}"),
            Style::default().fg(palette.muted),
        ));
    }
    composer.blank();

    // The banner row is always present so the section height (and the
    // observer geometry recorded from it) never shifts at render time
    match app.page.contact.confirmation() {
        Some(confirmation) => composer.push(Line::styled(
            format!("  ✓ {confirmation}"),
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )),
        None => composer.blank(),
    }
    composer.blank();

    field(composer, app, ContactField::Name, "Name", &app.page.contact.name);
    field(composer, app, ContactField::Email, "Email", &app.page.contact.email);
    field(composer, app, ContactField::Message, "Message", &app.page.contact.message);

    composer.blank();
    let hint = match app.mode {
        Mode::Contact(_) => "  Tab next field · Enter send · Esc leave the form",
        _ => "  press c to write a message",
    };
    composer.push(Line::styled(
        hint.to_string(),
        Style::default().fg(palette.faint),
    ));

    // A subtle nudge once the reader has reached the end of the page; the
    // row stays reserved while hidden
    if app.page.near_bottom() && !app.page.is_paused() {
        composer.push(Line::styled(
            "  thanks for scrolling all the way down".to_string(),
            Style::default().fg(palette.faint).add_modifier(Modifier::ITALIC),
        ));
    } else {
        composer.blank();
    }
    composer.blank();
    composer.end_section();
}

fn field(composer: &mut PageComposer, app: &App, which: ContactField, label: &str, value: &str) {
    let palette = &app.palette;
    let focused = app.mode == Mode::Contact(which);
    let label_style = if focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };
    let mut spans = vec![
        Span::raw("  ".to_string()),
        Span::styled(format!("{label:>8} "), label_style),
        Span::styled("│ ".to_string(), Style::default().fg(palette.faint)),
        Span::styled(value.to_string(), Style::default().fg(palette.text)),
    ];
    if focused {
        spans.push(Span::styled(
            "▌".to_string(),
            Style::default().fg(palette.accent_alt),
        ));
    }
    composer.push(Line::from(spans));
}
