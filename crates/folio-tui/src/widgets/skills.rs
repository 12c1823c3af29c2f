//! Skills section: category tabs and the filtered chip grid.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::widgets::page::PageComposer;

pub fn build(composer: &mut PageComposer, app: &App) {
    let palette = &app.palette;
    composer.begin_section("skills", None);
    composer.blank();
    composer.push(Line::styled(
        "  ── Skills ──".to_string(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ));
    composer.blank();

    // Category tabs; [ and ] move the selection
    let mut tabs = vec![Span::raw("  ".to_string())];
    for (i, category) in app.portfolio.skill_categories.iter().enumerate() {
        let style = if i == app.selected_category {
            Style::default()
                .fg(palette.bg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        tabs.push(Span::styled(format!(" {category} "), style));
        tabs.push(Span::raw(" ".to_string()));
    }
    composer.push(Line::from(tabs));
    composer.blank();

    // Chip grid, wrapped to the page width
    let width = composer.width.saturating_sub(4) as usize;
    let mut spans = vec![Span::raw("  ".to_string())];
    let mut used = 0usize;
    for skill in app.portfolio.skills_in(app.current_category()) {
        let chip = format!("⟨ {} ⟩", skill.name);
        let w = chip.width() + 2;
        if used > 0 && used + w > width {
            composer.push(Line::from(std::mem::replace(
                &mut spans,
                vec![Span::raw("  ".to_string())],
            )));
            used = 0;
        }
        spans.push(Span::styled(chip, Style::default().fg(palette.accent_alt)));
        spans.push(Span::raw("  ".to_string()));
        used += w;
    }
    if spans.len() > 1 {
        composer.push(Line::from(spans));
    }

    composer.blank();
    composer.end_section();
}
