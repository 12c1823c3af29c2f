//! Stat counters rendered as a row of cards. The numbers come from the
//! controller's rotators; a stat with a non-numeric target shows its raw
//! text instead.

use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::widgets::page::PageComposer;

pub fn build(composer: &mut PageComposer, app: &App, now: Instant) {
    let palette = &app.palette;
    composer.begin_section("stats", None);
    composer.blank();
    composer.push(Line::styled(
        "  ── Numbers ──".to_string(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ));
    composer.blank();

    let stats = &app.portfolio.stats;
    if stats.is_empty() {
        composer.end_section();
        return;
    }

    let card_width = ((composer.width.saturating_sub(4)) / stats.len() as u16).clamp(8, 22);
    let cards_top = composer.row();

    // Three rows of cards side by side: value, label, underline
    let mut value_spans = vec![Span::raw("  ".to_string())];
    let mut label_spans = vec![Span::raw("  ".to_string())];
    let mut rule_spans = vec![Span::raw("  ".to_string())];

    for (i, stat) in stats.iter().enumerate() {
        let key = format!("stat-{i}");
        let value = app
            .page
            .rotator_display(&key)
            .unwrap_or_else(|| stat.target.clone());
        let text = format!("{}{}", value, stat.suffix);
        let style = if app.page.rotator_highlighted(&key, now) {
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD)
        };
        value_spans.push(Span::styled(pad(&text, card_width), style));
        label_spans.push(Span::styled(
            pad(&stat.label, card_width),
            Style::default().fg(palette.muted),
        ));
        rule_spans.push(Span::styled(
            pad(&"─".repeat((card_width as usize).saturating_sub(2)), card_width),
            Style::default().fg(palette.faint),
        ));
    }

    composer.push(Line::from(value_spans));
    composer.push(Line::from(label_spans));
    composer.push(Line::from(rule_spans));

    // All cards share the rows; sibling order drives the trigger stagger
    for i in 0..stats.len() {
        composer.watch_rotator(&format!("stat-{i}"), "stats", i, cards_top, 3);
    }

    composer.blank();
    composer.push(Line::styled(
        "  r replays the counters in view".to_string(),
        Style::default().fg(palette.faint),
    ));
    composer.blank();
    composer.end_section();
}

/// Pad or truncate to an exact column width
fn pad(text: &str, width: u16) -> String {
    let width = width as usize;
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    let fill = width.saturating_sub(out.width());
    out.extend(std::iter::repeat(' ').take(fill));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_exact_width() {
        assert_eq!(pad("ab", 5).width(), 5);
        assert_eq!(pad("abcdefgh", 5).width(), 5);
    }
}
