//! Socials row widget.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::site::icons::{social_glyph, social_label};
use crate::site::Social;
use crate::tui::theme::Theme;

/// Renders the row of visible socials.
///
/// A social renders only when enabled with a non-empty URL; when none
/// qualify, the row is left empty.
pub fn render(f: &mut Frame, area: Rect, socials: &[Social], theme: &Theme) {
    let mut spans: Vec<Span> = Vec::new();

    for social in socials.iter().filter(|s| s.is_visible()) {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("{} {}", social_glyph(social.platform), social_label(social.platform)),
            Style::default().fg(theme.text_secondary),
        ));
    }

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.background));
    f.render_widget(widget, area);
}
