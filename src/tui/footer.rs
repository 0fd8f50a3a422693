//! Footer line widget.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::site::Footer;
use crate::tui::theme::Theme;

/// Renders the footer text, with the brandmark glyph when requested.
pub fn render(f: &mut Frame, area: Rect, footer: &Footer, theme: &Theme) {
    let text = if footer.show_brandmark && !footer.brandmark_url.is_empty() {
        format!("◆ {}", footer.text)
    } else {
        footer.text.clone()
    };

    let widget = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(theme.text_muted),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(theme.background));
    f.render_widget(widget, area);
}
