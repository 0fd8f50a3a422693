//! Profile card widget.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::site::Profile;
use crate::tui::theme::Theme;

/// Renders the profile card: name, tagline, and optional badge chip.
pub fn render(f: &mut Frame, area: Rect, profile: &Profile, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            profile.name.to_uppercase(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.tagline.clone(),
            Style::default().fg(theme.text_secondary),
        )),
    ];

    if let Some(badge) = &profile.badge {
        lines.push(Line::from(Span::styled(
            format!("[ {badge} ]"),
            Style::default().fg(theme.accent),
        )));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.background));
    f.render_widget(widget, area);
}

/// Rows the profile card occupies.
#[must_use]
pub fn rendered_height(profile: &Profile) -> u16 {
    if profile.badge.is_some() {
        3
    } else {
        2
    }
}
