//! Status bar widget for status messages, toggle indicators, and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::audio::PlaybackState;
use crate::tui::theme::ThemeVariant;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: message line, indicator line, help line.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        // First line: error, status message, or nothing.
        if let Some(error) = &state.error_message {
            lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ]));
        } else if !state.status_message.is_empty() {
            lines.push(Line::from(Span::raw(state.status_message.clone())));
        } else {
            lines.push(Line::from(""));
        }

        lines.push(Self::indicator_line(state, theme));
        lines.push(Self::help_line(theme));

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn indicator_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let variant = match state.theme_variant {
            ThemeVariant::Dark => "Dark",
            ThemeVariant::Light => "Light",
        };

        let mut spans = vec![
            Span::styled("Theme: ", Style::default().fg(theme.primary)),
            Span::styled(variant.to_string(), Style::default().fg(theme.accent)),
            Span::raw(" | "),
            Span::styled("Music: ", Style::default().fg(theme.primary)),
        ];

        match state.playback {
            PlaybackState::Playing => {
                spans.push(Span::styled(
                    "♪ Playing".to_string(),
                    Style::default().fg(theme.success),
                ));
                if let Some(title) = state.music.as_ref().and_then(|p| p.title()) {
                    spans.push(Span::styled(
                        format!(" ({title})"),
                        Style::default().fg(theme.text_muted),
                    ));
                }
            }
            PlaybackState::Stopped => {
                if state.music.is_some() {
                    spans.push(Span::styled(
                        "Stopped".to_string(),
                        Style::default().fg(theme.text_secondary),
                    ));
                } else {
                    spans.push(Span::styled(
                        "Unavailable".to_string(),
                        Style::default().fg(theme.text_muted),
                    ));
                }
            }
        }

        Line::from(spans)
    }

    fn help_line(theme: &Theme) -> Line<'static> {
        let hints = [
            ("↑↓", "Navigate"),
            ("Enter", "Open"),
            ("t", "Theme"),
            ("m", "Music"),
            ("s", "Share"),
            ("?", "Help"),
        ];

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));

        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                key.to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(action.to_string()));
        }

        Line::from(spans)
    }
}
