//! Video lightbox popup.
//!
//! Opened with a source URL by the root. A recognized URL resolves to its
//! embed identifier and offers external playback; an unrecognized one
//! shows a pending placeholder instead of failing.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::site::embed::VideoEmbed;
use crate::tui::component::Component;
use crate::tui::theme::Theme;
use crate::tui::centered_rect;

/// Events emitted by the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxEvent {
    /// Open the watch-page URL in the system browser
    OpenExternal(String),
}

/// The video lightbox state.
#[derive(Debug, Clone)]
pub struct Lightbox {
    source_url: String,
    embed: Option<VideoEmbed>,
    closed: bool,
}

impl Lightbox {
    /// Opens a lightbox for a source URL, resolving its embed if possible.
    #[must_use]
    pub fn new(source_url: String) -> Self {
        let embed = VideoEmbed::parse(&source_url);
        Self {
            source_url,
            embed,
            closed: false,
        }
    }

    /// The resolved embed, if the URL was a recognized form.
    #[must_use]
    pub fn embed(&self) -> Option<&VideoEmbed> {
        self.embed.as_ref()
    }
}

impl Component for Lightbox {
    type Event = LightboxEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 'x') => {
                self.closed = true;
                None
            }
            KeyCode::Char('o') | KeyCode::Enter => self
                .embed
                .as_ref()
                .map(|embed| LightboxEvent::OpenExternal(embed.watch_url())),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(70, 50, area);
        f.render_widget(Clear, popup);

        let lines = match &self.embed {
            Some(embed) => vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("▶ VIDEO // {}", embed.id()),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    embed.embed_url(),
                    Style::default().fg(theme.text_secondary),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "o: Watch in browser | Esc: Close",
                    Style::default().fg(theme.text_muted),
                )),
            ],
            None => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "ESTABLISHING SECURE CONNECTION...",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "If protocol fails, check source link validity.",
                    Style::default().fg(theme.text_muted),
                )),
                Line::from(Span::styled(
                    self.source_url.clone(),
                    Style::default().fg(theme.text_secondary),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Esc: Close",
                    Style::default().fg(theme.text_muted),
                )),
            ],
        };

        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.accent))
                    .title(" LIGHTBOX ")
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(widget, popup);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}
