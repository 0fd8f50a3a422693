//! Brochart card popup: the tactical support-network display.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::site::BrochartConfig;
use crate::tui::component::Component;
use crate::tui::theme::Theme;
use crate::tui::centered_rect;

/// Events emitted by the brochart view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrochartViewEvent {
    /// Export the card as a JPEG
    Export,
}

/// The on-screen brochart card.
pub struct BrochartView {
    config: BrochartConfig,
    closed: bool,
}

impl BrochartView {
    /// Opens the card over the page.
    #[must_use]
    pub fn new(config: BrochartConfig) -> Self {
        Self {
            config,
            closed: false,
        }
    }
}

impl Component for BrochartView {
    type Event = BrochartViewEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 'x') => {
                self.closed = true;
                None
            }
            KeyCode::Char('e') => Some(BrochartViewEvent::Export),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(80, 80, area);
        f.render_widget(Clear, popup);

        let accent = Style::default().fg(theme.accent);
        let accent_bold = accent.add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled(self.config.title.clone(), accent_bold)),
            Line::from(Span::styled(self.config.version.clone(), accent)),
            Line::from(vec![
                Span::styled("STATUS: ", accent),
                Span::styled("ACTIVE", Style::default().fg(theme.success)),
                Span::styled("  GRID: ", accent),
                Span::styled("ONLINE", Style::default().fg(theme.success)),
                Span::styled("  PROTOCOL: VISUAL", accent),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("OPERATIONAL BRIEF: ", accent_bold),
                Span::styled(self.config.brief.clone(), Style::default().fg(theme.text)),
            ]),
            Line::from(vec![
                Span::styled("PROTOCOL: ", accent_bold),
                Span::styled(self.config.protocol.clone(), Style::default().fg(theme.text)),
            ]),
            Line::from(""),
        ];

        for operative in &self.config.operatives {
            let photo = match operative.image_url.as_deref() {
                Some(url) if !url.is_empty() => url.to_string(),
                _ => "[ PASTE PHOTO HERE ]".to_string(),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", operative.codename), accent_bold),
                Span::styled(
                    format!("{:<20}", operative.comm_channel),
                    Style::default().fg(theme.text),
                ),
                Span::styled(photo, Style::default().fg(theme.text_muted)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "// MAINTAIN VISUAL CONTACT // REFRESH PROTOCOL WEEKLY // END TRANSMISSION",
            Style::default().fg(theme.text_muted),
        )));
        lines.push(Line::from(Span::styled(
            "e: Export JPEG | Esc: Close",
            Style::default().fg(theme.text_muted),
        )));

        let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(theme.accent))
                .title(" BROCHART ")
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(widget, popup);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}
