//! QR code modal popup.
//!
//! Opened with a payload by the root; derives the external image request
//! URL and offers to open it in the browser. Closing discards the modal;
//! reopening requires a fresh open call with a new payload.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::site::qr::qr_image_url;
use crate::tui::component::Component;
use crate::tui::theme::Theme;
use crate::tui::centered_rect;

/// Events emitted by the QR modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrModalEvent {
    /// Open the QR image request URL in the system browser
    OpenImage(String),
}

/// The QR code modal state.
#[derive(Debug, Clone)]
pub struct QrModal {
    payload: String,
    request_url: String,
    closed: bool,
}

impl QrModal {
    /// Opens a modal for a payload, deriving the image request URL.
    #[must_use]
    pub fn new(payload: String) -> Self {
        let request_url = qr_image_url(&payload);
        Self {
            payload,
            request_url,
            closed: false,
        }
    }

    /// The payload this modal was opened with.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The derived image request URL.
    #[must_use]
    pub fn request_url(&self) -> &str {
        &self.request_url
    }
}

impl Component for QrModal {
    type Event = QrModalEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 'x') => {
                self.closed = true;
                None
            }
            KeyCode::Char('o') | KeyCode::Enter => {
                Some(QrModalEvent::OpenImage(self.request_url.clone()))
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(60, 50, area);
        f.render_widget(Clear, popup);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Scan with your camera app",
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.payload.clone(),
                Style::default().fg(theme.accent),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.request_url.clone(),
                Style::default().fg(theme.text_secondary),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "o: Open image in browser | Esc: Close",
                Style::default().fg(theme.text_muted),
            )),
        ];

        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.accent))
                    .title(" QR CODE ")
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(widget, popup);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_opens_with_exact_payload_and_encoded_url() {
        let modal = QrModal::new("mailto:x@y.com".to_string());
        assert_eq!(modal.payload(), "mailto:x@y.com");
        assert!(modal.request_url().contains("data=mailto%3Ax%40y.com"));
    }

    #[test]
    fn test_escape_closes() {
        let mut modal = QrModal::new("payload".to_string());
        assert!(!modal.should_close());

        modal.handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(modal.should_close());
    }

    #[test]
    fn test_open_key_emits_request_url() {
        let mut modal = QrModal::new("payload".to_string());
        let event = modal.handle_input(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE));
        assert_eq!(
            event,
            Some(QrModalEvent::OpenImage(modal.request_url().to_string()))
        );
        assert!(!modal.should_close());
    }
}
