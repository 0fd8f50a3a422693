//! Help overlay widget showing all keyboard shortcuts.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::component::Component;
use crate::tui::theme::Theme;
use crate::tui::centered_rect;

const SHORTCUTS: &[(&str, &str)] = &[
    ("↑/k, ↓/j", "Move focus"),
    ("Home/End", "Jump to first/last"),
    ("Enter/Space", "Activate link or toggle section"),
    ("t", "Toggle dark/light theme"),
    ("m", "Toggle background music"),
    ("s", "Share page (copy link)"),
    ("b", "View brochart card"),
    ("e", "Export brochart as JPEG"),
    ("?", "Toggle this help"),
    ("Esc", "Close popup"),
    ("q", "Quit"),
];

/// Scrollable help overlay, opened with `?`.
#[derive(Debug, Clone, Default)]
pub struct HelpOverlay {
    scroll_offset: usize,
    closed: bool,
}

impl HelpOverlay {
    /// Creates the overlay at the top of its content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for HelpOverlay {
    type Event = ();

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => {
                self.closed = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.scroll_offset + 1 < SHORTCUTS.len() {
                    self.scroll_offset += 1;
                }
            }
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(60, 70, area);
        f.render_widget(Clear, popup);

        let mut lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (key, action) in SHORTCUTS.iter().skip(self.scroll_offset) {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<14}"), Style::default().fg(theme.accent)),
                Span::styled(*action, Style::default().fg(theme.text)),
            ]));
        }

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.primary))
                .title(" HELP ")
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(widget, popup);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}
