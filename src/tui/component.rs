//! Component trait pattern for popup overlays.
//!
//! Popups are self-contained: they own their state, handle their own
//! input, and emit events to the parent when something outside their
//! boundary should happen (open a URL, copy text).

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::theme::Theme;

/// A popup that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to
    /// the parent; `None` if input was handled internally.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);

    /// Check if the component should close.
    ///
    /// Returns `true` once the component has finished its work. A closed
    /// component is discarded; reopening requires a fresh open call with a
    /// new payload.
    fn should_close(&self) -> bool {
        false
    }
}
