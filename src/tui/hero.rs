//! Hero banner widget with its cycling headline slideshow.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

use crate::constants::SLIDE_INTERVAL;
use crate::site::Hero;
use crate::tui::theme::Theme;

/// Cycles through a fixed slide sequence on the event-loop clock.
///
/// Owned by the root state; there is no separate timer to leak, the tick
/// is driven from the main loop and the state dies with the app.
#[derive(Debug, Clone)]
pub struct Slideshow {
    slides: Vec<String>,
    index: usize,
    last_advance: Instant,
}

impl Slideshow {
    /// The slide sequence for a hero: the greeting, then the headline.
    #[must_use]
    pub fn for_hero(hero: &Hero, now: Instant) -> Self {
        Self::new(vec!["WELCOME TO".to_string(), hero.headline.clone()], now)
    }

    /// Creates a slideshow over `slides`, starting at the first.
    #[must_use]
    pub fn new(slides: Vec<String>, now: Instant) -> Self {
        Self {
            slides,
            index: 0,
            last_advance: now,
        }
    }

    /// Advances if the slide interval has elapsed since the last advance.
    ///
    /// Returns whether the active slide changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_advance) < SLIDE_INTERVAL {
            return false;
        }
        self.last_advance = now;
        self.advance();
        true
    }

    fn advance(&mut self) {
        if !self.slides.is_empty() {
            self.index = (self.index + 1) % self.slides.len();
        }
    }

    /// The active slide text.
    #[must_use]
    pub fn current(&self) -> &str {
        self.slides.get(self.index).map_or("", String::as_str)
    }

    /// The active slide index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// Renders the hero banner: slideshow headline, subheadline, and the
/// primary call-to-action button.
pub fn render(
    f: &mut Frame,
    area: Rect,
    hero: &Hero,
    slideshow: &Slideshow,
    theme: &Theme,
    cta_focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));

    let cta_style = if cta_focused {
        Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(
            "● SYSTEM ONLINE",
            Style::default().fg(theme.success),
        )),
        Line::from(Span::styled(
            slideshow.current().to_string(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hero.subheadline.clone(),
            Style::default().fg(theme.accent),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("▶ {}", hero.primary_cta.label),
            cta_style,
        )),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(widget, area);
}
