//! Floating background decoration.
//!
//! The page scatters dim math/code glyphs behind its content. The terminal
//! rendition places them deterministically from the area size, so a given
//! terminal geometry always draws the same backdrop.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
    Frame,
};

use crate::tui::theme::Theme;

const GLYPHS: [&str; 13] = [
    "♫", "♪", "{}", "=>", "Aa", "∫", "∑", "e=mc²", "void()", "0101", "λ", "▞", "◌",
];

/// Approximate density: one glyph per this many cells.
const CELLS_PER_GLYPH: u32 = 96;

struct FloatingBackground<'a> {
    theme: &'a Theme,
}

impl Widget for FloatingBackground<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.theme.text_muted)
            .bg(self.theme.background)
            .add_modifier(Modifier::DIM);

        let cells = u32::from(area.width) * u32::from(area.height);
        let count = (cells / CELLS_PER_GLYPH).min(64);

        // Multiplicative congruential scatter keyed off the area, so the
        // backdrop is stable for a fixed terminal size.
        let mut seed = (u32::from(area.width) ^ (u32::from(area.height) << 8)) | 1;
        for i in 0..count {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let x = area.x + (seed >> 16) as u16 % area.width.max(1);
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let y = area.y + (seed >> 16) as u16 % area.height.max(1);

            let glyph = GLYPHS[i as usize % GLYPHS.len()];
            if x + glyph.chars().count() as u16 <= area.right() {
                buf.set_string(x, y, glyph, style);
            }
        }
    }
}

/// Renders the decorative backdrop across `area`, under the page content.
pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    f.render_widget(FloatingBackground { theme }, area);
}
