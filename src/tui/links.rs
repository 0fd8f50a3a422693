//! Collapsible link sections and the page focus ring.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::site::grouping::{group_links, LinkGroup};
use crate::site::icons::icon_glyph;
use crate::site::{ButtonShape, Link, LinkStyle};
use crate::tui::theme::Theme;

/// The category expanded by default.
const DEFAULT_EXPANDED_CATEGORY: &str = "EXPERIENCE";

/// A focusable element of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The hero banner's call-to-action button
    HeroCta,
    /// A section header (toggles collapse), by group index
    SectionHeader(usize),
    /// A link row, by group index and position within the group
    Link {
        /// Index into the ordered group list
        group: usize,
        /// Index into that group's links
        index: usize,
    },
}

/// The grouped link list with per-section collapse state.
///
/// Sections are independent: toggling one never affects another.
#[derive(Debug, Clone)]
pub struct LinkSections {
    groups: Vec<LinkGroup>,
    expanded: Vec<bool>,
}

impl LinkSections {
    /// Groups the document's links and applies default collapse state:
    /// expanded only for the section named exactly `EXPERIENCE`.
    #[must_use]
    pub fn new(links: &[Link]) -> Self {
        let groups = group_links(links);
        let expanded = groups
            .iter()
            .map(|g| g.name == DEFAULT_EXPANDED_CATEGORY)
            .collect();

        Self { groups, expanded }
    }

    /// The ordered groups.
    #[must_use]
    pub fn groups(&self) -> &[LinkGroup] {
        &self.groups
    }

    /// Whether the section at `index` is expanded.
    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Toggles the collapse state of one section.
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.expanded.get_mut(index) {
            *flag = !*flag;
        }
    }

    /// Number of rows the sections occupy when rendered.
    #[must_use]
    pub fn rendered_height(&self) -> u16 {
        let mut rows = 0usize;
        for (idx, group) in self.groups.iter().enumerate() {
            rows += 1;
            if self.is_expanded(idx) {
                rows += group.links.len();
            }
        }
        rows as u16
    }
}

/// Builds the ordered focus ring over the page.
///
/// Disabled links and links in collapsed sections are excluded, so the
/// dispatcher can never be invoked for them.
#[must_use]
pub fn build_focus_ring(include_hero_cta: bool, sections: &LinkSections) -> Vec<FocusTarget> {
    let mut ring = Vec::new();

    if include_hero_cta {
        ring.push(FocusTarget::HeroCta);
    }

    for (g, group) in sections.groups().iter().enumerate() {
        ring.push(FocusTarget::SectionHeader(g));
        if sections.is_expanded(g) {
            for (i, link) in group.links.iter().enumerate() {
                if link.enabled {
                    ring.push(FocusTarget::Link { group: g, index: i });
                }
            }
        }
    }

    ring
}

/// Delimiters drawn around a link label for each button shape.
///
/// Total over [`ButtonShape`], so a document can never request a shape
/// without a rendering.
#[must_use]
pub const fn shape_delimiters(shape: ButtonShape) -> (&'static str, &'static str) {
    match shape {
        ButtonShape::Rounded => ("(", ")"),
        ButtonShape::Pill => ("❬", "❭"),
        ButtonShape::Square => ("[", "]"),
    }
}

/// Renders the link sections list.
pub fn render(
    f: &mut Frame,
    area: Rect,
    sections: &LinkSections,
    shape: ButtonShape,
    elevated: bool,
    selected: Option<FocusTarget>,
    theme: &Theme,
) {
    let mut lines: Vec<Line> = Vec::new();

    for (g, group) in sections.groups().iter().enumerate() {
        let open = sections.is_expanded(g);
        let marker = if open { "▾" } else { "▸" };

        let mut header_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        if selected == Some(FocusTarget::SectionHeader(g)) {
            header_style = header_style.bg(theme.highlight_bg);
        }
        lines.push(Line::from(Span::styled(
            format!("{marker} {}", group.name),
            header_style,
        )));

        if open {
            for (i, link) in group.links.iter().enumerate() {
                let focused = selected == Some(FocusTarget::Link { group: g, index: i });
                lines.push(link_row(link, shape, focused, theme));
            }
        }
    }

    let border_type = if elevated {
        BorderType::Double
    } else {
        BorderType::Plain
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(theme.primary))
            .title(" LINKS ")
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(widget, area);
}

fn link_row<'a>(link: &Link, shape: ButtonShape, focused: bool, theme: &Theme) -> Line<'a> {
    let (open, close) = shape_delimiters(shape);
    let glyph = icon_glyph(link.icon);
    let text = format!("  {open} {glyph} {} {close}", link.label);

    let style = if !link.enabled {
        Style::default()
            .fg(theme.text_muted)
            .add_modifier(Modifier::DIM)
    } else {
        let base = match link.style {
            LinkStyle::Solid => Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            LinkStyle::Outline => Style::default().fg(theme.accent),
        };
        if focused {
            base.bg(theme.highlight_bg)
        } else {
            base
        }
    };

    Line::from(Span::styled(text, style))
}
