//! Theme system for consistent UI colors across dark and light modes.
//!
//! The page's document carries its own palette (accent/background/text hex
//! colors); this module resolves that palette against the active dark or
//! light variant so every widget draws from one `Theme` value per frame.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::site::SiteTheme;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders and titles
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color
    pub success: Color,
    /// Error state color
    pub error: Color,
    /// Warning state color
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels
    pub text_secondary: Color,
    /// Muted text color for help text and disabled items
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for elevated card frames
    pub surface: Color,
}

/// Theme variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    /// Dark theme (the page's native look)
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl ThemeVariant {
    /// The variant the theme toggle switches to.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Resolves the configured mode to a concrete variant.
    ///
    /// `Auto` asks the OS via the `dark-light` crate and falls back to
    /// dark when the answer is unspecified or errors.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::Dark,
            ThemeMode::Light => Self::Light,
            ThemeMode::Auto => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => Self::Light,
                Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::Dark,
            },
        }
    }
}

impl Theme {
    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),
        }
    }

    /// Creates a theme from a variant enum.
    #[must_use]
    pub const fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Resolves the document's palette against a variant.
    ///
    /// The document accent replaces the built-in accent in both variants.
    /// Background and text colors are document-authored for the dark look,
    /// so they only apply in the dark variant; the light variant keeps its
    /// own readable base colors. Unparseable hex values fall back to the
    /// built-in palette.
    #[must_use]
    pub fn for_site(variant: ThemeVariant, site: &SiteTheme) -> Self {
        let mut theme = Self::from_variant(variant);

        if let Some(accent) = parse_hex_color(&site.accent) {
            theme.accent = accent;
        }

        if variant == ThemeVariant::Dark {
            if let Some(background) = parse_hex_color(&site.background) {
                theme.background = background;
            }
            if let Some(text) = parse_hex_color(&site.text) {
                theme.text = text;
            }
        }

        theme
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Parses a `#RRGGBB` color string into channel values.
#[must_use]
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Parses a `#RRGGBB` color string into a ratatui color.
#[must_use]
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    parse_hex_rgb(hex).map(|(r, g, b)| Color::Rgb(r, g, b))
}
