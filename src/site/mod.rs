//! The site document: one immutable configuration describing everything the
//! page renders.
//!
//! A site document is a single JSON file loaded once at startup. Nothing in
//! the application mutates it afterwards; all interactive state (theme
//! variant, collapsed sections, open popups, playback) lives in the TUI
//! layer and is derived from or keyed off this document.

pub mod embed;
pub mod grouping;
pub mod icons;
pub mod qr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Icon identifiers the document may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconName {
    /// TikTok note glyph
    Tiktok,
    /// Generic globe/website
    Globe,
    /// Storefront
    ShoppingBag,
    /// Calendar/booking
    Calendar,
    /// Email
    Mail,
    /// YouTube
    Youtube,
    /// Instagram
    Instagram,
    /// X (formerly Twitter)
    X,
    /// Film/cinema
    Film,
    /// Book/ebook
    Book,
    /// Share arrow
    Share,
    /// Download arrow
    Download,
}

/// Social platforms the socials row understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
    /// YouTube channel
    Youtube,
    /// Instagram profile
    Instagram,
    /// X profile
    X,
    /// TikTok profile
    Tiktok,
}

/// Button silhouette requested by the document theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ButtonShape {
    /// Soft corners
    #[default]
    Rounded,
    /// Fully round ends
    Pill,
    /// Hard corners
    Square,
}

/// Visual weight of a link row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LinkStyle {
    /// Filled with the accent color
    #[default]
    Solid,
    /// Accent-colored outline only
    Outline,
}

/// Behavior override replacing plain navigation on a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkAction {
    /// Open the QR modal with the link's `qr_content` payload
    ShowQr,
    /// Export the brochart card as an image
    DownloadBrochart,
}

/// Color and shape theme carried by the document.
///
/// Colors are `#RRGGBB` hex strings; unparseable values fall back to the
/// built-in palette at render time (see `tui::theme`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteTheme {
    /// Accent color used for highlights and headings
    pub accent: String,
    /// Page background color
    pub background: String,
    /// Primary text color
    pub text: String,
    /// Button silhouette
    pub button_shape: ButtonShape,
    /// Whether link sections render inside elevated card frames
    pub elevated_cards: bool,
}

/// Font preferences. Terminals render in the terminal's font; the fields are
/// carried for document compatibility and shown nowhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Fonts {
    /// Heading font family
    pub heading: String,
    /// Body font family
    pub body: String,
}

/// Page metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Page title (window title in the original; title bar here)
    pub title: String,
    /// Page description
    pub description: String,
    /// Visual theme
    pub theme: SiteTheme,
    /// Font preferences (unused in the terminal)
    pub fonts: Fonts,
    /// Canonical page URL, used by the share action
    #[serde(default)]
    pub url: Option<String>,
}

/// The profile card at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// One-line tagline under the name
    pub tagline: String,
    /// Avatar image URL (shown as a link in the terminal)
    pub avatar_url: String,
    /// Optional badge chip under the tagline
    #[serde(default)]
    pub badge: Option<String>,
}

/// The hero banner's call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    /// Button label
    pub label: String,
    /// Destination URL; recognized video URLs open the lightbox
    pub url: String,
    /// Style keyword (carried, always rendered as the primary button)
    pub style: String,
}

/// Hero banner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Whether the hero renders at all
    pub show: bool,
    /// Headline, alternated with "WELCOME TO" by the slideshow
    pub headline: String,
    /// Subheadline under the slideshow
    pub subheadline: String,
    /// Primary call-to-action
    pub primary_cta: CallToAction,
}

/// One entry in the brochart's support grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operative {
    /// Name or codename
    pub codename: String,
    /// How to reach them
    pub comm_channel: String,
    /// Optional portrait URL; absent renders the paste-photo placeholder
    #[serde(default)]
    pub image_url: Option<String>,
}

/// The brochart card: a fixed support-network display, exportable as an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrochartConfig {
    /// Whether the card renders and is exportable
    pub show: bool,
    /// Card title
    pub title: String,
    /// Version/subtitle line
    pub version: String,
    /// Operational brief paragraph
    pub brief: String,
    /// Protocol paragraph
    pub protocol: String,
    /// The support grid entries
    pub operatives: Vec<Operative>,
}

/// One link row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Row label
    pub label: String,
    /// Destination URL (ignored when `action` is set)
    pub url: String,
    /// Leading icon
    pub icon: IconName,
    /// Visual weight
    pub style: LinkStyle,
    /// Disabled links render dimmed and are never dispatched
    pub enabled: bool,
    /// Category bucket; empty or absent means "OTHER"
    #[serde(default)]
    pub category: Option<String>,
    /// Behavior override replacing navigation
    #[serde(default)]
    pub action: Option<LinkAction>,
    /// QR payload, required in practice when `action` is `show_qr`
    #[serde(default)]
    pub qr_content: Option<String>,
}

impl Link {
    /// The category this link belongs to, defaulting empty/absent to
    /// [`grouping::DEFAULT_CATEGORY`].
    #[must_use]
    pub fn category_or_default(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => grouping::DEFAULT_CATEGORY,
        }
    }
}

/// One social icon row entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    /// Platform
    pub platform: SocialPlatform,
    /// Profile URL
    pub url: String,
    /// Disabled socials are not rendered
    pub enabled: bool,
}

impl Social {
    /// Socials render only when enabled and their URL is non-empty.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.enabled && !self.url.is_empty()
    }
}

/// Footer line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Footer text
    pub text: String,
    /// Whether to show the brandmark glyph before the text
    pub show_brandmark: bool,
    /// Brandmark image URL (glyph placeholder in the terminal)
    pub brandmark_url: String,
}

/// Optional background music settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicConfig {
    /// Start playing on launch if the audio device permits it
    #[serde(default)]
    pub autoplay: bool,
    /// Audio file path; relative paths resolve against the document's directory
    pub file: PathBuf,
    /// Track title shown in the status bar
    #[serde(default)]
    pub title: Option<String>,
}

/// Analytics identifiers, passed through unused by the terminal renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Analytics {
    /// TikTok pixel ID
    #[serde(default)]
    pub tiktok_pixel_id: String,
    /// Google Analytics ID
    #[serde(default)]
    pub google_analytics_id: String,
}

/// The root site document.
///
/// Exactly one instance exists per run; it is read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Document schema version
    pub version: String,
    /// Page metadata and theme
    pub meta: Meta,
    /// Profile card
    pub profile: Profile,
    /// Hero banner
    pub hero: Hero,
    /// Brochart card
    pub brochart: BrochartConfig,
    /// Link rows, in document order
    pub links: Vec<Link>,
    /// Social icons, in document order
    pub socials: Vec<Social>,
    /// Footer line
    pub footer: Footer,
    /// Background music settings
    #[serde(default)]
    pub music: Option<MusicConfig>,
    /// Analytics passthrough
    #[serde(default)]
    pub analytics: Analytics,
}

impl SiteConfig {
    /// Parses a site document from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse site document")
    }

    /// Loads a site document from disk.
    ///
    /// A relative `music.file` path is resolved against the document's
    /// directory so the document stays portable.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site document: {}", path.display()))?;

        let mut site: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse site document: {}", path.display()))?;

        if let Some(music) = &mut site.music {
            if music.file.is_relative() {
                if let Some(base) = path.parent() {
                    music.file = base.join(&music.file);
                }
            }
        }

        Ok(site)
    }

    /// Collects semantic defects that render as inert/placeholder states
    /// instead of failing.
    ///
    /// Structural problems are parse errors; these are the permissive cases
    /// the renderer degrades around (`lazylink validate` prints them as
    /// warnings).
    #[must_use]
    pub fn semantic_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for link in &self.links {
            if link.action == Some(LinkAction::ShowQr)
                && link.qr_content.as_deref().is_none_or(str::is_empty)
            {
                warnings.push(format!(
                    "link '{}' has action show_qr but no qr_content; it will do nothing",
                    link.label
                ));
            }
            if link.action == Some(LinkAction::DownloadBrochart) && !self.brochart.show {
                warnings.push(format!(
                    "link '{}' downloads the brochart but brochart.show is false; it will do nothing",
                    link.label
                ));
            }
        }

        for social in &self.socials {
            if social.enabled && social.url.is_empty() {
                warnings.push(format!(
                    "social {:?} is enabled but has an empty url; it will not be rendered",
                    social.platform
                ));
            }
        }

        if self.hero.show && embed::VideoEmbed::parse(&self.hero.primary_cta.url).is_none() {
            warnings.push(format!(
                "hero call-to-action '{}' is not a recognized video URL; it will open externally",
                self.hero.primary_cta.url
            ));
        }

        if crate::tui::theme::parse_hex_color(&self.meta.theme.accent).is_none() {
            warnings.push(format!(
                "theme accent '{}' is not a #RRGGBB color; falling back to the built-in accent",
                self.meta.theme.accent
            ));
        }

        warnings
    }
}
