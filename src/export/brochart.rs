//! Renders the brochart card to a JPEG file.
//!
//! The sheet is composed as styled text lines first (pure, testable), then
//! rasterized onto an image in the document's colors and written under the
//! export directory.

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::export::font::SheetFont;
use crate::site::SiteConfig;
use crate::tui::theme::parse_hex_rgb;

/// JPEG quality for the exported sheet.
pub const EXPORT_JPEG_QUALITY: u8 = 95;

const MARGIN: u32 = 32;
const MIN_SHEET_WIDTH: u32 = 640;

const FALLBACK_ACCENT: (u8, u8, u8) = (0xEC, 0x9D, 0x34);
const FALLBACK_BACKGROUND: (u8, u8, u8) = (0x0A, 0x0A, 0x0A);

/// Visual weight of one sheet line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Large card title
    Title,
    /// Section heading
    Heading,
    /// Regular content
    Body,
    /// De-emphasized footer text
    Muted,
}

impl LineStyle {
    const fn font_size(self) -> f32 {
        match self {
            Self::Title => 36.0,
            Self::Heading => 20.0,
            Self::Body => 16.0,
            Self::Muted => 13.0,
        }
    }
}

/// One composed line of the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLine {
    /// Text content
    pub text: String,
    /// Visual weight
    pub style: LineStyle,
}

impl SheetLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// File name for an exported sheet, derived from the profile name.
///
/// Mirrors the page's fixed artifact naming: uppercase profile, spaces
/// collapsed to underscores.
#[must_use]
pub fn export_file_name(profile_name: &str) -> String {
    let sanitized: String = profile_name
        .trim()
        .to_uppercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    format!("{sanitized}_BROCHART_TACTICAL.jpg")
}

/// Composes the sheet as styled lines in render order.
#[must_use]
pub fn compose_sheet_lines(site: &SiteConfig) -> Vec<SheetLine> {
    let brochart = &site.brochart;
    let mut lines = vec![
        SheetLine::new(brochart.title.clone(), LineStyle::Title),
        SheetLine::new(brochart.version.clone(), LineStyle::Heading),
        SheetLine::new("STATUS: ACTIVE // GRID: ONLINE // PROTOCOL: VISUAL", LineStyle::Body),
        SheetLine::new("", LineStyle::Body),
        SheetLine::new(format!("OPERATIONAL BRIEF: {}", brochart.brief), LineStyle::Body),
        SheetLine::new(format!("PROTOCOL: {}", brochart.protocol), LineStyle::Body),
        SheetLine::new("", LineStyle::Body),
    ];

    for operative in &brochart.operatives {
        let photo = match operative.image_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => "[ PASTE PHOTO HERE ]",
        };
        lines.push(SheetLine::new(
            format!("{}  //  {}  //  {}", operative.codename, operative.comm_channel, photo),
            LineStyle::Body,
        ));
    }

    lines.push(SheetLine::new("", LineStyle::Body));
    lines.push(SheetLine::new(
        "// MAINTAIN VISUAL CONTACT // REFRESH PROTOCOL WEEKLY // END TRANSMISSION",
        LineStyle::Muted,
    ));
    lines.push(SheetLine::new(
        format!("BY {}", site.profile.name.to_uppercase()),
        LineStyle::Muted,
    ));

    lines
}

/// Renders the brochart card and writes it as a JPEG under `export_dir`.
///
/// Requires `brochart.show`; a document without the card has no render
/// target and callers are expected to no-op instead of calling this.
/// Returns the written file path.
pub fn export_brochart_jpeg(site: &SiteConfig, export_dir: &Path) -> Result<PathBuf> {
    anyhow::ensure!(
        site.brochart.show,
        "Brochart is not shown by this document; nothing to export"
    );

    let font = SheetFont::from_system_font().context("No usable font for brochart export")?;
    let lines = compose_sheet_lines(site);

    let accent = parse_hex_rgb(&site.meta.theme.accent).unwrap_or(FALLBACK_ACCENT);
    let background = parse_hex_rgb(&site.meta.theme.background).unwrap_or(FALLBACK_BACKGROUND);
    let muted = (
        midpoint(accent.0, background.0),
        midpoint(accent.1, background.1),
        midpoint(accent.2, background.2),
    );

    let image = render_sheet(&font, &lines, accent, muted, background);

    fs::create_dir_all(export_dir).with_context(|| {
        format!("Failed to create export directory: {}", export_dir.display())
    })?;

    // Temp file + rename so a failed encode never leaves a partial export.
    let path = export_dir.join(export_file_name(&site.profile.name));
    let temp_path = path.with_extension("jpg.tmp");
    let file = File::create(&temp_path)
        .with_context(|| format!("Failed to create export file: {}", temp_path.display()))?;
    let writer = BufWriter::new(file);
    if let Err(e) = image
        .write_with_encoder(JpegEncoder::new_with_quality(writer, EXPORT_JPEG_QUALITY))
        .with_context(|| format!("Failed to encode JPEG: {}", path.display()))
    {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    fs::rename(&temp_path, &path)
        .with_context(|| format!("Failed to rename export file to: {}", path.display()))?;

    info!("exported brochart to {}", path.display());
    Ok(path)
}

fn midpoint(a: u8, b: u8) -> u8 {
    ((u16::from(a) + u16::from(b)) / 2) as u8
}

fn render_sheet(
    font: &SheetFont,
    lines: &[SheetLine],
    accent: (u8, u8, u8),
    muted: (u8, u8, u8),
    background: (u8, u8, u8),
) -> RgbImage {
    let content_width = lines
        .iter()
        .map(|line| font.line_width(&line.text, line.style.font_size()).ceil() as u32)
        .max()
        .unwrap_or(0);
    let width = (content_width + 2 * MARGIN).max(MIN_SHEET_WIDTH);

    let content_height: f32 = lines
        .iter()
        .map(|line| font.line_height(line.style.font_size()))
        .sum();
    let height = content_height.ceil() as u32 + 2 * MARGIN;

    let mut image = RgbImage::from_pixel(
        width,
        height,
        image::Rgb([background.0, background.1, background.2]),
    );

    let mut cursor_y = MARGIN as f32;
    for line in lines {
        let size = line.style.font_size();
        let color = match line.style {
            LineStyle::Title | LineStyle::Heading => accent,
            LineStyle::Body => accent,
            LineStyle::Muted => muted,
        };

        if !line.text.is_empty() {
            let baseline = cursor_y + font.ascent(size);
            font.draw_line(&mut image, &line.text, size, MARGIN as f32, baseline, color);
        }
        cursor_y += font.line_height(size);
    }

    image
}
