//! TrueType text rasterization for image export, using fontdue.

use anyhow::{Context, Result};
use fontdue::{Font, FontSettings};
use image::RgbImage;
use std::fs;
use std::path::PathBuf;

/// A loaded TrueType font that can draw text onto an RGB image.
pub struct SheetFont {
    font: Font,
}

impl SheetFont {
    /// Load a TrueType font from a file path.
    pub fn from_path(path: PathBuf) -> Result<Self> {
        let font_data = fs::read(&path)
            .with_context(|| format!("Failed to read font file: {}", path.display()))?;

        let font = Font::from_bytes(font_data, FontSettings::default())
            .map_err(|e| anyhow::anyhow!("Failed to parse font: {}", e))?;

        Ok(Self { font })
    }

    /// Try to find and load a common system font.
    pub fn from_system_font() -> Result<Self> {
        let font_paths = [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
            "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
            "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "C:\\Windows\\Fonts\\arialbd.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ];

        for path in &font_paths {
            if let Ok(font) = Self::from_path(PathBuf::from(path)) {
                return Ok(font);
            }
        }

        Err(anyhow::anyhow!(
            "Could not find any system fonts. Tried: {:?}",
            font_paths
        ))
    }

    /// Vertical distance between baselines at the given size.
    #[must_use]
    pub fn line_height(&self, size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(size)
            .map_or(size * 1.3, |m| m.new_line_size)
    }

    /// Baseline offset from the top of a line box at the given size.
    #[must_use]
    pub fn ascent(&self, size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(size)
            .map_or(size, |m| m.ascent)
    }

    /// Horizontal advance of a text run at the given size.
    #[must_use]
    pub fn line_width(&self, text: &str, size: f32) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, size).advance_width)
            .sum()
    }

    /// Draws one line of text with its baseline at `baseline_y`.
    ///
    /// Glyph coverage is alpha-blended between the pixel already in the
    /// image and `color`, so text composes over the filled background.
    pub fn draw_line(
        &self,
        image: &mut RgbImage,
        text: &str,
        size: f32,
        origin_x: f32,
        baseline_y: f32,
        color: (u8, u8, u8),
    ) {
        let mut pen_x = origin_x;

        for ch in text.chars() {
            let (metrics, coverage) = self.font.rasterize(ch, size);

            let glyph_x = pen_x + metrics.xmin as f32;
            let glyph_y = baseline_y - metrics.ymin as f32 - metrics.height as f32;

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let alpha = coverage[row * metrics.width + col];
                    if alpha == 0 {
                        continue;
                    }

                    let px = glyph_x + col as f32;
                    let py = glyph_y + row as f32;
                    if px < 0.0 || py < 0.0 {
                        continue;
                    }
                    let (px, py) = (px as u32, py as u32);
                    if px >= image.width() || py >= image.height() {
                        continue;
                    }

                    let pixel = image.get_pixel_mut(px, py);
                    pixel.0 = [
                        blend(pixel.0[0], color.0, alpha),
                        blend(pixel.0[1], color.1, alpha),
                        blend(pixel.0[2], color.2, alpha),
                    ];
                }
            }

            pen_x += metrics.advance_width;
        }
    }
}

fn blend(under: u8, over: u8, alpha: u8) -> u8 {
    let a = u16::from(alpha);
    let blended = (u16::from(under) * (255 - a) + u16::from(over) * a) / 255;
    blended as u8
}
