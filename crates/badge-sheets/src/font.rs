//! Text measurement and drawing over a TrueType font

use crate::layout::TextMeasure;
use crate::types::{BadgeError, Result};
use image::{Rgb, RgbImage};
use rusttype::{Font, PositionedGlyph, Scale, point};
use std::path::{Path, PathBuf};

/// Fonts tried, in order, when no font path is configured
pub const FONT_SEARCH_PATHS: &[&str] = &[
    "C:\\Windows\\Fonts\\arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];

/// A text backend able to lay out label lines on a badge.
pub trait TextRenderer: TextMeasure {
    /// Height of one line, taken from the ink extent of `reference`
    fn line_height(&self, reference: &str) -> Result<f32>;

    /// Draw `text` with its line box's top-left corner at (`x`, `y`).
    /// Pixels falling outside the canvas are clipped.
    fn draw_text(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>);
}

/// A `rusttype` font at a fixed pixel size
pub struct LabelFont {
    font: Font<'static>,
    scale: Scale,
    source: Option<PathBuf>,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont")
            .field("size_px", &self.scale.y)
            .field("source", &self.source)
            .finish()
    }
}

impl LabelFont {
    pub fn from_bytes(bytes: Vec<u8>, size_px: f32) -> Result<Self> {
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| BadgeError::Font("unsupported or corrupt font data".to_string()))?;
        Ok(Self {
            font,
            scale: Scale::uniform(size_px),
            source: None,
        })
    }

    pub fn from_file(path: impl AsRef<Path>, size_px: f32) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| BadgeError::Font(format!("{}: {}", path.display(), e)))?;
        let mut font = Self::from_bytes(bytes, size_px)
            .map_err(|e| BadgeError::Font(format!("{}: {}", path.display(), e)))?;
        font.source = Some(path.to_owned());
        Ok(font)
    }

    /// Load the configured font, or the first usable one from
    /// [`FONT_SEARCH_PATHS`].
    pub fn load(explicit: Option<&Path>, size_px: f32) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path, size_px);
        }

        for candidate in FONT_SEARCH_PATHS {
            match Self::from_file(candidate, size_px) {
                Ok(font) => {
                    log::debug!("Using font {}", candidate);
                    return Ok(font);
                }
                Err(e) => log::trace!("Skipping font: {}", e),
            }
        }

        Err(BadgeError::FontNotFound(FONT_SEARCH_PATHS.join(", ")))
    }

    /// File the font was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn size_px(&self) -> f32 {
        self.scale.y
    }

    fn ascent(&self) -> f32 {
        self.font.v_metrics(self.scale).ascent
    }

    fn glyphs(&self, text: &str, x: f32, baseline: f32) -> Vec<PositionedGlyph<'static>> {
        self.font
            .layout(text, self.scale, point(x, baseline))
            .collect()
    }

    /// Ink bounding box of `text` laid out at the origin: (min_x, min_y, max_x, max_y)
    fn ink_bounds(&self, text: &str) -> Option<(i32, i32, i32, i32)> {
        self.glyphs(text, 0.0, self.ascent())
            .iter()
            .filter_map(|g| g.pixel_bounding_box())
            .fold(None, |acc, bb| {
                Some(match acc {
                    None => (bb.min.x, bb.min.y, bb.max.x, bb.max.y),
                    Some((x0, y0, x1, y1)) => (
                        x0.min(bb.min.x),
                        y0.min(bb.min.y),
                        x1.max(bb.max.x),
                        y1.max(bb.max.y),
                    ),
                })
            })
    }
}

impl TextMeasure for LabelFont {
    fn text_width(&self, text: &str) -> Result<f32> {
        Ok(self
            .ink_bounds(text)
            .map(|(x0, _, x1, _)| (x1 - x0) as f32)
            .unwrap_or(0.0))
    }
}

impl TextRenderer for LabelFont {
    fn line_height(&self, reference: &str) -> Result<f32> {
        self.ink_bounds(reference)
            .map(|(_, y0, _, y1)| (y1 - y0) as f32)
            .ok_or_else(|| {
                BadgeError::Measure(format!("reference text '{}' has no visible glyphs", reference))
            })
    }

    fn draw_text(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        let (w, h) = canvas.dimensions();
        let baseline = y as f32 + self.ascent();

        for g in self.glyphs(text, x as f32, baseline) {
            let Some(bb) = g.pixel_bounding_box() else {
                continue;
            };
            g.draw(|gx, gy, v| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || py < 0 || px >= w as i32 || py >= h as i32 {
                    return;
                }
                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                for (dst, src) in pixel.0.iter_mut().zip(color.0) {
                    *dst = (*dst as f32 * (1.0 - v) + src as f32 * v).round() as u8;
                }
            });
        }
    }
}
