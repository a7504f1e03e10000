use crate::constants::*;
use crate::layout::PageGeometry;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometry of a single badge, in logical units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct BadgeGeometry {
    pub width: u32,
    pub height: u32,
    /// Side of the square QR block
    pub qr_size: u32,
    /// Left edge of the QR block
    pub qr_inset: u32,
    /// Gap between QR block and text
    pub text_gap: u32,
    pub right_inset: u32,
    pub line_spacing: u32,
    pub font_size_px: f32,
}

impl Default for BadgeGeometry {
    fn default() -> Self {
        Self {
            width: ITEM_W,
            height: ITEM_H,
            qr_size: QR_SIZE,
            qr_inset: QR_INSET,
            text_gap: TEXT_GAP,
            right_inset: TEXT_RIGHT_INSET,
            line_spacing: LINE_SPACING,
            font_size_px: FONT_SIZE_PX,
        }
    }
}

impl BadgeGeometry {
    /// Left edge of the label text
    pub fn text_x(&self) -> u32 {
        self.qr_inset
            .saturating_add(self.qr_size)
            .saturating_add(self.text_gap)
    }

    /// Width the label is wrapped to
    pub fn text_width(&self) -> u32 {
        self.width
            .saturating_sub(self.text_x())
            .saturating_sub(self.right_inset)
    }

    /// Top edge of the vertically centered QR block
    pub fn qr_y(&self) -> i64 {
        (self.height as i64 - self.qr_size as i64).div_euclid(2)
    }
}

/// Complete badge sheet configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct BadgeOptions {
    // Page
    pub paper_size: PaperSize,
    pub dpi: u32,

    // Grid spacing
    pub margin_x: u32,
    pub margin_y: u32,
    pub gutter_x: u32,
    pub gutter_y: u32,

    // Badge
    pub badge: BadgeGeometry,
    pub font_path: Option<PathBuf>,

    // Input
    pub name_column: String,
    pub code_column: String,

    // Output
    pub pdf_name: String,
}

impl Default for BadgeOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            dpi: DEFAULT_DPI,
            margin_x: MARGIN_X,
            margin_y: MARGIN_Y,
            gutter_x: GUTTER_X,
            gutter_y: GUTTER_Y,
            badge: BadgeGeometry::default(),
            font_path: None,
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            code_column: DEFAULT_CODE_COLUMN.to_string(),
            pdf_name: DEFAULT_PDF_NAME.to_string(),
        }
    }
}

impl BadgeOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BadgeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BadgeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(BadgeError::Config("DPI must be greater than zero".to_string()));
        }

        let (page_w, page_h) = self.paper_size.dimensions_mm();
        if page_w <= 0.0 || page_h <= 0.0 {
            return Err(BadgeError::Config(format!(
                "Paper size must be positive, got {} x {} mm",
                page_w, page_h
            )));
        }

        let badge = &self.badge;
        if badge.width == 0 || badge.height == 0 {
            return Err(BadgeError::Config(
                "Badge width and height must be greater than zero".to_string(),
            ));
        }
        if badge.qr_size == 0 {
            return Err(BadgeError::Config("QR size must be greater than zero".to_string()));
        }
        let qr_right = badge.qr_inset.checked_add(badge.qr_size);
        if qr_right.is_none_or(|right| right > badge.width) || badge.qr_size > badge.height {
            return Err(BadgeError::Config(format!(
                "QR block ({}px at x={}) does not fit a {}x{} badge",
                badge.qr_size, badge.qr_inset, badge.width, badge.height
            )));
        }
        if !(badge.font_size_px > 0.0) {
            return Err(BadgeError::Config("Font size must be greater than zero".to_string()));
        }

        if self.name_column.trim().is_empty() || self.code_column.trim().is_empty() {
            return Err(BadgeError::Config("Column names must not be empty".to_string()));
        }
        if self.pdf_name.trim().is_empty() {
            return Err(BadgeError::Config("PDF file name must not be empty".to_string()));
        }

        Ok(())
    }

    /// Pixel geometry of the output pages
    pub fn page_geometry(&self) -> PageGeometry {
        let (page_width, page_height) = self.paper_size.dimensions_px(self.dpi);
        PageGeometry {
            page_width,
            page_height,
            margin_x: self.margin_x,
            margin_y: self.margin_y,
            gutter_x: self.gutter_x,
            gutter_y: self.gutter_y,
            item_width: self.badge.width,
            item_height: self.badge.height,
        }
    }
}
