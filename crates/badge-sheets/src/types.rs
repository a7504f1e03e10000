use image::RgbImage;
use std::sync::Arc;
use thiserror::Error;

use crate::layout::CellPlacement;

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Column '{0}' not found in input")]
    MissingColumn(String),
    #[error("No usable font found (tried: {0})")]
    FontNotFound(String),
    #[error("Font error: {0}")]
    Font(String),
    #[error("Barcode error: {0}")]
    Barcode(String),
    #[error("Text measurement failed: {0}")]
    Measure(String),
    #[error("No pages to write")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, BadgeError>;

/// One validated input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub display_name: String,
    pub code: String,
    /// 1-based data row in the source file (header excluded)
    pub source_row: usize,
}

impl Record {
    pub fn new(display_name: impl Into<String>, code: impl Into<String>, source_row: usize) -> Self {
        Self {
            display_name: display_name.into(),
            code: code.into(),
            source_row,
        }
    }
}

/// A composed badge raster for one record
#[derive(Debug, Clone)]
pub struct Badge {
    pub image: RgbImage,
    /// Row of the record this badge was built from
    pub source_row: usize,
    /// Wrapped label lines, top to bottom
    pub lines: Vec<String>,
}

/// One output page with its grid of badges
#[derive(Debug, Clone)]
pub struct Page {
    /// 1-based page ordinal
    pub number: usize,
    /// Output resolution the raster was laid out for
    pub dpi: u32,
    /// Shared with the blocking encoders in `output`
    pub image: Arc<RgbImage>,
    /// Where each badge on this page was drawn, in fill order
    pub placements: Vec<CellPlacement>,
}

impl Page {
    pub fn badge_count(&self) -> usize {
        self.placements.len()
    }
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Portrait dimensions in millimeters
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Page size in whole pixels at `dpi`, truncated toward zero.
    pub fn dimensions_px(self, dpi: u32) -> (u32, u32) {
        let (w, h) = self.dimensions_mm();
        (
            crate::constants::mm_to_px(w, dpi),
            crate::constants::mm_to_px(h, dpi),
        )
    }
}

/// Statistics about a badge batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStatistics {
    /// Badges to lay out
    pub badges: usize,
    pub cols: usize,
    pub rows: usize,
    pub per_page: usize,
    pub pages: usize,
    /// Badges on the final page (0 when there are no pages)
    pub last_page_badges: usize,
}
