//! Shared constants for badge layout
//!
//! All badge and page measurements are in logical units, which map one to one
//! onto pixels of the output rasters.

use image::Rgb;

// =============================================================================
// Unit Conversion
// =============================================================================

pub const MM_PER_INCH: f32 = 25.4;

pub const INCHES_PER_METER: f64 = 1000.0 / 25.4;

/// PDF points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert millimeters to whole pixels at the given resolution (truncating)
#[inline]
pub fn mm_to_px(mm: f32, dpi: u32) -> u32 {
    (mm / MM_PER_INCH * dpi as f32) as u32
}

/// Convert pixels to PDF points at the given resolution
#[inline]
pub fn px_to_pt(px: u32, dpi: u32) -> f32 {
    px as f32 / dpi as f32 * POINTS_PER_INCH
}

// =============================================================================
// Output
// =============================================================================

/// Default output resolution
pub const DEFAULT_DPI: u32 = 150;

pub const DEFAULT_PDF_NAME: &str = "badges_A4_all.pdf";

// =============================================================================
// Page Grid
// =============================================================================

pub const MARGIN_X: u32 = 8;
pub const MARGIN_Y: u32 = 8;
pub const GUTTER_X: u32 = 8;
pub const GUTTER_Y: u32 = 8;

// =============================================================================
// Badge
// =============================================================================

pub const ITEM_W: u32 = 400;
pub const ITEM_H: u32 = 150;

/// Side of the square QR block
pub const QR_SIZE: u32 = 120;

/// Distance from the badge's left edge to the QR block
pub const QR_INSET: u32 = 15;

/// Space between the QR block and the label text
pub const TEXT_GAP: u32 = 20;

pub const TEXT_RIGHT_INSET: u32 = 15;

/// Vertical space between wrapped label lines
pub const LINE_SPACING: u32 = 5;

pub const FONT_SIZE_PX: f32 = 24.0;

/// Glyph pair measured once to get the label line height
pub const LINE_HEIGHT_REFERENCE: &str = "Ag";

// QR encoding
pub const QR_BORDER_MODULES: u32 = 2;
pub const QR_MODULE_PX: u32 = 6;

// =============================================================================
// Colours
// =============================================================================

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

// =============================================================================
// Input Columns
// =============================================================================

pub const DEFAULT_NAME_COLUMN: &str = "Nome";
pub const DEFAULT_CODE_COLUMN: &str = "Número de Inscrição";
