//! Badge composition: QR block on the left, wrapped name on the right

use crate::constants::{BACKGROUND, LINE_HEIGHT_REFERENCE, TEXT_COLOR};
use crate::font::TextRenderer;
use crate::layout::{TextBlock, wrap_label};
use crate::options::BadgeGeometry;
use crate::types::{Badge, Record, Result};
use image::{DynamicImage, GrayImage, RgbImage, imageops};

/// Compose the badge for `record` around an already scaled QR raster.
///
/// The QR block sits at the left inset, vertically centered. The display name
/// is wrapped to the text region right of it and the resulting block of lines
/// is centered vertically. A measurement failure aborts this badge.
pub fn compose_badge<R>(
    record: &Record,
    qr: &GrayImage,
    geometry: &BadgeGeometry,
    font: &R,
) -> Result<Badge>
where
    R: TextRenderer + ?Sized,
{
    let mut image = RgbImage::from_pixel(geometry.width, geometry.height, BACKGROUND);

    let qr_rgb = DynamicImage::ImageLuma8(qr.clone()).into_rgb8();
    imageops::replace(
        &mut image,
        &qr_rgb,
        geometry.qr_inset as i64,
        geometry.qr_y(),
    );

    let lines = wrap_label(&record.display_name, geometry.text_width() as f32, font)?;
    let line_height = font.line_height(LINE_HEIGHT_REFERENCE)?.ceil() as u32;
    let block = TextBlock::new(lines, line_height, geometry.line_spacing);

    let text_x = geometry.text_x() as i32;
    for (line, top) in block.lines.iter().zip(block.line_tops(geometry.height)) {
        font.draw_text(&mut image, text_x, top, line, TEXT_COLOR);
    }

    Ok(Badge {
        image,
        source_row: record.source_row,
        lines: block.lines,
    })
}
