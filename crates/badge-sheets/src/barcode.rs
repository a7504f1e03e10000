//! QR code rasters for badge codes

use crate::constants::{QR_BORDER_MODULES, QR_MODULE_PX};
use crate::types::{BadgeError, Result};
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use qrcode::{EcLevel, QrCode};

/// Encode `code` as a black-on-white QR code scaled to `size` x `size`.
///
/// Uses the lowest error-correction level and the smallest symbol version
/// that holds the data, framed by a narrow quiet zone.
pub fn encode_qr(code: &str, size: u32) -> Result<GrayImage> {
    let qr = QrCode::with_error_correction_level(code.as_bytes(), EcLevel::L)
        .map_err(|e| BadgeError::Barcode(format!("cannot encode '{}': {}", code, e)))?;

    let modules = qr
        .render::<Luma<u8>>()
        .quiet_zone(false)
        .module_dimensions(QR_MODULE_PX, QR_MODULE_PX)
        .build();

    let border = QR_BORDER_MODULES * QR_MODULE_PX;
    let mut framed = GrayImage::from_pixel(
        modules.width() + 2 * border,
        modules.height() + 2 * border,
        Luma([255]),
    );
    imageops::replace(&mut framed, &modules, border as i64, border as i64);

    Ok(imageops::resize(&framed, size, size, FilterType::Lanczos3))
}
