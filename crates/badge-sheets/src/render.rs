//! Records to pages: QR encoding, badge composition, pagination

use crate::badge::compose_badge;
use crate::barcode::encode_qr;
use crate::font::TextRenderer;
use crate::options::BadgeOptions;
use crate::paginate::paginate;
use crate::types::*;

/// A record that could not be turned into a badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    pub source_row: usize,
    pub message: String,
}

/// Result of rendering a batch of records
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub pages: Vec<Page>,
    pub badges_rendered: usize,
    pub failures: Vec<RenderFailure>,
}

/// Build one badge per record, in record order.
///
/// A record whose QR code or label cannot be produced is logged and
/// reported as a failure; it gets no badge, and the remaining records are
/// still rendered.
pub fn render_badges<R>(
    records: &[Record],
    options: &BadgeOptions,
    font: &R,
) -> (Vec<Badge>, Vec<RenderFailure>)
where
    R: TextRenderer + ?Sized,
{
    let mut badges = Vec::with_capacity(records.len());
    let mut failures = Vec::new();

    for record in records {
        let badge = encode_qr(&record.code, options.badge.qr_size)
            .and_then(|qr| compose_badge(record, &qr, &options.badge, font));

        match badge {
            Ok(badge) => badges.push(badge),
            Err(e) => {
                log::error!("Row {}: failed to build badge: {}", record.source_row, e);
                failures.push(RenderFailure {
                    source_row: record.source_row,
                    message: e.to_string(),
                });
            }
        }
    }

    (badges, failures)
}

/// Render `records` into laid-out pages
pub async fn render_pages<R>(
    records: Vec<Record>,
    options: &BadgeOptions,
    font: R,
) -> Result<RenderOutput>
where
    R: TextRenderer + Send + 'static,
{
    options.validate()?;
    let options = options.clone();

    tokio::task::spawn_blocking(move || render_pages_sync(&records, &options, &font)).await?
}

fn render_pages_sync<R>(records: &[Record], options: &BadgeOptions, font: &R) -> Result<RenderOutput>
where
    R: TextRenderer + ?Sized,
{
    let (badges, failures) = render_badges(records, options, font);
    log::info!(
        "Badges generated: {} | Failed: {}",
        badges.len(),
        failures.len()
    );

    let pages = paginate(&badges, &options.page_geometry(), options.dpi);

    Ok(RenderOutput {
        pages,
        badges_rendered: badges.len(),
        failures,
    })
}
