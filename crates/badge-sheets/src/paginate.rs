//! Page composition from a sequence of badges

use crate::constants::BACKGROUND;
use crate::layout::{PageGeometry, create_grid_layout, plan_pages};
use crate::types::{Badge, Page};
use image::{RgbImage, imageops};
use std::sync::Arc;

/// Lay `badges` out on as few pages as possible, in order.
///
/// Each page is a fresh background raster with its badges pasted row-major
/// into the centered grid. The last page may be partially filled. No badges
/// means no pages. Every page is tagged with `dpi`.
pub fn paginate(badges: &[Badge], geometry: &PageGeometry, dpi: u32) -> Vec<Page> {
    let grid = create_grid_layout(geometry);
    log::debug!(
        "Grid {}x{} ({} per page) at ({}, {})",
        grid.cols,
        grid.rows,
        grid.cell_count(),
        grid.offset_x,
        grid.offset_y
    );

    let mismatched = count_mismatched(badges, geometry);
    if mismatched > 0 {
        log::warn!(
            "{} badge(s) are not {}x{} and will overlap their neighbours or leave gaps",
            mismatched,
            geometry.item_width,
            geometry.item_height
        );
    }

    plan_pages(badges.len(), &grid)
        .into_iter()
        .map(|plan| {
            let mut image =
                RgbImage::from_pixel(geometry.page_width, geometry.page_height, BACKGROUND);
            for cell in &plan.placements {
                imageops::replace(&mut image, &badges[cell.item_index].image, cell.x, cell.y);
            }
            Page {
                number: plan.number,
                dpi,
                image: Arc::new(image),
                placements: plan.placements,
            }
        })
        .collect()
}

/// Badges whose raster differs from the grid's cell size
fn count_mismatched(badges: &[Badge], geometry: &PageGeometry) -> usize {
    let cell = (geometry.item_width, geometry.item_height);
    badges.iter().filter(|b| b.image.dimensions() != cell).count()
}
