//! Grid layout calculation
//!
//! Works out how many fixed-size items fit on a page, where the centered grid
//! starts, and which page and cell every item of a sequence lands in.

use super::{CellPlacement, GridLayout, GridPosition, PageGeometry, PagePlan};

// =============================================================================
// Grid Creation
// =============================================================================

/// Create the grid layout for a page geometry.
///
/// Columns and rows are the largest counts whose items plus inner gutters fit
/// in the printable area, clamped to at least 1 so oversized items still get a
/// (too tight) single cell. The occupied grid is centered in the printable
/// area even when it leaves spare space.
pub fn create_grid_layout(geometry: &PageGeometry) -> GridLayout {
    let area_w = geometry.area_width() as u64;
    let area_h = geometry.area_height() as u64;

    let step_x = geometry.item_width as u64 + geometry.gutter_x as u64;
    let step_y = geometry.item_height as u64 + geometry.gutter_y as u64;

    let cols = fit_count(area_w, geometry.gutter_x as u64, step_x);
    let rows = fit_count(area_h, geometry.gutter_y as u64, step_y);

    let grid_width = span(cols, geometry.item_width, geometry.gutter_x);
    let grid_height = span(rows, geometry.item_height, geometry.gutter_y);

    GridLayout {
        cols,
        rows,
        grid_width,
        grid_height,
        offset_x: geometry.margin_x as i64 + centered_offset(area_w, grid_width),
        offset_y: geometry.margin_y as i64 + centered_offset(area_h, grid_height),
        step_x,
        step_y,
    }
}

/// `max(1, floor((area + gutter) / step))`
fn fit_count(area: u64, gutter: u64, step: u64) -> usize {
    (area + gutter).checked_div(step).unwrap_or(0).max(1) as usize
}

/// Extent of `count` items separated by gutters
fn span(count: usize, item: u32, gutter: u32) -> u64 {
    let count = count as u64;
    count * item as u64 + count.saturating_sub(1) * gutter as u64
}

/// Floor of half the spare space; negative when the grid overflows the area
fn centered_offset(area: u64, extent: u64) -> i64 {
    (area as i64 - extent as i64).div_euclid(2)
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Grid position of the `local_index`-th item on a page (row-major)
pub fn grid_position(grid: &GridLayout, local_index: usize) -> GridPosition {
    GridPosition::new(local_index / grid.cols, local_index % grid.cols)
}

/// Top-left pixel of the cell at `pos`
pub fn cell_origin(grid: &GridLayout, pos: GridPosition) -> (i64, i64) {
    (
        grid.offset_x + pos.col as i64 * grid.step_x as i64,
        grid.offset_y + pos.row as i64 * grid.step_y as i64,
    )
}

// =============================================================================
// Page Partitioning
// =============================================================================

/// Split `item_count` items into consecutive pages.
///
/// Every page but the last holds exactly `grid.cell_count()` items; the last
/// holds the remainder. Zero items yield zero pages.
pub fn plan_pages(item_count: usize, grid: &GridLayout) -> Vec<PagePlan> {
    let per_page = grid.cell_count();

    (0..item_count)
        .step_by(per_page)
        .enumerate()
        .map(|(page_idx, first)| {
            let last = (first + per_page).min(item_count);
            let placements = (first..last)
                .map(|item_index| {
                    let position = grid_position(grid, item_index - first);
                    let (x, y) = cell_origin(grid, position);
                    CellPlacement {
                        item_index,
                        position,
                        x,
                        y,
                    }
                })
                .collect();

            PagePlan {
                number: page_idx + 1,
                placements,
            }
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
