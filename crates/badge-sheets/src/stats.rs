use crate::layout::{PageGeometry, create_grid_layout};
use crate::types::BatchStatistics;

/// Calculate how `badge_count` badges will spread over pages
pub fn calculate_statistics(badge_count: usize, geometry: &PageGeometry) -> BatchStatistics {
    let grid = create_grid_layout(geometry);
    let per_page = grid.cell_count();

    let pages = badge_count.div_ceil(per_page);
    let last_page_badges = match badge_count % per_page {
        0 if badge_count > 0 => per_page,
        rest => rest,
    };

    BatchStatistics {
        badges: badge_count,
        cols: grid.cols,
        rows: grid.rows,
        per_page,
        pages,
        last_page_badges,
    }
}
