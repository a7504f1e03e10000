//! Layout data types for badge sheets
//!
//! These types sit between the page/badge configuration and raster
//! composition. They carry pixel geometry only, never image data.

use crate::constants::{GUTTER_X, GUTTER_Y, ITEM_H, ITEM_W, MARGIN_X, MARGIN_Y};

/// Page and item geometry in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub page_width: u32,
    pub page_height: u32,
    pub margin_x: u32,
    pub margin_y: u32,
    pub gutter_x: u32,
    pub gutter_y: u32,
    pub item_width: u32,
    pub item_height: u32,
}

impl PageGeometry {
    /// Geometry for a page of the given size with the default badge grid
    pub fn with_page_size(page_width: u32, page_height: u32) -> Self {
        Self {
            page_width,
            page_height,
            margin_x: MARGIN_X,
            margin_y: MARGIN_Y,
            gutter_x: GUTTER_X,
            gutter_y: GUTTER_Y,
            item_width: ITEM_W,
            item_height: ITEM_H,
        }
    }

    /// Printable width inside the left and right margins
    pub fn area_width(&self) -> u32 {
        self.page_width.saturating_sub(self.margin_x.saturating_mul(2))
    }

    /// Printable height inside the top and bottom margins
    pub fn area_height(&self) -> u32 {
        self.page_height.saturating_sub(self.margin_y.saturating_mul(2))
    }
}

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Resolved grid for one page geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of columns, at least 1
    pub cols: usize,
    /// Number of rows, at least 1
    pub rows: usize,
    /// Width of the occupied grid including inner gutters
    pub grid_width: u64,
    /// Height of the occupied grid including inner gutters
    pub grid_height: u64,
    /// Left edge of the first column; below the margin only for oversized items
    pub offset_x: i64,
    /// Top edge of the first row
    pub offset_y: i64,
    /// Distance between the left edges of adjacent columns
    pub step_x: u64,
    /// Distance between the top edges of adjacent rows
    pub step_y: u64,
}

impl GridLayout {
    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }
}

/// Where one item lands on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPlacement {
    /// Index of the item in the full input sequence
    pub item_index: usize,
    pub position: GridPosition,
    /// Left edge in page pixels
    pub x: i64,
    /// Top edge in page pixels
    pub y: i64,
}

/// Items assigned to one page
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    /// 1-based page ordinal
    pub number: usize,
    pub placements: Vec<CellPlacement>,
}
