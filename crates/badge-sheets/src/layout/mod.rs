//! Layout calculation modules for badge sheets
//!
//! This module handles the geometry that turns records into pages:
//! - Label wrapping (which words go on which line, and where lines sit)
//! - Grid layout (columns, rows, centered offsets, page partitioning)

mod grid;
mod types;
mod wrap;

pub use grid::*;
pub use types::*;
pub use wrap::*;
