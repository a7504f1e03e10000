//! Printable QR-code name badges laid out on fixed-size pages.

mod badge;
mod barcode;
pub mod constants;
mod font;
pub mod layout;
mod options;
mod output;
mod paginate;
mod records;
mod render;
mod stats;
mod types;

pub use badge::compose_badge;
pub use barcode::encode_qr;
pub use font::{FONT_SEARCH_PATHS, LabelFont, TextRenderer};
pub use layout::{PageGeometry, TextMeasure};
pub use options::*;
pub use output::{save_pages, save_pdf};
pub use paginate::paginate;
pub use records::{
    LoadedRecords, SkippedRow, WORKBOOK_EXTENSIONS, is_workbook, load_records, parse_records,
    parse_workbook, sanitize_code,
};
pub use render::{RenderFailure, RenderOutput, render_badges, render_pages};
pub use stats::calculate_statistics;
pub use types::*;
