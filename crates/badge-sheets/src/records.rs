//! Reading badge records from CSV files and spreadsheet workbooks

use crate::types::{BadgeError, Record, Result};
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;
use std::path::Path;

/// A data row left out because its name or code was empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub source_row: usize,
    pub name: String,
    pub code: String,
}

/// Records ready for layout, plus the rows that were dropped
#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    /// Valid records, ascending by display name
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedRow>,
}

/// Spreadsheet extensions read as workbooks; anything else is read as CSV
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Whether `path` names a spreadsheet workbook rather than a CSV file
pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Load records from a CSV file or, by extension, the first sheet of a
/// workbook.
pub async fn load_records(
    path: impl AsRef<Path>,
    name_column: &str,
    code_column: &str,
) -> Result<LoadedRecords> {
    let path = path.as_ref();
    let workbook = is_workbook(path);
    let contents = tokio::fs::read(path).await?;
    let name_column = name_column.to_owned();
    let code_column = code_column.to_owned();

    tokio::task::spawn_blocking(move || {
        if workbook {
            parse_workbook(contents, &name_column, &code_column)
        } else {
            parse_records(contents.as_slice(), &name_column, &code_column)
        }
    })
    .await?
}

/// Parse CSV rows into records.
///
/// The header row must contain both columns. Rows with an empty name or
/// code are skipped, the rest are sorted by name (stable, so rows with equal
/// names keep their file order).
pub fn parse_records(
    input: impl std::io::Read,
    name_column: &str,
    code_column: &str,
) -> Result<LoadedRecords> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let rows = reader.records().map(|row| {
        row.map(|r| r.iter().map(str::to_string).collect::<Vec<_>>())
            .map_err(BadgeError::from)
    });

    collect_records(&headers, rows, name_column, code_column)
}

/// Parse the first sheet of an xlsx/xlsm/xlsb/xls/ods workbook.
///
/// The first row is the header. Numeric cells are read as text, so a code
/// stored as `12345.0` comes back as `12345`. Skip and sort rules match
/// [`parse_records`].
pub fn parse_workbook(bytes: Vec<u8>, name_column: &str, code_column: &str) -> Result<LoadedRecords> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        return Err(BadgeError::MissingColumn(name_column.to_string()));
    };
    let range = range?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();
    let rows = rows.map(|row| Ok::<_, BadgeError>(row.iter().map(cell_text).collect::<Vec<_>>()));

    collect_records(&headers, rows, name_column, code_column)
}

/// Text of a workbook cell, with whole numbers printed without a fraction
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        other => other.to_string(),
    }
}

/// Turn header + data rows into records, applying the skip and sort rules
fn collect_records<I>(
    headers: &[String],
    rows: I,
    name_column: &str,
    code_column: &str,
) -> Result<LoadedRecords>
where
    I: IntoIterator<Item = Result<Vec<String>>>,
{
    let column_index = |wanted: &str| {
        headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim() == wanted.trim())
            .ok_or_else(|| BadgeError::MissingColumn(wanted.to_string()))
    };
    let name_idx = column_index(name_column)?;
    let code_idx = column_index(code_column)?;

    let mut loaded = LoadedRecords::default();

    for (i, row) in rows.into_iter().enumerate() {
        let row = row?;
        let source_row = i + 1;
        let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or_default();
        let name = cell(name_idx).trim().to_string();
        let code = sanitize_code(cell(code_idx));

        if name.is_empty() || code.is_empty() {
            log::warn!(
                "Row {}: missing name or code (name='{}', code='{}')",
                source_row,
                name,
                code
            );
            loaded.skipped.push(SkippedRow {
                source_row,
                name,
                code,
            });
            continue;
        }

        loaded.records.push(Record::new(name, code, source_row));
    }

    loaded
        .records
        .sort_by(|a, b| a.display_name.cmp(&b.display_name));

    Ok(loaded)
}

/// Normalize a registration code cell.
///
/// Spreadsheet exports often turn integer codes into floats, so a purely
/// numeric value ending in `.0` loses the suffix. Anything else is only
/// trimmed.
pub fn sanitize_code(raw: &str) -> String {
    let code = raw.trim();
    match code.strip_suffix(".0") {
        Some(int) if !int.is_empty() && int.bytes().all(|b| b.is_ascii_digit()) => int.to_string(),
        _ => code.to_string(),
    }
}
