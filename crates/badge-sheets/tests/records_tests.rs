use badge_sheets::*;
use std::io::Write;

const HEADER: &str = "Nome,Número de Inscrição,Data Inscrição\n";

fn parse(csv: &str) -> Result<LoadedRecords> {
    parse_records(csv.as_bytes(), "Nome", "Número de Inscrição")
}

#[test]
fn test_records_sorted_by_name() {
    let csv = format!(
        "{}Carla Dias,3003,01/02/2024 10:00:00\nAna Souza,1001,\nBruno Lima,2002,\n",
        HEADER
    );
    let loaded = parse(&csv).unwrap();

    let names: Vec<&str> = loaded.records.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, vec!["Ana Souza", "Bruno Lima", "Carla Dias"]);

    // Source rows are the 1-based data rows before sorting
    let rows: Vec<usize> = loaded.records.iter().map(|r| r.source_row).collect();
    assert_eq!(rows, vec![2, 3, 1]);
    assert!(loaded.skipped.is_empty());
}

#[test]
fn test_rows_without_name_or_code_are_skipped() {
    let csv = format!("{}Ana,1001,\n,2002,\nBruno,  ,\n   ,,\nCarla,3003,\n", HEADER);
    let loaded = parse(&csv).unwrap();

    assert_eq!(loaded.records.len(), 2);
    let skipped: Vec<usize> = loaded.skipped.iter().map(|s| s.source_row).collect();
    assert_eq!(skipped, vec![2, 3, 4]);
    assert_eq!(loaded.skipped[1].name, "Bruno");
    assert_eq!(loaded.skipped[1].code, "");
}

#[test]
fn test_float_codes_are_cleaned() {
    let csv = format!("{}Ana,12345.0,\nBruno, 777 ,\n", HEADER);
    let loaded = parse(&csv).unwrap();

    assert_eq!(loaded.records[0].code, "12345");
    assert_eq!(loaded.records[1].code, "777");
}

#[test]
fn test_equal_names_keep_file_order() {
    let csv = format!("{}Ana,2,\nAna,1,\n", HEADER);
    let loaded = parse(&csv).unwrap();

    let codes: Vec<&str> = loaded.records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["2", "1"]);
}

#[test]
fn test_missing_column() {
    let result = parse("Name,Code\nAna,1\n");
    match result {
        Err(BadgeError::MissingColumn(column)) => assert_eq!(column, "Nome"),
        other => panic!("Expected MissingColumn error, got {:?}", other),
    }
}

#[test]
fn test_header_with_bom_and_padding() {
    let csv = "\u{feff}Name , Code\nAna,1\n";
    let loaded = parse_records(csv.as_bytes(), "Name", "Code").unwrap();

    assert_eq!(loaded.records, vec![Record::new("Ana", "1", 1)]);
}

#[test]
fn test_short_rows_are_skipped_not_errors() {
    let csv = "Name,Code\nAna\nBruno,2\n";
    let loaded = parse_records(csv.as_bytes(), "Name", "Code").unwrap();

    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.skipped.len(), 1);
}

#[test]
fn test_empty_file_body() {
    let loaded = parse(HEADER).unwrap();
    assert!(loaded.records.is_empty());
    assert!(loaded.skipped.is_empty());
}

#[tokio::test]
async fn test_load_records_from_file() {
    use tempfile::NamedTempFile;

    let mut temp = NamedTempFile::new().unwrap();
    write!(temp, "{}Bruno,2002,\nAna,1001.0,\n", HEADER).unwrap();
    temp.flush().unwrap();

    let loaded = load_records(temp.path(), "Nome", "Número de Inscrição")
        .await
        .unwrap();

    assert_eq!(
        loaded.records,
        vec![Record::new("Ana", "1001", 2), Record::new("Bruno", "2002", 1)]
    );
}

#[tokio::test]
async fn test_load_records_missing_file() {
    let result = load_records("does/not/exist.csv", "Nome", "Código").await;
    assert!(matches!(result, Err(BadgeError::Io(_))));
}

fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_workbook_rows_become_records() {
    let bytes = std::fs::read(fixture("attendees.xlsx")).unwrap();
    let loaded = parse_workbook(bytes, "Nome", "Número de Inscrição").unwrap();

    // Numeric code cells come back without a fractional part
    assert_eq!(
        loaded.records,
        vec![
            Record::new("Ana Souza", "1001", 2),
            Record::new("Bruno Lima", "2002", 4),
            Record::new("Carla Dias", "3003", 1),
        ]
    );
    assert_eq!(
        loaded.skipped,
        vec![SkippedRow {
            source_row: 3,
            name: String::new(),
            code: "4004".to_string(),
        }]
    );
}

#[test]
fn test_workbook_missing_column() {
    let bytes = std::fs::read(fixture("attendees.xlsx")).unwrap();
    let result = parse_workbook(bytes, "Nome", "Code");

    match result {
        Err(BadgeError::MissingColumn(column)) => assert_eq!(column, "Code"),
        other => panic!("Expected MissingColumn error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_load_records_picks_workbook_by_extension() {
    let loaded = load_records(fixture("attendees.xlsx"), "Nome", "Número de Inscrição")
        .await
        .unwrap();

    let names: Vec<&str> = loaded.records.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, vec!["Ana Souza", "Bruno Lima", "Carla Dias"]);
    assert_eq!(loaded.skipped.len(), 1);
}

#[tokio::test]
async fn test_csv_content_with_workbook_extension() {
    use tempfile::Builder;

    let mut temp = Builder::new().suffix(".xlsx").tempfile().unwrap();
    write!(temp, "{}Ana,1001,\n", HEADER).unwrap();
    temp.flush().unwrap();

    let result = load_records(temp.path(), "Nome", "Número de Inscrição").await;
    assert!(matches!(result, Err(BadgeError::Workbook(_))));
}
