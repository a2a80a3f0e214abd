//! Error path tests: every failure aborts the whole invocation with no
//! partial output.

use order_tally::error::TallyError;
use order_tally::pipeline::summarize_workbook;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::TempDir;

const HEADERS: [&str; 8] = [
    "Order Number",
    "Order Status",
    "SKU Reference",
    "Price Before Discount",
    "Price After Discount",
    "Total Product Price",
    "Quantity",
    "Product Name",
];

fn write_sheet(workbook: &mut Workbook, name: &str, headers: &[&str], rows: &[Vec<&str>]) {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name).unwrap();
    for (col, header) in headers.iter().enumerate() {
        worksheet.write(0, col as u16, *header).unwrap();
    }
    for (idx, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet.write((idx + 1) as u32, col as u16, *value).unwrap();
        }
    }
}

fn save(workbook: &mut Workbook, path: &Path) {
    workbook.save(path).unwrap();
}

#[test]
fn test_nonexistent_file_is_file_format_error() {
    let err = summarize_workbook("no_such_report.xlsx").unwrap_err();
    assert!(matches!(err, TallyError::FileFormat(_)));
}

#[test]
fn test_non_xlsx_file_is_file_format_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("not_a_workbook.xlsx");
    std::fs::write(&path, "order number,status\n1,completed\n").unwrap();

    let err = summarize_workbook(&path).unwrap_err();
    assert!(matches!(err, TallyError::FileFormat(_)));
}

#[test]
fn test_missing_column_names_sheet_and_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.xlsx");

    // Drop "Quantity" from the header row
    let headers: Vec<&str> = HEADERS.iter().copied().filter(|h| *h != "Quantity").collect();
    let mut workbook = Workbook::new();
    write_sheet(&mut workbook, "January", &headers, &[]);
    save(&mut workbook, &path);

    let err = summarize_workbook(&path).unwrap_err();
    match err {
        TallyError::MissingColumn { sheet, column } => {
            assert_eq!(sheet, "January");
            assert_eq!(column, "Quantity");
        }
        other => panic!("expected MissingColumn, got {:?}", other),
    }
    assert_eq!(
        format!("{}", TallyError::MissingColumn {
            sheet: "January".to_string(),
            column: "Quantity".to_string(),
        }),
        "Missing column 'Quantity' in sheet 'January'"
    );
}

#[test]
fn test_empty_sheet_is_missing_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Empty").unwrap();
    save(&mut workbook, &path);

    let err = summarize_workbook(&path).unwrap_err();
    assert!(matches!(err, TallyError::MissingColumn { .. }));
}

#[test]
fn test_bad_currency_is_parse_error_with_context() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.xlsx");

    let mut workbook = Workbook::new();
    write_sheet(
        &mut workbook,
        "January",
        &HEADERS,
        &[vec!["ORD-1", "completed", "A", "100", "100", "Rp15,000", "1", "Widget"]],
    );
    save(&mut workbook, &path);

    let err = summarize_workbook(&path).unwrap_err();
    match &err {
        TallyError::Parse(msg) => {
            assert!(msg.contains("January"));
            assert!(msg.contains("Rp15,000"));
            assert!(msg.contains("Total Product Price"));
        }
        other => panic!("expected Parse, got {:?}", other),
    }
}

#[test]
fn test_bad_quantity_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.xlsx");

    let mut workbook = Workbook::new();
    write_sheet(
        &mut workbook,
        "Orders",
        &HEADERS,
        &[vec!["ORD-1", "completed", "A", "100", "100", "100", "a few", "Widget"]],
    );
    save(&mut workbook, &path);

    let err = summarize_workbook(&path).unwrap_err();
    assert!(matches!(err, TallyError::Parse(_)));
    assert!(err.to_string().contains("invalid quantity"));
}

#[test]
fn test_error_in_later_sheet_aborts_whole_pipeline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.xlsx");

    let mut workbook = Workbook::new();
    write_sheet(
        &mut workbook,
        "Good",
        &HEADERS,
        &[vec!["ORD-1", "completed", "A", "100", "100", "100", "1", "Widget"]],
    );
    write_sheet(
        &mut workbook,
        "Bad",
        &HEADERS,
        &[vec!["ORD-2", "completed", "B", "100", "100", "oops", "1", "Gadget"]],
    );
    save(&mut workbook, &path);

    // The valid first sheet does not produce partial output
    let err = summarize_workbook(&path).unwrap_err();
    assert!(matches!(err, TallyError::Parse(_)));
    assert!(err.to_string().contains("Bad"));
}
