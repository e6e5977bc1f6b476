// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_xlsxwriter::Workbook as XlsxWorkbook;

use super::helpers::xlsx_bytes;
use crate::{CellValue, IngestError, Workbook, load_workbook};

#[test]
fn test_cell_to_text_renders_whole_numbers_without_fraction() {
    assert_eq!(CellValue::Number(56.0).to_text(), "56");
    assert_eq!(CellValue::Number(1.5).to_text(), "1.5");
    assert_eq!(CellValue::Bool(true).to_text(), "true");
    assert_eq!(CellValue::Empty.to_text(), "");
}

#[test]
fn test_cell_from_empty_str_is_empty() {
    assert_eq!(CellValue::from(""), CellValue::Empty);
    assert_eq!(CellValue::from("x"), CellValue::Text(String::from("x")));
}

#[test]
fn test_load_workbook_reads_sheets_in_order() {
    let bytes: Vec<u8> = xlsx_bytes(&[
        ("Summary", &[&["Report"]]),
        ("Seats", &[&["placeNumber", "status"], &["5.В.01.056", "free"]]),
    ]);

    let workbook: Workbook = load_workbook(&bytes).unwrap();

    assert_eq!(workbook.sheets.len(), 2);
    assert_eq!(workbook.sheets[0].name, "Summary");
    assert_eq!(workbook.sheets[1].name, "Seats");
    assert_eq!(
        workbook.sheets[1].rows[1][0],
        CellValue::Text(String::from("5.В.01.056"))
    );
}

#[test]
fn test_load_workbook_keeps_absolute_row_positions() {
    let bytes: Vec<u8> = xlsx_bytes(&[(
        "Seats",
        &[&[], &[], &["", "placeNumber", "status"], &["", "1.A.01.001", "free"]],
    )]);

    let workbook: Workbook = load_workbook(&bytes).unwrap();
    let rows: &Vec<Vec<CellValue>> = &workbook.sheets[0].rows;

    assert_eq!(rows.len(), 4);
    assert!(rows[0].is_empty());
    assert_eq!(rows[2][1], CellValue::Text(String::from("placeNumber")));
    assert_eq!(rows[3][0], CellValue::Empty);
}

#[test]
fn test_load_workbook_reads_numbers() {
    let mut workbook: XlsxWorkbook = XlsxWorkbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Номер РМ").unwrap();
    worksheet.write_number(1, 0, 56.0).unwrap();
    let bytes: Vec<u8> = workbook.save_to_buffer().unwrap();

    let decoded: Workbook = load_workbook(&bytes).unwrap();

    assert_eq!(decoded.sheets[0].rows[1][0].to_text(), "56");
}

#[test]
fn test_load_workbook_rejects_garbage() {
    let result: Result<Workbook, IngestError> = load_workbook(b"definitely not a workbook");

    assert!(matches!(
        result,
        Err(IngestError::UnreadableWorkbook { .. })
    ));
}
