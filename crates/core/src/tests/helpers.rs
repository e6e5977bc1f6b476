// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_xlsxwriter::Workbook as XlsxWorkbook;

use crate::{CellValue, Sheet, Workbook};

/// Builds a row of text cells; empty strings become empty cells.
pub fn text_row(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|value| CellValue::from(*value)).collect()
}

/// Builds a single-sheet workbook from text rows.
pub fn single_sheet(name: &str, rows: &[&[&str]]) -> Workbook {
    Workbook::new(vec![Sheet::new(
        name,
        rows.iter().map(|row| text_row(row)).collect(),
    )])
}

/// Writes text rows into an in-memory XLSX file, one entry per sheet.
pub fn xlsx_bytes(sheets: &[(&str, &[&[&str]])]) -> Vec<u8> {
    let mut workbook: XlsxWorkbook = XlsxWorkbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (row_index, row) in rows.iter().enumerate() {
            for (col_index, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                worksheet
                    .write_string(
                        u32::try_from(row_index).unwrap(),
                        u16::try_from(col_index).unwrap(),
                        *value,
                    )
                    .unwrap();
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// Headers of the canonical English export layout.
pub const CANONICAL_HEADERS: &[&str] = &[
    "placeNumber",
    "blockCode",
    "employeeName",
    "department",
    "status",
];
