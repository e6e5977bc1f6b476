// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_xlsxwriter::Workbook as XlsxWorkbook;
use time::OffsetDateTime;
use time::macros::datetime;
use workplace_finder_persistence::MemoryStore;

use crate::{AuthenticatedActor, ImportWorkbookRequest, Role};

/// Headers of the canonical English export layout.
pub const CANONICAL_HEADERS: &[&str] = &[
    "placeNumber",
    "blockCode",
    "employeeName",
    "department",
    "status",
];

/// Writes text rows into an in-memory XLSX file with one sheet.
pub fn xlsx_bytes(rows: &[&[&str]]) -> Vec<u8> {
    let mut workbook: XlsxWorkbook = XlsxWorkbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Места").unwrap();
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
    workbook.save_to_buffer().unwrap()
}

/// A canonical-layout workbook with the given data rows.
pub fn canonical_workbook(data: &[&[&str]]) -> Vec<u8> {
    let mut rows: Vec<&[&str]> = vec![CANONICAL_HEADERS];
    rows.extend_from_slice(data);
    xlsx_bytes(&rows)
}

/// Four valid rows, one blank row and one row with no block.
pub fn mixed_workbook() -> Vec<u8> {
    canonical_workbook(&[
        &["5.А.01.001", "5.а.01", "Иванов Иван", "ИТ", "occupied"],
        &["5.А.01.002", "5.а.01", "", "", "free"],
        &["", "", "", "", ""],
        &["101", "", "Петров Петр", "ИТ", "occupied"],
        &["5.В.01.056", "5.в.01", "Сидорова Анна", "QA", "occupied"],
        &["5.В.01.057", "5.в.01", "", "", "reserved"],
    ])
}

pub fn create_test_store() -> MemoryStore {
    MemoryStore::new()
}

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("operator"), Role::Admin)
}

pub fn create_test_viewer() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("viewer"), Role::Viewer)
}

pub fn create_import_request(content: Vec<u8>) -> ImportWorkbookRequest {
    ImportWorkbookRequest {
        file_name: String::from("seating.xlsx"),
        content,
    }
}

pub const fn create_test_time() -> OffsetDateTime {
    datetime!(2026-02-01 09:30:00 UTC)
}
