// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Header row detection.
//!
//! Exports rarely put their column titles on row 1: report titles, filter
//! banners and blank lines come first. The locator scans every sheet in
//! workbook order and every row top to bottom, and stops at the first row
//! that carries a place-identifier or occupancy-status title.

use tracing::{debug, info};

use crate::columns::{Column, fragments};
use crate::error::IngestError;
use crate::workbook::{CellValue, Sheet, Workbook};

/// Compact keys that identify a place-identifier column outright.
const PLACE_SIGNAL_KEYS: &[&str] = &["placenumber"];

/// Compact keys that identify a status column outright.
const STATUS_SIGNAL_KEYS: &[&str] = &["status"];

/// Normalizes a cell's text: non-breaking spaces become spaces, then the
/// value is trimmed.
#[must_use]
pub fn normalize_cell(text: &str) -> String {
    text.replace('\u{a0}', " ").trim().to_string()
}

/// Computes the comparison key of a header title.
///
/// The key is lower-cased, keeps only letters, digits and whitespace, and
/// collapses runs of whitespace to one space. `"Ид. РМ"` and `"ид  рм"`
/// share the key `"ид рм"`.
#[must_use]
pub fn comparison_key(text: &str) -> String {
    let kept: String = normalize_cell(text)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// The comparison key with its spaces removed.
///
/// `"Place Number"` and `"placeNumber"` share the compact key
/// `"placenumber"`.
#[must_use]
pub fn compact_key(text: &str) -> String {
    comparison_key(text).replace(' ', "")
}

/// Returns whether a comparison key contains a fragment on word
/// boundaries. `"наименование рм полное"` contains `"наименование рм"`,
/// `"вид рм"` does not contain `"ид рм"`.
#[must_use]
pub fn key_contains_fragment(key: &str, fragment: &str) -> bool {
    format!(" {key} ").contains(&format!(" {fragment} "))
}

fn has_signal(keys: &[String], exact: &[&str], columns: &[Column]) -> bool {
    keys.iter().any(|key| {
        exact.contains(&key.replace(' ', "").as_str())
            || columns.iter().any(|column| {
                fragments(*column)
                    .iter()
                    .any(|fragment| key_contains_fragment(key, fragment))
            })
    })
}

/// Returns whether a row looks like a workplace export header.
#[must_use]
pub fn is_header_row(row: &[CellValue]) -> bool {
    let keys: Vec<String> = row
        .iter()
        .map(|cell| comparison_key(&cell.to_text()))
        .filter(|key| !key.is_empty())
        .collect();

    has_signal(
        &keys,
        PLACE_SIGNAL_KEYS,
        &[Column::PlaceNumber, Column::PlaceId],
    ) || has_signal(&keys, STATUS_SIGNAL_KEYS, &[Column::StatusText])
}

/// The sheet and row that carry the column titles.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderLocation<'a> {
    /// The sheet the header was found on.
    pub sheet: &'a Sheet,
    /// 0-based index of the header row within the sheet.
    pub header_index: usize,
    /// Normalized header titles, one per column.
    pub headers: Vec<String>,
}

impl HeaderLocation<'_> {
    /// The name of the sheet the header was found on.
    #[must_use]
    pub fn sheet_name(&self) -> &str {
        &self.sheet.name
    }
}

/// Finds the first sheet and row that look like a workplace export header.
///
/// # Arguments
///
/// * `workbook` - The decoded workbook
///
/// # Errors
///
/// Returns `IngestError::EmptyWorkbook` if the workbook has no sheets, or
/// `IngestError::NoHeaderFound` if no row of any sheet qualifies.
pub fn locate_header(workbook: &Workbook) -> Result<HeaderLocation<'_>, IngestError> {
    if workbook.sheets.is_empty() {
        return Err(IngestError::EmptyWorkbook);
    }

    for sheet in &workbook.sheets {
        if let Some((header_index, row)) = sheet
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| is_header_row(row))
        {
            let headers: Vec<String> = row
                .iter()
                .map(|cell| normalize_cell(&cell.to_text()))
                .collect();

            info!(
                sheet = %sheet.name,
                header_index,
                columns = headers.len(),
                "Located header row"
            );

            return Ok(HeaderLocation {
                sheet,
                header_index,
                headers,
            });
        }

        debug!(sheet = %sheet.name, "No header row on sheet");
    }

    Err(IngestError::NoHeaderFound {
        sheets_searched: workbook.sheets.len(),
    })
}
