// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Spreadsheet ingestion for the Workplace Finder.
//!
//! Raw workbook bytes flow one way: decode, locate the header row,
//! resolve columns, normalize each data row. The output is a set of
//! candidate workplaces plus per-row errors, ready for the store.

mod columns;
mod error;
mod header;
mod normalize;
mod workbook;

#[cfg(test)]
mod tests;

pub use columns::{COLUMN_FRAGMENTS, COLUMN_SYNONYMS, Column, ColumnMap, fragments, synonyms};
pub use error::IngestError;
pub use header::{
    HeaderLocation, compact_key, comparison_key, is_header_row, key_contains_fragment,
    locate_header, normalize_cell,
};
pub use normalize::{
    CandidateRow, NormalizedSheet, RowOutcome, normalize_row, normalize_sheet,
    normalize_workbook, parse_workbook, spreadsheet_row_number,
};
pub use workbook::{CellValue, Sheet, Workbook, load_workbook};
