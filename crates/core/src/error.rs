// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Structural failures that stop an import before any row is processed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IngestError {
    /// The uploaded bytes are not a readable XLS/XLSX workbook.
    #[error("Unreadable workbook: {reason}")]
    UnreadableWorkbook {
        /// The decoder's description of the problem.
        reason: String,
    },
    /// The workbook decoded but holds no sheets.
    #[error("Workbook contains no sheets")]
    EmptyWorkbook,
    /// No sheet contains a row that looks like a workplace export header.
    #[error("No workplace header row found (searched {sheets_searched} sheet(s))")]
    NoHeaderFound {
        /// The number of sheets that were scanned.
        sheets_searched: usize,
    },
    /// The header row was found but no column holds a place identifier.
    #[error("Header row on sheet '{sheet}' has no place number column")]
    NoPlaceColumn {
        /// The sheet the header was found on.
        sheet: String,
    },
}

impl From<calamine::Error> for IngestError {
    fn from(err: calamine::Error) -> Self {
        Self::UnreadableWorkbook {
            reason: err.to_string(),
        }
    }
}
