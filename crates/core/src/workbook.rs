// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workbook decoding.
//!
//! Raw XLS/XLSX bytes are decoded once into a plain grid of cells so the
//! header search and row normalization never touch the decoder. Grid
//! coordinates are absolute: row 0 is spreadsheet row 1 even when the
//! sheet's used range starts further down.

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;
use tracing::debug;

use crate::error::IngestError;

/// A single decoded cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value.
    Empty,
    /// Text, including ISO date/duration strings.
    Text(String),
    /// Any numeric value (integers, floats, serial dates).
    Number(f64),
    /// A boolean value.
    Bool(bool),
}

impl CellValue {
    /// Renders the cell as text.
    ///
    /// Whole numbers render without a fractional part so that numeric
    /// seat numbers and personnel numbers survive as `"56"`, not `"56.0"`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Self::Number(n) => format!("{n}"),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        if text.is_empty() {
            Self::Empty
        } else {
            Self::Text(text.to_string())
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// One worksheet as a grid of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// The sheet name as shown in the workbook.
    pub name: String,
    /// Rows in spreadsheet order.
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Creates a sheet from a name and its rows.
    #[must_use]
    pub fn new(name: &str, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.to_string(),
            rows,
        }
    }
}

/// A decoded workbook: its sheets in workbook order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    /// Sheets in workbook order.
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Creates a workbook from its sheets.
    #[must_use]
    pub const fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }
}

/// Converts a decoder cell into a grid cell.
#[allow(clippy::cast_precision_loss)]
fn cell_from_data(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => {
            CellValue::from(text.as_str())
        }
        Data::Float(n) => CellValue::Number(*n),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
    }
}

/// Decodes XLS or XLSX bytes into a [`Workbook`].
///
/// The container format is detected from the bytes.
///
/// # Arguments
///
/// * `bytes` - The raw uploaded file
///
/// # Errors
///
/// Returns `IngestError::UnreadableWorkbook` if the bytes are not a
/// workbook or a sheet cannot be decoded.
pub fn load_workbook(bytes: &[u8]) -> Result<Workbook, IngestError> {
    let mut decoded = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    let mut sheets: Vec<Sheet> = Vec::new();
    for name in decoded.sheet_names() {
        let range = decoded.worksheet_range(&name)?;
        let (start_row, start_col): (u32, u32) = range.start().unwrap_or((0, 0));

        let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); start_row as usize];
        for source_row in range.rows() {
            let mut cells: Vec<CellValue> = vec![CellValue::Empty; start_col as usize];
            cells.extend(source_row.iter().map(cell_from_data));
            rows.push(cells);
        }

        debug!(sheet = %name, rows = rows.len(), "Decoded worksheet");
        sheets.push(Sheet { name, rows });
    }

    Ok(Workbook { sheets })
}
