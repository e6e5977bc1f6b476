// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row normalization.
//!
//! Each data row below the header becomes a candidate workplace, a row
//! error, or nothing at all (blank and structural rows). Rows are
//! processed in sheet order so reported row numbers match the file.

use tracing::{debug, info, warn};
use workplace_finder_domain::{
    ImportRowError, PlaceStatus, WorkplaceRecord, compose_place_number,
    infer_status_from_occupant, is_bare_seat_number, is_block_qualified, is_contractor_status,
    map_status_text, status_label, strip_last_segment, validate_workplace,
};

use crate::columns::{Column, ColumnMap};
use crate::error::IngestError;
use crate::header::{HeaderLocation, locate_header};
use crate::workbook::{CellValue, Workbook, load_workbook};

/// The result of normalizing one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// A well-formed workplace ready for the store.
    Candidate(WorkplaceRecord),
    /// A blank or structural row with no place number.
    Skipped,
    /// A data row missing a required field.
    Rejected(ImportRowError),
}

/// A candidate workplace with the spreadsheet row it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRow {
    /// 1-based spreadsheet row number.
    pub row: usize,
    /// The normalized workplace.
    pub record: WorkplaceRecord,
}

/// Every row outcome of the located sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedSheet {
    /// Name of the sheet the header was found on.
    pub sheet_name: String,
    /// 0-based index of the header row.
    pub header_index: usize,
    /// Number of rows below the header.
    pub total_rows: usize,
    /// Accepted rows in sheet order.
    pub candidates: Vec<CandidateRow>,
    /// Rejected rows in sheet order.
    pub errors: Vec<ImportRowError>,
    /// Rows dropped for lacking a place number.
    pub skipped: usize,
}

/// Converts a 0-based offset below the header into a 1-based row number.
#[must_use]
pub const fn spreadsheet_row_number(header_index: usize, offset: usize) -> usize {
    header_index + 2 + offset
}

fn resolve_place_number(columns: &ColumnMap, row: &[CellValue]) -> String {
    let place: String = columns.get_cell(row, Column::PlaceNumber);
    let place_id: String = columns.get_cell(row, Column::PlaceId);

    if is_bare_seat_number(&place) {
        let room: String = columns.get_cell(row, Column::RoomNumber);
        if !room.is_empty() {
            return compose_place_number(&room, &place);
        }
        if !place_id.is_empty() {
            return place_id;
        }
        return place;
    }

    if place.is_empty() { place_id } else { place }
}

fn resolve_block_code(columns: &ColumnMap, row: &[CellValue], place_number: &str) -> String {
    if let Some(block) =
        strip_last_segment(place_number).filter(|_| is_block_qualified(place_number))
    {
        return block.to_lowercase();
    }

    let explicit: String = columns.get_cell(row, Column::BlockCode);
    if !explicit.is_empty() {
        return explicit.to_lowercase();
    }

    let source: String = [Column::PlaceId, Column::RoomNumber]
        .into_iter()
        .map(|column| columns.get_cell(row, column))
        .find(|value| !value.is_empty())
        .unwrap_or_default();

    strip_last_segment(&source)
        .map_or_else(|| source.clone(), str::to_string)
        .to_lowercase()
}

fn resolve_status(explicit_status: bool, raw_status: &str, explicit_name: &str) -> PlaceStatus {
    let mapped: Option<PlaceStatus> = if explicit_status {
        Some(PlaceStatus::from(raw_status)).filter(|status| !status.is_empty())
    } else {
        map_status_text(raw_status)
    };

    mapped.unwrap_or_else(|| infer_status_from_occupant(explicit_name))
}

fn resolve_employee_name(
    columns: &ColumnMap,
    row: &[CellValue],
    explicit_name: String,
    raw_status: &str,
) -> String {
    if !explicit_name.is_empty() {
        return explicit_name;
    }

    if is_contractor_status(raw_status) {
        let contractor: String = columns.get_cell(row, Column::ContractorName);
        if !contractor.is_empty() {
            return contractor;
        }
    }

    // Canonical enum values are states, not occupant labels.
    if PlaceStatus::from(raw_status).is_canonical() {
        return String::new();
    }

    status_label(raw_status)
}

fn cell_or(columns: &ColumnMap, row: &[CellValue], column: Column, default: &str) -> String {
    let value: String = columns.get_cell(row, column);
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Normalizes one data row.
///
/// # Arguments
///
/// * `columns` - The resolved header lookup
/// * `row` - The raw data row
/// * `row_number` - The 1-based spreadsheet row number, used in errors
#[must_use]
pub fn normalize_row(columns: &ColumnMap, row: &[CellValue], row_number: usize) -> RowOutcome {
    let place_number: String = resolve_place_number(columns, row);
    if place_number.is_empty() {
        return RowOutcome::Skipped;
    }

    let block_code: String = resolve_block_code(columns, row, &place_number);

    let explicit_status: bool = columns.has_column(Column::Status);
    let raw_status: String = if explicit_status {
        columns.get_cell(row, Column::Status)
    } else {
        columns.get_cell(row, Column::StatusText)
    };
    let explicit_name: String = columns.get_cell(row, Column::EmployeeName);

    let status: PlaceStatus = resolve_status(explicit_status, &raw_status, &explicit_name);
    let employee_name: String = resolve_employee_name(columns, row, explicit_name, &raw_status);

    let mut record: WorkplaceRecord = WorkplaceRecord::new(&place_number, &block_code, status);
    record.place_name = cell_or(columns, row, Column::PlaceName, &place_number);
    record.zone = columns.get_cell(row, Column::Zone);
    record.place_type = cell_or(columns, row, Column::PlaceType, &record.place_type);
    record.category = cell_or(columns, row, Column::Category, &record.category);
    record.employee_name = employee_name;
    record.tab_number = columns.get_cell(row, Column::TabNumber);
    record.department = columns.get_cell(row, Column::Department);
    record.team = columns.get_cell(row, Column::Team);
    record.position = columns.get_cell(row, Column::Position);
    record.coworking_type = columns.get_cell(row, Column::CoworkingType);

    match validate_workplace(&record) {
        Ok(()) => RowOutcome::Candidate(record),
        Err(err) => RowOutcome::Rejected(ImportRowError::new(row_number, err.to_string())),
    }
}

/// Normalizes every row below a located header.
#[must_use]
pub fn normalize_sheet(location: &HeaderLocation<'_>) -> NormalizedSheet {
    let columns: ColumnMap = ColumnMap::from_headers(&location.headers);
    let mut result: NormalizedSheet = NormalizedSheet {
        sheet_name: location.sheet_name().to_string(),
        header_index: location.header_index,
        ..NormalizedSheet::default()
    };

    for (offset, row) in location
        .sheet
        .rows
        .iter()
        .skip(location.header_index + 1)
        .enumerate()
    {
        let row_number: usize = spreadsheet_row_number(location.header_index, offset);
        result.total_rows += 1;

        match normalize_row(&columns, row, row_number) {
            RowOutcome::Candidate(record) => result.candidates.push(CandidateRow {
                row: row_number,
                record,
            }),
            RowOutcome::Skipped => result.skipped += 1,
            RowOutcome::Rejected(error) => {
                debug!(row = row_number, error = %error.error, "Rejected row");
                result.errors.push(error);
            }
        }
    }

    info!(
        sheet = %result.sheet_name,
        total = result.total_rows,
        candidates = result.candidates.len(),
        errors = result.errors.len(),
        skipped = result.skipped,
        "Normalized sheet"
    );

    result
}

/// Locates the header in a decoded workbook and normalizes its rows.
///
/// # Errors
///
/// Returns `IngestError::EmptyWorkbook` or `IngestError::NoHeaderFound`
/// if no sheet carries a header row, or `IngestError::NoPlaceColumn` if
/// the header row has neither a place number nor a place id column.
pub fn normalize_workbook(workbook: &Workbook) -> Result<NormalizedSheet, IngestError> {
    let location: HeaderLocation<'_> = locate_header(workbook)?;

    // Without a place column every row is skipped.
    let columns: ColumnMap = ColumnMap::from_headers(&location.headers);
    if !columns.has_column(Column::PlaceNumber) && !columns.has_column(Column::PlaceId) {
        warn!(sheet = %location.sheet_name(), "Header row has no place column");
        return Err(IngestError::NoPlaceColumn {
            sheet: location.sheet_name().to_string(),
        });
    }

    Ok(normalize_sheet(&location))
}

/// Decodes raw workbook bytes and normalizes the located sheet.
///
/// # Arguments
///
/// * `bytes` - The raw XLS/XLSX upload
///
/// # Errors
///
/// Returns an `IngestError` if the bytes cannot be decoded, hold no sheets,
/// carry no header row, or the header has no place column.
pub fn parse_workbook(bytes: &[u8]) -> Result<NormalizedSheet, IngestError> {
    let workbook: Workbook = load_workbook(bytes)?;
    normalize_workbook(&workbook)
}
