// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Import orchestration: parse, replace the workplace set, record the
//! import.
//!
//! The replacement is delete-all followed by one upsert per candidate,
//! with no transaction around it. A storage failure part-way through
//! leaves the rows written so far in place.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use workplace_finder::{CandidateRow, NormalizedSheet, parse_workbook};
use workplace_finder_audit::{ImportCounts, ImportLogEntry};
use workplace_finder_domain::ImportRowError;
use workplace_finder_persistence::{PersistenceError, UpsertOutcome, WorkplaceStore};

use crate::error::ApiError;

/// Number of row errors shown to an operator after an import.
pub const ERROR_PREVIEW_LIMIT: usize = 10;

/// Insert and update counts of one replacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpsertSummary {
    /// Workplaces created.
    pub inserted: usize,
    /// Workplaces replaced.
    pub updated: usize,
}

/// The outcome of a completed import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// The recorded history entry, carrying its id.
    pub log_entry: ImportLogEntry,
    /// Blank rows dropped without error.
    pub skipped: usize,
    /// Every rejected row, in sheet order.
    pub errors: Vec<ImportRowError>,
}

impl ImportReport {
    /// Row counts of the import.
    #[must_use]
    pub const fn counts(&self) -> ImportCounts {
        self.log_entry.counts()
    }
}

/// The first few row errors of an import plus the number left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPreview {
    /// Errors shown, in sheet order.
    pub shown: Vec<ImportRowError>,
    /// Errors not shown.
    pub hidden: usize,
}

impl ErrorPreview {
    /// Builds a preview of at most [`ERROR_PREVIEW_LIMIT`] errors.
    #[must_use]
    pub fn from_errors(errors: &[ImportRowError]) -> Self {
        let shown: Vec<ImportRowError> = errors.iter().take(ERROR_PREVIEW_LIMIT).cloned().collect();
        Self {
            hidden: errors.len() - shown.len(),
            shown,
        }
    }

    /// Returns whether there is nothing to show.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    /// The "+N more" indicator, if any errors were left out.
    #[must_use]
    pub fn more_indicator(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

impl fmt::Display for ErrorPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.shown.iter().map(ToString::to_string).collect();
        write!(f, "{}", lines.join("; "))?;
        if let Some(more) = self.more_indicator() {
            write!(f, " ({more})")?;
        }
        Ok(())
    }
}

/// Replaces the stored workplace set with the candidates.
///
/// Clears the store, then upserts each candidate by place number. Every
/// candidate increments exactly one of the two counters; a place number
/// repeated within the workbook counts as an update.
///
/// # Arguments
///
/// * `store` - The backing store
/// * `candidates` - Accepted rows in sheet order
///
/// # Errors
///
/// Returns an error as soon as the store rejects the delete or an upsert.
pub fn replace_workplaces(
    store: &mut dyn WorkplaceStore,
    candidates: &[CandidateRow],
) -> Result<UpsertSummary, PersistenceError> {
    let removed: usize = store.delete_all()?;
    debug!(removed, backend = store.backend_name(), "Cleared workplaces");

    let mut summary: UpsertSummary = UpsertSummary::default();
    for candidate in candidates {
        match store.upsert_by_key(&candidate.record)? {
            UpsertOutcome::Inserted => summary.inserted += 1,
            UpsertOutcome::Updated => {
                debug!(
                    row = candidate.row,
                    place_number = %candidate.record.place_number,
                    "Place number repeated in workbook"
                );
                summary.updated += 1;
            }
        }
    }

    Ok(summary)
}

/// Runs a full import: parse, replace, record.
///
/// Structural failures (unreadable bytes, no header row) return before
/// the store is touched and are not recorded in the history.
///
/// # Arguments
///
/// * `store` - The backing store
/// * `bytes` - The raw workbook
/// * `file_name` - Name of the uploaded file
/// * `user_name` - Operator running the import
/// * `now` - Completion time recorded in the history
///
/// # Errors
///
/// Returns `ApiError::ImportFailed` for structural failures and
/// `ApiError::Internal` for storage failures.
pub fn run_import(
    store: &mut dyn WorkplaceStore,
    bytes: &[u8],
    file_name: &str,
    user_name: &str,
    now: OffsetDateTime,
) -> Result<ImportReport, ApiError> {
    let sheet: NormalizedSheet = parse_workbook(bytes)?;

    let summary: UpsertSummary = replace_workplaces(store, &sheet.candidates)?;

    let counts: ImportCounts = ImportCounts {
        total_rows: sheet.total_rows,
        inserted: summary.inserted,
        updated: summary.updated,
        errors: sheet.errors.len(),
    };
    let entry: ImportLogEntry =
        ImportLogEntry::new(file_name.to_string(), user_name.to_string(), now, counts);
    let import_id: i64 = store.insert_audit_entry(&entry)?;
    let log_entry: ImportLogEntry = entry.with_id(import_id);

    info!(
        import_id,
        file_name,
        user_name,
        sheet = %sheet.sheet_name,
        total = counts.total_rows,
        inserted = counts.inserted,
        updated = counts.updated,
        errors = counts.errors,
        skipped = sheet.skipped,
        status = %log_entry.status,
        "Import completed"
    );

    let preview: ErrorPreview = ErrorPreview::from_errors(&sheet.errors);
    if !preview.is_empty() {
        warn!(import_id, preview = %preview, "Import rejected rows");
    }

    Ok(ImportReport {
        log_entry,
        skipped: sheet.skipped,
        errors: sheet.errors,
    })
}
