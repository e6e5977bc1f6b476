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
    clippy::all
)]

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Number of import log entries returned by the history read path.
pub const RECENT_IMPORTS_LIMIT: usize = 20;

/// Outcome classification of one import call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportStatus {
    /// Every data row was accepted.
    Success,
    /// The import completed but some rows were rejected.
    Partial,
    /// The import produced no row results.
    ///
    /// Part of the status domain for stored history; the import pipeline
    /// itself never records it.
    Failed,
}

impl ImportStatus {
    /// Derives the status of a completed import from its row error count.
    #[must_use]
    pub const fn from_error_count(errors: usize) -> Self {
        if errors > 0 {
            Self::Partial
        } else {
            Self::Success
        }
    }

    /// Converts this status to its stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Partial => "partial",
            Self::Failed => "failed",
        }
    }
}

impl std::str::FromStr for ImportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "partial" => Ok(Self::Partial),
            "failed" => Ok(Self::Failed),
            _ => Err(format!("Unknown import status: {s}")),
        }
    }
}

impl std::fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Row counts of one completed import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportCounts {
    /// Data rows considered below the header.
    pub total_rows: usize,
    /// Rows that created a new workplace.
    pub inserted: usize,
    /// Rows that replaced an existing workplace.
    pub updated: usize,
    /// Rows rejected with a row error.
    pub errors: usize,
}

/// An immutable record of one completed import.
///
/// Exactly one entry is written per import that reached the upsert
/// phase. Structural failures (unreadable workbook, no header) are never
/// recorded. `import_id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportLogEntry {
    /// Store-assigned identifier.
    #[serde(rename = "id")]
    pub import_id: Option<i64>,
    /// Name of the uploaded file.
    pub file_name: String,
    /// Operator who ran the import.
    pub user_name: String,
    /// When the import completed.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Data rows considered below the header.
    pub total_rows: usize,
    /// Rows that created a new workplace.
    pub inserted: usize,
    /// Rows that replaced an existing workplace.
    pub updated: usize,
    /// Number of rejected rows.
    pub errors: usize,
    /// Outcome classification.
    pub status: ImportStatus,
}

impl ImportLogEntry {
    /// Creates an unpersisted entry for a completed import.
    ///
    /// The status is derived from the error count.
    ///
    /// # Arguments
    ///
    /// * `file_name` - Name of the uploaded file
    /// * `user_name` - Operator who ran the import
    /// * `timestamp` - Completion time
    /// * `counts` - Row counts of the import
    #[must_use]
    pub fn new(
        file_name: String,
        user_name: String,
        timestamp: OffsetDateTime,
        counts: ImportCounts,
    ) -> Self {
        Self {
            import_id: None,
            file_name,
            user_name,
            timestamp,
            total_rows: counts.total_rows,
            inserted: counts.inserted,
            updated: counts.updated,
            errors: counts.errors,
            status: ImportStatus::from_error_count(counts.errors),
        }
    }

    /// Returns a copy of this entry carrying the store-assigned id.
    #[must_use]
    pub fn with_id(mut self, import_id: i64) -> Self {
        self.import_id = Some(import_id);
        self
    }

    /// Returns the row counts recorded by this entry.
    #[must_use]
    pub const fn counts(&self) -> ImportCounts {
        ImportCounts {
            total_rows: self.total_rows,
            inserted: self.inserted,
            updated: self.updated,
            errors: self.errors,
        }
    }
}

/// Orders entries newest first and keeps at most `limit` of them.
///
/// Entries with equal timestamps are ordered by descending id so that the
/// later write wins.
#[must_use]
pub fn newest_first(mut entries: Vec<ImportLogEntry>, limit: usize) -> Vec<ImportLogEntry> {
    entries.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.import_id.cmp(&a.import_id))
    });
    entries.truncate(limit);
    entries
}
