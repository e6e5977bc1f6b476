// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The storage interface shared by every backend.

use workplace_finder_audit::ImportLogEntry;
use workplace_finder_domain::{PlaceStatus, WorkplaceRecord};

use crate::error::PersistenceError;

/// Which branch of an upsert was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No record with the key existed; a new one was created.
    Inserted,
    /// A record with the key existed and was replaced.
    Updated,
}

/// Read filters over the workplace collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkplaceQuery {
    /// Every workplace.
    All,
    /// Occupied workplaces whose occupant name contains the text
    /// (case-insensitive).
    ByEmployeeName(String),
    /// Workplaces whose place number contains the text (case-insensitive).
    ByPlaceNumber(String),
}

impl WorkplaceQuery {
    /// Returns whether a record satisfies this filter.
    #[must_use]
    pub fn matches(&self, record: &WorkplaceRecord) -> bool {
        match self {
            Self::All => true,
            Self::ByEmployeeName(text) => {
                record.status == PlaceStatus::Occupied
                    && record
                        .employee_name
                        .to_lowercase()
                        .contains(&text.to_lowercase())
            }
            Self::ByPlaceNumber(text) => record
                .place_number
                .to_lowercase()
                .contains(&text.to_lowercase()),
        }
    }
}

/// A backing store for workplaces and the import audit trail.
///
/// Implementations must provide insert-if-absent / update-if-present
/// semantics keyed by `place_number`, and must report which branch was
/// taken. Reads return workplaces ordered by place number.
pub trait WorkplaceStore: Send {
    /// Short name of the backend, for logging.
    fn backend_name(&self) -> &'static str;

    /// Removes every workplace.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the delete.
    fn delete_all(&mut self) -> Result<usize, PersistenceError>;

    /// Inserts the record, or replaces the one with the same place number.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    fn upsert_by_key(&mut self, record: &WorkplaceRecord)
    -> Result<UpsertOutcome, PersistenceError>;

    /// Returns the workplaces matching the query, ordered by place number.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find(&mut self, query: &WorkplaceQuery) -> Result<Vec<WorkplaceRecord>, PersistenceError>;

    /// Returns the number of stored workplaces.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn count_workplaces(&mut self) -> Result<usize, PersistenceError>;

    /// Appends an import log entry and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    fn insert_audit_entry(&mut self, entry: &ImportLogEntry) -> Result<i64, PersistenceError>;

    /// Returns at most `limit` import log entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_recent(&mut self, limit: usize) -> Result<Vec<ImportLogEntry>, PersistenceError>;
}
