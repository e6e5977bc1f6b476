// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Workplace Finder.
//!
//! Workplaces and the import audit trail live behind the
//! [`WorkplaceStore`] trait, with two implementations:
//!
//! - [`Persistence`]: `SQLite` through Diesel, schema managed by embedded
//!   migrations. Used for file-backed deployments and in-memory tests.
//! - [`MemoryStore`]: a process-local map, selected when no database is
//!   wanted.
//!
//! Both are exercised by the same behavioral test suite.

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use workplace_finder_audit::ImportLogEntry;
use workplace_finder_domain::WorkplaceRecord;

mod backend;
mod diesel_schema;
mod error;
mod memory;
mod mutations;
mod queries;
mod seed;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use memory::MemoryStore;
pub use seed::{demo_workplaces, seed_demo_data};
pub use store::{UpsertOutcome, WorkplaceQuery, WorkplaceStore};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite` persistence adapter for workplaces and import logs.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own shared-cache database, so adapters
    /// created in the same process never see each other's data.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:workplaces_memdb_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }
}

impl WorkplaceStore for Persistence {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    fn delete_all(&mut self) -> Result<usize, PersistenceError> {
        mutations::workplaces::delete_all_workplaces(&mut self.conn)
    }

    fn upsert_by_key(
        &mut self,
        record: &WorkplaceRecord,
    ) -> Result<UpsertOutcome, PersistenceError> {
        mutations::workplaces::upsert_workplace(&mut self.conn, record, OffsetDateTime::now_utc())
    }

    fn find(&mut self, query: &WorkplaceQuery) -> Result<Vec<WorkplaceRecord>, PersistenceError> {
        queries::workplaces::find_workplaces(&mut self.conn, query)
    }

    fn count_workplaces(&mut self) -> Result<usize, PersistenceError> {
        queries::workplaces::count_workplaces(&mut self.conn)
    }

    fn insert_audit_entry(&mut self, entry: &ImportLogEntry) -> Result<i64, PersistenceError> {
        mutations::import_logs::insert_import_log(&mut self.conn, entry)
    }

    fn list_recent(&mut self, limit: usize) -> Result<Vec<ImportLogEntry>, PersistenceError> {
        queries::import_logs::list_recent_imports(&mut self.conn, limit)
    }
}
