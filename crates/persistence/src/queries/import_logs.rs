// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Import log queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use workplace_finder_audit::{ImportLogEntry, ImportStatus};

use super::{count_from_db, parse_timestamp};
use crate::diesel_schema::import_logs;
use crate::error::PersistenceError;

/// Diesel Queryable struct for import log rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = import_logs)]
struct ImportLogRow {
    import_id: i64,
    file_name: String,
    user_name: String,
    imported_at: String,
    total_rows: i64,
    inserted: i64,
    updated: i64,
    errors: i64,
    status: String,
}

impl TryFrom<ImportLogRow> for ImportLogEntry {
    type Error = PersistenceError;

    fn try_from(row: ImportLogRow) -> Result<Self, Self::Error> {
        let status: ImportStatus = row
            .status
            .parse()
            .map_err(PersistenceError::SerializationError)?;

        Ok(Self {
            import_id: Some(row.import_id),
            file_name: row.file_name,
            user_name: row.user_name,
            timestamp: parse_timestamp(&row.imported_at)?,
            total_rows: count_from_db(row.total_rows)?,
            inserted: count_from_db(row.inserted)?,
            updated: count_from_db(row.updated)?,
            errors: count_from_db(row.errors)?,
            status,
        })
    }
}

/// Returns at most `limit` import log entries, newest first.
///
/// Entries are ordered by descending id. Ids grow with every insert, and
/// `imported_at` text does not sort chronologically when fractional
/// seconds vary in width.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be converted.
pub fn list_recent_imports(
    conn: &mut SqliteConnection,
    limit: usize,
) -> Result<Vec<ImportLogEntry>, PersistenceError> {
    let rows: Vec<ImportLogRow> = import_logs::table
        .order(import_logs::import_id.desc())
        .limit(i64::try_from(limit)?)
        .select(ImportLogRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ImportLogEntry::try_from).collect()
}
