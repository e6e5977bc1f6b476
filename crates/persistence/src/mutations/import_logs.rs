// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Import log mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;
use workplace_finder_audit::ImportLogEntry;

use super::{count_to_db, format_timestamp};
use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::import_logs;
use crate::error::PersistenceError;

/// Appends an import log entry.
///
/// Any id already carried by the entry is ignored.
///
/// # Returns
///
/// The id assigned by the database.
///
/// # Errors
///
/// Returns an error if the entry cannot be converted or written.
pub fn insert_import_log(
    conn: &mut SqliteConnection,
    entry: &ImportLogEntry,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(import_logs::table)
        .values((
            import_logs::file_name.eq(&entry.file_name),
            import_logs::user_name.eq(&entry.user_name),
            import_logs::imported_at.eq(format_timestamp(entry.timestamp)?),
            import_logs::total_rows.eq(count_to_db(entry.total_rows)?),
            import_logs::inserted.eq(count_to_db(entry.inserted)?),
            import_logs::updated.eq(count_to_db(entry.updated)?),
            import_logs::errors.eq(count_to_db(entry.errors)?),
            import_logs::status.eq(entry.status.as_str()),
        ))
        .execute(conn)?;

    let import_id: i64 = get_last_insert_rowid(conn)?;
    info!(import_id, file_name = %entry.file_name, status = %entry.status, "Recorded import");
    Ok(import_id)
}
