// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workplace mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::OffsetDateTime;
use tracing::{debug, info};
use workplace_finder_domain::WorkplaceRecord;

use super::format_timestamp;
use crate::diesel_schema::workplaces;
use crate::error::PersistenceError;
use crate::queries::workplaces::find_workplace_id;
use crate::store::UpsertOutcome;

/// Deletes every workplace.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_all_workplaces(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let removed: usize = diesel::delete(workplaces::table).execute(conn)?;
    info!(removed, "Deleted all workplaces");
    Ok(removed)
}

/// Inserts a workplace, or replaces the one with the same place number.
///
/// The creation time of a replaced row is kept.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `record` - The workplace to store
/// * `now` - The write time
///
/// # Errors
///
/// Returns an error if the lookup or the write fails.
pub fn upsert_workplace(
    conn: &mut SqliteConnection,
    record: &WorkplaceRecord,
    now: OffsetDateTime,
) -> Result<UpsertOutcome, PersistenceError> {
    let stamp: String = format_timestamp(now)?;

    if let Some(workplace_id) = find_workplace_id(conn, &record.place_number)? {
        debug!(workplace_id, place_number = %record.place_number, "Updating workplace");

        diesel::update(workplaces::table.filter(workplaces::workplace_id.eq(workplace_id)))
            .set((
                workplaces::place_name.eq(&record.place_name),
                workplaces::zone.eq(&record.zone),
                workplaces::block_code.eq(&record.block_code),
                workplaces::place_type.eq(&record.place_type),
                workplaces::category.eq(&record.category),
                workplaces::employee_name.eq(&record.employee_name),
                workplaces::tab_number.eq(&record.tab_number),
                workplaces::department.eq(&record.department),
                workplaces::team.eq(&record.team),
                workplaces::position.eq(&record.position),
                workplaces::status.eq(record.status.as_str()),
                workplaces::coworking_type.eq(&record.coworking_type),
                workplaces::updated_at.eq(&stamp),
            ))
            .execute(conn)?;

        return Ok(UpsertOutcome::Updated);
    }

    diesel::insert_into(workplaces::table)
        .values((
            workplaces::place_number.eq(&record.place_number),
            workplaces::place_name.eq(&record.place_name),
            workplaces::zone.eq(&record.zone),
            workplaces::block_code.eq(&record.block_code),
            workplaces::place_type.eq(&record.place_type),
            workplaces::category.eq(&record.category),
            workplaces::employee_name.eq(&record.employee_name),
            workplaces::tab_number.eq(&record.tab_number),
            workplaces::department.eq(&record.department),
            workplaces::team.eq(&record.team),
            workplaces::position.eq(&record.position),
            workplaces::status.eq(record.status.as_str()),
            workplaces::coworking_type.eq(&record.coworking_type),
            workplaces::created_at.eq(&stamp),
            workplaces::updated_at.eq(&stamp),
        ))
        .execute(conn)?;

    debug!(place_number = %record.place_number, "Inserted workplace");
    Ok(UpsertOutcome::Inserted)
}
