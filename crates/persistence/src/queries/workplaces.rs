// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workplace queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use workplace_finder_domain::{PlaceStatus, WorkplaceRecord};

use super::{count_from_db, parse_timestamp};
use crate::diesel_schema::workplaces;
use crate::error::PersistenceError;
use crate::store::WorkplaceQuery;

/// Diesel Queryable struct for workplace rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = workplaces)]
struct WorkplaceRow {
    workplace_id: i64,
    place_number: String,
    place_name: String,
    zone: String,
    block_code: String,
    place_type: String,
    category: String,
    employee_name: String,
    tab_number: String,
    department: String,
    team: String,
    position: String,
    status: String,
    coworking_type: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<WorkplaceRow> for WorkplaceRecord {
    type Error = PersistenceError;

    fn try_from(row: WorkplaceRow) -> Result<Self, Self::Error> {
        Ok(Self {
            workplace_id: Some(row.workplace_id),
            place_number: row.place_number,
            place_name: row.place_name,
            zone: row.zone,
            block_code: row.block_code,
            place_type: row.place_type,
            category: row.category,
            employee_name: row.employee_name,
            tab_number: row.tab_number,
            department: row.department,
            team: row.team,
            position: row.position,
            status: PlaceStatus::from(row.status),
            coworking_type: row.coworking_type,
            created_at: Some(parse_timestamp(&row.created_at)?),
            updated_at: Some(parse_timestamp(&row.updated_at)?),
        })
    }
}

/// Looks up the id of the workplace with the given place number.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no workplace carries the place number.
pub fn find_workplace_id(
    conn: &mut SqliteConnection,
    place_number: &str,
) -> Result<Option<i64>, PersistenceError> {
    Ok(workplaces::table
        .filter(workplaces::place_number.eq(place_number))
        .select(workplaces::workplace_id)
        .first::<i64>(conn)
        .optional()?)
}

/// Returns the workplaces matching the query, ordered by place number.
///
/// Text matching is done after loading. `SQLite`'s `LIKE` folds case for
/// ASCII only and occupant names are mostly Cyrillic.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be converted.
pub fn find_workplaces(
    conn: &mut SqliteConnection,
    query: &WorkplaceQuery,
) -> Result<Vec<WorkplaceRecord>, PersistenceError> {
    debug!(?query, "Querying workplaces");

    let mut statement = workplaces::table
        .order(workplaces::place_number.asc())
        .select(WorkplaceRow::as_select())
        .into_boxed();

    if matches!(query, WorkplaceQuery::ByEmployeeName(_)) {
        statement = statement.filter(workplaces::status.eq(PlaceStatus::Occupied.as_str()));
    }

    let rows: Vec<WorkplaceRow> = statement.load(conn)?;

    let mut records: Vec<WorkplaceRecord> = Vec::with_capacity(rows.len());
    for row in rows {
        let record: WorkplaceRecord = WorkplaceRecord::try_from(row)?;
        if query.matches(&record) {
            records.push(record);
        }
    }
    Ok(records)
}

/// Counts stored workplaces.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_workplaces(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let count: i64 = workplaces::table.count().get_result(conn)?;
    count_from_db(count)
}
