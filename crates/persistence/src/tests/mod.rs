// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod import_log_tests;

use time::OffsetDateTime;
use time::macros::datetime;
use workplace_finder_audit::{ImportCounts, ImportLogEntry};
use workplace_finder_domain::{PlaceStatus, WorkplaceRecord};

use crate::{MemoryStore, Persistence, WorkplaceStore};

/// Every store implementation, freshly created.
pub fn create_test_stores() -> Vec<Box<dyn WorkplaceStore>> {
    vec![
        Box::new(MemoryStore::new()),
        Box::new(Persistence::new_in_memory().unwrap()),
    ]
}

pub fn create_test_workplace(place_number: &str, employee_name: &str) -> WorkplaceRecord {
    let status: PlaceStatus = if employee_name.is_empty() {
        PlaceStatus::Free
    } else {
        PlaceStatus::Occupied
    };
    let mut record: WorkplaceRecord = WorkplaceRecord::new(place_number, "5.в.01", status);
    record.employee_name = employee_name.to_string();
    record
}

pub fn create_test_log_entry(file_name: &str, at: OffsetDateTime, errors: usize) -> ImportLogEntry {
    ImportLogEntry::new(
        file_name.to_string(),
        String::from("admin"),
        at,
        ImportCounts {
            total_rows: 10,
            inserted: 10 - errors,
            updated: 0,
            errors,
        },
    )
}

pub fn create_test_time() -> OffsetDateTime {
    datetime!(2026-03-01 10:00 UTC)
}
