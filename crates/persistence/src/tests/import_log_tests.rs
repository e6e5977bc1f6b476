// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Duration;
use workplace_finder_audit::{ImportLogEntry, ImportStatus, RECENT_IMPORTS_LIMIT};

use super::{create_test_log_entry, create_test_stores, create_test_time};

#[test]
fn test_insert_assigns_increasing_ids() {
    for mut store in create_test_stores() {
        let backend: &str = store.backend_name();
        let first: i64 = store
            .insert_audit_entry(&create_test_log_entry("a.xlsx", create_test_time(), 0))
            .unwrap();
        let second: i64 = store
            .insert_audit_entry(&create_test_log_entry("b.xlsx", create_test_time(), 0))
            .unwrap();

        assert!(second > first, "{backend}");
    }
}

#[test]
fn test_list_recent_round_trips_fields() {
    for mut store in create_test_stores() {
        let backend: &str = store.backend_name();
        let entry: ImportLogEntry = create_test_log_entry("seating.xlsx", create_test_time(), 2);
        let import_id: i64 = store.insert_audit_entry(&entry).unwrap();

        let listed: Vec<ImportLogEntry> = store.list_recent(RECENT_IMPORTS_LIMIT).unwrap();

        assert_eq!(listed.len(), 1, "{backend}");
        assert_eq!(listed[0], entry.with_id(import_id), "{backend}");
        assert_eq!(listed[0].status, ImportStatus::Partial, "{backend}");
    }
}

#[test]
fn test_list_recent_is_newest_first_and_capped() {
    for mut store in create_test_stores() {
        let backend: &str = store.backend_name();
        for minute in 0..25_i64 {
            store
                .insert_audit_entry(&create_test_log_entry(
                    &format!("file-{minute}.xlsx"),
                    create_test_time() + Duration::minutes(minute),
                    0,
                ))
                .unwrap();
        }

        let listed: Vec<ImportLogEntry> = store.list_recent(RECENT_IMPORTS_LIMIT).unwrap();

        assert_eq!(listed.len(), RECENT_IMPORTS_LIMIT, "{backend}");
        assert_eq!(listed[0].file_name, "file-24.xlsx", "{backend}");
        assert_eq!(listed[19].file_name, "file-5.xlsx", "{backend}");
    }
}

#[test]
fn test_import_logs_survive_workplace_delete() {
    for mut store in create_test_stores() {
        let backend: &str = store.backend_name();
        store
            .insert_audit_entry(&create_test_log_entry("a.xlsx", create_test_time(), 0))
            .unwrap();

        store.delete_all().unwrap();

        assert_eq!(store.list_recent(5).unwrap().len(), 1, "{backend}");
    }
}

#[test]
fn test_list_recent_reads_only_requested_rows() {
    for mut store in create_test_stores() {
        let backend: &str = store.backend_name();
        let mut ids: Vec<i64> = Vec::new();
        for minute in 0..5_i64 {
            ids.push(
                store
                    .insert_audit_entry(&create_test_log_entry(
                        &format!("file-{minute}.xlsx"),
                        create_test_time() + Duration::minutes(minute),
                        0,
                    ))
                    .unwrap(),
            );
        }

        let listed: Vec<ImportLogEntry> = store.list_recent(2).unwrap();
        let listed_ids: Vec<Option<i64>> = listed.iter().map(|entry| entry.import_id).collect();

        assert_eq!(listed_ids, vec![Some(ids[4]), Some(ids[3])], "{backend}");
        assert!(store.list_recent(0).unwrap().is_empty(), "{backend}");
    }
}
