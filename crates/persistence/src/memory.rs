// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory store used when no database is configured.

use std::collections::BTreeMap;

use time::OffsetDateTime;
use tracing::debug;
use workplace_finder_audit::{ImportLogEntry, newest_first};
use workplace_finder_domain::WorkplaceRecord;

use crate::error::PersistenceError;
use crate::store::{UpsertOutcome, WorkplaceQuery, WorkplaceStore};

/// A process-local store. Contents are lost on restart.
///
/// Identifier counters are owned by the instance, so two stores never
/// share id sequences.
#[derive(Debug)]
pub struct MemoryStore {
    workplaces: BTreeMap<String, WorkplaceRecord>,
    import_logs: Vec<ImportLogEntry>,
    next_workplace_id: i64,
    next_import_id: i64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            workplaces: BTreeMap::new(),
            import_logs: Vec::new(),
            next_workplace_id: 1,
            next_import_id: 1,
        }
    }
}

impl WorkplaceStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn delete_all(&mut self) -> Result<usize, PersistenceError> {
        let removed: usize = self.workplaces.len();
        self.workplaces.clear();
        debug!(removed, "Cleared in-memory workplaces");
        Ok(removed)
    }

    fn upsert_by_key(
        &mut self,
        record: &WorkplaceRecord,
    ) -> Result<UpsertOutcome, PersistenceError> {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let mut stored: WorkplaceRecord = record.clone();
        stored.updated_at = Some(now);

        if let Some(existing) = self.workplaces.get(&record.place_number) {
            stored.workplace_id = existing.workplace_id;
            stored.created_at = existing.created_at;
            self.workplaces.insert(record.place_number.clone(), stored);
            return Ok(UpsertOutcome::Updated);
        }

        stored.workplace_id = Some(self.next_workplace_id);
        stored.created_at = Some(now);
        self.next_workplace_id += 1;
        self.workplaces.insert(record.place_number.clone(), stored);
        Ok(UpsertOutcome::Inserted)
    }

    fn find(&mut self, query: &WorkplaceQuery) -> Result<Vec<WorkplaceRecord>, PersistenceError> {
        Ok(self
            .workplaces
            .values()
            .filter(|record| query.matches(record))
            .cloned()
            .collect())
    }

    fn count_workplaces(&mut self) -> Result<usize, PersistenceError> {
        Ok(self.workplaces.len())
    }

    fn insert_audit_entry(&mut self, entry: &ImportLogEntry) -> Result<i64, PersistenceError> {
        let import_id: i64 = self.next_import_id;
        self.next_import_id += 1;
        self.import_logs.push(entry.clone().with_id(import_id));
        Ok(import_id)
    }

    fn list_recent(&mut self, limit: usize) -> Result<Vec<ImportLogEntry>, PersistenceError> {
        Ok(newest_first(self.import_logs.clone(), limit))
    }
}
