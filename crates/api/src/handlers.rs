// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler enforces authorization first, validates its input, then
//! talks to the store. Handlers are transport-agnostic; the server crate
//! maps their results onto HTTP.

use std::collections::BTreeMap;

use time::OffsetDateTime;
use tracing::{debug, info};
use workplace_finder_audit::{ImportCounts, ImportLogEntry, RECENT_IMPORTS_LIMIT};
use workplace_finder_domain::{PlaceStatus, WorkplaceRecord};
use workplace_finder_persistence::{WorkplaceQuery, WorkplaceStore};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::ApiError;
use crate::import::{ImportReport, run_import};
use crate::request_response::{
    BlockSummary, BlocksResponse, ImportHistoryResponse, ImportWorkbookRequest,
    ImportWorkbookResponse, SearchRequest, SearchResponse,
};

/// The only supported workplace listing view.
pub const TABLE_VIEW: &str = "table";

/// Replaces the seating data with the contents of an uploaded workbook.
///
/// # Arguments
///
/// * `store` - The backing store
/// * `request` - The uploaded file
/// * `authenticated_actor` - The operator running the import
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an admin
/// - The upload is empty
/// - The workbook is unreadable or carries no header row
/// - The store fails
pub fn import_workbook(
    store: &mut dyn WorkplaceStore,
    request: &ImportWorkbookRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ImportWorkbookResponse, ApiError> {
    AuthorizationService::authorize_import(authenticated_actor)?;

    if request.content.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("file"),
            message: String::from("No file uploaded"),
        });
    }

    let file_name: &str = if request.file_name.trim().is_empty() {
        "upload.xlsx"
    } else {
        request.file_name.trim()
    };

    let report: ImportReport = run_import(
        store,
        &request.content,
        file_name,
        &authenticated_actor.id,
        OffsetDateTime::now_utc(),
    )?;

    let counts: ImportCounts = report.counts();
    Ok(ImportWorkbookResponse {
        success: true,
        import_id: report.log_entry.import_id.unwrap_or_default(),
        total: counts.total_rows,
        inserted: counts.inserted,
        updated: counts.updated,
        skipped: report.skipped,
        errors: report.errors,
    })
}

fn required_param(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).map(str::trim).filter(|v| !v.is_empty())
}

/// Searches workplaces by occupant name or place number.
///
/// A name search only returns occupied places. Both searches are
/// case-insensitive substring matches.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if a parameter is missing or the type
/// is not `name` or `place`, or an error if the store fails.
pub fn search_workplaces(
    store: &mut dyn WorkplaceStore,
    request: &SearchRequest,
) -> Result<SearchResponse, ApiError> {
    let (Some(search_type), Some(q)) = (
        required_param(request.search_type.as_ref()),
        required_param(request.q.as_ref()),
    ) else {
        return Err(ApiError::InvalidInput {
            field: String::from("q"),
            message: String::from("Missing query parameters: type and q are required"),
        });
    };

    let query: WorkplaceQuery = match search_type {
        "name" => WorkplaceQuery::ByEmployeeName(q.to_string()),
        "place" => WorkplaceQuery::ByPlaceNumber(q.to_string()),
        _ => {
            return Err(ApiError::InvalidInput {
                field: String::from("type"),
                message: String::from(r#"Invalid type parameter. Use "name" or "place""#),
            });
        }
    };

    let results: Vec<WorkplaceRecord> = store.find(&query)?;
    debug!(search_type, q, count = results.len(), "Search completed");

    Ok(SearchResponse {
        success: true,
        count: results.len(),
        results,
    })
}

/// Groups records into blocks ordered by block code.
#[must_use]
pub fn group_by_block(records: Vec<WorkplaceRecord>) -> Vec<BlockSummary> {
    let mut blocks: BTreeMap<String, BlockSummary> = BTreeMap::new();

    for record in records {
        let block: &mut BlockSummary =
            blocks
                .entry(record.block_code.clone())
                .or_insert_with(|| BlockSummary {
                    code: record.block_code.clone(),
                    name: record.block_code.clone(),
                    places: Vec::new(),
                    total: 0,
                    occupied: 0,
                });
        block.total += 1;
        if record.status == PlaceStatus::Occupied {
            block.occupied += 1;
        }
        block.places.push(record);
    }

    blocks.into_values().collect()
}

/// Lists every workplace grouped by block.
///
/// # Arguments
///
/// * `store` - The backing store
/// * `view` - The requested view; only `table` is supported
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for any other view, or an error if the
/// store fails.
pub fn list_blocks(
    store: &mut dyn WorkplaceStore,
    view: Option<&str>,
) -> Result<BlocksResponse, ApiError> {
    if view != Some(TABLE_VIEW) {
        return Err(ApiError::InvalidInput {
            field: String::from("view"),
            message: String::from("Only table view is supported"),
        });
    }

    let records: Vec<WorkplaceRecord> = store.find(&WorkplaceQuery::All)?;
    let blocks: Vec<BlockSummary> = group_by_block(records);

    Ok(BlocksResponse {
        success: true,
        blocks,
    })
}

/// Lists the most recent imports, newest first.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the store fails.
pub fn list_import_history(
    store: &mut dyn WorkplaceStore,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ImportHistoryResponse, ApiError> {
    AuthorizationService::authorize_view_import_history(authenticated_actor)?;

    let imports: Vec<ImportLogEntry> = store.list_recent(RECENT_IMPORTS_LIMIT)?;
    info!(
        actor = %authenticated_actor.id,
        count = imports.len(),
        "Listed import history"
    );

    Ok(ImportHistoryResponse {
        success: true,
        imports,
    })
}
