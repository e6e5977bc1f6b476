// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};
use workplace_finder_audit::ImportLogEntry;
use workplace_finder_domain::{ImportRowError, WorkplaceRecord};

/// API request to replace the seating data from a workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportWorkbookRequest {
    /// Name of the uploaded file, recorded in the import history.
    pub file_name: String,
    /// The raw XLS/XLSX bytes.
    pub content: Vec<u8>,
}

/// API response for a completed import.
///
/// `success` is true whenever the upsert phase completed, even if some
/// rows were rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportWorkbookResponse {
    /// Always true for a completed import.
    pub success: bool,
    /// Identifier of the import history entry.
    pub import_id: i64,
    /// Data rows considered below the header.
    pub total: usize,
    /// Workplaces created.
    pub inserted: usize,
    /// Workplaces replaced.
    pub updated: usize,
    /// Blank rows dropped without error.
    pub skipped: usize,
    /// Every rejected row.
    pub errors: Vec<ImportRowError>,
}

/// API request to search workplaces.
///
/// Both fields arrive as optional query parameters and are validated by
/// the handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// `name` or `place`.
    #[serde(rename = "type")]
    pub search_type: Option<String>,
    /// The text to look for.
    pub q: Option<String>,
}

/// API response for a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Always true for a completed search.
    pub success: bool,
    /// Number of results.
    pub count: usize,
    /// Matching workplaces ordered by place number.
    pub results: Vec<WorkplaceRecord>,
}

/// One block of the seating table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummary {
    /// The block code.
    pub code: String,
    /// Display name of the block.
    pub name: String,
    /// Workplaces in the block, ordered by place number.
    pub places: Vec<WorkplaceRecord>,
    /// Number of workplaces in the block.
    pub total: usize,
    /// Number of occupied workplaces in the block.
    pub occupied: usize,
}

/// API response for the block table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlocksResponse {
    /// Always true for a completed read.
    pub success: bool,
    /// Blocks ordered by code.
    pub blocks: Vec<BlockSummary>,
}

/// API response for the import history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportHistoryResponse {
    /// Always true for a completed read.
    pub success: bool,
    /// Most recent imports, newest first.
    pub imports: Vec<ImportLogEntry>,
}
