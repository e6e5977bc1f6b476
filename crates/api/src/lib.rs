// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! API boundary for the Workplace Finder.
//!
//! Authorization, input validation and response shaping around the
//! ingestion pipeline and the workplace store.

mod auth;
mod error;
mod handlers;
mod import;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role, authenticate_stub};
pub use error::{ApiError, AuthError};
pub use handlers::{
    TABLE_VIEW, group_by_block, import_workbook, list_blocks, list_import_history,
    search_workplaces,
};
pub use import::{
    ERROR_PREVIEW_LIMIT, ErrorPreview, ImportReport, UpsertSummary, replace_workplaces,
    run_import,
};
pub use request_response::{
    BlockSummary, BlocksResponse, ImportHistoryResponse, ImportWorkbookRequest,
    ImportWorkbookResponse, SearchRequest, SearchResponse,
};
