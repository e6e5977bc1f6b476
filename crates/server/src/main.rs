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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use workplace_finder_api::{
    ApiError, AuthenticatedActor, BlocksResponse, ImportHistoryResponse, ImportWorkbookRequest,
    ImportWorkbookResponse, Role, SearchRequest, SearchResponse, authenticate_stub,
    import_workbook, list_blocks, list_import_history, search_workplaces,
};
use workplace_finder_persistence::{
    MemoryStore, Persistence, PersistenceError, WorkplaceStore, seed_demo_data,
};

/// Header carrying the operator name.
const OPERATOR_HEADER: &str = "x-operator";

/// Header carrying the operator role.
const ROLE_HEADER: &str = "x-role";

/// Largest accepted workbook upload.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StorageBackend {
    /// Process-local map; contents are lost on restart.
    Memory,
    /// `SQLite` through Diesel.
    Sqlite,
}

/// Workplace Finder Server - HTTP server for seating search and imports
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Storage backend for workplaces and the import history.
    #[arg(
        long,
        value_enum,
        default_value_t = StorageBackend::Sqlite,
        env = "WORKPLACE_FINDER_STORAGE"
    )]
    storage: StorageBackend,

    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "WORKPLACE_FINDER_DATABASE")]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000, env = "WORKPLACE_FINDER_PORT")]
    port: u16,

    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1", env = "WORKPLACE_FINDER_BIND")]
    bind: String,

    /// Load demo workplaces when the store is empty
    #[arg(long, env = "WORKPLACE_FINDER_SEED")]
    seed: bool,
}

/// Application state shared across handlers.
///
/// Every handler locks the store for the duration of its call, so
/// imports never interleave with each other or with reads.
#[derive(Clone)]
struct AppState {
    /// The selected workplace store.
    store: Arc<Mutex<Box<dyn WorkplaceStore>>>,
}

impl AppState {
    fn new(store: Box<dyn WorkplaceStore>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

/// Query parameters for the import endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportQuery {
    /// Name of the uploaded file.
    file_name: Option<String>,
}

/// Query parameters for the workplace listing.
#[derive(Debug, Clone, Default, Deserialize)]
struct WorkplacesQuery {
    /// The requested view.
    view: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Always false.
    success: bool,
    /// Error message.
    error: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            success: false,
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            ApiError::Unauthorized { .. } => Self {
                status: StatusCode::FORBIDDEN,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } | ApiError::ImportFailed { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: String::from("Internal server error"),
                }
            }
        }
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Builds the calling actor from the operator headers.
///
/// A missing or unknown role is treated as a viewer.
fn actor_from_headers(headers: &HeaderMap) -> Result<AuthenticatedActor, HttpError> {
    let operator: &str = header_value(headers, OPERATOR_HEADER);
    let role: Role = Role::parse(header_value(headers, ROLE_HEADER)).unwrap_or(Role::Viewer);

    authenticate_stub(operator.to_string(), role)
        .map_err(|err| HttpError::from(ApiError::from(err)))
}

/// Handler for GET `/api/search` endpoint.
///
/// Searches workplaces by occupant name or place number.
async fn handle_search(
    AxumState(app_state): AxumState<AppState>,
    Query(request): Query<SearchRequest>,
) -> Result<Json<SearchResponse>, HttpError> {
    info!(
        search_type = ?request.search_type,
        q = ?request.q,
        "Handling search request"
    );

    let mut store = app_state.store.lock().await;
    let response: SearchResponse = search_workplaces(&mut **store, &request)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/api/workplaces` endpoint.
///
/// Lists every workplace grouped by block.
async fn handle_list_workplaces(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<WorkplacesQuery>,
) -> Result<Json<BlocksResponse>, HttpError> {
    info!(view = ?query.view, "Handling list_workplaces request");

    let mut store = app_state.store.lock().await;
    let response: BlocksResponse = list_blocks(&mut **store, query.view.as_deref())?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/api/admin/import` endpoint.
///
/// Replaces the seating data with the uploaded workbook.
async fn handle_import(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ImportQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ImportWorkbookResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(
        actor_id = %actor.id,
        file_name = ?query.file_name,
        bytes = body.len(),
        "Handling import request"
    );

    let request: ImportWorkbookRequest = ImportWorkbookRequest {
        file_name: query.file_name.unwrap_or_default(),
        content: body.to_vec(),
    };

    let mut store = app_state.store.lock().await;
    let response: ImportWorkbookResponse = import_workbook(&mut **store, &request, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/api/admin/imports` endpoint.
///
/// Lists the most recent imports.
async fn handle_list_imports(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<ImportHistoryResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(actor_id = %actor.id, "Handling list_imports request");

    let mut store = app_state.store.lock().await;
    let response: ImportHistoryResponse = list_import_history(&mut **store, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(handle_search))
        .route("/api/workplaces", get(handle_list_workplaces))
        .route("/api/admin/import", post(handle_import))
        .route("/api/admin/imports", get(handle_list_imports))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(app_state)
}

/// Opens the store selected on the command line.
fn open_store(args: &Args) -> Result<Box<dyn WorkplaceStore>, PersistenceError> {
    match args.storage {
        StorageBackend::Memory => {
            if args.database.is_some() {
                warn!("Ignoring --database with in-memory storage");
            }
            info!("Using in-memory store");
            Ok(Box::new(MemoryStore::new()))
        }
        StorageBackend::Sqlite => {
            let persistence: Persistence = if let Some(db_path) = &args.database {
                info!("Using file-based database at: {}", db_path);
                Persistence::new_with_file(db_path)?
            } else {
                info!("Using in-memory database");
                Persistence::new_in_memory()?
            };
            Ok(Box::new(persistence))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Workplace Finder Server");

    let mut store: Box<dyn WorkplaceStore> = open_store(&args)?;
    if args.seed {
        let seeded: usize = seed_demo_data(&mut *store)?;
        info!(seeded, "Seed step finished");
    }

    let app: Router = build_router(AppState::new(store));

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use rust_xlsxwriter::Workbook as XlsxWorkbook;
    use tower::ServiceExt;

    /// Helper to create test app state with a seeded in-memory store.
    fn create_test_app_state() -> AppState {
        let mut store: MemoryStore = MemoryStore::new();
        seed_demo_data(&mut store).expect("Failed to seed demo data");
        AppState::new(Box::new(store))
    }

    /// Helper to create test app state backed by in-memory `SQLite`.
    fn create_sqlite_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState::new(Box::new(persistence))
    }

    /// Writes a canonical-layout workbook with two valid rows and one
    /// row missing its block.
    fn create_test_workbook() -> Vec<u8> {
        let rows: [[&str; 5]; 4] = [
            ["placeNumber", "blockCode", "employeeName", "department", "status"],
            ["9.А.01.001", "9.а.01", "Орлова Вера", "ИТ", "occupied"],
            ["9.А.01.002", "9.а.01", "", "", "free"],
            ["77", "", "Белов Илья", "ИТ", "occupied"],
        ];
        let mut workbook: XlsxWorkbook = XlsxWorkbook::new();
        let worksheet = workbook.add_worksheet();
        for (row_index, row) in rows.iter().enumerate() {
            for (col_index, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                worksheet
                    .write_string(
                        u32::try_from(row_index).unwrap(),
                        u16::try_from(col_index).unwrap(),
                        *value,
                    )
                    .unwrap();
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    fn import_request(role: &str, body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/admin/import?fileName=seating.xlsx")
            .header("x-operator", "ops")
            .header("x-role", role)
            .body(Body::from(body))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_search_by_name_returns_results() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(get_request(
                "/api/search?type=name&q=%D0%B8%D0%B2%D0%B0%D0%BD%D0%BE%D0%B2",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let json: serde_json::Value = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 1);
        assert_eq!(json["results"][0]["placeNumber"], "5.А.01.001");
    }

    #[tokio::test]
    async fn test_search_without_query_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response = app.oneshot(get_request("/api/search?type=name")).await.unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        let json: serde_json::Value = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(
            json["error"],
            "Missing query parameters: type and q are required"
        );
    }

    #[tokio::test]
    async fn test_search_with_unknown_type_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(get_request("/api/search?type=team&q=QA"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_workplaces_table_view() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(get_request("/api/workplaces?view=table"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let json: serde_json::Value = body_json(response).await;
        assert_eq!(json["blocks"].as_array().unwrap().len(), 4);
        assert_eq!(json["blocks"][0]["total"], 4);
        assert_eq!(json["blocks"][0]["occupied"], 3);
    }

    #[tokio::test]
    async fn test_list_workplaces_rejects_other_views() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(get_request("/api/workplaces?view=map"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        let json: serde_json::Value = body_json(response).await;
        assert_eq!(json["error"], "Only table view is supported");
    }

    #[tokio::test]
    async fn test_import_as_admin_replaces_workplaces() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        let response = app
            .clone()
            .oneshot(import_request("admin", create_test_workbook()))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let json: serde_json::Value = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["total"], 3);
        assert_eq!(json["inserted"], 2);
        assert_eq!(json["updated"], 0);
        assert_eq!(json["errors"][0]["row"], 4);

        let mut store = app_state.store.lock().await;
        assert_eq!(store.count_workplaces().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_import_as_viewer_is_forbidden() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        let response = app
            .oneshot(import_request("viewer", create_test_workbook()))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
        let json: serde_json::Value = body_json(response).await;
        assert_eq!(json["success"], false);

        let mut store = app_state.store.lock().await;
        assert_eq!(store.count_workplaces().unwrap(), 13);
    }

    #[tokio::test]
    async fn test_import_without_operator_is_unauthorized() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/import")
                    .header("x-role", "admin")
                    .body(Body::from(create_test_workbook()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_import_of_unreadable_file_is_bad_request() {
        let app: Router = build_router(create_sqlite_app_state());

        let response = app
            .oneshot(import_request("admin", b"not a workbook".to_vec()))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        let json: serde_json::Value = body_json(response).await;
        assert!(
            json["error"]
                .as_str()
                .unwrap()
                .starts_with("Import failed:")
        );
    }

    #[tokio::test]
    async fn test_import_history_after_import() {
        let app: Router = build_router(create_sqlite_app_state());

        app.clone()
            .oneshot(import_request("admin", create_test_workbook()))
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/admin/imports")
                    .header("x-operator", "ops")
                    .header("x-role", "admin")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let json: serde_json::Value = body_json(response).await;
        let imports = json["imports"].as_array().unwrap();
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0]["fileName"], "seating.xlsx");
        assert_eq!(imports[0]["userName"], "ops");
        assert_eq!(imports[0]["status"], "partial");
    }

    #[tokio::test]
    async fn test_import_history_requires_admin() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/admin/imports")
                    .header("x-operator", "ops")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[test]
    fn test_args_defaults() {
        let args: Args = Args::parse_from(["workplace-finder-server"]);

        assert_eq!(args.storage, StorageBackend::Sqlite);
        assert_eq!(args.port, 3000);
        assert_eq!(args.bind, "127.0.0.1");
        assert!(args.database.is_none());
        assert!(!args.seed);
    }

    #[test]
    fn test_args_select_memory_store() {
        let args: Args =
            Args::parse_from(["workplace-finder-server", "--storage", "memory", "--seed"]);

        let store: Box<dyn WorkplaceStore> = open_store(&args).unwrap();

        assert_eq!(store.backend_name(), "memory");
        assert!(args.seed);
    }
}
