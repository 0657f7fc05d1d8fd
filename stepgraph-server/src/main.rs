//! HTTP server exposing the workflow engine: create graphs from declarative
//! specs, run them against an initial state, and fetch run records.
//!
//! Graphs and runs live in in-memory maps for the lifetime of the process.
//! Configure via env: LISTEN (default 0.0.0.0:8000), RUST_LOG. Load .env
//! with dotenv.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{Path, State},
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use stepgraph::{
    build_pipeline, register_tools, BuildError, GraphSpec, ToolRegistry, Workflow, WorkflowState,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span};

/// Fixed id the demo endpoint stores the data-quality graph under.
const DEMO_GRAPH_ID: &str = "demo-data-quality";

/// Max request body size to buffer (bytes). Larger requests return 413.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Shared state for all routes: the tool registry graphs assemble against,
/// plus the in-memory graph and run stores.
struct AppState {
    registry: ToolRegistry,
    graphs: DashMap<String, Arc<Workflow>>,
    runs: DashMap<String, RunRecord>,
}

/// Stored outcome of one run, returned verbatim by `/graph/state/{run_id}`.
#[derive(Debug, Clone, Serialize)]
struct RunRecord {
    status: String,
    state: WorkflowState,
    logs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RunGraphRequest {
    graph_id: String,
    initial_state: WorkflowState,
}

/// Middleware that logs method, URI, and body size at debug, then forwards
/// the request with the body restored.
async fn log_request_body(request: Request<Body>, next: Next) -> Result<Response, Response> {
    let (parts, body) = request.into_parts();
    let method = parts.method.clone();
    let uri = parts.uri.clone();
    let bytes = to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|e| (StatusCode::PAYLOAD_TOO_LARGE, e.to_string()).into_response())?;
    tracing::debug!(method = %method, uri = %uri, bytes = bytes.len(), "request");
    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

/// Load .env from current directory; if not found, try parent (workspace root
/// when run from the crate dir).
fn load_dotenv() {
    if dotenv::dotenv().is_ok() {
        return;
    }
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(parent) = cwd.parent() {
            let env_path = parent.join(".env");
            if env_path.is_file() {
                let _ = dotenv::from_path(env_path);
            }
        }
    }
}

/// Initializes tracing to stdout with an env-driven filter.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,stepgraph_server=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_state() -> Arc<AppState> {
    let registry = ToolRegistry::new();
    register_tools(&registry);
    Arc::new(AppState {
        registry,
        graphs: DashMap::new(),
        runs: DashMap::new(),
    })
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/graph/create", post(create_graph))
        .route("/graph/run", post(run_graph))
        .route("/graph/state/:run_id", get(get_run_state))
        .route("/demo/create_data_quality", post(create_demo_graph))
        .layer(middleware::from_fn(log_request_body))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                info_span!("request", method = %req.method(), uri = %req.uri())
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    load_dotenv();
    init_tracing();

    let state = build_state();
    let app = router(state);

    let listen = std::env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    info!("listening on http://{}", listen);
    let listener = tokio::net::TcpListener::bind(&listen).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn read_root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the stepgraph API. POST /graph/create to define a graph, POST /graph/run to execute it."
    }))
}

/// Assembles a workflow from the posted spec through the shared registry and
/// stores it under a fresh id. Unknown tool or router names are 400s.
async fn create_graph(
    State(state): State<Arc<AppState>>,
    Json(spec): Json<GraphSpec>,
) -> Result<Json<Value>, ServerError> {
    let workflow = spec.assemble(&state.registry)?;
    let graph_id = uuid::Uuid::new_v4().to_string();
    state.graphs.insert(graph_id.clone(), Arc::new(workflow));
    info!(graph_id = %graph_id, "graph created");
    Ok(Json(json!({
        "graph_id": graph_id,
        "message": "Graph created successfully"
    })))
}

/// Runs a stored graph against the posted initial state.
///
/// Always answers 200 with `{run_id, final_state, logs}`; engine failures are
/// recorded as a `failed` run keeping the initial state, the partial trace,
/// and the error string, so `/graph/state/{run_id}` can tell the two apart.
async fn run_graph(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RunGraphRequest>,
) -> Result<Json<Value>, ServerError> {
    let workflow = state
        .graphs
        .get(&request.graph_id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| ServerError::NotFound("Graph not found".to_string()))?;

    let run_id = uuid::Uuid::new_v4().to_string();
    let record = match workflow.run(request.initial_state.clone()).await {
        Ok(report) => RunRecord {
            status: "completed".to_string(),
            state: report.final_state,
            logs: report.trace,
            error: None,
        },
        Err(failure) => RunRecord {
            status: "failed".to_string(),
            state: request.initial_state,
            logs: failure.trace,
            error: Some(failure.error.to_string()),
        },
    };
    info!(run_id = %run_id, status = %record.status, "graph run finished");

    let response = json!({
        "run_id": run_id,
        "final_state": record.state,
        "logs": record.logs,
    });
    state.runs.insert(run_id, record);
    Ok(Json(response))
}

async fn get_run_state(
    State(state): State<Arc<AppState>>,
    Path(run_id): Path<String>,
) -> Result<Json<RunRecord>, ServerError> {
    let record = state
        .runs
        .get(&run_id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| ServerError::NotFound("Run not found".to_string()))?;
    Ok(Json(record))
}

/// Stores the built-in data-quality pipeline under a fixed id, so clients can
/// run the demo without posting a spec.
async fn create_demo_graph(State(state): State<Arc<AppState>>) -> Json<Value> {
    state
        .graphs
        .insert(DEMO_GRAPH_ID.to_string(), Arc::new(build_pipeline()));
    info!(graph_id = DEMO_GRAPH_ID, "demo graph created");
    Json(json!({
        "graph_id": DEMO_GRAPH_ID,
        "message": "Demo Data Quality graph created"
    }))
}

#[derive(Debug, thiserror::Error)]
enum ServerError {
    /// Graph description failed to assemble (unknown tool or router name).
    #[error("bad request: {0}")]
    Build(#[from] BuildError),
    #[error("not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, msg) = match &self {
            ServerError::Build(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ServerError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
        };
        (status, Json(json!({ "error": { "message": msg } }))).into_response()
    }
}
