//! HTTP transport implementation.
//!
//! REST API over axum for tutoring front-ends that do not speak MCP.
//! Every tool endpoint answers `200 OK` with a [`ToolResult`]; failures are
//! reported in the body through `success` and `error_message`. Bodies that
//! do not parse, and messages over the configured length, are refused with
//! a 4xx before reaching the orchestrator.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::TutorServer;
use crate::domains::extraction::ConversationSnapshot;
use crate::domains::orchestration::TutorOrchestrator;
use crate::domains::tools::{ToolCatalog, ToolResult};

/// Body of `POST /api/tools/{tool_name}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolRequest {
    #[serde(default)]
    pub parameters: Value,
}

/// Body of `GET /api/tools`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolListing {
    pub available_tools: Vec<&'static str>,
    pub tool_schemas: &'static ToolCatalog,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    orchestrator: Arc<TutorOrchestrator>,
    server_name: Arc<str>,
}

impl AppState {
    pub fn new(server: &TutorServer) -> Self {
        Self {
            orchestrator: server.orchestrator().clone(),
            server_name: Arc::from(server.name()),
        }
    }
}

/// Serve the REST API until the listener fails.
pub async fn serve(server: TutorServer, config: &HttpConfig) -> TransportResult<()> {
    let address = config.bind_address();
    let app = router(AppState::new(&server), config.enable_cors);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| TransportError::Bind {
            address: address.clone(),
            source,
        })?;

    info!(
        %address,
        cors = config.enable_cors,
        "Serving REST: POST /api/orchestrate, POST /api/tools/{{tool_name}}, GET /api/tools"
    );

    axum::serve(listener, app)
        .await
        .map_err(TransportError::Serve)
}

/// Build the REST router.
pub fn router(state: AppState, enable_cors: bool) -> Router {
    let app = Router::new()
        .route("/", get(health_check))
        .route("/api/orchestrate", post(orchestrate))
        .route("/api/tools", get(list_tools))
        .route("/api/tools/{tool_name}", post(invoke_tool))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app.layer(cors)
    } else {
        app
    }
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": &*state.server_name,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn orchestrate(
    State(state): State<AppState>,
    Json(snapshot): Json<ConversationSnapshot>,
) -> Result<Json<ToolResult>, (StatusCode, Json<Value>)> {
    state
        .orchestrator
        .check_message_length(&snapshot)
        .map_err(|e| {
            warn!(user = %snapshot.user_info.user_id, "Rejected message: {}", e);
            (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
        })?;

    Ok(Json(state.orchestrator.orchestrate(&snapshot)))
}

async fn invoke_tool(
    State(state): State<AppState>,
    Path(tool_name): Path<String>,
    Json(request): Json<ToolRequest>,
) -> Json<ToolResult> {
    Json(state.orchestrator.invoke_tool(&tool_name, request.parameters))
}

async fn list_tools(State(state): State<AppState>) -> Json<ToolListing> {
    let tool_schemas = state.orchestrator.list_tools();
    Json(ToolListing {
        available_tools: tool_schemas.keys().map(|tool| tool.as_str()).collect(),
        tool_schemas,
    })
}
