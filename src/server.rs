use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::store::TodoStore;
use crate::web;

/// Shared state for all request handlers. Built once at startup and never
/// torn down; SQLite handles concurrent access internally.
pub struct AppState {
    pub store: TodoStore,
}

/// Build the application router: the rendered page with its form routes,
/// and the MCP endpoint at `/mcp`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(web::index))
        .route("/add", post(web::add))
        .route("/complete", post(web::complete))
        .route("/delete", post(web::delete))
        .route("/mcp", post(mcp_post).get(mcp_get))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open the store, bind, and serve until the process is killed.
pub async fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = TodoStore::open(&config.db_path)?;
    let state = Arc::new(AppState { store });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, db = %config.db_path.display(), "listening");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

/// MCP endpoint. The body is taken as a raw string so that malformed JSON
/// maps to a -32700 response instead of an axum rejection.
async fn mcp_post(State(state): State<Arc<AppState>>, body: String) -> Json<JsonRpcResponse> {
    let req: JsonRpcRequest = match serde_json::from_str(&body) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = %e, "malformed JSON-RPC request body");
            return Json(JsonRpcResponse::error("2.0", None, JsonRpcError::parse_error()));
        }
    };

    Json(handlers::dispatch(&req, &state.store).await)
}

/// The endpoint is write-protocol-only; GET always gets -32600.
async fn mcp_get() -> Json<JsonRpcResponse> {
    Json(JsonRpcResponse::error(
        "2.0",
        None,
        JsonRpcError::invalid_request_with("Invalid Request - Use POST method"),
    ))
}
