//! HTTP API gateway for CourseRAG.
//!
//! Exposes the course assistant API (`/api/query`, `/api/courses`), a
//! health check, and the embedded chat frontend.
//!
//! Built on Axum for high performance async HTTP.

pub mod api;
pub mod frontend;

use axum::extract::DefaultBodyLimit;
use axum::{Router, response::Json, routing::get};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use courserag_catalog::{OfflineQueryService, StaticCatalog};
use courserag_config::{AppConfig, GatewayConfig};
use courserag_sessions::InMemorySessionManager;

pub use api::{ApiError, ApiState, QueryRequest, QueryResponse, SharedApiState};

/// Build the full router: API, health check and frontend.
///
/// Layers applied:
/// - Permissive CORS (any origin, method and header)
/// - Request body size limit
/// - HTTP trace logging
pub fn build_router(state: SharedApiState, body_limit_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::api_router(state))
        .merge(frontend::frontend_router())
        .fallback(api::not_found_handler)
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Wire the bundled backends from configuration.
///
/// Sessions are kept in memory, `/api/courses` reports the configured
/// titles, and queries are rejected until a retrieval backend is injected
/// through [`serve`].
pub fn default_state(config: &AppConfig) -> SharedApiState {
    Arc::new(ApiState::new(
        Arc::new(InMemorySessionManager::new(config.session.max_history)),
        Arc::new(OfflineQueryService::default()),
        Arc::new(StaticCatalog::new(config.catalog.course_titles.clone())),
    ))
}

/// Start the gateway HTTP server with the bundled backends.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = default_state(&config);
    info!(
        courses = config.catalog.course_titles.len(),
        max_history = config.session.max_history,
        "Using bundled backends"
    );
    serve(&config.gateway, state).await
}

/// Serve the API with caller-supplied boundaries until the server stops.
pub async fn serve(
    gateway: &GatewayConfig,
    state: SharedApiState,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", gateway.host, gateway.port);
    let app = build_router(state, gateway.body_limit_bytes);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
