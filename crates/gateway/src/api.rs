//! The course assistant API.
//!
//! Endpoints:
//!
//! - `POST /api/query`   — Answer a question within a (possibly new) session
//! - `GET  /api/courses` — Course catalog statistics
//!
//! Every error response is JSON of the form `{"detail": "..."}`.

use axum::{
    Router,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};

use courserag_core::analytics::{CourseAnalytics, CourseStats};
use courserag_core::query::{QueryAnswer, QueryService};
use courserag_core::session::{SessionId, SessionManager};

// ── State ─────────────────────────────────────────────────────────────────

/// The boundaries the API mediates between.
pub struct ApiState {
    pub sessions: Arc<dyn SessionManager>,
    pub query: Arc<dyn QueryService>,
    pub analytics: Arc<dyn CourseAnalytics>,
}

pub type SharedApiState = Arc<ApiState>;

impl ApiState {
    pub fn new(
        sessions: Arc<dyn SessionManager>,
        query: Arc<dyn QueryService>,
        analytics: Arc<dyn CourseAnalytics>,
    ) -> Self {
        Self {
            sessions,
            query,
            analytics,
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────────

/// Build the `/api` routes. Wrong verbs on these paths get a JSON 405.
pub fn api_router(state: SharedApiState) -> Router {
    Router::new()
        .route(
            "/api/query",
            post(query_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/api/courses",
            get(courses_handler).fallback(method_not_allowed_handler),
        )
        .with_state(state)
}

// ── Request / Response types ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The question text. May be empty.
    pub query: String,
    /// Existing session (omit, null or empty to start a new one).
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    pub sources: Vec<String>,
    pub session_id: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

// ── Errors ────────────────────────────────────────────────────────────────

/// Everything an API handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be turned into the expected type.
    #[error("{message}")]
    InvalidRequest { status: StatusCode, message: String },

    /// A boundary call failed; its message is reported as-is.
    #[error(transparent)]
    Boundary(#[from] courserag_core::Error),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Not Found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { status, .. } => *status,
            Self::Boundary(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Any body that cannot become a QueryRequest is a validation failure.
        // Only a failed body read (e.g. over the size limit) keeps its status.
        let status = match &rejection {
            JsonRejection::BytesRejection(_) => rejection.status(),
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        Self::InvalidRequest {
            status,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

// ── Contract ──────────────────────────────────────────────────────────────

/// Mediate one query between the session manager and the query service.
///
/// Steps, each performed exactly once and in this order:
/// 1. create a session if the request carries none
/// 2. fetch the session's conversation history
/// 3. ask the query service
/// 4. record the exchange
///
/// The first failing step aborts the rest. Earlier steps are not undone.
pub async fn handle_query(
    state: &ApiState,
    request: QueryRequest,
) -> Result<QueryResponse, courserag_core::Error> {
    let session_id = match request.session_id.filter(|id| !id.is_empty()) {
        Some(id) => SessionId::from(id),
        None => state.sessions.create_session().await?,
    };

    let history = state.sessions.get_conversation_history(&session_id).await?;
    debug!(
        session_id = %session_id,
        has_history = history.is_some(),
        "Conversation history loaded"
    );

    let QueryAnswer { answer, sources } = state.query.query(&request.query, &session_id).await?;

    state
        .sessions
        .add_exchange(&session_id, &request.query, &answer)
        .await?;

    Ok(QueryResponse {
        answer,
        sources,
        session_id: session_id.0,
    })
}

/// Relay the analytics boundary's statistics unchanged.
pub async fn handle_course_stats(state: &ApiState) -> Result<CourseStats, courserag_core::Error> {
    Ok(state.analytics.get_course_analytics().await?)
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn query_handler(
    State(state): State<SharedApiState>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, ApiError> {
    let Json(request) = payload?;

    info!(
        query_len = request.query.len(),
        has_session = request.session_id.is_some(),
        "api/query request"
    );

    let response = handle_query(&state, request).await.map_err(|e| {
        error!(error = %e, "Query failed");
        ApiError::Boundary(e)
    })?;

    Ok(Json(response))
}

async fn courses_handler(
    State(state): State<SharedApiState>,
) -> Result<Json<CourseStats>, ApiError> {
    let stats = handle_course_stats(&state).await.map_err(|e| {
        error!(error = %e, "Course analytics failed");
        ApiError::Boundary(e)
    })?;

    info!(total_courses = stats.total_courses, "api/courses request");
    Ok(Json(stats))
}

async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}

pub(crate) async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}
