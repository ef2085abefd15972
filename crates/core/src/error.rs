//! Error types for the CourseRAG domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each boundary has its own error enum. Boundary errors display only their
//! message, because the API layer reports that text to clients verbatim.

use thiserror::Error;

/// The top-level error type for all boundary operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Boundary errors ---

#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("{0}")]
    Storage(String),
}

#[derive(Debug, Clone, Error)]
pub enum QueryError {
    #[error("{0}")]
    Backend(String),

    #[error("Query service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Error)]
pub enum AnalyticsError {
    #[error("{0}")]
    Backend(String),
}
