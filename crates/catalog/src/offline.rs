//! Query service used when no retrieval backend is configured.

use async_trait::async_trait;
use courserag_core::error::QueryError;
use courserag_core::query::{QueryAnswer, QueryService};
use courserag_core::session::SessionId;
use tracing::warn;

/// Rejects every query with [`QueryError::Unavailable`].
pub struct OfflineQueryService {
    reason: String,
}

impl OfflineQueryService {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for OfflineQueryService {
    fn default() -> Self {
        Self::new("no retrieval backend configured")
    }
}

#[async_trait]
impl QueryService for OfflineQueryService {
    async fn query(&self, _query: &str, session_id: &SessionId) -> Result<QueryAnswer, QueryError> {
        warn!(session_id = %session_id, "Query rejected: {}", self.reason);
        Err(QueryError::Unavailable(self.reason.clone()))
    }
}
