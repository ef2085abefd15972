//! Query boundary — answers a question within a session.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::session::SessionId;

/// An answer together with the sources it cites, in citation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAnswer {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

impl QueryAnswer {
    pub fn new(answer: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            answer: answer.into(),
            sources,
        }
    }
}

/// The Query Service boundary.
///
/// Receives the literal query text and the resolved session id. Retrieval,
/// generation and any use of history are the implementation's business.
#[async_trait]
pub trait QueryService: Send + Sync {
    async fn query(&self, query: &str, session_id: &SessionId) -> Result<QueryAnswer, QueryError>;
}
