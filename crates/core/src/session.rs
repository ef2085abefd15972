//! Session boundary — opaque session ids and their exchange history.
//!
//! A session is an append-only log of (query, answer) exchanges owned by a
//! [`SessionManager`]. The API layer never inspects ids; it only passes them
//! back to the manager and to the query service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SessionError;

/// Opaque, server-assigned session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One question and the answer that was given to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub query: String,
    pub answer: String,
}

impl Exchange {
    pub fn new(query: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            answer: answer.into(),
        }
    }
}

/// The Session Manager boundary.
///
/// Implementations: in-memory (`courserag-sessions`), test doubles.
#[async_trait]
pub trait SessionManager: Send + Sync {
    /// Create a new, empty session and return its id.
    async fn create_session(&self) -> Result<SessionId, SessionError>;

    /// Rendered conversation history for a session, or `None` when there is
    /// nothing to show.
    async fn get_conversation_history(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<String>, SessionError>;

    /// Append one exchange to the session's history.
    async fn add_exchange(
        &self,
        session_id: &SessionId,
        query: &str,
        answer: &str,
    ) -> Result<(), SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = SessionId::new();
        let b = SessionId::new();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn session_id_serializes_as_plain_string() {
        let id = SessionId::from("test_session_123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"test_session_123\"");
    }

    #[test]
    fn exchange_keeps_text_unchanged() {
        let ex = Exchange::new("What is <b>RAG</b>?", "Retrieval & generation");
        assert_eq!(ex.query, "What is <b>RAG</b>?");
        assert_eq!(ex.answer, "Retrieval & generation");
    }
}
