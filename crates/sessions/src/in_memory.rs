//! In-memory session manager. Sessions live as long as the process.

use async_trait::async_trait;
use courserag_core::error::SessionError;
use courserag_core::session::{Exchange, SessionId, SessionManager};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Default number of exchanges rendered by `get_conversation_history`.
pub const DEFAULT_MAX_HISTORY: usize = 2;

/// Stores every session's exchanges in a map keyed by session id.
///
/// The exchange log is append-only. Rendered history is limited to the most
/// recent `max_history` exchanges.
pub struct InMemorySessionManager {
    sessions: Arc<RwLock<HashMap<SessionId, Vec<Exchange>>>>,
    max_history: usize,
}

impl InMemorySessionManager {
    pub fn new(max_history: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_history: max_history.max(1),
        }
    }

    /// Full exchange log for a session, oldest first.
    pub async fn exchanges(&self, session_id: &SessionId) -> Option<Vec<Exchange>> {
        self.sessions.read().await.get(session_id).cloned()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Ids of every known session, in no particular order.
    pub async fn session_ids(&self) -> Vec<SessionId> {
        self.sessions.read().await.keys().cloned().collect()
    }
}

impl Default for InMemorySessionManager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

/// Render exchanges as alternating `User:` / `Assistant:` lines.
fn render_history(exchanges: &[Exchange]) -> String {
    exchanges
        .iter()
        .map(|ex| format!("User: {}\nAssistant: {}", ex.query, ex.answer))
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl SessionManager for InMemorySessionManager {
    async fn create_session(&self) -> Result<SessionId, SessionError> {
        let mut sessions = self.sessions.write().await;
        let mut id = SessionId::new();
        while sessions.contains_key(&id) {
            id = SessionId::new();
        }
        sessions.insert(id.clone(), Vec::new());
        debug!(session_id = %id, "Session created");
        Ok(id)
    }

    async fn get_conversation_history(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<String>, SessionError> {
        let sessions = self.sessions.read().await;
        let Some(exchanges) = sessions.get(session_id) else {
            return Ok(None);
        };
        if exchanges.is_empty() {
            return Ok(None);
        }

        let start = exchanges.len().saturating_sub(self.max_history);
        Ok(Some(render_history(&exchanges[start..])))
    }

    async fn add_exchange(
        &self,
        session_id: &SessionId,
        query: &str,
        answer: &str,
    ) -> Result<(), SessionError> {
        // Unknown ids start a new session.
        self.sessions
            .write()
            .await
            .entry(session_id.clone())
            .or_default()
            .push(Exchange::new(query, answer));
        Ok(())
    }
}
