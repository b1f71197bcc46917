// Session management
//
// One ChatSession per browser tab, keyed by a UUID issued on the first chat
// request and echoed by the page on every later turn. The transcript lives
// behind a per-session async mutex so at most one turn is in flight per
// session; different sessions never block each other.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::chat::Transcript;

/// Session-scoped state: the id and the append-only transcript.
pub struct ChatSession {
    pub id: Uuid,
    pub transcript: Mutex<Transcript>,
}

impl ChatSession {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            transcript: Mutex::new(Transcript::new()),
        }
    }
}

/// Tracks all live sessions for the process.
#[derive(Default)]
pub struct SessionManager {
    sessions: DashMap<Uuid, Arc<ChatSession>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch an existing session or create a fresh one. An unknown id gets a
    /// fresh session rather than an error — the client just lost its state.
    pub fn get_or_create(&self, id: Option<Uuid>) -> Arc<ChatSession> {
        if let Some(id) = id {
            if let Some(session) = self.sessions.get(&id) {
                return Arc::clone(&session);
            }
        }

        let session = Arc::new(ChatSession::new());
        self.sessions.insert(session.id, Arc::clone(&session));
        session
    }

    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }
}
