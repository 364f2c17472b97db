use rand::{distributions::Alphanumeric, Rng};
use serde::Serialize;
use std::collections::HashMap;
use time::{Duration, OffsetDateTime};

use super::GameSession;

/// Counts reported by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub total_sessions: usize,
    pub total_players: usize,
    /// Sessions holding a completed deal
    pub dealt_sessions: usize,
}

/// Manager for all open sessions
#[derive(Debug, Default)]
pub struct GameManager {
    /// Map of session_id to GameSession
    sessions: HashMap<String, GameSession>,
}

impl GameManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session with a unique ID
    ///
    /// # Returns
    ///
    /// The session_id of the newly created session
    pub fn create_session(&mut self) -> String {
        let mut session_id = Self::generate_session_id();

        while self.sessions.contains_key(&session_id) {
            session_id = Self::generate_session_id();
        }

        self.sessions
            .insert(session_id.clone(), GameSession::new(session_id.clone()));
        tracing::info!("Created session {}", session_id);
        session_id
    }

    /// 12 alphanumeric characters from the OS RNG
    fn generate_session_id() -> String {
        use rand::rngs::OsRng;

        OsRng
            .sample_iter(&Alphanumeric)
            .take(12)
            .map(char::from)
            .collect()
    }

    pub fn get_session(&self, session_id: &str) -> Option<&GameSession> {
        self.sessions.get(session_id)
    }

    pub fn get_session_mut(&mut self, session_id: &str) -> Option<&mut GameSession> {
        self.sessions.get_mut(session_id)
    }

    /// Remove a session
    ///
    /// # Returns
    ///
    /// Whether a session with that ID existed
    pub fn remove_session(&mut self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    /// Remove sessions idle for longer than `ttl`
    ///
    /// # Returns
    ///
    /// Number of sessions cleaned up
    pub fn cleanup_stale_sessions(&mut self, ttl: Duration) -> usize {
        let cutoff_time = OffsetDateTime::now_utc() - ttl;
        let before = self.sessions.len();

        self.sessions
            .retain(|_, session| session.last_activity >= cutoff_time);

        before - self.sessions.len()
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            total_sessions: self.sessions.len(),
            total_players: self.sessions.values().map(|s| s.players().len()).sum(),
            dealt_sessions: self
                .sessions
                .values()
                .filter(|s| s.last_deal().is_some())
                .count(),
        }
    }
}
