// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use cluster_view_client::BackendClient;

use crate::session::SessionStore;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Client for the upstream surveillance backend.
    pub client: BackendClient,
    /// The single owner of all login sessions. Handlers read through it;
    /// only the auth routes create and destroy entries. Each session carries
    /// its own district supersede guard.
    pub sessions: SessionStore,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(client: BackendClient) -> Arc<Self> {
        Arc::new(Self {
            start_time: Instant::now(),
            client,
            sessions: SessionStore::new(),
        })
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_new() {
        let state = AppState::new(BackendClient::new("http://localhost:3001"));
        assert!(state.uptime_secs() < 1);
        assert_eq!(state.sessions.len(), 0);
    }
}
