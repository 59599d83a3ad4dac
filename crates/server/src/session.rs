// crates/server/src/session.rs
//! Process-wide session store: bearer token → identity claims.
//!
//! Sessions are minted at login, destroyed at logout, and live only as long
//! as the process. Uses `std::sync::RwLock` (not `tokio::sync`): writes
//! happen only at login/logout, reads are uncontended, and the lock is
//! never held across an await point.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use cluster_view_core::{Claims, SupersedeGuard};
use uuid::Uuid;

/// One authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    /// The opaque bearer token handed to the frontend.
    pub token: String,
    /// Identity claims merged at login.
    pub claims: Claims,
    /// Token the upstream backend minted at login, when it minted one.
    pub backend_token: Option<String>,
    /// Generation guard for this session's province-dependent district
    /// fetches. Scoped per session: one user's selections never supersede
    /// another's. Shared via Arc so clones handed to handlers see the same
    /// generation.
    pub district_guard: Arc<SupersedeGuard>,
    pub created_at: Instant,
}

impl Session {
    /// The bearer to attach to upstream backend requests. Falls back to our
    /// own token for backend versions that accept it.
    pub fn upstream_bearer(&self) -> &str {
        self.backend_token.as_deref().unwrap_or(&self.token)
    }
}

/// Owner of all sessions. Lives in `AppState`.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh session token for the given identity and remember it.
    pub fn create(&self, claims: Claims, backend_token: Option<String>) -> Session {
        let session = Session {
            token: Uuid::new_v4().to_string(),
            claims,
            backend_token,
            district_guard: Arc::new(SupersedeGuard::new()),
            created_at: Instant::now(),
        };
        self.inner
            .write()
            .expect("session lock poisoned")
            .insert(session.token.clone(), session.clone());
        session
    }

    /// Read-only view of the session for a bearer token.
    pub fn get(&self, token: &str) -> Option<Session> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .get(token)
            .cloned()
    }

    /// Destroy a session. Returns whether one existed.
    pub fn remove(&self, token: &str) -> bool {
        self.inner
            .write()
            .expect("session lock poisoned")
            .remove(token)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("session lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
