//! In-memory admin session store.
//!
//! Sessions are random identifiers with a fixed TTL, kept in a shared map
//! and pruned on every access. There is deliberately no persistence: a
//! restart invalidates every admin session.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use rand::distributions::Alphanumeric;
use rand::Rng;
use tokio::sync::RwLock;

/// Length of generated session identifiers.
const SESSION_ID_LEN: usize = 64;

#[derive(Clone)]
pub struct SessionStore {
    ttl: Duration,
    entries: Arc<RwLock<HashMap<String, Instant>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new session and return its identifier.
    pub async fn create(&self) -> String {
        let session_id = Self::generate_session_id();
        let mut entries = self.entries.write().await;
        Self::prune_expired(self.ttl, &mut entries);
        entries.insert(session_id.clone(), Instant::now());
        session_id
    }

    /// Check whether a session exists and is unexpired.
    pub async fn validate(&self, session_id: &str) -> bool {
        let mut entries = self.entries.write().await;
        Self::prune_expired(self.ttl, &mut entries);
        entries.contains_key(session_id)
    }

    /// Remove a session (logout). Removing an unknown id is a no-op.
    pub async fn remove(&self, session_id: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(session_id);
    }

    fn generate_session_id() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_ID_LEN)
            .map(char::from)
            .collect()
    }

    fn prune_expired(ttl: Duration, entries: &mut HashMap<String, Instant>) {
        let now = Instant::now();
        entries.retain(|_, created_at| now.duration_since(*created_at) <= ttl);
    }
}
