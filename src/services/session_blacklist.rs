//! Server-side record of signed-out sessions.
//!
//! Session tokens are self-contained, so signing out only clears the cookie
//! on the client. The blacklist remembers a token until its own expiry so
//! that a copied cookie stops working as well.

use chrono::Utc;
use dashmap::DashMap;
use log::{debug, info};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

const CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

/// Thread-safe set of revoked session tokens, keyed by token hash.
#[derive(Clone)]
pub struct SessionBlacklist {
    /// token hash -> expiry (Unix seconds)
    revoked: Arc<DashMap<u64, i64>>,
    /// Unix seconds of the last sweep
    last_cleanup: Arc<RwLock<i64>>,
}

impl SessionBlacklist {
    pub fn new() -> Self {
        Self {
            revoked: Arc::new(DashMap::new()),
            last_cleanup: Arc::new(RwLock::new(Utc::now().timestamp())),
        }
    }

    /// Revoke `token` until `expires_at` (Unix seconds).
    pub async fn revoke(&self, token: &str, expires_at: usize) {
        let now = Utc::now().timestamp();
        let expires_at = expires_at as i64;

        if expires_at > now {
            self.revoked.insert(hash_token(token), expires_at);
            debug!("Session revoked for {}s", expires_at - now);
        }

        self.maybe_cleanup(now).await;
    }

    pub fn is_revoked(&self, token: &str) -> bool {
        let key = hash_token(token);
        let expires_at = match self.revoked.get(&key) {
            Some(entry) => *entry,
            None => return false,
        };

        if expires_at > Utc::now().timestamp() {
            return true;
        }
        self.revoked.remove(&key);
        false
    }

    pub fn len(&self) -> usize {
        self.revoked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revoked.is_empty()
    }

    async fn maybe_cleanup(&self, now: i64) {
        let interval = CLEANUP_INTERVAL.as_secs() as i64;

        if now - *self.last_cleanup.read().await < interval {
            return;
        }

        let mut last = self.last_cleanup.write().await;
        // Another caller may have swept while we waited for the lock.
        if now - *last >= interval {
            self.sweep(now);
            *last = now;
        }
    }

    fn sweep(&self, now: i64) {
        let before = self.revoked.len();
        self.revoked.retain(|_, expires_at| *expires_at > now);

        let removed = before - self.revoked.len();
        if removed > 0 {
            info!(
                "Session blacklist cleanup: removed {} expired entries, {} remaining",
                removed,
                self.revoked.len()
            );
        }
    }
}

impl Default for SessionBlacklist {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_token(token: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    token.hash(&mut hasher);
    hasher.finish()
}
