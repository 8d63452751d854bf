//! In-memory session store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Minimal payload cached per session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// Id of the user the session belongs to
    pub user_id: String,
}

/// Fast token-to-payload store used to avoid a database hit on every
/// authenticated request.
///
/// Entries live in process memory and do not survive a restart. The
/// `sessions` column on the user row remains the authoritative record of
/// valid tokens; this store is a volatile projection of it.
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionData>>>,
}

impl SessionStore {
    /// Create a new, empty session store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Associates a token with its session payload, overwriting any
    /// existing entry for the same token.
    pub async fn set(&self, token: impl Into<String>, data: SessionData) {
        self.sessions.write().await.insert(token.into(), data);
    }

    /// Looks up the payload for a token.
    pub async fn get(&self, token: &str) -> Option<SessionData> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Removes a token. Deleting an absent token is not an error.
    pub async fn del(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    /// Number of live entries.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = SessionStore::new();
        store
            .set(
                "token-1",
                SessionData {
                    user_id: "user-1".to_string(),
                },
            )
            .await;

        let data = store.get("token-1").await;
        assert_eq!(data.unwrap().user_id, "user-1");
    }

    #[tokio::test]
    async fn test_get_missing_token() {
        let store = SessionStore::new();
        assert!(store.get("absent").await.is_none());
    }

    #[tokio::test]
    async fn test_del_is_idempotent() {
        let store = SessionStore::new();
        store
            .set(
                "token-1",
                SessionData {
                    user_id: "user-1".to_string(),
                },
            )
            .await;

        store.del("token-1").await;
        assert!(store.get("token-1").await.is_none());

        // Second delete of the same token must not be an error.
        store.del("token-1").await;
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn test_set_overwrites_existing_entry() {
        let store = SessionStore::new();
        store
            .set(
                "token-1",
                SessionData {
                    user_id: "user-1".to_string(),
                },
            )
            .await;
        store
            .set(
                "token-1",
                SessionData {
                    user_id: "user-2".to_string(),
                },
            )
            .await;

        assert_eq!(store.get("token-1").await.unwrap().user_id, "user-2");
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = SessionStore::new();
        let handle = store.clone();
        handle
            .set(
                "token-1",
                SessionData {
                    user_id: "user-1".to_string(),
                },
            )
            .await;

        assert!(store.get("token-1").await.is_some());
    }
}
