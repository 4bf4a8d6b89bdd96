use log::info;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::entity::Session;

/// Per-chat dashboard sessions, keyed by chat id. Nothing here outlives the
/// process.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<i64, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the session; an unknown chat gets an empty one.
    pub async fn get(&self, session_id: i64) -> Session {
        self.sessions
            .read()
            .await
            .get(&session_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn update<F, R>(&self, session_id: i64, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut sessions = self.sessions.write().await;
        f(sessions.entry(session_id).or_default())
    }

    /// Replace the whole session, e.g. when another wallet is connected.
    pub async fn replace(&self, session_id: i64, session: Session) {
        self.sessions.write().await.insert(session_id, session);
    }

    pub async fn remove(&self, session_id: i64) -> Option<Session> {
        let removed = self.sessions.write().await.remove(&session_id);
        if removed.is_some() {
            info!("Cleared dashboard session {}", session_id);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    #[tokio::test]
    async fn unknown_session_is_empty() {
        let store = SessionStore::new();
        let session = store.get(7).await;
        assert!(!session.is_connected());
        assert!(session.mint.is_none());
    }

    #[tokio::test]
    async fn sessions_are_isolated_per_chat() {
        let store = SessionStore::new();
        let mint = Pubkey::new_unique();

        store.update(1, |s| s.set_mint(mint)).await;

        assert_eq!(store.get(1).await.mint, Some(mint));
        assert!(store.get(2).await.mint.is_none());
    }

    #[tokio::test]
    async fn remove_forgets_everything() {
        let store = SessionStore::new();
        store.update(1, |s| s.set_mint(Pubkey::new_unique())).await;

        assert!(store.remove(1).await.is_some());
        assert!(store.get(1).await.mint.is_none());
        assert!(store.remove(1).await.is_none());
    }
}
