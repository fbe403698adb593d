use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::models::StoredSession;
use super::store::{SessionStore, SessionStoreError};
use crate::concepts::SessionDoc;

/// 进程内会话存储，未配置 Redis 时使用
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, StoredSession>>,
    ttl: Duration,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, session_id: &str) -> Result<Option<SessionDoc>, SessionStoreError> {
        let now = chrono::Utc::now().timestamp();

        {
            let sessions = self.sessions.read().await;
            match sessions.get(session_id) {
                Some(stored) if !stored.is_expired(now) => return Ok(Some(stored.doc.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // 过期会话直接清除
        let mut sessions = self.sessions.write().await;
        if sessions
            .get(session_id)
            .is_some_and(|stored| stored.is_expired(now))
        {
            sessions.remove(session_id);
            tracing::debug!("Evicted expired session {}", session_id);
        }
        Ok(None)
    }

    async fn save(&self, session_id: &str, doc: &SessionDoc) -> Result<(), SessionStoreError> {
        let now = chrono::Utc::now().timestamp();
        let ttl = self.ttl.as_secs();
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(session_id) {
            Some(stored) => stored.refresh(doc.clone(), now, ttl),
            None => {
                sessions.insert(
                    session_id.to_string(),
                    StoredSession::new(session_id, doc.clone(), now, ttl),
                );
            }
        }

        // 顺带清理所有已过期的会话
        let before = sessions.len();
        sessions.retain(|_, stored| !stored.is_expired(now));
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!("Evicted {} expired sessions", evicted);
        }

        Ok(())
    }
}
