use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use super::models::StoredSession;
use super::session_key;
use super::store::{SessionStore, SessionStoreError};
use crate::concepts::SessionDoc;

/// Redis 会话存储，过期由 Redis 负责
pub struct RedisSessionStore {
    redis: Arc<RedisClient>,
    ttl: Duration,
}

impl RedisSessionStore {
    pub fn new(redis: Arc<RedisClient>, ttl: Duration) -> Self {
        Self { redis, ttl }
    }

    async fn get_stored(
        &self,
        session_id: &str,
    ) -> Result<Option<StoredSession>, SessionStoreError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let result: Option<String> = conn.get(session_key(session_id)).await?;

        match result {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, session_id: &str) -> Result<Option<SessionDoc>, SessionStoreError> {
        let now = chrono::Utc::now().timestamp();
        Ok(self
            .get_stored(session_id)
            .await?
            .filter(|stored| !stored.is_expired(now))
            .map(|stored| stored.doc))
    }

    async fn save(&self, session_id: &str, doc: &SessionDoc) -> Result<(), SessionStoreError> {
        let now = chrono::Utc::now().timestamp();
        let ttl = self.ttl.as_secs();

        // 保留首次创建时间
        let stored = match self.get_stored(session_id).await? {
            Some(mut stored) => {
                stored.refresh(doc.clone(), now, ttl);
                stored
            }
            None => StoredSession::new(session_id, doc.clone(), now, ttl),
        };

        let json = serde_json::to_string(&stored)?;
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        // Redis 不接受 0 秒过期
        let _: () = conn.set_ex(session_key(session_id), json, ttl.max(1)).await?;

        Ok(())
    }
}
