use async_trait::async_trait;
use thiserror::Error;

use crate::concepts::SessionDoc;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session backend error: {0}")]
    Backend(String),
    #[error("session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<redis::RedisError> for SessionStoreError {
    fn from(e: redis::RedisError) -> Self {
        SessionStoreError::Backend(e.to_string())
    }
}

/// 可插拔的会话存储
///
/// 过期的会话在 `load` 时视为不存在；`save` 会把过期时间重置为当前时间加 TTL。
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, session_id: &str) -> Result<Option<SessionDoc>, SessionStoreError>;

    async fn save(&self, session_id: &str, doc: &SessionDoc) -> Result<(), SessionStoreError>;
}
