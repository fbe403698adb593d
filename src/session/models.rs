use serde::{Deserialize, Serialize};

use crate::concepts::SessionDoc;

/// 持久化的会话记录
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoredSession {
    pub session_id: String,
    pub doc: SessionDoc,
    pub created_at: i64, // Unix timestamp
    pub expires_at: i64, // Unix timestamp
}

impl StoredSession {
    pub fn new(session_id: &str, doc: SessionDoc, now: i64, ttl: u64) -> Self {
        Self {
            session_id: session_id.to_string(),
            doc,
            created_at: now,
            expires_at: expiry(now, ttl),
        }
    }

    /// 更新会话内容并重置过期时间，保留创建时间
    pub fn refresh(&mut self, doc: SessionDoc, now: i64, ttl: u64) {
        self.doc = doc;
        self.expires_at = expiry(now, ttl);
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}

/// 过期时间，超出 i64 范围时取最大值
fn expiry(now: i64, ttl: u64) -> i64 {
    now.saturating_add(i64::try_from(ttl).unwrap_or(i64::MAX))
}
