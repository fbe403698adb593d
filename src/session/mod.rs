// 会话层
// 负责会话的存储、加载以及每个请求的会话句柄

pub mod handle;
pub mod memory_store;
pub mod models;
pub mod redis_store;
pub mod store;

pub use handle::SessionHandle;
pub use memory_store::MemorySessionStore;
pub use models::StoredSession;
pub use redis_store::RedisSessionStore;
pub use store::{SessionStore, SessionStoreError};

/// 会话在存储中的键
pub fn session_key(session_id: &str) -> String {
    format!("session:{}", session_id)
}

/// 生成新的会话ID
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
