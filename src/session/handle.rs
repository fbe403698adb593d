use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use tokio::sync::{Mutex, MutexGuard};

use crate::concepts::SessionDoc;
use crate::error::AppError;

/// 当前请求的会话句柄，由会话中间件注入
#[derive(Debug, Clone)]
pub struct SessionHandle {
    id: Arc<str>,
    doc: Arc<Mutex<SessionDoc>>,
}

impl SessionHandle {
    pub fn new(id: impl Into<Arc<str>>, doc: SessionDoc) -> Self {
        Self {
            id: id.into(),
            doc: Arc::new(Mutex::new(doc)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// 在一次调用期间独占会话
    pub async fn lock(&self) -> MutexGuard<'_, SessionDoc> {
        self.doc.lock().await
    }

    pub async fn snapshot(&self) -> SessionDoc {
        self.doc.lock().await.clone()
    }
}

impl<S> FromRequestParts<S> for SessionHandle
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionHandle>()
            .cloned()
            .ok_or(AppError::MissingSession)
    }
}
