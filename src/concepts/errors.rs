use thiserror::Error;

/// 概念动作失败时返回的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConceptError {
    #[error("{0}")]
    Unauthenticated(String),
}

impl ConceptError {
    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        ConceptError::Unauthenticated(msg.into())
    }
}
