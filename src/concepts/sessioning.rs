use serde::{Deserialize, Serialize};

use super::errors::ConceptError;

/// 每个连接对应的会话数据
///
/// 会话本身由会话层分配和持久化，这里只关心 `user` 字段：
/// `None` 表示匿名，`Some(user)` 表示已作为该用户登录。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// concept: Sessioning [User]
#[derive(Debug, Clone, Copy, Default)]
pub struct SessioningConcept;

impl SessioningConcept {
    pub fn new() -> Self {
        Self
    }

    /// 开始会话，直接覆盖已有的用户
    pub fn start(&self, session: &mut SessionDoc, username: impl Into<String>) {
        // TODO: reject start while another user is still logged in once clients stop relying on overwrite
        session.user = Some(username.into());
    }

    /// 结束会话，未登录时返回 Unauthenticated 且不修改会话
    pub fn end(&self, session: &mut SessionDoc) -> Result<(), ConceptError> {
        self.is_logged_in(session)?;
        session.user = None;
        Ok(())
    }

    pub fn get_user<'a>(&self, session: &'a SessionDoc) -> Result<&'a str, ConceptError> {
        match session.user.as_deref() {
            Some(user) => Ok(user),
            None => Err(Self::not_logged_in()),
        }
    }

    pub fn is_logged_in(&self, session: &SessionDoc) -> Result<(), ConceptError> {
        if session.user.is_none() {
            return Err(Self::not_logged_in());
        }
        Ok(())
    }

    fn not_logged_in() -> ConceptError {
        ConceptError::unauthenticated("Must be logged in!")
    }
}
