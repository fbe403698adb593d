use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    AppState,
    concepts::SessionDoc,
    error::AppError,
    session::{SessionHandle, new_session_id},
};

/// 为每个请求解析会话并注入 `SessionHandle`，处理结束后按需保存
pub async fn session_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let cookie_name = state.config.session_cookie_name.as_str();

    let cookie_id = CookieJar::from_headers(req.headers())
        .get(cookie_name)
        .map(|cookie| cookie.value().to_string());

    let existing = match cookie_id {
        Some(session_id) => state
            .sessions
            .load(&session_id)
            .await?
            .map(|doc| (session_id, doc)),
        None => None,
    };

    // 未知或已过期的会话ID不复用，重新分配
    let (handle, original, is_new) = match existing {
        Some((session_id, doc)) => (SessionHandle::new(session_id, doc.clone()), doc, false),
        None => {
            let session_id = new_session_id();
            tracing::debug!("Allocated new session {}", session_id);
            (
                SessionHandle::new(session_id, SessionDoc::default()),
                SessionDoc::default(),
                true,
            )
        }
    };

    req.extensions_mut().insert(handle.clone());
    let response = next.run(req).await;

    let current = handle.snapshot().await;
    if current == original {
        return Ok(response);
    }

    state.sessions.save(handle.id(), &current).await?;

    if !is_new {
        return Ok(response);
    }

    let cookie = Cookie::build((cookie_name.to_string(), handle.id().to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.session_cookie_secure);

    Ok((CookieJar::new().add(cookie), response).into_response())
}
