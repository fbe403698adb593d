use axum::extract::{Json, State};

use crate::{AppState, error::AppError, session::SessionHandle};

use super::model::{CurrentUserResponse, LogInRequest, LogInResponse, LogOutResponse};

#[axum::debug_handler]
pub async fn log_in(
    State(state): State<AppState>,
    session: SessionHandle,
    Json(req): Json<LogInRequest>,
) -> Json<LogInResponse> {
    // 目前没有认证概念，认证将来在这里同步
    let mut doc = session.lock().await;
    state.concepts.sessioning.start(&mut doc, req.username.as_str());
    tracing::info!("Session {} logged in as {}", session.id(), req.username);

    Json(LogInResponse {
        msg: "Logged in!",
        user: req.username,
    })
}

#[axum::debug_handler]
pub async fn log_out(
    State(state): State<AppState>,
    session: SessionHandle,
) -> Result<Json<LogOutResponse>, AppError> {
    let mut doc = session.lock().await;
    state.concepts.sessioning.end(&mut doc)?;
    tracing::info!("Session {} logged out", session.id());

    Ok(Json(LogOutResponse { msg: "Logged out!" }))
}

#[axum::debug_handler]
pub async fn current_user(
    State(state): State<AppState>,
    session: SessionHandle,
) -> Result<Json<CurrentUserResponse>, AppError> {
    let doc = session.lock().await;
    let user = state.concepts.sessioning.get_user(&doc)?;

    Ok(Json(CurrentUserResponse {
        user: user.to_string(),
    }))
}
