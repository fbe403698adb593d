use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    middleware::{log_errors, session_layer},
};

pub mod session;

/// 路由与概念动作之间的同步表
pub fn app_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/login", post(session::log_in))
        .route("/logout", post(session::log_out))
        .route("/session", get(session::current_user))
        // 会话中间件为每个请求注入会话句柄
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            session_layer,
        ));

    // axum 不允许挂载到根路径，基础路径为空时直接合并
    let router = match state.config.api_base_uri.as_str() {
        "" | "/" => Router::new().merge(routes),
        base => Router::new().nest(base, routes),
    };

    router
        .layer(axum::middleware::from_fn(log_errors))
        .with_state(state)
}
