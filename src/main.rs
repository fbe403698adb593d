use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use concept_backend::{
    AppState,
    config::Config,
    routes,
    session::{MemorySessionStore, RedisSessionStore, SessionStore},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    // 根据配置选择会话存储
    let sessions: Arc<dyn SessionStore> = match &config.redis_url {
        Some(url) => {
            let redis_client =
                redis::Client::open(url.clone()).expect("Failed to create Redis client");
            tracing::info!("Using Redis session store");
            Arc::new(RedisSessionStore::new(
                Arc::new(redis_client),
                config.session_ttl(),
            ))
        }
        None => {
            tracing::warn!("REDIS_URL not set, sessions are kept in memory");
            Arc::new(MemorySessionStore::new(config.session_ttl()))
        }
    };

    let state = AppState::new(config.clone(), sessions);
    let router = routes::app_router(state);

    // 开发模式下允许所有来源
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    // 启动服务器
    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        router,
    )
    .await
    .expect("Failed to start server");
}
