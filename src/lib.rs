use std::sync::Arc;

use app::Concepts;
use config::Config;
use session::SessionStore;

pub mod app;
pub mod concepts;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod session;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub concepts: Concepts,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(config: Config, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            config,
            concepts: Concepts::new(),
            sessions,
        }
    }
}
