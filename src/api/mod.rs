pub mod health;
pub mod login;

use axum::{
    Router,
    routing::{get, post},
};

use crate::config::Config;

pub fn api_router(config: Config) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Login
        .route("/login", post(login::login))
        .with_state(config)
}
