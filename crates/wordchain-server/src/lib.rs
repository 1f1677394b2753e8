//! HTTP shell for the Word Chain game.
//!
//! Routes:
//!
//! - `GET  /api/game/new`
//! - `POST /api/game/validate`
//! - `GET  /api/health`

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod telemetry;

use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use std::sync::Arc;
use wordchain_application::GameUseCase;
use wordchain_core::config::HttpConfig;

pub const ROUTE_NEW_GAME: &str = "/api/game/new";
pub const ROUTE_VALIDATE: &str = "/api/game/validate";
pub const ROUTE_HEALTH: &str = "/api/health";

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub game: Arc<GameUseCase>,
    pub http: Arc<HttpConfig>,
}

impl AppState {
    pub fn new(game: GameUseCase, http: HttpConfig) -> Self {
        Self {
            game: Arc::new(game),
            http: Arc::new(http),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(ROUTE_NEW_GAME, get(handlers::new_game))
        .route(ROUTE_VALIDATE, post(handlers::validate_word))
        .route(ROUTE_HEALTH, get(handlers::health))
        .layer(from_fn_with_state(state.clone(), middleware::cors_middleware))
        .layer(from_fn(middleware::request_tracing_middleware))
        .with_state(state)
}
