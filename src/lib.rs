//! Status service: `GET /` reports `ok`, `GET /health` reports process uptime.

pub mod app_state;
pub mod config;
pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use app_state::AppState;
use routes::{health::health, status::root_status};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_status))
        .route("/health", get(health))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
