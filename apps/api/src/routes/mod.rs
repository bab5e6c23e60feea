pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::crossword::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Crossword API
        .route(
            "/api/v1/crossword/today",
            post(handlers::handle_crossword_today),
        )
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
