pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pipeline::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/session", get(handlers::handle_session))
        .route(
            "/api/v1/cover-letter/tone",
            post(handlers::handle_tone_change),
        )
        .route("/api/v1/jobs/search", post(handlers::handle_job_search))
        .route("/api/v1/resume/export", get(handlers::handle_export))
        .with_state(state)
}
