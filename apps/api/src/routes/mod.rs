pub mod health;
pub mod resumes;
pub mod skills;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume parsing
        .route(
            "/api/resumes/upload",
            get(resumes::handle_upload_guidance).post(resumes::handle_upload),
        )
        // Skill corpus administration
        .route("/api/skills/reload", post(skills::handle_reload))
        .route("/api/skills/diagnostics", get(skills::handle_diagnostics))
        .with_state(state)
}
