pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats_handlers;
use crate::generation::handlers as generation_handlers;
use crate::resumes::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS scoring
        .route("/api/v1/ats/analyze", post(ats_handlers::handle_analyze))
        .route(
            "/api/v1/resumes/:id/ats",
            get(ats_handlers::handle_analyze_stored),
        )
        // Resume snapshots
        .route(
            "/api/v1/resumes",
            post(resume_handlers::handle_create_resume).get(resume_handlers::handle_list_resumes),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resume_handlers::handle_get_resume)
                .put(resume_handlers::handle_update_resume)
                .delete(resume_handlers::handle_delete_resume),
        )
        // Content generation
        .route(
            "/api/v1/generate/summary",
            post(generation_handlers::handle_generate_summary),
        )
        .route(
            "/api/v1/generate/cover-letter",
            post(generation_handlers::handle_generate_cover_letter),
        )
        .route(
            "/api/v1/generate/skills",
            post(generation_handlers::handle_suggest_skills),
        )
        .with_state(state)
}
