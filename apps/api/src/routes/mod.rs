pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers as render_handlers;
use crate::resumes::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template catalog
        .route(
            "/api/v1/templates",
            get(render_handlers::handle_list_templates),
        )
        // Render pipeline
        .route(
            "/api/v1/render/preview",
            post(render_handlers::handle_render_preview),
        )
        .route(
            "/api/v1/render/pdf",
            post(render_handlers::handle_render_pdf),
        )
        // Saved resumes
        .route(
            "/api/v1/resumes",
            get(resume_handlers::handle_list).post(resume_handlers::handle_create),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resume_handlers::handle_get)
                .put(resume_handlers::handle_update)
                .delete(resume_handlers::handle_delete),
        )
        .with_state(state)
}
