pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::render::handlers as render_handlers;
use crate::rewrite::handlers as rewrite_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Render API: resume JSON in, PDF (or LaTeX source) out
        .route("/api/v1/render", post(render_handlers::handle_render))
        .route(
            "/api/v1/render/source",
            post(render_handlers::handle_render_source),
        )
        // Rewrite API: LLM prose rewrite of the whole document
        .route("/api/v1/rewrite", post(rewrite_handlers::handle_rewrite))
        .with_state(state)
}
