pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Render API: résumé record in, LaTeX source out
        .route("/api/v1/render/latex", post(render::handle_render_latex))
        // Analysis API: LLM-backed keyword gaps and fit scoring
        .route(
            "/api/v1/extract-keywords",
            post(analysis::handle_extract_keywords),
        )
        .route("/api/v1/kpi-score", post(analysis::handle_kpi_score))
        .with_state(state)
}
