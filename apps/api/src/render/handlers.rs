//! Axum route handler for the Render API.

use axum::Json;
use serde::Serialize;

use crate::models::resume::ResumeRecord;
use crate::render::latex::render;

#[derive(Debug, Serialize)]
pub struct RenderLatexResponse {
    pub latex: String,
}

/// POST /api/v1/render/latex
///
/// Renders the posted résumé record to LaTeX source. Total for any
/// well-typed record; malformed JSON is rejected by the extractor before
/// this handler runs.
pub async fn handle_render_latex(Json(resume): Json<ResumeRecord>) -> Json<RenderLatexResponse> {
    Json(RenderLatexResponse {
        latex: render(&resume),
    })
}
