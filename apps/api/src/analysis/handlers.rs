//! Axum route handlers for the Analysis API.
//!
//! Both endpoints validate their inputs with a 400, then always answer 200:
//! an LLM that never produces a parseable answer degrades to the documented
//! fallback (empty keyword groups / score 0) rather than a 5xx.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::keywords::{extract_missing_keywords, KeywordGroups};
use crate::analysis::score::estimate_fit_score;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractKeywordsRequest {
    /// The job description ("annonce" in the form UI).
    pub annonce: String,
    /// The résumé summary text to compare against.
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractKeywordsResponse {
    pub keywords: KeywordGroups,
}

#[derive(Debug, Deserialize)]
pub struct KpiScoreRequest {
    pub annonce: String,
    /// The résumé competencies text.
    pub competences: String,
}

#[derive(Debug, Serialize)]
pub struct KpiScoreResponse {
    pub score: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/extract-keywords
///
/// Returns JD keywords missing from the résumé, grouped into three
/// categories. Empty groups when the LLM never answers usably.
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    Json(request): Json<ExtractKeywordsRequest>,
) -> Result<Json<ExtractKeywordsResponse>, AppError> {
    if request.annonce.trim().is_empty() || request.summary.trim().is_empty() {
        return Err(AppError::Validation(
            "Both job description (annonce) and resume (summary) are required".to_string(),
        ));
    }

    let keywords = extract_missing_keywords(&state.llm, &request.annonce, &request.summary).await;

    Ok(Json(ExtractKeywordsResponse { keywords }))
}

/// POST /api/v1/kpi-score
///
/// Returns a 0–100 fit score for the competencies against the announcement.
/// Scores 0 when the LLM never answers usably.
pub async fn handle_kpi_score(
    State(state): State<AppState>,
    Json(request): Json<KpiScoreRequest>,
) -> Result<Json<KpiScoreResponse>, AppError> {
    if request.annonce.trim().is_empty() || request.competences.trim().is_empty() {
        return Err(AppError::Validation(
            "Missing annonce or competences in request body".to_string(),
        ));
    }

    let score = estimate_fit_score(&state.llm, &request.annonce, &request.competences).await;

    Ok(Json(KpiScoreResponse { score }))
}
