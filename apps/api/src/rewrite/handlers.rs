//! Axum route handlers for the Rewrite API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::rewrite::rewrite_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    pub resume: Resume,
    pub job_description: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub resume: Resume,
}

/// POST /api/v1/rewrite
///
/// Sends the document through the LLM for a prose rewrite. Answers 422 when
/// the server has no API key configured — rendering works without one, only
/// this endpoint needs it.
pub async fn handle_rewrite(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::UnprocessableEntity(
            "Rewrite is not configured on this server: ANTHROPIC_API_KEY is not set".to_string(),
        )
    })?;

    let resume = rewrite_resume(
        llm,
        &request.resume,
        request.job_description.as_deref(),
        request.instructions.as_deref(),
    )
    .await?;

    Ok(Json(RewriteResponse { resume }))
}
