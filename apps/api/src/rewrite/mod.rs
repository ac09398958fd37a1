// Generative rewrite: sends the whole document to the LLM and gets back a
// same-shaped document with the prose fields rewritten. All model calls go
// through llm_client — no direct Anthropic calls here.

pub mod handlers;
pub mod prompts;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::resume::Resume;

/// Rewrites a resume's textual content, optionally steered by a job
/// description and free-text instructions. Structure, section order, and
/// non-prose fields come back untouched; the model is told so, and the typed
/// round-trip through `Resume` drops anything shape-incompatible.
pub async fn rewrite_resume(
    llm: &LlmClient,
    resume: &Resume,
    job_description: Option<&str>,
    instructions: Option<&str>,
) -> Result<Resume, AppError> {
    let prompt = prompts::build_rewrite_prompt(resume, job_description, instructions)
        .map_err(|e| AppError::Internal(e.into()))?;

    let rewritten: Resume = llm
        .call_json(&prompt, prompts::REWRITE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume rewrite failed: {e}")))?;

    info!("Rewrite complete: {} experience entries", rewritten.experience.len());
    Ok(rewritten)
}
