//! Axum route handlers for the Render API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::latex::build_latex;
use crate::models::resume::Resume;
use crate::state::AppState;

/// POST /api/v1/render
///
/// Builds the LaTeX source for the posted resume and compiles it to PDF.
/// Compile failure returns 500 with the toolchain's combined diagnostics so
/// the editor can show the user what broke.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(resume): Json<Resume>,
) -> Result<Response, AppError> {
    let tex = build_latex(&resume);
    info!("Rendering resume: {} bytes of LaTeX", tex.len());

    let pdf = state.compiler.compile(&tex).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "inline; filename=\"resume.pdf\"",
            ),
        ],
        pdf,
    )
        .into_response())
}

/// POST /api/v1/render/source
///
/// Returns the generated LaTeX source without compiling. Debug/preview
/// surface for the editor; also the cheapest way to inspect escaping.
pub async fn handle_render_source(Json(resume): Json<Resume>) -> Response {
    let tex = build_latex(&resume);
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        tex,
    )
        .into_response()
}
