use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::render::TexCompiler;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// None when no API key is configured — the rewrite endpoint rejects
    /// requests instead of the server refusing to start.
    pub llm: Option<LlmClient>,
    /// Pluggable TeX compiler. Production: ToolchainCompiler (xelatex, then
    /// pdflatex). Tests substitute a stub.
    pub compiler: Arc<dyn TexCompiler>,
    /// Kept for handlers that grow config needs; main reads it at startup.
    #[allow(dead_code)]
    pub config: Config,
}
