//! TeX toolchain invocation.
//!
//! Each compile runs in a fresh scratch directory. The candidate engines are
//! tried strictly in order — xelatex, then pdflatex — one synchronous attempt
//! each; the first engine that exits 0 AND leaves a readable same-named PDF
//! wins. When every engine fails, the accumulated stdout+stderr of all
//! attempts is surfaced as the error detail.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};
use uuid::Uuid;

/// Engines tried in order. A sequential fallback, never parallel attempts.
const ENGINES: &[&str] = &["xelatex", "pdflatex"];

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Every candidate engine failed; carries the combined diagnostics.
    #[error("LaTeX compilation failed:\n{0}")]
    Failed(String),
}

/// Compiles LaTeX source to PDF bytes.
///
/// Injected into `AppState` as a trait object so tests can substitute a stub
/// and so the engine list stays an implementation detail of the production
/// compiler.
#[async_trait]
pub trait TexCompiler: Send + Sync {
    async fn compile(&self, tex_source: &str) -> Result<Bytes, CompileError>;
}

/// Production compiler backed by the locally installed TeX toolchain.
pub struct ToolchainCompiler {
    engines: Vec<String>,
}

impl ToolchainCompiler {
    pub fn new() -> Self {
        Self {
            engines: ENGINES.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[cfg(test)]
    fn with_engines(engines: &[&str]) -> Self {
        Self {
            engines: engines.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl Default for ToolchainCompiler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TexCompiler for ToolchainCompiler {
    async fn compile(&self, tex_source: &str) -> Result<Bytes, CompileError> {
        let job_id = format!("resume-{}", Uuid::new_v4().simple());
        let scratch = tempfile::tempdir()?;
        let tex_name = format!("{job_id}.tex");
        let pdf_path = scratch.path().join(format!("{job_id}.pdf"));

        tokio::fs::write(scratch.path().join(&tex_name), tex_source).await?;

        let mut diagnostics = String::new();

        for engine in &self.engines {
            debug!("Trying {engine} for job {job_id}");
            diagnostics.push_str(&format!("Trying {engine}...\n"));

            let output = Command::new(engine)
                .args(["-halt-on-error", "-interaction=nonstopmode", &tex_name])
                .current_dir(scratch.path())
                .output()
                .await;

            let output = match output {
                Ok(o) => o,
                Err(e) => {
                    // Typically the engine binary is not installed.
                    warn!("Failed to spawn {engine}: {e}");
                    diagnostics.push_str(&format!("{engine}: {e}\n"));
                    continue;
                }
            };

            if output.status.success() {
                // Exit 0 without a PDF still counts as a failed attempt.
                match tokio::fs::read(&pdf_path).await {
                    Ok(pdf) => {
                        debug!("{engine} produced {} PDF bytes for {job_id}", pdf.len());
                        return Ok(Bytes::from(pdf));
                    }
                    Err(e) => {
                        warn!("{engine} exited 0 but produced no PDF: {e}");
                        diagnostics.push_str(&format!("{engine}: no PDF produced: {e}\n"));
                        continue;
                    }
                }
            }

            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("{engine} exited with {}", output.status);
            diagnostics.push_str(&stdout);
            diagnostics.push_str(&stderr);
            diagnostics.push('\n');
        }

        Err(CompileError::Failed(diagnostics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_engines_surface_combined_diagnostics() {
        let compiler =
            ToolchainCompiler::with_engines(&["vitae-test-no-such-engine-a", "vitae-test-no-such-engine-b"]);
        let err = compiler
            .compile("\\documentclass{article}\\begin{document}x\\end{document}")
            .await
            .unwrap_err();

        match err {
            CompileError::Failed(diagnostics) => {
                // Both attempts appear, in order.
                let a = diagnostics.find("vitae-test-no-such-engine-a").unwrap();
                let b = diagnostics.find("vitae-test-no-such-engine-b").unwrap();
                assert!(a < b);
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_default_engine_order() {
        let compiler = ToolchainCompiler::new();
        assert_eq!(compiler.engines, vec!["xelatex", "pdflatex"]);
    }
}
