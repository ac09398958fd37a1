// PDF rendering: LaTeX source out of latex::build_latex, PDF bytes out of
// the external TeX toolchain. The compiler is a trait object so handlers can
// be tested without a TeX installation.

pub mod compiler;
pub mod handlers;

pub use compiler::{CompileError, TexCompiler, ToolchainCompiler};
