// LaTeX generation: a pure, deterministic transform from the resume model
// to a standalone .tex source. No I/O here — compilation lives in render/.

pub mod escape;
pub mod generator;

pub use generator::build_latex;
