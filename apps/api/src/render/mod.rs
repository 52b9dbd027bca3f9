// Document Renderer — structured résumé record in, complete LaTeX source out.
// Pure and deterministic: all network/LLM concerns live in `analysis`.

pub mod escape;
pub mod handlers;
pub mod latex;
