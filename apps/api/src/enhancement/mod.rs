// Resume enhancement: demo-mode heuristics, the live LLM backend and the HTTP handlers.
// Heuristic modules are pure and synchronous; only `enhancer` and `handlers` touch I/O.

pub mod cv_optimizer;
pub mod enhancer;
pub mod extraction;
pub mod handlers;
pub mod prompts;
pub mod skills;
pub mod summary;
pub mod tips;
pub mod vocabulary;

use thiserror::Error;

/// Internal failure inside a heuristic. Never reaches callers; each public
/// heuristic converts it into its fallback value.
#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
