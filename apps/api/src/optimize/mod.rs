//! Content optimization — prompt construction, model-output parsing,
//! heuristic fallbacks, and posting-time advice for social captions.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod optimizer;
pub mod parser;
pub mod platform;
pub mod prompts;
pub mod timing;
