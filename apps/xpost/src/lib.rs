//! xpost — X (Twitter) post drafts from an LLM completion endpoint.
//!
//! A request goes through three steps: the prompt is rendered from the
//! theme, keywords, tone and length limit; the completion endpoint is called
//! once; the reply is trimmed, tagged with up to three hashtags and cut to
//! the length limit.

pub mod cli;
pub mod config;
pub mod errors;
pub mod generation;
pub mod llm_client;

pub use errors::AppError;
pub use generation::formatter::format_post;
pub use generation::generator::{GeneratedPost, GenerationRequest, PostGenerator};
pub use generation::prompts::build_prompt;
pub use generation::tone::Tone;
pub use llm_client::CompletionClient;
