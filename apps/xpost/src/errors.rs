use thiserror::Error;

/// Application-level error type returned across the library surface.
///
/// Transport detail never leaks through `Generation`: the underlying
/// `LlmError` is logged where it happens and callers only see that the
/// generation failed.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Generation(String),
}

impl AppError {
    pub fn is_config(&self) -> bool {
        matches!(self, AppError::Config(_))
    }
}
