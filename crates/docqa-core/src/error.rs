use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for the pipeline. Unsupported file extensions are not an
/// error (the loader skips them); everything below aborts the current phase.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text from {}: {}", path.display(), reason)]
    Parse { path: PathBuf, reason: String },

    #[error("embedding provider error: {0}")]
    EmbeddingProvider(String),

    #[error("language model provider error: {0}")]
    LlmProvider(String),
}

pub type Result<T> = std::result::Result<T, Error>;
