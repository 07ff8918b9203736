//! Embedding providers.
//!
//! `RemoteEmbedder` talks to an OpenAI-compatible `/embeddings` endpoint.
//! `HashedEmbedder` is a deterministic stand-in for tests and offline runs,
//! selected with `APP_USE_HASHED_EMBEDDINGS=1` or `provider = "hashed"`.

mod hashed;
mod remote;

pub use hashed::HashedEmbedder;
pub use remote::RemoteEmbedder;

use docqa_core::config::EmbeddingSettings;
use docqa_core::error::Error;
use docqa_core::traits::Embedder;

pub const USE_HASHED_EMBEDDINGS_VAR: &str = "APP_USE_HASHED_EMBEDDINGS";

/// Build the embedder the settings ask for. The env override wins over the
/// configured provider so test runs never reach the network.
pub fn embedder_from_settings(settings: &EmbeddingSettings) -> anyhow::Result<Box<dyn Embedder>> {
    if std::env::var(USE_HASHED_EMBEDDINGS_VAR).as_deref() == Ok("1") {
        tracing::info!(dim = settings.dim, "using hashed embeddings");
        return Ok(Box::new(HashedEmbedder::new(settings.dim)));
    }
    match settings.provider.as_str() {
        "hashed" => Ok(Box::new(HashedEmbedder::new(settings.dim))),
        "openai" => Ok(Box::new(RemoteEmbedder::from_env(settings)?)),
        other => Err(Error::InvalidConfig(format!("unknown embedding provider: {other}")).into()),
    }
}
