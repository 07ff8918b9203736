use std::path::Path;

/// Text-to-vector provider. Index and query embeddings must come from the
/// same implementation or similarity scores are meaningless.
pub trait Embedder: Send + Sync {
    fn dim(&self) -> usize;
    fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;
}

/// One supported document format. Implementations read the whole file and
/// return its text; any read or parse failure is fatal for the run.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> crate::error::Result<String>;
}

/// Hosted completion model used by the answerer.
pub trait ChatModel: Send + Sync {
    fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}
