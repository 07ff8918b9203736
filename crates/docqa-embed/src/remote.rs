use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use docqa_core::config::{EmbeddingSettings, API_KEY_VAR};
use docqa_core::error::Error;
use docqa_core::traits::Embedder;

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}

/// Blocking client for an OpenAI-compatible `/embeddings` endpoint.
pub struct RemoteEmbedder {
    client: Client,
    base_url: String,
    model: String,
    dim: usize,
    api_key: String,
}

impl RemoteEmbedder {
    pub fn from_env(settings: &EmbeddingSettings) -> anyhow::Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| Error::InvalidConfig(format!("{API_KEY_VAR} is not set")))?;
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            dim: settings.dim,
            api_key,
        })
    }
}

impl Embedder for RemoteEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let url = format!("{}/embeddings", self.base_url);
        let request = EmbeddingRequest { model: &self.model, input: texts };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| Error::EmbeddingProvider(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::EmbeddingProvider(format!("{url} returned {status}: {body}")).into());
        }

        let mut parsed: EmbeddingResponse = response
            .json()
            .map_err(|e| Error::EmbeddingProvider(format!("invalid embeddings payload: {e}")))?;
        if parsed.data.len() != texts.len() {
            return Err(Error::EmbeddingProvider(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                parsed.data.len()
            ))
            .into());
        }
        // The API is allowed to reorder entries; `index` is authoritative.
        parsed.data.sort_by_key(|d| d.index);

        let mut vectors = Vec::with_capacity(parsed.data.len());
        for data in parsed.data {
            if data.embedding.len() != self.dim {
                return Err(Error::EmbeddingProvider(format!(
                    "expected {}-dim embedding, got {}",
                    self.dim,
                    data.embedding.len()
                ))
                .into());
            }
            vectors.push(data.embedding);
        }
        Ok(vectors)
    }
}
