//! In-memory flat vector index with cosine-similarity search.
//!
//! The index holds every chunk vector in a plain `Vec` and scans it all on
//! each query. At corpus sizes of a few thousand chunks that is faster than
//! any ANN structure would be, and it keeps retrieval exact.

use anyhow::{bail, Result};

use docqa_core::types::{Chunk, Retrieved};

pub const DEFAULT_TOP_K: usize = 4;

struct Entry {
    chunk: Chunk,
    vector: Vec<f32>,
}

pub struct FlatIndex {
    dim: usize,
    entries: Vec<Entry>,
}

impl FlatIndex {
    /// Pair chunks with their vectors, in order. Counts and dimensions must
    /// line up exactly.
    pub fn build(chunks: Vec<Chunk>, embeddings: Vec<Vec<f32>>, dim: usize) -> Result<Self> {
        if chunks.len() != embeddings.len() {
            bail!("{} chunks but {} embeddings", chunks.len(), embeddings.len());
        }
        let mut entries = Vec::with_capacity(chunks.len());
        for (chunk, vector) in chunks.into_iter().zip(embeddings) {
            if vector.len() != dim {
                bail!("chunk {} has a {}-dim vector, index dim is {dim}", chunk.id, vector.len());
            }
            entries.push(Entry { chunk, vector });
        }
        tracing::debug!(entries = entries.len(), dim, "built flat index");
        Ok(Self { dim, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Exhaustive scan, highest cosine score first. Ties keep insertion
    /// order, so repeated queries return identical rankings.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<Retrieved> {
        let mut scored: Vec<Retrieved> = self
            .entries
            .iter()
            .map(|entry| Retrieved {
                score: cosine_similarity(query, &entry.vector),
                chunk: entry.chunk.clone(),
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(k);
        scored
    }
}

/// Cosine similarity of two equal-length vectors. Returns 0.0 when either
/// vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
