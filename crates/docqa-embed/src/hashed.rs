use std::hash::Hasher;

use twox_hash::XxHash64;

use docqa_core::traits::Embedder;

/// Deterministic token-hash embedder. Each whitespace token hashes into a
/// bucket with a pseudo-random weight, then the vector is L2-normalized so
/// cosine scores stay comparable with real embeddings.
pub struct HashedEmbedder {
    dim: usize,
}

impl HashedEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dim];
        for (i, token) in text.split_whitespace().enumerate() {
            let mut hasher = XxHash64::with_seed(0);
            hasher.write(token.as_bytes());
            let h = hasher.finish();
            let bucket = (h % self.dim as u64) as usize;
            let weight = ((h >> 32) as u32 as f32) / u32::MAX as f32;
            vector[bucket] += weight + (i % 3) as f32 * 0.01;
        }
        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt().max(1e-6);
        for v in &mut vector {
            *v /= norm;
        }
        vector
    }
}

impl Embedder for HashedEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }
}
