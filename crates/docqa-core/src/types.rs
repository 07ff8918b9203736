//! Domain types shared by the extraction, indexing and answering crates.

use serde::{Deserialize, Serialize};

pub type ChunkId = String;

/// A bounded-length window of the corpus text, the unit of retrieval.
///
/// - `id`: stable identifier within one pipeline build
/// - `content`: the text payload, including the leading overlap shared with
///   the previous chunk
/// - `chunk_index`/`total_chunks`: position within the corpus
///
/// Chunks are immutable once produced by the chunker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: ChunkId,
    pub content: String,
    pub chunk_index: usize,
    pub total_chunks: usize,
}

/// A chunk returned from similarity search. Higher score is closer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Retrieved {
    pub score: f32,
    pub chunk: Chunk,
}
