//! End-to-end question answering over a document directory.
//!
//! `QaPipeline::build` loads and chunks the corpus, embeds every chunk, and
//! holds the resulting flat index in memory. Queries then run retrieve-and-
//! stuff: embed the question, take the nearest chunks, and hand them to the
//! chat model inside one prompt.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use docqa_core::chunker;
use docqa_core::config::ChunkerConfig;
use docqa_core::traits::{ChatModel, Embedder};
use docqa_core::types::Retrieved;
use docqa_extract::ExtractorRegistry;
use docqa_llm::prompt::stuff_prompt;
use docqa_vector::{FlatIndex, DEFAULT_TOP_K};

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub chunking: ChunkerConfig,
    pub top_k: usize,
    pub embed_batch_size: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            chunking: ChunkerConfig::default(),
            top_k: DEFAULT_TOP_K,
            embed_batch_size: 64,
        }
    }
}

pub struct QaPipeline {
    index: FlatIndex,
    embedder: Box<dyn Embedder>,
    llm: Box<dyn ChatModel>,
    top_k: usize,
}

impl QaPipeline {
    /// Index every supported document directly under `docs_dir`.
    pub fn build(
        docs_dir: &Path,
        options: &PipelineOptions,
        embedder: Box<dyn Embedder>,
        llm: Box<dyn ChatModel>,
    ) -> Result<Self> {
        let registry = ExtractorRegistry::default();
        let text = registry
            .load_directory(docs_dir)
            .with_context(|| format!("loading documents from {}", docs_dir.display()))?;

        let chunks = chunker::split_to_chunks(&text, &options.chunking)?;
        tracing::info!(chunks = chunks.len(), "corpus chunked");

        let batch_size = options.embed_batch_size.max(1);
        let bar = ProgressBar::new(chunks.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message("embedding");

        let mut embeddings = Vec::with_capacity(chunks.len());
        for batch in chunks.chunks(batch_size) {
            let texts: Vec<String> = batch.iter().map(|c| c.content.clone()).collect();
            let mut vectors = embedder.embed_batch(&texts)?;
            bar.inc(vectors.len() as u64);
            embeddings.append(&mut vectors);
        }
        bar.finish_and_clear();

        let index = FlatIndex::build(chunks, embeddings, embedder.dim())?;
        Ok(Self {
            index,
            embedder,
            llm,
            top_k: options.top_k,
        })
    }

    pub fn chunk_count(&self) -> usize {
        self.index.len()
    }

    pub fn dim(&self) -> usize {
        self.index.dim()
    }

    /// Nearest `k` chunks for a query, best first, with scores.
    pub fn retrieve(&self, query: &str, k: usize) -> Result<Vec<Retrieved>> {
        let mut vectors = self.embedder.embed_batch(&[query.to_string()])?;
        let query_vec = vectors
            .pop()
            .context("embedder returned no vector for the query")?;
        Ok(self.index.search(&query_vec, k))
    }

    /// Retrieve context for `query` and ask the chat model.
    pub fn answer(&self, query: &str) -> Result<String> {
        let hits = self.retrieve(query, self.top_k)?;
        let context: Vec<&str> = hits.iter().map(|r| r.chunk.content.as_str()).collect();
        let prompt = stuff_prompt(&context, query);
        self.llm.complete(&prompt)
    }

    /// Answer each query in order, writing a blank-ish separator line, the
    /// query, and the answer.
    pub fn run_batch(&self, queries: &[String], out: &mut dyn Write) -> Result<()> {
        for query in queries {
            let answer = self.answer(query)?;
            writeln!(out, " ")?;
            writeln!(out, "{query}")?;
            writeln!(out, "{answer}")?;
        }
        Ok(())
    }
}
