//! Batch document QA: index the docs directory, then answer the configured
//! question list on stdout.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use docqa_core::config::{
    expand_path, ChunkerConfig, Config, EmbeddingSettings, LlmSettings, RetrievalSettings,
};
use docqa_embed::embedder_from_settings;
use docqa_llm::ChatClient;
use docqa_rag::{PipelineOptions, QaPipeline};

const DEFAULT_QUESTIONS: &[&str] = &[
    "Do emeritus professors have library privileges?",
    "How many years of service are required to be eligible for emeritus status?",
    "Who are the main characters in Emma?",
    "When are Dr. Howard's office hours?",
    "For Natural Language Processing, what percentage of the final grade are homework assignments?",
    "When and where does Mobile Application Development meet?",
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    let docs_dir: String = config.get("data.docs_dir").unwrap_or_else(|_| "docs".to_string());
    let chunking: ChunkerConfig = config.get("chunking").unwrap_or_default();
    let embedding: EmbeddingSettings = config.get("embedding").unwrap_or_default();
    let llm: LlmSettings = config.get("llm").unwrap_or_default();
    let retrieval: RetrievalSettings = config.get("retrieval").unwrap_or_default();
    let questions: Vec<String> = config
        .get("questions")
        .unwrap_or_else(|_| DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect());

    let docs_dir = expand_path(&docs_dir);
    let embedder = embedder_from_settings(&embedding)?;
    let model = Box::new(ChatClient::from_env(&llm)?);

    let options = PipelineOptions {
        chunking,
        top_k: retrieval.top_k,
        embed_batch_size: embedding.batch_size,
    };

    println!("📚 Indexing documents under {}", docs_dir.display());
    let pipeline = QaPipeline::build(&docs_dir, &options, embedder, model)?;
    println!(
        "✅ Indexed {} chunks ({}-dim)",
        pipeline.chunk_count(),
        pipeline.dim()
    );

    let mut stdout = std::io::stdout().lock();
    pipeline.run_batch(&questions, &mut stdout)?;
    Ok(())
}
