use std::fs;
use std::path::Path;

use tempfile::TempDir;

use docqa_core::traits::ChatModel;
use docqa_embed::HashedEmbedder;
use docqa_rag::{PipelineOptions, QaPipeline};

/// Echoes a fixed answer and remembers nothing. Keeps pipeline tests off the
/// network.
struct CannedModel {
    reply: String,
}

impl ChatModel for CannedModel {
    fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok(self.reply.clone())
    }
}

fn write_corpus(dir: &Path) {
    fs::write(
        dir.join("handbook.txt"),
        "Emeritus professors retain full library privileges.\n\
         Eligibility for emeritus status requires ten years of service.\n\
         Dr. Howard holds office hours on Tuesdays from 2pm to 4pm.\n",
    )
    .expect("write handbook");
    fs::write(
        dir.join("syllabus.txt"),
        "Mobile Application Development meets Mondays at 10am in Hall B.\n\
         Homework assignments count for 30 percent of the final grade.\n",
    )
    .expect("write syllabus");
}

fn build_pipeline(dir: &Path, reply: &str) -> QaPipeline {
    let options = PipelineOptions {
        chunking: docqa_core::config::ChunkerConfig {
            chunk_size: 80,
            chunk_overlap: 16,
        },
        top_k: 2,
        embed_batch_size: 3,
    };
    QaPipeline::build(
        dir,
        &options,
        Box::new(HashedEmbedder::new(128)),
        Box::new(CannedModel { reply: reply.to_string() }),
    )
    .expect("build pipeline")
}

#[test]
fn build_indexes_supported_files_only() {
    let tmp = TempDir::new().expect("tempdir");
    write_corpus(tmp.path());
    fs::write(tmp.path().join("notes.md"), "markdown is not corpus text").expect("write");

    let pipeline = build_pipeline(tmp.path(), "ok");
    assert!(pipeline.chunk_count() > 0);
    assert_eq!(pipeline.dim(), 128);

    let hits = pipeline.retrieve("markdown", pipeline.chunk_count()).expect("retrieve");
    assert!(hits.iter().all(|r| !r.chunk.content.contains("markdown")));
}

#[test]
fn retrieval_is_deterministic_across_builds() {
    let tmp = TempDir::new().expect("tempdir");
    write_corpus(tmp.path());

    let first = build_pipeline(tmp.path(), "ok");
    let second = build_pipeline(tmp.path(), "ok");

    let query = "Do emeritus professors have library privileges?";
    let a = first.retrieve(query, 2).expect("retrieve");
    let b = second.retrieve(query, 2).expect("retrieve");

    let ids_a: Vec<&str> = a.iter().map(|r| r.chunk.id.as_str()).collect();
    let ids_b: Vec<&str> = b.iter().map(|r| r.chunk.id.as_str()).collect();
    assert_eq!(ids_a, ids_b);
}

#[test]
fn retrieve_finds_the_relevant_chunk() {
    let tmp = TempDir::new().expect("tempdir");
    write_corpus(tmp.path());

    let pipeline = build_pipeline(tmp.path(), "ok");
    let hits = pipeline
        .retrieve("emeritus professors library privileges", 2)
        .expect("retrieve");
    assert!(!hits.is_empty());
    assert!(hits.iter().any(|r| r.chunk.content.contains("library privileges")));
    assert!(hits[0].score >= hits.last().map(|r| r.score).unwrap_or(f32::MIN));
}

#[test]
fn run_batch_prints_separator_query_and_answer() {
    let tmp = TempDir::new().expect("tempdir");
    write_corpus(tmp.path());

    let pipeline = build_pipeline(tmp.path(), "Yes, they do.");
    let queries = vec!["Do emeritus professors have library privileges?".to_string()];

    let mut out = Vec::new();
    pipeline.run_batch(&queries, &mut out).expect("run batch");

    let printed = String::from_utf8(out).expect("utf8");
    assert_eq!(
        printed,
        " \nDo emeritus professors have library privileges?\nYes, they do.\n"
    );
}

#[test]
fn empty_directory_builds_an_empty_index() {
    let tmp = TempDir::new().expect("tempdir");
    let pipeline = build_pipeline(tmp.path(), "ok");
    assert_eq!(pipeline.chunk_count(), 0);
    assert!(pipeline.retrieve("anything", 4).expect("retrieve").is_empty());
}
