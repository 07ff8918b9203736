//! Extension-dispatched document text extraction.
//!
//! A registry maps file extensions to `TextExtractor` implementations;
//! anything unregistered is explicitly classified as `Skip`. Matching is
//! case-sensitive, so `report.PDF` is skipped while `report.pdf` is parsed.

mod docx;
mod pdf;
mod plain;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use plain::PlainTextExtractor;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use docqa_core::error::{Error, Result};
use docqa_core::traits::TextExtractor;

/// How the registry classifies a directory entry.
pub enum Dispatch<'a> {
    Extract(&'a dyn TextExtractor),
    Skip,
}

pub struct ExtractorRegistry {
    by_ext: BTreeMap<String, Box<dyn TextExtractor>>,
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        let mut registry = Self { by_ext: BTreeMap::new() };
        registry.register("pdf", Box::new(PdfExtractor));
        registry.register("docx", Box::new(DocxExtractor));
        registry.register("txt", Box::new(PlainTextExtractor));
        registry
    }
}

impl ExtractorRegistry {
    pub fn register(&mut self, extension: &str, extractor: Box<dyn TextExtractor>) {
        self.by_ext.insert(extension.to_string(), extractor);
    }

    pub fn dispatch(&self, path: &Path) -> Dispatch<'_> {
        let extractor = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|e| self.by_ext.get(e));
        match extractor {
            Some(e) => Dispatch::Extract(e.as_ref()),
            None => Dispatch::Skip,
        }
    }

    /// Read every supported file directly under `dir` (no recursion) and
    /// concatenate the extracted text. Files run together without a boundary
    /// marker. A missing or unreadable directory, or a read or parse failure
    /// on a supported file, aborts the load.
    pub fn load_directory(&self, dir: &Path) -> Result<String> {
        let mut files: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                Error::Io { path, source: e.into() }
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        files.sort();

        let mut combined = String::new();
        for path in &files {
            match self.dispatch(path) {
                Dispatch::Extract(extractor) => {
                    tracing::debug!(path = %path.display(), "extracting text");
                    combined.push_str(&extractor.extract(path)?);
                }
                Dispatch::Skip => {
                    tracing::debug!(path = %path.display(), "unsupported extension, skipping");
                }
            }
        }
        Ok(combined)
    }
}
