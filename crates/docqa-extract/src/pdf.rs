use std::path::Path;

use docqa_core::error::{Error, Result};
use docqa_core::traits::TextExtractor;

/// Extracts page text in page order. Page joins carry no extra marker beyond
/// what the extraction library emits.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
