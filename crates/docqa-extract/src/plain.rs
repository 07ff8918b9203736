use std::path::Path;

use docqa_core::error::{Error, Result};
use docqa_core::traits::TextExtractor;

/// Reads the file content verbatim.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
