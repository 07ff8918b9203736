//! Overlapping fixed-size chunking of the corpus text.
//!
//! Windows are cut preferentially on a newline inside the window; each
//! subsequent chunk begins with the trailing `chunk_overlap` bytes of its
//! predecessor, so concatenating chunks with leading overlaps removed
//! reconstructs the input exactly.

use crate::config::ChunkerConfig;
use crate::error::Result;
use crate::types::Chunk;

/// Split `text` into overlapping windows of at most `chunk_size` bytes.
///
/// With no newline in range the window is cut on the raw character stream.
pub fn split(text: &str, cfg: &ChunkerConfig) -> Result<Vec<String>> {
    cfg.validate()?;
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let max = cfg.chunk_size;
    let overlap = cfg.chunk_overlap;
    let mut pieces = Vec::new();
    let mut start = 0usize;

    loop {
        if text.len() - start <= max {
            pieces.push(text[start..].to_string());
            break;
        }

        let mut hard_end = floor_char_boundary(text, start + max);
        if hard_end == start {
            // chunk_size is narrower than the character at `start`; take that
            // one character whole so the window always advances.
            hard_end = ceil_char_boundary(text, start + 1);
        }
        let window = &text[start..hard_end];
        // Cut after the last newline in the window, but only if that clears
        // the overlap; otherwise the next window would not advance.
        let end = match window.rfind('\n') {
            Some(pos) if pos + 1 > overlap => start + pos + 1,
            _ => hard_end,
        };
        pieces.push(text[start..end].to_string());

        let next = floor_char_boundary(text, end.saturating_sub(overlap));
        start = if next > start { next } else { end };
    }

    Ok(pieces)
}

/// `split`, with positions assigned. Chunk ids are stable within one build.
pub fn split_to_chunks(text: &str, cfg: &ChunkerConfig) -> Result<Vec<Chunk>> {
    let pieces = split(text, cfg)?;
    let total = pieces.len();
    Ok(pieces
        .into_iter()
        .enumerate()
        .map(|(i, content)| Chunk {
            id: format!("corpus:{i}"),
            content,
            chunk_index: i,
            total_chunks: total,
        })
        .collect())
}

/// Largest char boundary at or below `i`.
fn floor_char_boundary(s: &str, mut i: usize) -> usize {
    if i >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest char boundary at or above `i`.
fn ceil_char_boundary(s: &str, mut i: usize) -> usize {
    if i >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(i) {
        i += 1;
    }
    i
}
