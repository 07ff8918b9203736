use docqa_core::chunker::{split, split_to_chunks};
use docqa_core::config::ChunkerConfig;

fn cfg(size: usize, overlap: usize) -> ChunkerConfig {
    ChunkerConfig { chunk_size: size, chunk_overlap: overlap }
}

/// Removing each chunk's leading overlap and concatenating reconstructs the
/// original text exactly.
fn reconstruct(pieces: &[String], overlap: usize) -> String {
    let mut out = String::new();
    for (i, p) in pieces.iter().enumerate() {
        if i == 0 {
            out.push_str(p);
        } else {
            out.push_str(&p[overlap..]);
        }
    }
    out
}

#[test]
fn coverage_is_lossless_on_newline_text() {
    let text: String = (0..200)
        .map(|i| format!("line number {} with some filler words\n", i))
        .collect();
    let c = cfg(1000, 200);
    let pieces = split(&text, &c).expect("split");
    assert!(pieces.len() > 1);
    assert_eq!(reconstruct(&pieces, c.chunk_overlap), text);
}

#[test]
fn chunks_respect_max_size() {
    let text: String = (0..500).map(|i| format!("row {}\n", i)).collect();
    let c = cfg(300, 60);
    let pieces = split(&text, &c).expect("split");
    for p in &pieces {
        assert!(p.len() <= c.chunk_size, "chunk of {} bytes exceeds {}", p.len(), c.chunk_size);
    }
}

#[test]
fn adjacent_chunks_share_exactly_the_overlap() {
    let text: String = (0..300).map(|i| format!("entry {} lorem ipsum\n", i)).collect();
    let c = cfg(500, 100);
    let pieces = split(&text, &c).expect("split");
    assert!(pieces.len() > 2);
    for pair in pieces.windows(2) {
        let tail = &pair[0][pair[0].len() - c.chunk_overlap..];
        let head = &pair[1][..c.chunk_overlap];
        assert_eq!(tail, head);
    }
}

#[test]
fn degrades_to_raw_windowing_without_newlines() {
    let text = "x".repeat(2500);
    let c = cfg(1000, 200);
    let pieces = split(&text, &c).expect("split");
    assert!(pieces.len() > 1);
    for p in &pieces[..pieces.len() - 1] {
        assert_eq!(p.len(), c.chunk_size, "no newline means full windows");
    }
    assert_eq!(reconstruct(&pieces, c.chunk_overlap), text);
}

#[test]
fn cuts_prefer_newline_boundaries() {
    // Every line is 20 bytes, so a 100-byte window with 20 overlap should
    // cut right after a newline rather than mid-line.
    let text: String = (0..50).map(|i| format!("line-{:03} abcdefghij\n", i)).collect();
    let c = cfg(100, 20);
    let pieces = split(&text, &c).expect("split");
    for p in &pieces[..pieces.len() - 1] {
        assert!(p.ends_with('\n'), "chunk should end at a line boundary: {:?}", p);
    }
}

#[test]
fn chunk_positions_and_ids_are_assigned() {
    let text: String = (0..100).map(|i| format!("paragraph {}\n", i)).collect();
    let chunks = split_to_chunks(&text, &cfg(300, 50)).expect("chunks");
    let total = chunks.len();
    assert!(total > 1);
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.chunk_index, i);
        assert_eq!(chunk.total_chunks, total);
        assert_eq!(chunk.id, format!("corpus:{}", i));
    }
}

#[test]
fn invalid_geometry_is_rejected() {
    assert!(split("some text", &cfg(100, 100)).is_err());
    assert!(split("some text", &cfg(0, 0)).is_err());
}
