//! Output chunker for length-limited transports
//!
//! Chat transports cap message length (Telegram at 4096 characters, for
//! example), so oversized answers must be delivered as ordered segments.
//! [`chunk`] is a pure function: no I/O, no allocation beyond the returned
//! segments.

use thiserror::Error;

/// Chunking failures. Given the invariants below these indicate a caller
/// defect, not a runtime condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkingError {
    #[error("maximum segment length must be at least 1")]
    ZeroLimit,
}

/// Split `text` into ordered segments of at most `max_len` characters.
///
/// Splits prefer the last newline within the first `max_len` characters;
/// when none exists the cut is hard at exactly `max_len`. When a split lands
/// on a newline the remainder keeps that newline as its leading character,
/// so concatenating the segments reconstructs the original text exactly (a
/// transport may strip at most that one leading newline per segment for
/// display).
///
/// Lengths are counted in characters, and cuts always land on character
/// boundaries. Empty input yields exactly one empty segment. Runs in a
/// bounded number of steps: every iteration consumes at least one character.
pub fn chunk(text: &str, max_len: usize) -> Result<Vec<String>, ChunkingError> {
    if max_len == 0 {
        return Err(ChunkingError::ZeroLimit);
    }
    if text.is_empty() {
        return Ok(vec![String::new()]);
    }

    let mut segments = Vec::new();
    let mut rest = text;

    loop {
        // Byte offset just past the first max_len characters, if that many exist.
        let hard_cut = match rest.char_indices().nth(max_len) {
            Some((offset, _)) => offset,
            None => {
                segments.push(rest.to_string());
                break;
            }
        };

        match rest[..hard_cut].rfind('\n') {
            // A newline at offset 0 would make no progress; hard-cut instead.
            Some(newline) if newline > 0 => {
                segments.push(rest[..newline].to_string());
                rest = &rest[newline..];
            }
            _ => {
                segments.push(rest[..hard_cut].to_string());
                rest = &rest[hard_cut..];
            }
        }
    }

    Ok(segments)
}
