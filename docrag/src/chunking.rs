//! Text chunking with separator-priority split points.
//!
//! [`TextSplitter`] splits raw text into overlapping chunks of at most
//! `chunk_size` characters. Split points are chosen by trying
//! separators in priority order — paragraph break, line break,
//! sentence-ending punctuation, space — and falling back to a hard
//! character cut. Splitting is lazy: [`TextSplitter::split`] returns
//! the [`Chunks`] iterator, which can be cloned to restart.

use crate::error::{Result, RetrievalError};

/// Split-point candidates, most preferred first. Each separator stays
/// attached to the chunk it terminates.
const SEPARATORS: [&str; 6] = ["\n\n", "\n", ". ", "! ", "? ", " "];

/// Splits text into overlapping chunks bounded by a character count.
///
/// # Example
///
/// ```rust,ignore
/// use docrag::TextSplitter;
///
/// let splitter = TextSplitter::new(1000, 200)?;
/// let chunks: Vec<String> = splitter.split(&raw_text).collect();
/// ```
#[derive(Debug, Clone)]
pub struct TextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TextSplitter {
    /// Create a new `TextSplitter`.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` — maximum number of characters per chunk
    /// * `chunk_overlap` — number of characters each chunk shares with
    ///   its predecessor
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::Chunking`] if `chunk_size == 0` or
    /// `chunk_overlap >= chunk_size`. Rejecting these here is what
    /// guarantees the split loop always advances.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(RetrievalError::Chunking(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if chunk_overlap >= chunk_size {
            return Err(RetrievalError::Chunking(format!(
                "chunk_overlap ({chunk_overlap}) must be less than chunk_size ({chunk_size})"
            )));
        }
        Ok(Self { chunk_size, chunk_overlap })
    }

    /// Lazily split `text` into chunks.
    ///
    /// Chunks are trimmed of surrounding whitespace; whitespace-only
    /// chunks are skipped. Empty or whitespace-only input therefore
    /// yields an empty sequence — "nothing to index", not an error.
    pub fn split<'a>(&self, text: &'a str) -> Chunks<'a> {
        Chunks {
            text,
            cursor: 0,
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap,
        }
    }
}

/// Lazy iterator over the chunks of one text. Clone to restart.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    text: &'a str,
    /// Byte offset of the next chunk's first character. Always on a
    /// char boundary.
    cursor: usize,
    chunk_size: usize,
    chunk_overlap: usize,
}

impl Iterator for Chunks<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let rest = &self.text[self.cursor..];
            if rest.is_empty() {
                return None;
            }

            // Byte offsets of the first chunk_size + 1 char boundaries
            // of the remaining text; sizes are in characters, not bytes.
            let bounds: Vec<usize> =
                rest.char_indices().map(|(offset, _)| offset).take(self.chunk_size + 1).collect();

            if bounds.len() <= self.chunk_size {
                // Remainder fits in one final chunk; stepping back by
                // the overlap would only re-emit its tail.
                self.cursor = self.text.len();
                let trimmed = rest.trim();
                return if trimmed.is_empty() { None } else { Some(trimmed.to_string()) };
            }

            let window = &rest[..bounds[self.chunk_size]];
            let split_end = SEPARATORS
                .iter()
                .find_map(|sep| window.rfind(sep).map(|pos| pos + sep.len()))
                .unwrap_or(window.len());
            let chunk = &window[..split_end];
            let consumed_chars = chunk.chars().count();

            // Step back chunk_overlap characters from the chunk end,
            // unless that would not advance the cursor (short chunks).
            if consumed_chars > self.chunk_overlap {
                self.cursor += bounds[consumed_chars - self.chunk_overlap];
            } else {
                self.cursor += split_end;
            }

            let trimmed = chunk.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
}
