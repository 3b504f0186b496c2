//! Line classification for the document scanner.

use crate::config::{is_chunk_end, match_chunk_start};
use crate::model::ChunkName;

/// What a single document line is, before knowing the scanner state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `<<NAME>>=` opening chunk `NAME`.
    ChunkStart(ChunkName),
    /// A lone `@`, which is plain text outside a chunk.
    ChunkEnd(&'a str),
    /// Anything else, terminator included.
    Text(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classifies a line (with or without its terminator).
    pub fn classify(line: &'a str) -> Self {
        if let Some(name) = match_chunk_start(line) {
            return Self::ChunkStart(ChunkName::new(name));
        }
        if is_chunk_end(line) {
            return Self::ChunkEnd(line);
        }
        Self::Text(line)
    }
}

/// Splits a document into lines, keeping each line's terminator.
pub fn document_lines(input: &str) -> impl Iterator<Item = &str> {
    input.split_inclusive('\n')
}
