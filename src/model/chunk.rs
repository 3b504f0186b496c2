//! Chunk representation.

use crate::text_location::TextLocation;

use super::chunk_name::ChunkName;

/// A named block of text collected from a document.
///
/// A name may be opened several times; every occurrence appends to the same
/// body in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Name of the chunk.
    pub name: ChunkName,
    /// Every body line of every occurrence, terminators included.
    pub raw_body: String,
    /// Where each occurrence was opened.
    pub locations: Vec<TextLocation>,
}

impl Chunk {
    /// Creates an empty chunk.
    pub fn new(name: ChunkName) -> Self {
        Self {
            name,
            raw_body: String::new(),
            locations: Vec::new(),
        }
    }

    /// Creates a chunk with a body, for tests and embedding.
    pub fn with_body(name: ChunkName, body: impl Into<String>) -> Self {
        Self {
            name,
            raw_body: body.into(),
            locations: Vec::new(),
        }
    }

    /// Appends one line (with its terminator) to the body.
    pub fn push_line(&mut self, line: &str) {
        self.raw_body.push_str(line);
    }

    /// Records that the chunk was opened at `location`.
    pub fn opened_at(&mut self, location: TextLocation) {
        self.locations.push(location);
    }

    /// Number of times the chunk was opened in the document.
    pub fn occurrences(&self) -> usize {
        self.locations.len()
    }

    pub fn is_file_like(&self) -> bool {
        self.name.is_file_like()
    }
}
