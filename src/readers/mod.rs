//! Readers for scanning noweb documents.

mod scanner;
mod types;

pub use scanner::{
    build_store, read_document, ChunkScanner, ParsedDocument, ReadMode, ScanState, Step,
};
pub use types::{document_lines, LineKind};
