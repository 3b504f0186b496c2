//! High-level interface for noweb operations.

mod context;
mod document;

pub use context::Context;
pub use document::{list_documents, tangle_documents, weave_documents, Document, Listing};
