//! Core model types for noweb.

mod chunk;
mod chunk_name;
mod chunk_store;
mod expand;
mod markup;

pub use chunk::Chunk;
pub use chunk_name::{is_file_like, ChunkName};
pub use chunk_store::ChunkStore;
pub use expand::{expand, expand_chunk, expand_guarded, InclusionPath};
pub use markup::{escape, DocumentMarkup};
