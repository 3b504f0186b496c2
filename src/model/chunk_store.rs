//! The ordered chunk store built from one document.

use indexmap::IndexMap;

use super::chunk::Chunk;
use super::chunk_name::ChunkName;
use crate::errors::{NowebError, Result};
use crate::text_location::TextLocation;

/// All chunks of one document, keyed by name.
///
/// Iteration follows the order in which names were first opened. The store
/// is filled by the document scanner and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct ChunkStore {
    chunks: IndexMap<ChunkName, Chunk>,
}

impl ChunkStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `name` at `location`, creating an empty chunk on first use.
    ///
    /// Returns the chunk so the scanner can append to it.
    pub fn open(&mut self, name: &ChunkName, location: TextLocation) -> &mut Chunk {
        let chunk = self
            .chunks
            .entry(name.clone())
            .or_insert_with(|| Chunk::new(name.clone()));
        chunk.opened_at(location);
        chunk
    }

    /// Appends a body line to an already opened chunk.
    pub fn append(&mut self, name: &ChunkName, line: &str) -> Result<()> {
        self.chunks
            .get_mut(name)
            .ok_or_else(|| NowebError::ChunkNotFound(name.clone()))?
            .push_line(line);
        Ok(())
    }

    /// Inserts a whole chunk, appending to the body if the name exists.
    pub fn insert(&mut self, chunk: Chunk) {
        match self.chunks.get_mut(&chunk.name) {
            Some(existing) => {
                existing.raw_body.push_str(&chunk.raw_body);
                existing.locations.extend(chunk.locations);
            }
            None => {
                self.chunks.insert(chunk.name.clone(), chunk);
            }
        }
    }

    pub fn get(&self, name: &ChunkName) -> Option<&Chunk> {
        self.chunks.get(name)
    }

    /// Gets a chunk, failing with `ChunkNotFound` if it was never defined.
    pub fn lookup(&self, name: &ChunkName) -> Result<&Chunk> {
        self.get(name)
            .ok_or_else(|| NowebError::ChunkNotFound(name.clone()))
    }

    /// Returns all chunk names in store order.
    pub fn names(&self) -> impl Iterator<Item = &ChunkName> {
        self.chunks.keys()
    }

    /// Returns the names of file-like chunks in store order.
    pub fn file_names(&self) -> impl Iterator<Item = &ChunkName> {
        self.names().filter(|name| name.is_file_like())
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl FromIterator<Chunk> for ChunkStore {
    fn from_iter<I: IntoIterator<Item = Chunk>>(iter: I) -> Self {
        let mut store = ChunkStore::new();
        for chunk in iter {
            store.insert(chunk);
        }
        store
    }
}
