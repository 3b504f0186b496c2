//! Error types for the noweb system.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::ChunkName;
use crate::text_location::TextLocation;

/// Main error type for noweb operations.
#[derive(Error, Debug)]
pub enum NowebError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("Chunk not found: {0}")]
    ChunkNotFound(ChunkName),

    #[error("Cyclic inclusion: {}", format_cycle(.0))]
    CyclicInclusion(Vec<ChunkName>),

    #[error("Chunk {name} opened at {location} is never closed")]
    UnterminatedChunk {
        name: ChunkName,
        location: TextLocation,
    },

    #[error("Chunk {0} names a file outside the output directory")]
    OutputOutsideDirectory(ChunkName),

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

fn format_cycle(names: &[ChunkName]) -> String {
    names
        .iter()
        .map(|n| format!("<<{}>>", n))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Result type alias for noweb operations.
pub type Result<T> = std::result::Result<T, NowebError>;
