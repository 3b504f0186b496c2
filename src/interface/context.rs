//! Execution context for noweb operations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::errors::{NowebError, Result};
use crate::io::{FileCache, RealFileCache};

/// Context for noweb operations.
///
/// Contains configuration and file system access.
#[derive(Debug, Clone)]
pub struct Context {
    /// Configuration.
    pub config: Config,
    /// Read access to documents.
    pub file_cache: Arc<dyn FileCache>,
    /// Base directory for relative paths.
    pub base_dir: PathBuf,
}

impl Context {
    /// Creates a new context with the given configuration.
    pub fn new(config: Config, base_dir: PathBuf) -> Self {
        let file_cache = Arc::new(RealFileCache::new(base_dir.clone()));
        Self {
            config,
            file_cache,
            base_dir,
        }
    }

    /// Creates a context with default configuration.
    pub fn default_for_dir(base_dir: PathBuf) -> Self {
        Self::new(Config::default(), base_dir)
    }

    /// Creates a context from the current directory and its configuration file.
    pub fn from_current_dir() -> Result<Self> {
        let base_dir = std::env::current_dir()?;
        let config = crate::config::read_config(&base_dir)?;
        Ok(Self::new(config, base_dir))
    }

    /// Replaces the file cache, e.g. with an in-memory one.
    pub fn with_file_cache(mut self, file_cache: Arc<dyn FileCache>) -> Self {
        self.file_cache = file_cache;
        self
    }

    /// Returns document paths matching the configured patterns.
    pub fn source_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for pattern in &self.config.source_patterns {
            glob::Pattern::new(pattern)?;
            files.extend(self.file_cache.glob(pattern)?);
        }
        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Returns the documents to process: `files` if any, else the configured patterns.
    pub fn documents(&self, files: &[PathBuf]) -> Result<Vec<PathBuf>> {
        if !files.is_empty() {
            return Ok(files.to_vec());
        }
        let found = self.source_files()?;
        if found.is_empty() {
            return Err(NowebError::Config(format!(
                "No documents given and none match {:?}",
                self.config.source_patterns
            )));
        }
        Ok(found)
    }

    /// Resolves a path relative to the base directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Directory that outputs of `document` are written below.
    ///
    /// The configured output directory if any, else the document's own directory.
    pub fn output_dir_for(&self, document: &Path) -> PathBuf {
        match self.config.output_dir() {
            Some(dir) => self.resolve_path(dir),
            None => self
                .resolve_path(document)
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.base_dir.clone()),
        }
    }
}
