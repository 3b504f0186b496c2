//! Document orchestration for list, tangle, and weave.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::{NowebError, Result};
use crate::io::Transaction;
use crate::model::{expand_chunk, ChunkName, ChunkStore};
use crate::readers::{read_document, ParsedDocument, ReadMode};

use super::context::Context;

/// A document being processed.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path to the source document, as given.
    pub path: PathBuf,
    /// Scanned content.
    pub parsed: ParsedDocument,
}

impl Document {
    /// Loads and scans a document.
    pub fn load(path: &Path, ctx: &Context, mode: ReadMode) -> Result<Self> {
        if !ctx.file_cache.exists(path) {
            return Err(NowebError::DocumentNotFound(path.to_path_buf()));
        }
        let content = ctx.file_cache.read(path)?;
        let parsed = read_document(&content, Some(path), &ctx.config, mode)?;

        Ok(Self {
            path: path.to_path_buf(),
            parsed,
        })
    }

    /// Returns the chunk store.
    pub fn store(&self) -> &ChunkStore {
        &self.parsed.store
    }

    /// Expands every file-like chunk.
    ///
    /// Fails on the first chunk that cannot be expanded, before anything is written.
    pub fn tangle(&self) -> Result<Vec<(ChunkName, String)>> {
        self.store()
            .file_names()
            .map(|name| {
                let content = expand_chunk(self.store(), name)?;
                tracing::debug!("Expanded <<{}>> ({} bytes)", name, content.len());
                Ok((name.clone(), content))
            })
            .collect()
    }

    /// Path the woven markup of this document is written to.
    pub fn weave_path(&self, ctx: &Context) -> PathBuf {
        let extension = &ctx.config.weave.extension;
        let source = ctx.resolve_path(&self.path);

        let mut target = match ctx.config.output_dir() {
            Some(_) => {
                let file_name = source.file_name().map(OsString::from).unwrap_or_default();
                ctx.output_dir_for(&self.path).join(file_name)
            }
            None => source.clone(),
        };
        target.set_extension(extension);

        if target == source {
            let mut name = target.file_name().map(OsString::from).unwrap_or_default();
            name.push(".");
            name.push(extension);
            target.set_file_name(name);
        }
        target
    }
}

/// File-like chunk names of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub document: PathBuf,
    pub chunks: Vec<ChunkName>,
}

/// Lists chunk names of each document; only file-like ones unless `all`.
pub fn list_documents(ctx: &Context, files: &[PathBuf], all: bool) -> Result<Vec<Listing>> {
    ctx.documents(files)?
        .iter()
        .map(|path| {
            let doc = Document::load(path, ctx, ReadMode::Tangle)?;
            let chunks = doc
                .store()
                .names()
                .filter(|name| all || name.is_file_like())
                .cloned()
                .collect();
            Ok(Listing {
                document: doc.path,
                chunks,
            })
        })
        .collect()
}

/// Tangles documents into a write plan.
///
/// All documents are scanned and expanded before the plan is returned, so a
/// failing chunk anywhere leaves the disk untouched.
pub fn tangle_documents(ctx: &Context, files: &[PathBuf]) -> Result<Transaction> {
    let mut transaction = Transaction::new();

    for path in ctx.documents(files)? {
        let doc = Document::load(&path, ctx, ReadMode::Tangle)?;
        let output_dir = ctx.output_dir_for(&doc.path);

        for (name, content) in doc.tangle()? {
            transaction.write(output_dir.join(name.output_path()?), content);
        }
    }

    Ok(transaction)
}

/// Weaves documents into a write plan.
pub fn weave_documents(ctx: &Context, files: &[PathBuf]) -> Result<Transaction> {
    let mut transaction = Transaction::new();

    for path in ctx.documents(files)? {
        let doc = Document::load(&path, ctx, ReadMode::Weave)?;
        let target = doc.weave_path(ctx);
        let markup = doc.parsed.markup.clone().unwrap_or_default();
        transaction.write(target, markup);
    }

    Ok(transaction)
}
