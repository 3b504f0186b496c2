//! Write plans: every output of a command, collected before touching disk.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::digest::same_content;
use crate::errors::{NowebError, Result};

/// Result of executing a single write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or replaced.
    Written,
    /// The file already had the planned content.
    Unchanged,
}

/// Write `content` to `path`, creating parent directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteAction {
    /// Target file path.
    pub path: PathBuf,
    /// Content to write.
    pub content: String,
}

impl WriteAction {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns true if the target already holds exactly this content.
    pub fn is_unchanged(&self) -> bool {
        same_content(&self.path, &self.content)
    }

    /// Executes the write. Unchanged targets are left alone.
    pub fn execute(&self) -> Result<WriteOutcome> {
        if self.is_unchanged() {
            tracing::debug!("Unchanged: {}", self.path.display());
            return Ok(WriteOutcome::Unchanged);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| NowebError::WriteFailure {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        atomic_write(&self.path, &self.content).map_err(|source| NowebError::WriteFailure {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!("Wrote {} bytes to {}", self.content.len(), self.path.display());
        Ok(WriteOutcome::Written)
    }

    /// Returns a description of this action.
    pub fn describe(&self) -> String {
        if self.is_unchanged() {
            format!("unchanged {}", self.path.display())
        } else {
            format!("write {}", self.path.display())
        }
    }
}

/// What a transaction did, per target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionReport {
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
}

impl TransactionReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// A list of writes executed together.
#[derive(Debug, Clone, Default)]
pub struct Transaction {
    actions: Vec<WriteAction>,
}

impl Transaction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an action. A later write to the same path replaces an earlier one.
    pub fn add(&mut self, action: WriteAction) {
        if let Some(existing) = self.actions.iter_mut().find(|a| a.path == action.path) {
            tracing::warn!(
                "{} is produced more than once; keeping the last version",
                action.path.display()
            );
            *existing = action;
            return;
        }
        self.actions.push(action);
    }

    /// Adds a write action.
    pub fn write(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.add(WriteAction::new(path, content));
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions(&self) -> &[WriteAction] {
        &self.actions
    }

    /// Returns descriptions of all actions.
    pub fn describe(&self) -> Vec<String> {
        self.actions.iter().map(WriteAction::describe).collect()
    }

    /// Executes all actions in order, stopping at the first failure.
    pub fn execute(&self) -> Result<TransactionReport> {
        let mut report = TransactionReport::default();
        for action in &self.actions {
            match action.execute()? {
                WriteOutcome::Written => report.written.push(action.path.clone()),
                WriteOutcome::Unchanged => report.unchanged.push(action.path.clone()),
            }
        }
        Ok(report)
    }
}

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Writes through a temporary file in the same directory, then renames.
fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let temp_path = parent.join(format!(".noweb-tmp-{}-{}", std::process::id(), counter));

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}
