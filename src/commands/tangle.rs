//! Tangle command implementation.

use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::{tangle_documents, Context};

use super::helpers::{run_transaction, TransactionOptions};

/// Options for the tangle command.
#[derive(Debug, Clone, Default)]
pub struct TangleOptions {
    /// Dry run - show what would be done without doing it.
    pub dry_run: bool,
    /// Suppress the summary line.
    pub quiet: bool,
    /// Specific documents to tangle (empty means all).
    pub files: Vec<PathBuf>,
}

/// Executes the tangle command.
pub fn tangle(ctx: &Context, options: TangleOptions) -> Result<()> {
    tracing::info!("Tangling documents...");

    let transaction = tangle_documents(ctx, &options.files)?;

    run_transaction(
        transaction,
        TransactionOptions {
            dry_run: options.dry_run,
            quiet: options.quiet,
        },
        "tangle",
    )
}
