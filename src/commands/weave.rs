//! Weave command implementation.

use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::{weave_documents, Context};

use super::helpers::{run_transaction, TransactionOptions};

/// Options for the weave command.
#[derive(Debug, Clone, Default)]
pub struct WeaveOptions {
    pub dry_run: bool,
    pub quiet: bool,
    /// Specific documents to weave (empty means all).
    pub files: Vec<PathBuf>,
}

/// Executes the weave command.
pub fn weave(ctx: &Context, options: WeaveOptions) -> Result<()> {
    tracing::info!("Weaving documents...");

    let transaction = weave_documents(ctx, &options.files)?;

    run_transaction(
        transaction,
        TransactionOptions {
            dry_run: options.dry_run,
            quiet: options.quiet,
        },
        "weave",
    )
}
