//! Shared command helpers.

use crate::errors::Result;
use crate::io::Transaction;

/// Common options for transaction-based commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionOptions {
    pub dry_run: bool,
    pub quiet: bool,
}

/// Runs a transaction with common option handling (dry-run, quiet).
///
/// `verb` is used for display (e.g., "tangle", "weave").
pub fn run_transaction(
    transaction: Transaction,
    options: TransactionOptions,
    verb: &str,
) -> Result<()> {
    if transaction.is_empty() {
        if !options.quiet {
            println!("No files to {}.", verb);
        }
        return Ok(());
    }

    if options.dry_run {
        println!("Would perform {} actions:", transaction.len());
        for desc in transaction.describe() {
            println!("  {}", desc);
        }
        return Ok(());
    }

    let report = transaction.execute()?;

    if !options.quiet {
        let past = match verb {
            "tangle" => "Tangled",
            "weave" => "Wove",
            _ => "Processed",
        };
        println!(
            "{} {} files ({} unchanged).",
            past,
            report.written.len(),
            report.unchanged.len()
        );
    }

    Ok(())
}
