//! List command implementation.

use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::{list_documents, Context, Listing};

/// Options for the list command.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Print a JSON array instead of one name per line.
    pub json: bool,
    /// Include macro chunks, not only file-like ones.
    pub all: bool,
    /// Specific documents to list (empty means all).
    pub files: Vec<PathBuf>,
}

/// Executes the list command.
pub fn list(ctx: &Context, options: ListOptions) -> Result<()> {
    let listings = list_documents(ctx, &options.files, options.all)?;
    print!("{}", render_listing(&listings, options.json)?);
    Ok(())
}

/// Renders listings as text or JSON.
///
/// Text output is one chunk name per line; with several documents each group
/// is headed by the document path.
pub fn render_listing(listings: &[Listing], json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(listings)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    let grouped = listings.len() > 1;
    for listing in listings {
        if grouped {
            out.push_str(&format!("{}:\n", listing.document.display()));
        }
        for name in &listing.chunks {
            if grouped {
                out.push_str("  ");
            }
            out.push_str(name.as_str());
            out.push('\n');
        }
    }
    Ok(out)
}
