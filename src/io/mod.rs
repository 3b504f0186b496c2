//! I/O operations for reading documents and writing outputs.

mod digest;
mod file_cache;
mod transaction;

pub use digest::{hexdigest_file, hexdigest_str, same_content};
pub use file_cache::{FileCache, RealFileCache, VirtualFS};
pub use transaction::{Transaction, TransactionReport, WriteAction, WriteOutcome};
