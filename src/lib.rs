//! noweb - Literate Programming Tangle and Weave
//!
//! A document interleaves prose with named code chunks. A line `<<name>>=`
//! opens a chunk, a line `@` closes it, and `<<name>>` inside a chunk body
//! includes another chunk at the indentation it is written at.
//!
//! # Features
//!
//! - **List**: Print the chunks that name output files
//! - **Tangle**: Write every file-like chunk, fully expanded, to disk
//! - **Weave**: Render the document with escaped, delimited chunk bodies
//!
//! # Example
//!
//! ```no_run
//! use noweb::interface::Context;
//! use noweb::commands::{run, Command, TangleOptions};
//!
//! let ctx = Context::from_current_dir().unwrap();
//! run(&ctx, Command::Tangle(TangleOptions::default())).unwrap();
//! ```

pub mod commands;
pub mod config;
pub mod errors;
pub mod interface;
pub mod io;
pub mod model;
pub mod readers;
pub mod text_location;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use errors::{NowebError, Result};
pub use interface::Context;
pub use model::{expand, Chunk, ChunkName, ChunkStore};

// Re-export command options
pub use commands::{Command, ListOptions, TangleOptions, WeaveOptions};
