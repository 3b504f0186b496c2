//! Command implementations.

mod helpers;
pub mod list;
pub mod tangle;
pub mod weave;

pub use helpers::{run_transaction, TransactionOptions};
pub use list::{list, render_listing, ListOptions};
pub use tangle::{tangle, TangleOptions};
pub use weave::{weave, WeaveOptions};

use crate::errors::Result;
use crate::interface::Context;

/// A command to run against a context.
#[derive(Debug, Clone)]
pub enum Command {
    List(ListOptions),
    Tangle(TangleOptions),
    Weave(WeaveOptions),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::List(_) => "list",
            Command::Tangle(_) => "tangle",
            Command::Weave(_) => "weave",
        }
    }
}

/// Runs a command.
pub fn run(ctx: &Context, command: Command) -> Result<()> {
    tracing::debug!("Running {}", command.name());
    match command {
        Command::List(options) => list(ctx, options),
        Command::Tangle(options) => tangle(ctx, options),
        Command::Weave(options) => weave(ctx, options),
    }
}
