//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves the project root and configuration
//! 2. Calls the engine to do the work
//! 3. Formats and displays output
//!
//! Handlers do NOT write to the project tree directly.

mod completion;
mod config_cmd;
mod generate;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::list as config_list;
pub use generate::generate;

use crate::cli::args::{Command, ConfigAction};
use crate::engine::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Generate {
            name,
            dry_run,
            json,
        } => generate::generate(ctx, name.as_deref(), dry_run, json),
        Command::Config { action } => match action {
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
