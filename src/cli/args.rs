//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory (the project root)
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// crudgen - Scaffold CRUD containers into React Native projects
#[derive(Parser, Debug)]
#[command(name = "crudgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if crudgen was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a CRUD container wired into the app
    #[command(
        name = "generate",
        visible_alias = "g",
        long_about = "Generate a CRUD container wired into the app.\n\n\
            Renders a container, reducer, sagas, API module and their tests into \
            src/containers/<Name>/, then registers them in the Redux index, the \
            Sagas index, the fixture API and the service API. When the project \
            uses react-navigation the container is also added as a route.\n\n\
            Every precondition and insertion point is checked before the first \
            file is written.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Generate src/containers/Widget and wire it in
    crudgen generate Widget

    # Multi-word names become TodoItem / todoItem / TODO_ITEM
    crudgen generate \"todo item\"

    # Preview every file that would be created or patched
    crudgen generate Widget --dry-run

    # Machine-readable plan for tooling
    crudgen generate Widget --dry-run --json"
    )]
    Generate {
        /// Name of the entity (e.g. Widget)
        name: Option<String>,

        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,

        /// With --dry-run, print the plan as JSON
        #[arg(long, requires = "dry_run")]
        json: bool,
    },

    /// Show resolved configuration
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List every resolved configuration value and its source
    List,
}

/// Shell types for completion generation.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
