//! engine
//!
//! Orchestrates the scaffold lifecycle: Gate -> Plan -> Preflight -> Execute.
//!
//! # Architecture
//!
//! 1. **Gate**: Check preconditions on the project tree
//! 2. **Plan**: Build a deterministic, previewable list of render jobs and
//!    patch operations
//! 3. **Preflight**: Apply every patch in memory; refuse to start if any
//!    anchor is missing
//! 4. **Execute**: Render the template batch, then patch files in order
//!
//! # Invariants
//!
//! - Nothing is written before gate and preflight both pass
//! - Only the [`Executor`] writes to the project tree
//! - A failed step during execution is reported, not silently skipped
//!
//! # Example
//!
//! ```no_run
//! use crudgen::core::config::Config;
//! use crudgen::engine::render::HandlebarsRenderer;
//! use crudgen::engine::scaffold::{ScaffoldOutcome, Scaffolder};
//! use std::path::Path;
//!
//! let root = Path::new("/path/to/app");
//! let config = Config::load(Some(root)).unwrap().config;
//! let paths = config.project_paths(root);
//! let registry = config.pattern_registry();
//! let renderer = HandlebarsRenderer::new(config.templates_dir().as_deref()).unwrap();
//!
//! let scaffolder = Scaffolder::new(&paths, &registry, &renderer, config.navigation());
//! match scaffolder.run("Widget", false).unwrap() {
//!     ScaffoldOutcome::Completed { report, .. } => assert!(report.is_success()),
//!     other => println!("{:?}", other),
//! }
//! ```

pub mod exec;
pub mod gate;
pub mod patch;
pub mod patterns;
pub mod plan;
pub mod render;
pub mod scaffold;

// Re-exports for convenience
pub use exec::{ExecuteReport, Executor, PreflightError, StepKind, StepOutcome};
pub use gate::GateError;
pub use patch::{insert_after, patch_file, PatchError};
pub use patterns::{PatternName, PatternRegistry};
pub use plan::{Anchor, PatchOperation, RenderJob, ScaffoldPlan};
pub use render::{HandlebarsRenderer, RenderError, TemplateId, TemplateProps, TemplateRenderer};
pub use scaffold::{ScaffoldError, ScaffoldOutcome, Scaffolder};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Project root override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Output verbosity for this invocation.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Project root: `--cwd` if given, otherwise the current directory.
    pub fn project_root(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().context("Failed to read current directory"),
        }
    }
}
