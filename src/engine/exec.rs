//! engine::exec
//!
//! The single executor for scaffold plans.
//!
//! # Executor Contract
//!
//! 1. `preflight` applies every patch to in-memory copies of the target
//!    files, in plan order, and reports every missing anchor. It never
//!    writes.
//! 2. `execute` renders the whole template batch before writing anything,
//!    then writes the rendered files, then applies patches one at a time.
//! 3. A failed step is recorded and execution continues with the next one.
//!    There is no rollback; the report says exactly what happened.
//!
//! # Example
//!
//! ```ignore
//! let executor = Executor::new(&registry, &renderer);
//! executor.preflight(&plan)?;
//! let report = executor.execute(&plan);
//! if !report.is_success() {
//!     for failure in report.failures() {
//!         eprintln!("{}", failure);
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use super::patch::{self, insert_after, PatchError};
use super::patterns::PatternRegistry;
use super::plan::ScaffoldPlan;
use super::render::TemplateRenderer;

/// Preflight found patches that cannot be applied.
#[derive(Debug, Error)]
#[error("{} patch(es) cannot be applied", .failures.len())]
pub struct PreflightError {
    pub failures: Vec<PatchError>,
}

/// What kind of step a [`StepOutcome`] reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Create,
    Patch,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Create => f.write_str("create"),
            StepKind::Patch => f.write_str("patch"),
        }
    }
}

/// Result of one executed step.
#[derive(Debug)]
pub struct StepOutcome {
    pub kind: StepKind,
    pub target: PathBuf,
    pub description: String,
    /// `None` on success.
    pub error: Option<String>,
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-step report of an execution.
#[derive(Debug, Default)]
pub struct ExecuteReport {
    pub steps: Vec<StepOutcome>,
}

impl ExecuteReport {
    pub fn is_success(&self) -> bool {
        self.steps.iter().all(StepOutcome::is_success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps.iter().filter(|s| !s.is_success())
    }

    fn record(&mut self, kind: StepKind, target: PathBuf, description: &str, error: Option<String>) {
        self.steps.push(StepOutcome {
            kind,
            target,
            description: description.to_string(),
            error,
        });
    }
}

/// Applies scaffold plans to disk.
pub struct Executor<'a> {
    registry: &'a PatternRegistry,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Executor<'a> {
    pub fn new(registry: &'a PatternRegistry, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { registry, renderer }
    }

    /// Dry-run every patch in memory.
    ///
    /// Patches against the same file see the effect of earlier patches, so
    /// the check matches what `execute` will do.
    pub fn preflight(&self, plan: &ScaffoldPlan) -> Result<(), PreflightError> {
        let mut contents: HashMap<&PathBuf, String> = HashMap::new();
        let mut failures = Vec::new();

        for op in &plan.patches {
            if !contents.contains_key(&op.target) {
                match patch::read(&op.target) {
                    Ok(content) => {
                        contents.insert(&op.target, content);
                    }
                    Err(e) => {
                        failures.push(e);
                        continue;
                    }
                }
            }

            let anchor = op.anchor.resolve(self.registry);
            match insert_after(&contents[&op.target], anchor, &op.insert) {
                Some(patched) => {
                    contents.insert(&op.target, patched);
                }
                None => failures.push(PatchError::AnchorNotFound {
                    path: op.target.clone(),
                    anchor: anchor.to_string(),
                }),
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(PreflightError { failures })
        }
    }

    /// Render and write every file, then apply every patch.
    pub fn execute(&self, plan: &ScaffoldPlan) -> ExecuteReport {
        let mut report = ExecuteReport::default();

        // Render the whole batch before the first write.
        let rendered: Vec<_> = plan
            .renders
            .iter()
            .map(|job| (job, self.renderer.render(job.template, &plan.props)))
            .collect();

        for (job, output) in rendered {
            let description = job.template.file_name();
            let error = output
                .map_err(|e| e.to_string())
                .and_then(|text| patch::write_atomic(&job.target, &text).map_err(|e| e.to_string()))
                .err();
            report.record(StepKind::Create, job.target.clone(), description, error);
        }

        for op in &plan.patches {
            let anchor = op.anchor.resolve(self.registry);
            let error = patch::patch_file(&op.target, anchor, &op.insert)
                .map_err(|e| e.to_string())
                .err();
            report.record(StepKind::Patch, op.target.clone(), &op.description, error);
        }

        report
    }
}
