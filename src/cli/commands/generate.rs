//! generate command - Scaffold a CRUD container and wire it into the app
//!
//! Thin shell over [`Scaffolder`]: loads config, builds the renderer and
//! prints the outcome. All checks and writes happen in the engine.

use crate::core::config::{Config, Navigation};
use crate::core::paths::ProjectPaths;
use crate::engine::render::HandlebarsRenderer;
use crate::engine::scaffold::{ScaffoldError, ScaffoldOutcome, Scaffolder};
use crate::engine::{Context, ExecuteReport, ScaffoldPlan};
use crate::ui::output::{self, Verbosity};
use anyhow::{bail, Context as _, Result};

/// Generate a CRUD container named `name`.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `name` - Entity name; `None` or blank prints usage and does nothing
/// * `dry_run` - Run every check and print the plan without writing
/// * `json` - With `dry_run`, print the plan as JSON
pub fn generate(ctx: &Context, name: Option<&str>, dry_run: bool, json: bool) -> Result<()> {
    let verbosity = ctx.verbosity();
    let root = ctx.project_root()?;

    let loaded = Config::load(Some(&root)).context("Failed to load config")?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }
    let config = loaded.config;

    let paths = config.project_paths(&root);
    let registry = config.pattern_registry();
    let templates_dir = config.templates_dir();
    if let Some(ref dir) = templates_dir {
        output::debug(format!("templates: {}", dir.display()), verbosity);
    }
    let renderer =
        HandlebarsRenderer::new(templates_dir.as_deref()).context("Failed to load templates")?;

    let scaffolder = Scaffolder::new(&paths, &registry, &renderer, config.navigation())
        .with_verbosity(verbosity);

    let outcome = match scaffolder.run(name.unwrap_or(""), dry_run) {
        Ok(outcome) => outcome,
        Err(ScaffoldError::Preflight(e)) => {
            for failure in &e.failures {
                output::error(failure);
            }
            bail!("{}; nothing was written", e);
        }
        Err(e) => return Err(e.into()),
    };

    match outcome {
        ScaffoldOutcome::NameRequired => {
            output::print("crudgen generate <name>\n", verbosity);
            output::print("A name is required.", verbosity);
            Ok(())
        }
        ScaffoldOutcome::DryRun { plan } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&paths, &plan, verbosity);
            }
            Ok(())
        }
        ScaffoldOutcome::Completed { report, .. } => {
            print_report(&paths, &report, verbosity);

            if !report.is_success() {
                bail!(
                    "{} step(s) failed; the project may be partially modified",
                    report.failures().count()
                );
            }

            if config.navigation() == Navigation::None {
                output::print(
                    "Container created, manually add it to your navigation",
                    verbosity,
                );
            }
            Ok(())
        }
    }
}

fn print_plan(paths: &ProjectPaths, plan: &ScaffoldPlan, verbosity: Verbosity) {
    output::print("Dry run, nothing was written.", verbosity);
    for job in &plan.renders {
        output::print(
            output::format_step("create", paths.display_relative(&job.target)),
            verbosity,
        );
    }
    for op in &plan.patches {
        output::print(
            format!(
                "{} ({})",
                output::format_step("patch", paths.display_relative(&op.target)),
                op.description
            ),
            verbosity,
        );
    }
}

fn print_report(paths: &ProjectPaths, report: &ExecuteReport, verbosity: Verbosity) {
    for step in &report.steps {
        let line = output::format_step(step.kind, paths.display_relative(&step.target));
        match &step.error {
            None => output::print(line, verbosity),
            Some(error) => output::error(format!("{} ({}): {}", line, step.description, error)),
        }
    }
}
