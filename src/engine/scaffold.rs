//! engine::scaffold
//!
//! Orchestrates one `generate` invocation.
//!
//! # Lifecycle
//!
//! ```text
//! Name -> Gate -> Plan -> Preflight -> Render batch -> Patch sequence -> Report
//! ```
//!
//! Everything up to and including preflight is read-only, so any failure
//! there leaves the project tree untouched. Once writing starts, failures
//! are collected per step and the remaining steps still run.

use thiserror::Error;

use super::exec::{ExecuteReport, Executor, PreflightError};
use super::gate::{self, GateError};
use super::patterns::{PatternName, PatternRegistry};
use super::plan::ScaffoldPlan;
use super::render::{TemplateId, TemplateProps, TemplateRenderer};
use crate::core::config::Navigation;
use crate::core::naming::{Identifier, IdentifierError};
use crate::core::paths::ProjectPaths;
use crate::ui::output::{self, Verbosity};

/// Errors that stop a scaffold before anything is written.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("{0}")]
    InvalidName(IdentifierError),

    #[error(transparent)]
    Gate(#[from] GateError),

    #[error(transparent)]
    Preflight(#[from] PreflightError),
}

/// What a scaffold run did.
#[derive(Debug)]
pub enum ScaffoldOutcome {
    /// No usable name was given; nothing was done.
    NameRequired,
    /// Dry run: the plan passed every check but nothing was written.
    DryRun { plan: ScaffoldPlan },
    /// The plan was executed.
    Completed {
        plan: ScaffoldPlan,
        report: ExecuteReport,
    },
}

/// The scaffold orchestrator for one project.
pub struct Scaffolder<'a> {
    paths: &'a ProjectPaths,
    registry: &'a PatternRegistry,
    renderer: &'a dyn TemplateRenderer,
    navigation: Navigation,
    verbosity: Verbosity,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        paths: &'a ProjectPaths,
        registry: &'a PatternRegistry,
        renderer: &'a dyn TemplateRenderer,
        navigation: Navigation,
    ) -> Self {
        Self {
            paths,
            registry,
            renderer,
            navigation,
            verbosity: Verbosity::Quiet,
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Generate a CRUD container named `name`.
    ///
    /// A blank name yields [`ScaffoldOutcome::NameRequired`] without touching
    /// disk. With `dry_run`, every check runs but nothing is written.
    pub fn run(&self, name: &str, dry_run: bool) -> Result<ScaffoldOutcome, ScaffoldError> {
        let id = match Identifier::new(name) {
            Ok(id) => id,
            Err(IdentifierError::Blank) => return Ok(ScaffoldOutcome::NameRequired),
            Err(e) => return Err(ScaffoldError::InvalidName(e)),
        };
        output::debug(
            format!(
                "identifier: '{}' -> pascal={} lower={} upper={}",
                id.raw(),
                id.pascal(),
                id.lower(),
                id.upper()
            ),
            self.verbosity,
        );

        let wire_navigation = self.navigation == Navigation::ReactNavigation;
        gate::check(self.paths, &id, wire_navigation)?;

        let plan = self.plan(&id);
        output::debug(
            format!(
                "plan: {} render job(s), {} patch(es)",
                plan.renders.len(),
                plan.patches.len()
            ),
            self.verbosity,
        );

        let executor = Executor::new(self.registry, self.renderer);
        executor.preflight(&plan)?;
        output::debug("preflight passed", self.verbosity);

        if dry_run {
            return Ok(ScaffoldOutcome::DryRun { plan });
        }

        let report = executor.execute(&plan);
        Ok(ScaffoldOutcome::Completed { plan, report })
    }

    /// Build the plan for `id`. Performs no I/O.
    pub fn plan(&self, id: &Identifier) -> ScaffoldPlan {
        let paths = self.paths;
        let name = id.pascal();
        let lower = id.lower();
        let upper = id.upper();

        let redux_module = paths.container_import(name, Some("redux"));
        let sagas_module = paths.container_import(name, Some("sagas"));
        let api_module = paths.container_import(name, Some("api"));

        let mut plan = ScaffoldPlan::new(TemplateProps::from(id))
            .with_render(TemplateId::Container, paths.container_index(name))
            .with_render(TemplateId::Redux, paths.container_file(name, "redux.js"))
            .with_render(TemplateId::Sagas, paths.container_file(name, "sagas.js"))
            .with_render(TemplateId::Api, paths.container_file(name, "api.js"))
            .with_render(
                TemplateId::ReduxTest,
                paths.container_test_file(name, "reduxTest.js"),
            )
            .with_render(
                TemplateId::SagaTest,
                paths.container_test_file(name, "sagaTest.js"),
            )
            .with_render(
                TemplateId::ApiTest,
                paths.container_test_file(name, "apiTest.js"),
            );

        plan = plan
            .with_patch(
                paths.redux_index(),
                PatternName::ReduxReducers,
                format!("\n  {lower}: require('{redux_module}').reducer,"),
                "reducer registration",
            )
            .with_patch(
                paths.saga_index(),
                PatternName::SagaImports,
                format!(
                    "\nimport {{ post{name}, get{name}s, get{name}, update{name}, remove{name} }} from '{sagas_module}'"
                ),
                "saga import",
            )
            .with_patch(
                paths.saga_index(),
                PatternName::SagaActions,
                saga_triggers(name, upper),
                "saga triggers",
            )
            .with_patch(
                paths.fixture_api(),
                PatternName::FixtureFunctions,
                fixture_stubs(name),
                "fixture stubs",
            )
            .with_patch(
                paths.api(),
                PatternName::ApiMerge,
                format!("\n  apiMerged = merge(apiMerged, require('{api_module}').create(api))"),
                "api merge",
            )
            .with_patch(
                paths.saga_index(),
                PatternName::SagaTypes,
                format!("\nimport {{ {name}Types }} from '{redux_module}'"),
                "types import",
            );

        if self.navigation == Navigation::ReactNavigation {
            let screen_module = paths.container_import(name, None);
            plan = plan
                .with_patch(
                    paths.app_navigation(),
                    PatternName::NavigationImports,
                    format!("\nimport {name} from '{screen_module}'"),
                    "screen import",
                )
                .with_patch(
                    paths.app_navigation(),
                    PatternName::NavigationRoutes,
                    format!("\n  {name}: {{ screen: {name} }},"),
                    "route",
                );
        }

        plan
    }
}

/// One `takeLatest` registration per CRUD verb.
fn saga_triggers(name: &str, upper: &str) -> String {
    [
        ("REQUEST", format!("get{name}")),
        ("ALL", format!("get{name}s")),
        ("ATTEMPT", format!("post{name}")),
        ("UPDATE", format!("update{name}")),
        ("REMOVE", format!("remove{name}")),
    ]
    .iter()
    .map(|(verb, saga)| format!("\n    takeLatest({name}Types.{upper}_{verb}, {saga}, api),"))
    .collect()
}

/// One fixture function per CRUD verb.
fn fixture_stubs(name: &str) -> String {
    [
        (format!("post{name}"), "{ ok: true, data: '21' }"),
        (format!("get{name}"), "{ ok: true, data: '21' }"),
        (format!("get{name}s"), "{ ok: true, data: '21' }"),
        (format!("update{name}"), "{ ok: true, data: '21' }"),
        (format!("remove{name}"), "{ ok: true }"),
    ]
    .iter()
    .map(|(func, response)| format!("\n  {func}: () => {{ return {response} }},"))
    .collect()
}
