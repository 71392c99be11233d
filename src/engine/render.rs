//! engine::render
//!
//! Template rendering for generated files.
//!
//! # Templates
//!
//! The default templates live under `templates/` and are embedded into the
//! binary with [`include_str!`]. A project can override any of them by
//! placing a file with the same name in its configured `templates_dir`.
//!
//! Templates use Handlebars syntax with these variables:
//! - `{{name}}` - PascalCase name (`TodoItem`)
//! - `{{lowerName}}` - camelCase name (`todoItem`)
//! - `{{upperName}}` - CONSTANT_CASE name (`TODO_ITEM`)
//!
//! Strict mode is on, so a typo in a variable name fails rendering instead
//! of producing an empty string. HTML escaping is off.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::naming::Identifier;

/// Errors from template loading and rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template override '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid template '{template}': {message}")]
    ParseError { template: TemplateId, message: String },

    #[error("failed to render template '{template}': {message}")]
    RenderFailed { template: TemplateId, message: String },
}

/// The fixed set of templates a scaffold can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    Container,
    Redux,
    Sagas,
    Api,
    ReduxTest,
    SagaTest,
    ApiTest,
}

impl TemplateId {
    pub const ALL: &'static [TemplateId] = &[
        TemplateId::Container,
        TemplateId::Redux,
        TemplateId::Sagas,
        TemplateId::Api,
        TemplateId::ReduxTest,
        TemplateId::SagaTest,
        TemplateId::ApiTest,
    ];

    /// File name of the template, both embedded and as an override.
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateId::Container => "crud-container.hbs",
            TemplateId::Redux => "crud-redux.hbs",
            TemplateId::Sagas => "crud-saga.hbs",
            TemplateId::Api => "crud-api.hbs",
            TemplateId::ReduxTest => "crud-redux-test.hbs",
            TemplateId::SagaTest => "crud-saga-test.hbs",
            TemplateId::ApiTest => "crud-api-test.hbs",
        }
    }

    /// Embedded default source.
    fn embedded(&self) -> &'static str {
        match self {
            TemplateId::Container => include_str!("../../templates/crud-container.hbs"),
            TemplateId::Redux => include_str!("../../templates/crud-redux.hbs"),
            TemplateId::Sagas => include_str!("../../templates/crud-saga.hbs"),
            TemplateId::Api => include_str!("../../templates/crud-api.hbs"),
            TemplateId::ReduxTest => include_str!("../../templates/crud-redux-test.hbs"),
            TemplateId::SagaTest => include_str!("../../templates/crud-saga-test.hbs"),
            TemplateId::ApiTest => include_str!("../../templates/crud-api-test.hbs"),
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Variables passed to every template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateProps {
    pub name: String,
    pub lower_name: String,
    pub upper_name: String,
}

impl From<&Identifier> for TemplateProps {
    fn from(id: &Identifier) -> Self {
        Self {
            name: id.pascal().to_string(),
            lower_name: id.lower().to_string(),
            upper_name: id.upper().to_string(),
        }
    }
}

/// Renders a template with a property map into file contents.
///
/// Implementations must be deterministic: the same template and props
/// always produce the same output.
pub trait TemplateRenderer {
    fn render(&self, template: TemplateId, props: &TemplateProps) -> Result<String, RenderError>;
}

/// Handlebars-backed renderer with all templates pre-registered.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl fmt::Debug for HandlebarsRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlebarsRenderer").finish_non_exhaustive()
    }
}

impl HandlebarsRenderer {
    /// Build a renderer from the embedded templates only.
    pub fn embedded() -> Result<Self, RenderError> {
        Self::new(None)
    }

    /// Build a renderer, preferring files in `overrides_dir` when present.
    pub fn new(overrides_dir: Option<&Path>) -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        for template in TemplateId::ALL {
            let source = load_source(*template, overrides_dir)?;
            registry
                .register_template_string(template.file_name(), source)
                .map_err(|e| RenderError::ParseError {
                    template: *template,
                    message: e.to_string(),
                })?;
        }

        Ok(Self { registry })
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(&self, template: TemplateId, props: &TemplateProps) -> Result<String, RenderError> {
        self.registry
            .render(template.file_name(), props)
            .map_err(|e| RenderError::RenderFailed {
                template,
                message: e.to_string(),
            })
    }
}

fn load_source(template: TemplateId, overrides_dir: Option<&Path>) -> Result<String, RenderError> {
    if let Some(dir) = overrides_dir {
        let path = dir.join(template.file_name());
        if path.is_file() {
            return fs::read_to_string(&path).map_err(|e| RenderError::ReadError { path, source: e });
        }
    }
    Ok(template.embedded().to_string())
}
