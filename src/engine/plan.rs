//! engine::plan
//!
//! Deterministic scaffold plans.
//!
//! A plan is the only intermediate representation between validated input
//! and mutation of the project tree. Plans are:
//! - **Deterministic**: the same identifier and configuration always produce
//!   the same plan
//! - **Previewable**: `--dry-run` prints them without touching disk
//! - **Serializable**: `--json` emits them for tooling
//!
//! # Invariants
//!
//! - Building a plan performs no I/O
//! - Render jobs target only paths inside the container directory
//! - Patch operations are applied in the order they appear

use std::path::PathBuf;

use serde::Serialize;

use super::patterns::{PatternName, PatternRegistry};
use super::render::{TemplateId, TemplateProps};

/// A template materialized into a new file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderJob {
    pub template: TemplateId,
    pub target: PathBuf,
}

/// Where a patch inserts its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Anchor {
    /// Resolved through the [`PatternRegistry`].
    Pattern(PatternName),
    /// Used as-is.
    Literal(String),
}

impl Anchor {
    /// The literal text to search for.
    pub fn resolve<'a>(&'a self, registry: &'a PatternRegistry) -> &'a str {
        match self {
            Anchor::Pattern(name) => registry.get(*name),
            Anchor::Literal(text) => text,
        }
    }
}

impl From<PatternName> for Anchor {
    fn from(name: PatternName) -> Self {
        Anchor::Pattern(name)
    }
}

/// One anchor-based insertion into an existing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchOperation {
    pub target: PathBuf,
    pub anchor: Anchor,
    pub insert: String,
    /// Short label for output, e.g. "reducer registration".
    pub description: String,
}

/// Everything one `generate` invocation will do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub props: TemplateProps,
    pub renders: Vec<RenderJob>,
    pub patches: Vec<PatchOperation>,
}

impl ScaffoldPlan {
    pub fn new(props: TemplateProps) -> Self {
        Self {
            props,
            renders: Vec::new(),
            patches: Vec::new(),
        }
    }

    pub fn with_render(mut self, template: TemplateId, target: PathBuf) -> Self {
        self.renders.push(RenderJob { template, target });
        self
    }

    pub fn with_patch(
        mut self,
        target: PathBuf,
        anchor: impl Into<Anchor>,
        insert: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.patches.push(PatchOperation {
            target,
            anchor: anchor.into(),
            insert: insert.into(),
            description: description.into(),
        });
        self
    }

    /// Distinct patch targets in first-touched order.
    pub fn patched_files(&self) -> Vec<&PathBuf> {
        let mut files: Vec<&PathBuf> = Vec::new();
        for patch in &self.patches {
            if !files.contains(&&patch.target) {
                files.push(&patch.target);
            }
        }
        files
    }

    pub fn is_empty(&self) -> bool {
        self.renders.is_empty() && self.patches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::naming::Identifier;

    fn props() -> TemplateProps {
        TemplateProps::from(&Identifier::new("Widget").unwrap())
    }

    #[test]
    fn builder_preserves_order() {
        let plan = ScaffoldPlan::new(props())
            .with_render(TemplateId::Container, PathBuf::from("a/index.js"))
            .with_patch(PathBuf::from("x.js"), PatternName::ApiMerge, "1", "first")
            .with_patch(
                PathBuf::from("y.js"),
                Anchor::Literal("// here".into()),
                "2",
                "second",
            )
            .with_patch(PathBuf::from("x.js"), PatternName::SagaTypes, "3", "third");

        assert!(!plan.is_empty());
        assert_eq!(plan.renders.len(), 1);
        let inserts: Vec<_> = plan.patches.iter().map(|p| p.insert.as_str()).collect();
        assert_eq!(inserts, ["1", "2", "3"]);
        assert_eq!(
            plan.patched_files(),
            [&PathBuf::from("x.js"), &PathBuf::from("y.js")]
        );
    }

    #[test]
    fn anchor_resolution() {
        let registry = PatternRegistry::default();
        assert_eq!(
            Anchor::Pattern(PatternName::ApiMerge).resolve(&registry),
            "// merge api"
        );
        assert_eq!(Anchor::Literal("x".into()).resolve(&registry), "x");
    }

    #[test]
    fn serializes_for_preview() {
        let plan = ScaffoldPlan::new(props()).with_patch(
            PathBuf::from("Api.js"),
            PatternName::ApiMerge,
            "\nmerged",
            "api merge",
        );
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["props"]["lowerName"], "widget");
        assert_eq!(json["patches"][0]["anchor"]["kind"], "pattern");
        assert_eq!(json["patches"][0]["anchor"]["value"], "api-merge");
    }
}
