//! engine::patterns
//!
//! Registry of named anchors.
//!
//! Patch operations refer to insertion points by [`PatternName`] instead of
//! carrying the literal text around. The registry maps each name to the
//! literal anchor searched for in the target file. It is built once per
//! process from the defaults below plus any `[anchors]` overrides in the
//! project configuration, and is read-only afterwards.
//!
//! # Example
//!
//! ```
//! use crudgen::engine::patterns::{PatternName, PatternRegistry};
//!
//! let registry = PatternRegistry::default();
//! assert_eq!(registry.get(PatternName::ApiMerge), "// merge api");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Symbolic name of an insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternName {
    /// Where reducers are registered in the Redux index.
    ReduxReducers,
    /// Where saga functions are imported in the Sagas index.
    SagaImports,
    /// Where action types are imported in the Sagas index.
    SagaTypes,
    /// Where `takeLatest` triggers are listed in the root saga.
    SagaActions,
    /// Where fixture functions start in the fixture API.
    FixtureFunctions,
    /// Where container APIs are merged into the service API.
    ApiMerge,
    /// Where screens are imported in the navigation root.
    NavigationImports,
    /// Where routes are declared in the navigation root.
    NavigationRoutes,
}

impl PatternName {
    pub const ALL: &'static [PatternName] = &[
        PatternName::ReduxReducers,
        PatternName::SagaImports,
        PatternName::SagaTypes,
        PatternName::SagaActions,
        PatternName::FixtureFunctions,
        PatternName::ApiMerge,
        PatternName::NavigationImports,
        PatternName::NavigationRoutes,
    ];

    /// Config key for this pattern.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternName::ReduxReducers => "redux-reducers",
            PatternName::SagaImports => "saga-imports",
            PatternName::SagaTypes => "saga-types",
            PatternName::SagaActions => "saga-actions",
            PatternName::FixtureFunctions => "fixture-functions",
            PatternName::ApiMerge => "api-merge",
            PatternName::NavigationImports => "navigation-imports",
            PatternName::NavigationRoutes => "navigation-routes",
        }
    }

    /// Built-in anchor text matching the stock project boilerplate.
    pub fn default_anchor(&self) -> &'static str {
        match self {
            PatternName::ReduxReducers => "combineReducers({",
            PatternName::SagaImports => "/* ------------- Sagas ------------- */",
            PatternName::SagaTypes => "/* ------------- Types ------------- */",
            PatternName::SagaActions => "yield all([",
            PatternName::FixtureFunctions => "// Functions return fixtures",
            PatternName::ApiMerge => "// merge api",
            PatternName::NavigationImports => "from 'react-navigation'",
            PatternName::NavigationRoutes => "const PrimaryNav = StackNavigator({",
        }
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternName::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<_> = PatternName::ALL.iter().map(|p| p.as_str()).collect();
                format!(
                    "unknown anchor '{}', must be one of: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}

/// Read-only lookup from pattern name to anchor literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRegistry {
    anchors: BTreeMap<PatternName, String>,
}

impl Default for PatternRegistry {
    fn default() -> Self {
        let anchors = PatternName::ALL
            .iter()
            .map(|p| (*p, p.default_anchor().to_string()))
            .collect();
        Self { anchors }
    }
}

impl PatternRegistry {
    /// Build the registry from defaults with configured overrides applied.
    pub fn with_overrides<'a>(
        overrides: impl IntoIterator<Item = (PatternName, &'a str)>,
    ) -> Self {
        let mut registry = Self::default();
        for (name, anchor) in overrides {
            registry.anchors.insert(name, anchor.to_string());
        }
        registry
    }

    /// Anchor literal for `name`.
    pub fn get(&self, name: PatternName) -> &str {
        // Every name is seeded in `default()`.
        self.anchors
            .get(&name)
            .map(String::as_str)
            .unwrap_or_else(|| name.default_anchor())
    }

    /// Iterate over all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (PatternName, &str)> {
        self.anchors.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_name() {
        let registry = PatternRegistry::default();
        assert_eq!(registry.iter().count(), PatternName::ALL.len());
        assert_eq!(
            registry.get(PatternName::FixtureFunctions),
            "// Functions return fixtures"
        );
    }

    #[test]
    fn overrides_replace_defaults() {
        let registry =
            PatternRegistry::with_overrides([(PatternName::SagaActions, "yield [")]);
        assert_eq!(registry.get(PatternName::SagaActions), "yield [");
        assert_eq!(registry.get(PatternName::ApiMerge), "// merge api");
    }

    #[test]
    fn parse_round_trips_config_keys() {
        for name in PatternName::ALL {
            assert_eq!(name.as_str().parse::<PatternName>().unwrap(), *name);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "reducers".parse::<PatternName>().unwrap_err();
        assert!(err.contains("unknown anchor 'reducers'"));
        assert!(err.contains("redux-reducers"));
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&PatternName::NavigationRoutes).unwrap();
        assert_eq!(json, "\"navigation-routes\"");
    }
}
