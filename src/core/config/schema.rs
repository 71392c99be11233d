//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$CRUDGEN_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/crudgen/config.toml`
//! 3. `~/.crudgen/config.toml` (canonical write location)
//!
//! # Project Config
//!
//! Located at `<root>/crudgen.toml` (canonical), with `<root>/ignite/ignite.json`
//! read as a compatibility fallback.
//!
//! # Validation
//!
//! Config values are validated after parsing: folder names must be plain
//! relative names and anchor overrides must name a known pattern.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::engine::patterns::PatternName;

/// Navigation library used by the project.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Navigation {
    /// `react-navigation`: generated containers are wired into
    /// `AppNavigation.js`.
    ReactNavigation,
    /// Anything else: the user wires navigation by hand.
    #[default]
    None,
}

impl Navigation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Navigation::ReactNavigation => "react-navigation",
            Navigation::None => "none",
        }
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// navigation = "react-navigation"
/// templates_dir = "/home/me/crudgen-templates"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default navigation library
    pub navigation: Option<Navigation>,

    /// Directory with template overrides
    pub templates_dir: Option<PathBuf>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.templates_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "templates_dir cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Project configuration.
///
/// # Example
///
/// ```toml
/// navigation = "react-navigation"
/// source_dir = "src"
/// containers_dir = "containers"
/// templates_dir = "crudgen/templates"
///
/// [anchors]
/// saga-actions = "yield ["
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Navigation library
    pub navigation: Option<Navigation>,

    /// Source folder relative to the project root
    pub source_dir: Option<String>,

    /// Containers folder relative to the source folder
    pub containers_dir: Option<String>,

    /// Template overrides, relative to the project root
    pub templates_dir: Option<PathBuf>,

    /// Anchor overrides keyed by pattern name
    pub anchors: Option<BTreeMap<String, String>>,
}

impl ProjectConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.source_dir {
            validate_folder("source_dir", dir)?;
        }
        if let Some(dir) = &self.containers_dir {
            validate_folder("containers_dir", dir)?;
        }

        if let Some(anchors) = &self.anchors {
            for (key, anchor) in anchors {
                key.parse::<PatternName>().map_err(ConfigError::InvalidValue)?;
                if anchor.is_empty() {
                    return Err(ConfigError::InvalidValue(format!(
                        "anchor '{}' cannot be empty",
                        key
                    )));
                }
            }
        }

        Ok(())
    }

    /// Parsed anchor overrides.
    ///
    /// Only meaningful after [`validate`](Self::validate) succeeded; invalid
    /// keys are skipped.
    pub fn anchor_overrides(&self) -> Vec<(PatternName, &str)> {
        self.anchors
            .iter()
            .flatten()
            .filter_map(|(key, anchor)| Some((key.parse::<PatternName>().ok()?, anchor.as_str())))
            .collect()
    }
}

/// The subset of a legacy `ignite/ignite.json` that is honored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct IgniteJson {
    pub navigation: Option<String>,
}

impl From<IgniteJson> for ProjectConfig {
    fn from(legacy: IgniteJson) -> Self {
        let navigation = legacy.navigation.map(|nav| {
            if nav == Navigation::ReactNavigation.as_str() {
                Navigation::ReactNavigation
            } else {
                Navigation::None
            }
        });
        ProjectConfig {
            navigation,
            ..Default::default()
        }
    }
}

/// A folder setting must be a single relative, non-empty path.
fn validate_folder(key: &str, value: &str) -> Result<(), ConfigError> {
    let plain = !value.is_empty()
        && Path::new(value)
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if plain {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue(format!(
            "{} must be a relative folder name, got '{}'",
            key, value
        )))
    }
}
