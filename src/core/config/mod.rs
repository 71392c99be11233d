//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! crudgen has two configuration scopes:
//! - **Global**: User-level defaults
//! - **Project**: Per-project conventions and overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$CRUDGEN_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/crudgen/config.toml`
//! 3. `~/.crudgen/config.toml`
//!
//! # Project Config Locations
//!
//! Searched in order:
//! 1. `crudgen.toml` (canonical)
//! 2. `ignite/ignite.json` (compatibility, warns; only `navigation` is read)
//!
//! # Example
//!
//! ```no_run
//! use crudgen::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/app"))).unwrap();
//! let config = result.config;
//!
//! println!("Navigation: {}", config.navigation());
//! println!("Source folder: {}", config.source_dir());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, IgniteJson, Navigation, ProjectConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::paths::ProjectPaths;
use crate::engine::patterns::PatternRegistry;

/// Canonical project config file name.
pub const PROJECT_CONFIG_FILE: &str = "crudgen.toml";

/// Legacy Ignite config, relative to the project root.
pub const IGNITE_CONFIG_FILE: &str = "ignite/ignite.json";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence automatically: project config overrides
/// global config, which overrides built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Project configuration (if found)
    pub project: Option<ProjectConfig>,
    /// Project root the project config was resolved against
    project_root: Option<PathBuf>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the project config file (if loaded)
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_root` is provided, also loads project config.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or hold
    /// invalid values. Missing config files are not an error.
    pub fn load(project_root: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let global = Self::find_global();
        Self::load_from(global.as_deref(), project_root)
    }

    /// Load configuration with an explicit global config path.
    pub fn load_from(
        global_path: Option<&Path>,
        project_root: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let global = match global_path {
            Some(path) => Self::read_toml::<GlobalConfig>(path)?,
            None => GlobalConfig::default(),
        };

        let (project, project_path) = match project_root {
            Some(root) => Self::load_project(root, &mut warnings)?,
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        Ok(ConfigLoadResult {
            config: Config {
                global,
                project,
                project_root: project_root.map(Path::to_path_buf),
                global_path: global_path.map(Path::to_path_buf),
                project_path,
            },
            warnings,
        })
    }

    /// Locate the global config file, if any.
    fn find_global() -> Option<PathBuf> {
        // 1. Check $CRUDGEN_CONFIG
        if let Ok(path) = std::env::var("CRUDGEN_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/crudgen/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("crudgen/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.crudgen/config.toml
        let path = dirs::home_dir()?.join(".crudgen/config.toml");
        path.exists().then_some(path)
    }

    /// Load project configuration from standard locations.
    fn load_project(
        root: &Path,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(Option<ProjectConfig>, Option<PathBuf>), ConfigError> {
        // 1. Check crudgen.toml (canonical)
        let canonical = root.join(PROJECT_CONFIG_FILE);
        if canonical.exists() {
            let config = Self::read_toml::<ProjectConfig>(&canonical)?;
            return Ok((Some(config), Some(canonical)));
        }

        // 2. Check ignite/ignite.json (compatibility)
        let legacy = root.join(IGNITE_CONFIG_FILE);
        if legacy.exists() {
            warnings.push(ConfigWarning {
                message: format!(
                    "Reading navigation from legacy '{}'. Move settings to '{}'",
                    IGNITE_CONFIG_FILE, PROJECT_CONFIG_FILE
                ),
                path: legacy.clone(),
            });
            let contents = Self::read(&legacy)?;
            let parsed: IgniteJson =
                serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
                    path: legacy.clone(),
                    message: e.to_string(),
                })?;
            return Ok((Some(parsed.into()), Some(legacy)));
        }

        Ok((None, None))
    }

    fn read(path: &Path) -> Result<String, ConfigError> {
        fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Read and parse a TOML config file.
    fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let contents = Self::read(path)?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Navigation library.
    ///
    /// Defaults to `none` if not configured.
    pub fn navigation(&self) -> Navigation {
        self.project
            .as_ref()
            .and_then(|p| p.navigation)
            .or(self.global.navigation)
            .unwrap_or_default()
    }

    /// Source folder name.
    ///
    /// Defaults to "src" if not configured.
    pub fn source_dir(&self) -> &str {
        self.project
            .as_ref()
            .and_then(|p| p.source_dir.as_deref())
            .unwrap_or("src")
    }

    /// Containers folder name.
    ///
    /// Defaults to "containers" if not configured.
    pub fn containers_dir(&self) -> &str {
        self.project
            .as_ref()
            .and_then(|p| p.containers_dir.as_deref())
            .unwrap_or("containers")
    }

    /// Directory holding template overrides, if any.
    ///
    /// A project setting is resolved against the project root.
    pub fn templates_dir(&self) -> Option<PathBuf> {
        let project_dir = self.project.as_ref().and_then(|p| p.templates_dir.as_ref());
        match (project_dir, &self.project_root) {
            (Some(dir), Some(root)) => Some(root.join(dir)),
            (Some(dir), None) => Some(dir.clone()),
            (None, _) => self.global.templates_dir.clone(),
        }
    }

    /// Build the anchor registry with project overrides applied.
    pub fn pattern_registry(&self) -> PatternRegistry {
        match &self.project {
            Some(project) => PatternRegistry::with_overrides(project.anchor_overrides()),
            None => PatternRegistry::default(),
        }
    }

    /// Path routing for a project rooted at `root`.
    pub fn project_paths(&self, root: &Path) -> ProjectPaths {
        ProjectPaths::new(
            root.to_path_buf(),
            self.source_dir(),
            self.containers_dir(),
        )
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded project config file.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}
