//! core::paths
//!
//! Centralized path routing for the project tree.
//!
//! # Layout
//!
//! All paths are relative to the project root and the configured source
//! folder (`src` by default):
//! - `<src>/<containers>/<Name>/` - one directory per generated container
//! - `<src>/Redux/index.js` - reducer aggregator
//! - `<src>/Sagas/index.js` - saga dispatcher index
//! - `<src>/Services/Api.js` - API aggregator
//! - `<src>/Services/FixtureApi.js` - fixture API
//! - `<src>/Navigation/AppNavigation.js` - navigation root
//!
//! No code outside this module should join these well-known file names.
//!
//! # Example
//!
//! ```
//! use crudgen::core::paths::ProjectPaths;
//! use std::path::PathBuf;
//!
//! let paths = ProjectPaths::new(PathBuf::from("/app"), "src", "containers");
//!
//! assert_eq!(
//!     paths.container_index("Widget"),
//!     PathBuf::from("/app/src/containers/Widget/index.js")
//! );
//! assert_eq!(paths.redux_index(), PathBuf::from("/app/src/Redux/index.js"));
//! ```

use std::path::{Path, PathBuf};

/// Path routing for one project tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Project root (the directory holding `package.json`).
    pub root: PathBuf,
    /// Source folder name relative to the root.
    pub source_dir: String,
    /// Containers folder name relative to the source folder.
    pub containers_dir: String,
}

impl ProjectPaths {
    pub fn new(
        root: PathBuf,
        source_dir: impl Into<String>,
        containers_dir: impl Into<String>,
    ) -> Self {
        Self {
            root,
            source_dir: source_dir.into(),
            containers_dir: containers_dir.into(),
        }
    }

    fn source(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }

    // =========================================================================
    // Generated files
    // =========================================================================

    /// Directory that holds every file generated for `name`.
    pub fn container_dir(&self, name: &str) -> PathBuf {
        self.source().join(&self.containers_dir).join(name)
    }

    /// The container entry point. Its existence blocks generation.
    pub fn container_index(&self, name: &str) -> PathBuf {
        self.container_dir(name).join("index.js")
    }

    /// A file inside the container directory.
    pub fn container_file(&self, name: &str, file: &str) -> PathBuf {
        self.container_dir(name).join(file)
    }

    /// A file inside the container's `Tests/` directory.
    pub fn container_test_file(&self, name: &str, file: &str) -> PathBuf {
        self.container_dir(name).join("Tests").join(file)
    }

    /// Module specifier used by project files to import a container module,
    /// e.g. `../containers/Widget/redux`.
    pub fn container_import(&self, name: &str, module: Option<&str>) -> String {
        match module {
            Some(module) => format!("../{}/{}/{}", self.containers_dir, name, module),
            None => format!("../{}/{}", self.containers_dir, name),
        }
    }

    // =========================================================================
    // Patched project files
    // =========================================================================

    pub fn redux_index(&self) -> PathBuf {
        self.source().join("Redux").join("index.js")
    }

    pub fn saga_index(&self) -> PathBuf {
        self.source().join("Sagas").join("index.js")
    }

    pub fn api(&self) -> PathBuf {
        self.source().join("Services").join("Api.js")
    }

    pub fn fixture_api(&self) -> PathBuf {
        self.source().join("Services").join("FixtureApi.js")
    }

    pub fn app_navigation(&self) -> PathBuf {
        self.source().join("Navigation").join("AppNavigation.js")
    }

    /// Express `path` relative to the project root for display.
    pub fn display_relative<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        path.strip_prefix(&self.root).unwrap_or(path).display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> ProjectPaths {
        ProjectPaths::new(PathBuf::from("/app"), "src", "containers")
    }

    #[test]
    fn container_layout() {
        let paths = paths();
        assert_eq!(
            paths.container_file("Widget", "sagas.js"),
            PathBuf::from("/app/src/containers/Widget/sagas.js")
        );
        assert_eq!(
            paths.container_test_file("Widget", "apiTest.js"),
            PathBuf::from("/app/src/containers/Widget/Tests/apiTest.js")
        );
    }

    #[test]
    fn project_files() {
        let paths = paths();
        assert_eq!(paths.saga_index(), PathBuf::from("/app/src/Sagas/index.js"));
        assert_eq!(paths.api(), PathBuf::from("/app/src/Services/Api.js"));
        assert_eq!(
            paths.fixture_api(),
            PathBuf::from("/app/src/Services/FixtureApi.js")
        );
        assert_eq!(
            paths.app_navigation(),
            PathBuf::from("/app/src/Navigation/AppNavigation.js")
        );
    }

    #[test]
    fn custom_folders() {
        let paths = ProjectPaths::new(PathBuf::from("/app"), "app", "screens");
        assert_eq!(
            paths.container_index("Widget"),
            PathBuf::from("/app/app/screens/Widget/index.js")
        );
        assert_eq!(
            paths.container_import("Widget", Some("api")),
            "../screens/Widget/api"
        );
        assert_eq!(paths.container_import("Widget", None), "../screens/Widget");
    }

    #[test]
    fn relative_display() {
        let paths = paths();
        let shown = paths
            .display_relative(Path::new("/app/src/Redux/index.js"))
            .to_string();
        assert_eq!(shown, "src/Redux/index.js");
    }
}
