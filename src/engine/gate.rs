//! engine::gate
//!
//! Precondition checks that run before any file is touched.
//!
//! # Order
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. The container index must not exist (refuses to overwrite)
//! 2. The Redux index must exist
//! 3. The other patched project files must exist
//! 4. The navigation root must exist when navigation wiring is enabled
//!
//! A blank name is rejected earlier, when the [`Identifier`] is built.
//!
//! [`Identifier`]: crate::core::naming::Identifier

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::naming::Identifier;
use crate::core::paths::ProjectPaths;

/// A failed precondition. No file has been written when this is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("'{}' already exists. Can't create new container.", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("No '{}' file found. Can't add to index.js.", .path.display())]
    MissingReduxIndex { path: PathBuf },

    #[error("No '{}' file found. Can't wire {purpose}.", .path.display())]
    MissingProjectFile { path: PathBuf, purpose: &'static str },

    #[error("No '{}' file found. Can't insert container.", .path.display())]
    MissingNavigation { path: PathBuf },
}

/// Run every precondition for generating `id`.
pub fn check(paths: &ProjectPaths, id: &Identifier, navigation: bool) -> Result<(), GateError> {
    let index = paths.container_index(id.pascal());
    if index.exists() {
        return Err(GateError::AlreadyExists { path: index });
    }

    let redux_index = paths.redux_index();
    if !redux_index.exists() {
        return Err(GateError::MissingReduxIndex { path: redux_index });
    }

    require(&paths.saga_index(), "sagas")?;
    require(&paths.fixture_api(), "fixtures")?;
    require(&paths.api(), "the api")?;

    if navigation {
        let nav = paths.app_navigation();
        if !nav.exists() {
            return Err(GateError::MissingNavigation { path: nav });
        }
    }

    Ok(())
}

fn require(path: &Path, purpose: &'static str) -> Result<(), GateError> {
    if path.exists() {
        Ok(())
    } else {
        Err(GateError::MissingProjectFile {
            path: path.to_path_buf(),
            purpose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> (TempDir, ProjectPaths) {
        let temp = TempDir::new().unwrap();
        let paths = ProjectPaths::new(temp.path().to_path_buf(), "src", "containers");
        for file in [
            paths.redux_index(),
            paths.saga_index(),
            paths.api(),
            paths.fixture_api(),
        ] {
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(&file, "").unwrap();
        }
        (temp, paths)
    }

    fn widget() -> Identifier {
        Identifier::new("Widget").unwrap()
    }

    #[test]
    fn passes_on_complete_project() {
        let (_temp, paths) = project();
        assert_eq!(check(&paths, &widget(), false), Ok(()));
    }

    #[test]
    fn existing_container_wins_over_missing_files() {
        let (_temp, paths) = project();
        fs::remove_file(paths.redux_index()).unwrap();
        let index = paths.container_index("Widget");
        fs::create_dir_all(index.parent().unwrap()).unwrap();
        fs::write(&index, "").unwrap();

        let err = check(&paths, &widget(), false).unwrap_err();
        assert_eq!(err, GateError::AlreadyExists { path: index });
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn missing_redux_index() {
        let (_temp, paths) = project();
        fs::remove_file(paths.redux_index()).unwrap();

        let err = check(&paths, &widget(), false).unwrap_err();
        assert!(matches!(err, GateError::MissingReduxIndex { .. }));
        assert!(err.to_string().contains("Can't add to index.js"));
    }

    #[test]
    fn missing_fixture_api() {
        let (_temp, paths) = project();
        fs::remove_file(paths.fixture_api()).unwrap();

        let err = check(&paths, &widget(), false).unwrap_err();
        assert_eq!(
            err,
            GateError::MissingProjectFile {
                path: paths.fixture_api(),
                purpose: "fixtures"
            }
        );
    }

    #[test]
    fn navigation_only_checked_when_enabled() {
        let (_temp, paths) = project();
        assert_eq!(check(&paths, &widget(), false), Ok(()));

        let err = check(&paths, &widget(), true).unwrap_err();
        assert!(matches!(err, GateError::MissingNavigation { .. }));
        assert!(err.to_string().contains("Can't insert container"));
    }
}
