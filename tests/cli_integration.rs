//! Integration tests for the crudgen binary.
//!
//! These tests run the compiled CLI against throwaway project trees and
//! check exit codes, output and the resulting files.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Get a command for running crudgen with no global config.
fn crudgen() -> Command {
    let mut cmd = Command::cargo_bin("crudgen").unwrap();
    cmd.env_remove("CRUDGEN_CONFIG")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .env("HOME", "/nonexistent");
    cmd
}

/// A minimal project with every default anchor present.
fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    temp.child("src/Redux/index.js")
        .write_str("const rootReducer = combineReducers({\n})\n")
        .unwrap();
    temp.child("src/Sagas/index.js")
        .write_str(
            "/* ------------- Types ------------- */\n\
             /* ------------- Sagas ------------- */\n\
             export default function * root () {\n  yield all([\n  ])\n}\n",
        )
        .unwrap();
    temp.child("src/Services/Api.js")
        .write_str("let apiMerged = {}\n// merge api\n")
        .unwrap();
    temp.child("src/Services/FixtureApi.js")
        .write_str("export default {\n  // Functions return fixtures\n}\n")
        .unwrap();
    temp
}

#[test]
fn version_flag_works() {
    crudgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("crudgen"));
}

#[test]
fn help_flag_works() {
    crudgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CRUD"));
}

#[test]
fn generate_creates_container() {
    let temp = project();

    crudgen()
        .args(["generate", "Widget", "--cwd"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("create  src/containers/Widget/index.js"))
        .stdout(predicate::str::contains("patch   src/Redux/index.js"))
        .stdout(predicate::str::contains("manually add it to your navigation"));

    temp.child("src/containers/Widget/redux.js")
        .assert(predicate::str::contains("WidgetTypes"));
    temp.child("src/Redux/index.js")
        .assert(predicate::str::contains("widget: require('../containers/Widget/redux').reducer,"));
}

#[test]
fn alias_g_works() {
    let temp = project();

    crudgen()
        .args(["g", "Widget", "-q", "--cwd"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    temp.child("src/containers/Widget/index.js")
        .assert(predicate::path::exists());
}

#[test]
fn missing_name_prints_usage_and_succeeds() {
    let temp = project();

    crudgen()
        .args(["generate", "--cwd"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("crudgen generate <name>"))
        .stdout(predicate::str::contains("A name is required."));

    temp.child("src/containers").assert(predicate::path::missing());
}

#[test]
fn missing_name_respects_quiet() {
    let temp = project();

    crudgen()
        .args(["generate", "-q", "--cwd"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn existing_container_fails() {
    let temp = project();
    temp.child("src/containers/Widget/index.js")
        .write_str("// hand written\n")
        .unwrap();

    crudgen()
        .args(["generate", "Widget", "--cwd"])
        .arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Can't create new container."));

    temp.child("src/containers/Widget/index.js")
        .assert("// hand written\n");
    temp.child("src/Redux/index.js")
        .assert("const rootReducer = combineReducers({\n})\n");
}

#[test]
fn not_a_project_fails() {
    let temp = TempDir::new().unwrap();

    crudgen()
        .args(["generate", "Widget", "--cwd"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Can't add to index.js."));
}

#[test]
fn invalid_name_fails() {
    let temp = project();

    crudgen()
        .args(["generate", "9lives", "--cwd"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("must start with a letter"));
}

#[test]
fn missing_anchor_fails_without_writing() {
    let temp = project();
    temp.child("src/Services/FixtureApi.js")
        .write_str("export default {}\n")
        .unwrap();

    crudgen()
        .args(["generate", "Widget", "--cwd"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("// Functions return fixtures"))
        .stderr(predicate::str::contains("nothing was written"));

    temp.child("src/containers").assert(predicate::path::missing());
}

#[test]
fn dry_run_lists_plan() {
    let temp = project();

    crudgen()
        .args(["generate", "Widget", "--dry-run", "--cwd"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("src/containers/Widget/Tests/apiTest.js"))
        .stdout(predicate::str::contains("(saga triggers)"));

    temp.child("src/containers").assert(predicate::path::missing());
}

#[test]
fn dry_run_json_is_valid() {
    let temp = project();

    let output = crudgen()
        .args(["generate", "todo item", "--dry-run", "--json", "--cwd"])
        .arg(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["props"]["name"], "TodoItem");
    assert_eq!(plan["props"]["upperName"], "TODO_ITEM");
    assert_eq!(plan["renders"].as_array().unwrap().len(), 7);
    assert_eq!(plan["patches"].as_array().unwrap().len(), 6);
}

#[test]
fn json_without_dry_run_is_rejected() {
    crudgen()
        .args(["generate", "Widget", "--json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dry-run"));
}

#[test]
fn invalid_project_config_fails() {
    let temp = project();
    temp.child("crudgen.toml")
        .write_str("navigation = \"drawer\"\n")
        .unwrap();

    crudgen()
        .args(["generate", "Widget", "--cwd"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn config_list_shows_defaults() {
    let temp = project();

    crudgen()
        .args(["config", "list", "--cwd"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("navigation = none"))
        .stdout(predicate::str::contains("containers_dir = containers"))
        .stdout(predicate::str::contains("redux-reducers = \"combineReducers({\""));
}

#[test]
fn completion_bash() {
    crudgen()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crudgen"));
}
