use predicates::prelude::*;

use crate::common::TestProject;
use dockgen_cli::test_utils::ManifestFixture;

#[test]
fn test_validate_builtin() {
    let project = TestProject::new().unwrap();

    project
        .run_dockgen(&["validate"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("✓ Valid built-in catalog")
        .assert_stdout_contains("= 6 recipe(s)");
}

#[test]
fn test_validate_json() {
    let project = TestProject::new().unwrap();
    ManifestFixture::basic().write_to(project.project_path()).unwrap();

    let output = project.run_dockgen(&["validate", "--format", "json"]).unwrap();
    output.assert_success();

    let value: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(value["valid"], true);
    assert_eq!(value["recipes"], 4);
    assert!(value["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_validate_invalid_syntax() {
    let project = TestProject::new().unwrap();
    ManifestFixture::invalid_syntax().write_to(project.project_path()).unwrap();

    project
        .dockgen()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid manifest file syntax"));
}

#[test]
fn test_validate_json_reports_errors() {
    let project = TestProject::new().unwrap();
    ManifestFixture::missing_placeholder().write_to(project.project_path()).unwrap();

    let output = project.run_dockgen(&["validate", "--format", "json"]).unwrap();
    output.assert_failure();

    let value: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(value["valid"], false);
    assert!(value["errors"][0].as_str().unwrap().contains("alpine"));
}

#[test]
fn test_validate_warns_about_empty_matrix() {
    let project = TestProject::new().unwrap();
    ManifestFixture::no_compilers().write_to(project.project_path()).unwrap();

    project
        .run_dockgen(&["validate"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("No compilers defined");
}

#[test]
fn test_missing_explicit_manifest() {
    let project = TestProject::new().unwrap();

    project
        .dockgen()
        .args(["--manifest-path", "nope.toml", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_quiet_validate_prints_nothing() {
    let project = TestProject::new().unwrap();

    project.dockgen().args(["-q", "validate"]).assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_quiet_validate_still_prints_json() {
    let project = TestProject::new().unwrap();

    let output = project.run_dockgen(&["-q", "validate", "--format", "json"]).unwrap();
    output.assert_success();
    let value: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(value["valid"], true);
}

#[test]
fn test_quiet_validate_still_reports_errors() {
    let project = TestProject::new().unwrap();
    ManifestFixture::invalid_syntax().write_to(project.project_path()).unwrap();

    project
        .dockgen()
        .args(["-q", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid manifest file syntax"));
}
