use predicates::prelude::*;

use crate::common::TestProject;
use dockgen_cli::test_utils::ManifestFixture;

#[test]
fn test_list_builtin_text() {
    let project = TestProject::new().unwrap();

    project
        .run_dockgen(&["list"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("built-in catalog")
        .assert_stdout_contains("debian:bookworm")
        .assert_stdout_contains("Dockerfile.fedora-clang");
}

#[test]
fn test_list_json_from_manifest() {
    let project = TestProject::new().unwrap();
    ManifestFixture::basic().write_to(project.project_path()).unwrap();

    let output = project.run_dockgen(&["list", "--format", "json"]).unwrap();
    output.assert_success();

    let value: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(value["platforms"].as_array().unwrap().len(), 2);
    assert_eq!(value["compilers"][1]["name"], "clang");
    let outputs: Vec<_> = value["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["output"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        outputs,
        [
            "Dockerfile.debian-gcc",
            "Dockerfile.debian-clang",
            "Dockerfile.alpine-gcc",
            "Dockerfile.alpine-clang"
        ]
    );
    assert_eq!(value["recipes"][3]["dev_packages"], serde_json::json!(["vips-dev", "cmake", "clang"]));
    assert_eq!(value["recipes"][3]["runtime_packages"], serde_json::json!(["vips"]));
}

#[test]
fn test_list_rejects_unknown_format() {
    let project = TestProject::new().unwrap();

    project
        .dockgen()
        .args(["list", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}
