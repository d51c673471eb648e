use predicates::prelude::*;
use std::fs;

use crate::common::TestProject;
use dockgen_cli::test_utils::ManifestFixture;

const BUILTIN_RECIPES: [&str; 6] = [
    "Dockerfile.alpine-clang",
    "Dockerfile.alpine-gcc",
    "Dockerfile.debian-clang",
    "Dockerfile.debian-gcc",
    "Dockerfile.fedora-clang",
    "Dockerfile.fedora-gcc",
];

/// Without a manifest the built-in catalog is written to the current directory
#[test]
fn test_generate_builtin_catalog() {
    let project = TestProject::new().unwrap();

    let output = project.run_dockgen(&["generate"]).unwrap();
    output.assert_success().assert_stdout_contains("6 created");

    assert_eq!(project.recipes_in("."), BUILTIN_RECIPES);
}

/// Running with no subcommand is the same as `generate`
#[test]
fn test_no_subcommand_generates() {
    let project = TestProject::new().unwrap();

    project.dockgen().assert().success();
    assert_eq!(project.recipes_in("."), BUILTIN_RECIPES);
}

#[test]
fn test_generate_from_manifest_into_output_dir() {
    let project = TestProject::new().unwrap();
    ManifestFixture::basic().write_to(project.project_path()).unwrap();

    project.run_dockgen(&["generate"]).unwrap().assert_success();

    assert_eq!(
        project.recipes_in("out"),
        [
            "Dockerfile.alpine-clang",
            "Dockerfile.alpine-gcc",
            "Dockerfile.debian-clang",
            "Dockerfile.debian-gcc"
        ]
    );
    let alpine_clang = project.read("out/Dockerfile.alpine-clang");
    assert!(alpine_clang.contains("RUN apk add --no-cache vips-dev cmake clang\n"));
    assert!(alpine_clang.contains("RUN apk add --no-cache vips\n"));
}

#[test]
fn test_output_dir_flag_overrides_manifest() {
    let project = TestProject::new().unwrap();
    ManifestFixture::basic().write_to(project.project_path()).unwrap();

    project.run_dockgen(&["generate", "--output-dir", "elsewhere"]).unwrap().assert_success();

    assert_eq!(project.recipes_in("elsewhere").len(), 4);
    assert!(!project.project_path().join("out").exists());
}

#[test]
fn test_platform_and_compiler_filters() {
    let project = TestProject::new().unwrap();

    project
        .run_dockgen(&["generate", "--platform", "fedora", "--compiler", "clang"])
        .unwrap()
        .assert_success();

    assert_eq!(project.recipes_in("."), ["Dockerfile.fedora-clang"]);
}

#[test]
fn test_unknown_compiler_suggests_and_writes_nothing() {
    let project = TestProject::new().unwrap();

    project
        .dockgen()
        .args(["generate", "--compiler", "clnag"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Compiler 'clnag' is not in the catalog"))
        .stderr(predicate::str::contains("Did you mean: clang?"));

    assert!(project.recipes_in(".").is_empty());
}

#[test]
fn test_second_run_reports_unchanged() {
    let project = TestProject::new().unwrap();

    project.run_dockgen(&["generate"]).unwrap().assert_success();
    project
        .run_dockgen(&["generate"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("0 created, 0 updated, 6 unchanged");
}

#[test]
fn test_dry_run_writes_nothing() {
    let project = TestProject::new().unwrap();

    project
        .run_dockgen(&["generate", "--dry-run"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("would create");

    assert!(project.recipes_in(".").is_empty());
}

#[test]
fn test_check_detects_stale_recipe() {
    let project = TestProject::new().unwrap();

    project
        .dockgen()
        .args(["generate", "--check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("6 recipe(s) are missing or out of date"));

    project.run_dockgen(&["generate"]).unwrap().assert_success();
    project.run_dockgen(&["generate", "--check"]).unwrap().assert_success();

    fs::write(project.project_path().join("Dockerfile.debian-gcc"), "FROM scratch\n").unwrap();
    project
        .dockgen()
        .args(["generate", "--check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dockerfile.debian-gcc"));
}

/// A blocked output fails the run but every other recipe is still written
#[test]
fn test_write_failure_is_reported_after_other_recipes() {
    let project = TestProject::new().unwrap();
    fs::create_dir(project.project_path().join("Dockerfile.alpine-gcc")).unwrap();

    let output = project.run_dockgen(&["generate"]).unwrap();
    output
        .assert_failure()
        .assert_stderr_contains("Failed to write 1 of 6 recipes")
        .assert_stdout_contains("5 created");
    assert_eq!(output.code, Some(1));

    let written: Vec<_> = BUILTIN_RECIPES
        .iter()
        .filter(|name| project.project_path().join(name).is_file())
        .collect();
    assert_eq!(written.len(), 5);
}

#[test]
fn test_invalid_manifest_writes_nothing() {
    let project = TestProject::new().unwrap();
    ManifestFixture::missing_placeholder().write_to(project.project_path()).unwrap();

    project
        .dockgen()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no {deps} placeholder"));

    assert!(project.recipes_in(".").is_empty());
}

#[test]
fn test_quiet_prints_nothing_on_success() {
    let project = TestProject::new().unwrap();

    project.dockgen().args(["-q", "generate"]).assert().success().stdout(predicate::str::is_empty());
    assert_eq!(project.recipes_in(".").len(), 6);
}

#[test]
fn test_manifest_without_compilers_generates_nothing() {
    let project = TestProject::new().unwrap();
    ManifestFixture::no_compilers().write_to(project.project_path()).unwrap();

    project
        .run_dockgen(&["generate"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("Generated 0 recipe(s)");
    assert!(project.recipes_in(".").is_empty());
}

#[test]
fn test_bare_manifest_path_writes_next_to_manifest() {
    let project = TestProject::new().unwrap();
    project.run_dockgen(&["-q", "init"]).unwrap().assert_success();

    project
        .run_dockgen(&["--manifest-path", "dockgen.toml", "generate"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("Generated 6 recipe(s) in .: 6 created");
    assert_eq!(project.recipes_in("."), BUILTIN_RECIPES);
}
