use predicates::prelude::*;
use std::fs;

use crate::common::TestProject;

#[test]
fn test_init_then_generate_matches_builtin() {
    let with_manifest = TestProject::new().unwrap();
    with_manifest
        .run_dockgen(&["init"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("Initialized dockgen.toml");
    assert!(with_manifest.project_path().join("dockgen.toml").is_file());

    with_manifest.run_dockgen(&["generate"]).unwrap().assert_success();

    let builtin = TestProject::new().unwrap();
    builtin.run_dockgen(&["generate"]).unwrap().assert_success();

    for name in builtin.recipes_in(".") {
        assert_eq!(with_manifest.read(&name), builtin.read(&name), "{name} differs");
    }
}

#[test]
fn test_init_refuses_existing_manifest() {
    let project = TestProject::new().unwrap();
    project.write_manifest("# keep me\n").unwrap();

    project
        .dockgen()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use --force to overwrite"));

    assert_eq!(project.read("dockgen.toml"), "# keep me\n");
}

#[test]
fn test_init_with_path_and_force() {
    let project = TestProject::new().unwrap();
    fs::create_dir_all(project.project_path().join("docker")).unwrap();
    fs::write(project.project_path().join("docker/dockgen.toml"), "# old\n").unwrap();

    project.dockgen().args(["init", "--path", "docker", "--force"]).assert().success();

    assert!(project.read("docker/dockgen.toml").contains("[[compilers]]"));
}

#[test]
fn test_quiet_init_prints_nothing() {
    let project = TestProject::new().unwrap();

    project.dockgen().args(["-q", "init"]).assert().success().stdout(predicate::str::is_empty());
    assert!(project.project_path().join("dockgen.toml").is_file());
}
