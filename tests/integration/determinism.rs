use std::fs;

use crate::common::TestProject;
use dockgen_cli::matrix::{MatrixGenerator, Selection};
use dockgen_cli::test_utils::{init_test_logging, sample_catalog};

const DEBIAN_GCC: &str = r#"### Do not modify manually, generated by dockgen ###
FROM debian:bookworm AS builder

RUN apt update && apt install libvips-dev libmagic-dev libboost-dev cmake make git ca-certificates g++ --no-install-recommends -y  && rm -rf /var/lib/apt/lists/*

WORKDIR /app
COPY CMakeLists.txt .
COPY src src

WORKDIR /app/build
RUN cmake -DCMAKE_BUILD_TYPE=Release .. && make -j

FROM debian:bookworm

RUN apt update && apt install libvips libmagic1 --no-install-recommends -y  && rm -rf /var/lib/apt/lists/*


WORKDIR /app
COPY --from=builder /app/build/asset-server .

ENTRYPOINT [ "./asset-server" ]
"#;

#[test]
fn test_debian_gcc_recipe_text() {
    let project = TestProject::new().unwrap();
    project.run_dockgen(&["generate"]).unwrap().assert_success();

    assert_eq!(project.read("Dockerfile.debian-gcc"), DEBIAN_GCC);
}

#[test]
fn test_alpine_clang_install_lines() {
    let project = TestProject::new().unwrap();
    project.run_dockgen(&["generate"]).unwrap().assert_success();

    let text = project.read("Dockerfile.alpine-clang");
    assert!(text.contains(
        "\nRUN apk add --no-cache openssl-dev vips-dev boost-dev file-dev cmake make git clang\n"
    ));
    assert!(text.contains("\nRUN apk add --no-cache vips openssl libmagic\n"));
}

/// Two runs into separate directories produce byte-identical files
#[test]
fn test_regeneration_is_byte_identical() {
    let first = TestProject::new().unwrap();
    let second = TestProject::new().unwrap();
    first.run_dockgen(&["generate"]).unwrap().assert_success();
    second.run_dockgen(&["generate"]).unwrap().assert_success();

    let names = first.recipes_in(".");
    assert_eq!(names, second.recipes_in("."));
    for name in names {
        let a = fs::read(first.project_path().join(&name)).unwrap();
        let b = fs::read(second.project_path().join(&name)).unwrap();
        assert_eq!(a, b, "{name} differs between runs");
    }
}

#[test]
fn test_library_rendering_is_stable() {
    init_test_logging(None);

    let generator = MatrixGenerator::new(sample_catalog()).unwrap();
    let first = generator.render_all(&Selection::all()).unwrap();
    let second = generator.render_all(&Selection::all()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first[0].output_name, "Dockerfile.alpine-gcc");
    assert_eq!(first[0].effective_dev_packages.as_slice(), ["cmake", "make", "g++"]);
    assert_eq!(first[1].effective_dev_packages.as_slice(), ["cmake", "make", "clang"]);
}

/// Deleting one output and running again recreates only that file
#[test]
fn test_deleted_recipe_is_regenerated() {
    let project = TestProject::new().unwrap();
    project.run_dockgen(&["generate"]).unwrap().assert_success();

    let path = project.project_path().join("Dockerfile.alpine-gcc");
    let before = fs::read(&path).unwrap();
    fs::remove_file(&path).unwrap();

    project
        .run_dockgen(&["generate"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("Dockerfile.alpine-gcc (created)")
        .assert_stdout_contains("1 created, 0 updated, 5 unchanged, 0 failed");
    assert_eq!(fs::read(&path).unwrap(), before);
}
