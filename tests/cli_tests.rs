//! CLI integration tests using the real fragmenta binary

mod common;

use assert_cmd::Command;
use common::TestProject;
use predicates::prelude::*;

#[allow(deprecated)]
fn fragmenta_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fragmenta").unwrap();
    cmd.env_remove("FRAGMENTA_PROJECT").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_output() {
    fragmenta_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compile"))
        .stdout(predicate::str::contains("tags"))
        .stdout(predicate::str::contains("deploy"));
}

#[test]
fn test_version_output() {
    fragmenta_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fragmenta"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_compile_writes_bundles() {
    let project = TestProject::with_sample_assets();

    fragmenta_cmd()
        .args(["compile", "-p"])
        .arg(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("styles/global"))
        .stdout(predicate::str::contains("scripts/app"))
        .stdout(predicate::str::contains("3 bundle(s), 3 new"));

    let styles = project.list_dir("public/assets/styles");
    assert_eq!(styles.len(), 4);
    assert!(styles.iter().any(|n| n.starts_with("global-") && n.ends_with(".css")));
    assert!(styles.iter().any(|n| n.starts_with("global-") && n.ends_with(".css.gz")));
    assert!(project.file_exists("public/assets/manifest.json"));
}

#[test]
fn test_recompile_reports_unchanged() {
    let project = TestProject::with_sample_assets();

    fragmenta_cmd()
        .args(["compile", "-p"])
        .arg(&project.path)
        .assert()
        .success();

    fragmenta_cmd()
        .args(["compile", "-p"])
        .arg(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 bundle(s), 0 new"));
}

#[test]
fn test_compile_without_compression() {
    let project = TestProject::with_sample_assets();

    fragmenta_cmd()
        .args(["compile", "--no-compress", "-p"])
        .arg(&project.path)
        .assert()
        .success();

    let styles = project.list_dir("public/assets/styles");
    assert_eq!(styles.len(), 2);
    assert!(styles.iter().all(|n| !n.ends_with(".gz")));
}

#[test]
fn test_compile_project_from_env() {
    let project = TestProject::with_sample_assets();

    fragmenta_cmd()
        .arg("compile")
        .env("FRAGMENTA_PROJECT", &project.path)
        .assert()
        .success();

    assert_eq!(project.list_dir("public/assets/scripts").len(), 2);
}

#[test]
fn test_compile_empty_project() {
    let project = TestProject::new();

    fragmenta_cmd()
        .args(["compile", "-p"])
        .arg(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No assets to compile"));
}

#[test]
fn test_compile_invalid_config_fails() {
    let project = TestProject::with_sample_assets();
    project.write_file("fragmenta.yaml", "assets: [not, a, mapping]\n");

    fragmenta_cmd()
        .args(["compile", "-p"])
        .arg(&project.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));

    assert!(!project.file_exists("public/assets"));
}

#[test]
fn test_tags_development() {
    let project = TestProject::with_sample_assets();

    fragmenta_cmd()
        .args(["tags", "styles", "global", "-p"])
        .arg(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "href='/app/assets/styles/global/a.css'",
        ))
        .stdout(predicate::str::contains(
            "href='/app/assets/styles/global/b.css'",
        ));
}

#[test]
fn test_tags_compiled_after_compile() {
    let project = TestProject::with_sample_assets();

    fragmenta_cmd()
        .args(["compile", "-p"])
        .arg(&project.path)
        .assert()
        .success();

    fragmenta_cmd()
        .args(["tags", "scripts", "app", "--compiled", "-p"])
        .arg(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<script src='/assets/scripts/app-",
        ))
        .stdout(predicate::str::contains("main.js").not());
}

#[test]
fn test_tags_compiled_falls_back_without_bundle() {
    let project = TestProject::with_sample_assets();

    let development = fragmenta_cmd()
        .args(["tags", "styles", "admin", "-p"])
        .arg(&project.path)
        .output()
        .unwrap();

    fragmenta_cmd()
        .args(["tags", "styles", "admin", "--compiled", "-p"])
        .arg(&project.path)
        .assert()
        .success()
        .stdout(development.stdout)
        .stderr(predicate::str::contains("No compiled css bundle"));
}

#[test]
fn test_tags_unknown_kind_fails() {
    fragmenta_cmd()
        .args(["tags", "images", "logo"])
        .assert()
        .failure();
}

#[test]
fn test_deploy_without_script() {
    let project = TestProject::with_sample_assets();

    fragmenta_cmd()
        .args(["deploy", "-p"])
        .arg(&project.path)
        .assert()
        .success()
        .stderr(predicate::str::contains("No deploy script"));

    assert!(project.file_exists("public/assets/manifest.json"));
}

#[cfg(unix)]
#[test]
fn test_deploy_failing_script() {
    use std::os::unix::fs::PermissionsExt;

    let project = TestProject::with_sample_assets();
    project.write_file("bin/deploy", "#!/bin/sh\nexit 1\n");
    std::fs::set_permissions(
        project.path.join("bin/deploy"),
        std::fs::Permissions::from_mode(0o755),
    )
    .unwrap();

    fragmenta_cmd()
        .args(["deploy", "production", "-p"])
        .arg(&project.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deploy script"));
}

#[test]
fn test_completions_output() {
    fragmenta_cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fragmenta"));
}

#[test]
fn test_completions_unknown_shell_is_usage_error() {
    fragmenta_cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown shell 'tcsh'"));
}
