use std::path::Path;
use std::process::Command as ProcessCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vergate() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vergate"));
    cmd.env_remove("VERGATE_MANIFEST")
        .env_remove("VERGATE_BASE_REF")
        .env_remove("VERGATE_REFERENCE_MANIFEST")
        .env_remove("RUST_LOG");
    cmd
}

fn manifest(version: &str) -> String {
    format!("[package]\nname = \"demo\"\nversion = \"{version}\"\nedition = \"2021\"\n")
}

/// Candidate and reference manifests side by side in a temp dir.
fn manifests(candidate: &str, reference: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Cargo.toml"), manifest(candidate)).unwrap();
    std::fs::write(dir.path().join("main.toml"), manifest(reference)).unwrap();
    dir
}

fn run_git(repo_dir: &Path, args: &[&str]) {
    let output = ProcessCommand::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// A repo whose `main` branch has `Cargo.toml` at `committed`, with the
/// working copy on a feature branch carrying `working`.
fn repo_with_versions(committed: &str, working: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    run_git(dir.path(), &["init"]);
    run_git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
    run_git(dir.path(), &["config", "user.name", "test-user"]);
    run_git(dir.path(), &["config", "user.email", "test@example.com"]);
    std::fs::write(dir.path().join("Cargo.toml"), manifest(committed)).unwrap();
    run_git(dir.path(), &["add", "Cargo.toml"]);
    run_git(dir.path(), &["commit", "-m", "release"]);
    run_git(dir.path(), &["checkout", "-b", "feature"]);
    std::fs::write(dir.path().join("Cargo.toml"), manifest(working)).unwrap();
    dir
}

// ---- File references ----

#[test]
fn bumped_version_exits_zero() {
    let dir = manifests("1.2.1", "1.2.0");
    vergate()
        .current_dir(dir.path())
        .args(["--reference-manifest", "main.toml"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("candidate: 1.2.1"))
        .stdout(predicate::str::contains("reference: 1.2.0"))
        .stdout(predicate::str::contains(
            "PASS: candidate 1.2.1 is greater than reference 1.2.0",
        ));
}

#[test]
fn unchanged_version_exits_one() {
    let dir = manifests("1.2.0", "1.2.0");
    vergate()
        .current_dir(dir.path())
        .args(["--reference-manifest", "main.toml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "FAIL: candidate 1.2.0 is not greater than reference 1.2.0",
        ));
}

#[test]
fn older_version_exits_one() {
    let dir = manifests("1.1.9", "1.2.0");
    vergate()
        .current_dir(dir.path())
        .args(["--reference-manifest", "main.toml"])
        .assert()
        .code(1);
}

#[test]
fn unparseable_version_is_a_failing_gate_not_an_input_error() {
    let dir = manifests("bad", "1.0.0");
    vergate()
        .current_dir(dir.path())
        .args(["--reference-manifest", "main.toml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("could not be parsed"));
}

#[test]
fn missing_manifest_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    vergate()
        .current_dir(dir.path())
        .args(["--reference-manifest", "main.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("error: could not determine candidate version"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn manifest_without_version_exits_two() {
    let dir = manifests("1.0.0", "1.0.0");
    std::fs::write(dir.path().join("main.toml"), "[package]\nname = \"demo\"\n").unwrap();
    vergate()
        .current_dir(dir.path())
        .args(["--reference-manifest", "main.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("could not determine reference version"))
        .stderr(predicate::str::contains("no package.version"));
}

#[test]
fn workspace_version_is_used_for_inherited_package_version() {
    let dir = manifests("1.0.0", "1.0.0");
    std::fs::write(
        dir.path().join("Cargo.toml"),
        "[workspace]\nmembers = []\n\n[workspace.package]\nversion = \"1.1.0\"\n",
    )
    .unwrap();
    vergate()
        .current_dir(dir.path())
        .args(["--reference-manifest", "main.toml"])
        .assert()
        .code(0);
}

#[test]
fn environment_variables_configure_sources() {
    let dir = manifests("2.0.0", "1.0.0");
    vergate()
        .current_dir(dir.path())
        .env("VERGATE_MANIFEST", dir.path().join("Cargo.toml"))
        .env("VERGATE_REFERENCE_MANIFEST", dir.path().join("main.toml"))
        .assert()
        .code(0);
}

#[test]
fn json_report_is_machine_readable() {
    let dir = manifests("0.3.0", "0.2.9");
    let assert = vergate()
        .current_dir(dir.path())
        .args(["--reference-manifest", "main.toml", "--json"])
        .assert()
        .code(0);

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["verdict"], "pass");
    assert_eq!(value["candidate"], "0.3.0");
    assert_eq!(value["reference"], "0.2.9");
    assert_eq!(value["candidate_source"], "Cargo.toml");
    assert_eq!(value["comparison"]["outcome"], "greater");
}

// ---- Git references ----

#[test]
fn no_arguments_compares_against_main_branch() {
    let repo = repo_with_versions("0.1.0", "0.1.1");
    vergate()
        .current_dir(repo.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("reference: 0.1.0 (main:Cargo.toml)"));
}

#[test]
fn forgotten_bump_fails_against_main_branch() {
    let repo = repo_with_versions("0.1.0", "0.1.0");
    vergate()
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL"));
}

#[test]
fn base_ref_selects_other_revision() {
    let repo = repo_with_versions("0.1.0", "0.2.0");
    run_git(repo.path(), &["commit", "-am", "bump"]);
    run_git(repo.path(), &["tag", "v0.2.0"]);
    vergate()
        .current_dir(repo.path())
        .args(["--base-ref", "v0.2.0"])
        .assert()
        .code(1);
}

#[test]
fn unknown_base_ref_exits_two() {
    let repo = repo_with_versions("0.1.0", "0.2.0");
    vergate()
        .current_dir(repo.path())
        .args(["--base-ref", "does-not-exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("git error"));
}

#[test]
fn outside_git_repo_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Cargo.toml"), manifest("1.0.0")).unwrap();
    vergate()
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not inside a git work tree"));
}
