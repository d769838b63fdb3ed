mod common;

use assert_cmd::Command;
use common::{remote_has_tag, TestRepo};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// The binary run in `dir`, isolated from the user's git and tag-bump config
fn tag_bump(dir: &Path, home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tag-bump").unwrap();
    cmd.current_dir(dir)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();

    tag_bump(repo.path(), &home)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_exits_successfully() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();

    tag_bump(repo.path(), &home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compute the next semantic version"));
}

#[test]
fn unknown_command_fails_with_code_one() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();

    tag_bump(repo.path(), &home)
        .arg("release")
        .assert()
        .code(1);
}

#[test]
fn current_without_tags_is_zero() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();

    tag_bump(repo.path(), &home)
        .arg("current")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current version: v0.0.0"));
}

#[test]
fn current_outside_repository_falls_back_silently() {
    let home = TempDir::new().unwrap();
    let not_a_repo = TempDir::new().unwrap();

    tag_bump(not_a_repo.path(), &home)
        .arg("current")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current version: v0.0.0"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn current_picks_highest_version_tag() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::with_tags(&["v0.9.0", "v1.0.0", "v0.5.0", "nightly"]);

    tag_bump(repo.path(), &home)
        .arg("current")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current version: v1.0.0"));
}

#[test]
fn next_minor_after_highest_tag() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::with_tags(&["v0.9.0", "v1.0.0", "v0.5.0"]);

    tag_bump(repo.path(), &home)
        .args(["next", "minor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next minor version: v1.1.0"));

    assert!(!repo.has_tag("v1.1.0"));
}

#[test]
fn next_with_invalid_kind_fails() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::with_tags(&["v1.2.3"]);

    tag_bump(repo.path(), &home)
        .args(["next", "invalid"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid bump type: invalid"));
}

#[test]
fn bump_declined_creates_nothing() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::with_tags(&["v1.2.3"]);

    tag_bump(repo.path(), &home)
        .args(["bump", "patch", "Bug fixes"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current version: v1.2.3"))
        .stdout(predicate::str::contains("Creating patch release: v1.2.4"))
        .stdout(predicate::str::contains("Message: Bug fixes"))
        .stdout(predicate::str::contains("Cancelled"));

    assert!(!repo.has_tag("v1.2.4"));
}

#[test]
fn bump_confirmed_creates_and_pushes() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::with_tags(&["v1.0.0"]);
    let origin = repo.add_bare_origin();

    tag_bump(repo.path(), &home)
        .args(["bump", "minor", "New features"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created tag v1.1.0"))
        .stdout(predicate::str::contains("Pushed tag v1.1.0 to origin"));

    assert_eq!(repo.tag_message("v1.1.0").as_deref(), Some("New features"));
    assert!(remote_has_tag(origin.path(), "v1.1.0"));
}

#[test]
fn bump_with_yes_skips_prompt() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::with_tags(&["v1.9.0", "v1.10.0"]);
    let origin = repo.add_bare_origin();

    tag_bump(repo.path(), &home)
        .args(["bump", "major", "Breaking changes", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Proceed?").not())
        .stdout(predicate::str::contains("Created tag v2.0.0"));

    assert!(remote_has_tag(origin.path(), "v2.0.0"));
}

#[test]
fn bump_push_failure_exits_one_and_keeps_local_tag() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::with_tags(&["v0.1.0"]);

    tag_bump(repo.path(), &home)
        .args(["bump", "patch", "Fix", "--yes"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Created tag v0.1.1"))
        .stderr(predicate::str::contains("Failed to push tag 'v0.1.1'"));

    assert!(repo.has_tag("v0.1.1"));
}

#[test]
fn bump_no_push_only_creates_locally() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();

    tag_bump(repo.path(), &home)
        .args(["bump", "patch", "First", "--yes", "--no-push"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created tag v0.0.1"))
        .stdout(predicate::str::contains("git push origin v0.0.1"));

    assert!(repo.has_tag("v0.0.1"));
}

#[test]
fn bump_invalid_kind_fails_before_prompting() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::with_tags(&["v1.0.0"]);

    tag_bump(repo.path(), &home)
        .args(["bump", "huge", "msg"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Proceed?").not())
        .stderr(predicate::str::contains("Invalid bump type: huge"));
}

#[test]
fn bump_outside_repository_fails() {
    let home = TempDir::new().unwrap();
    let not_a_repo = TempDir::new().unwrap();

    tag_bump(not_a_repo.path(), &home)
        .args(["bump", "patch", "msg", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR:"));
}

#[test]
fn bump_invalid_kind_outside_repository_reports_kind() {
    let home = TempDir::new().unwrap();
    let not_a_repo = TempDir::new().unwrap();

    tag_bump(not_a_repo.path(), &home)
        .args(["bump", "huge", "msg"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid bump type: huge"))
        .stderr(predicate::str::contains("Git operation failed").not());
}

#[test]
fn config_file_changes_prefix_and_push() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::with_tags(&["v5.0.0", "release-1.4.2"]);
    fs::write(
        repo.path().join("tagbump.toml"),
        r#"
[tag]
prefix = "release-"

[remote]
push = false

[behavior]
skip_confirmation = true
"#,
    )
    .unwrap();

    tag_bump(repo.path(), &home)
        .arg("current")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current version: release-1.4.2"));

    tag_bump(repo.path(), &home)
        .args(["bump", "minor", "Configured"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created tag release-1.5.0"));

    assert!(repo.has_tag("release-1.5.0"));
}

#[test]
fn explicit_missing_config_fails() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();

    tag_bump(repo.path(), &home)
        .args(["--config", "missing.toml", "current"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}
