//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sparseclone() -> Command {
    let mut cmd = Command::cargo_bin("sparseclone").unwrap();
    for var in [
        "SPARSECLONE_PROVIDER",
        "SPARSECLONE_USERNAME",
        "SPARSECLONE_REPOSITORY",
        "SPARSECLONE_OUTPUT_DIR",
        "SPARSECLONE_BRANCH",
        "SPARSECLONE_PROTOCOL",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_version_flag() {
    sparseclone()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sparseclone"));
}

#[test]
fn test_help_flag() {
    sparseclone()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clone a git repo with sparse checkout"))
        .stdout(predicate::str::contains("--checkout-path"));
}

#[test]
fn test_missing_required_arguments() {
    sparseclone()
        .args(["-u", "alice", "-r", "proj"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--checkout-path"));
}

#[test]
fn test_dry_run_prints_plan() {
    let temp_dir = TempDir::new().unwrap();
    sparseclone()
        .current_dir(temp_dir.path())
        .args(["-u", "alice", "-r", "proj", "-p", "src", "-p", "docs", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "git clone --no-checkout git@github.com:alice/proj.git proj",
        ))
        .stdout(predicate::str::contains("git sparse-checkout set src docs"))
        .stdout(predicate::str::contains("git checkout main"));
}

#[test]
fn test_dry_run_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = sparseclone()
        .current_dir(temp_dir.path())
        .args([
            "--provider",
            "gitlab",
            "--protocol",
            "https",
            "-u",
            "bob",
            "-r",
            "tool.git",
            "-p",
            "lib",
            "--dry-run",
            "--output-format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["url"], "https://gitlab.com/bob/tool.git");
    assert_eq!(plan["output_dir"], "tool");
}

#[test]
fn test_environment_supplies_values() {
    let temp_dir = TempDir::new().unwrap();
    sparseclone()
        .current_dir(temp_dir.path())
        .env("SPARSECLONE_PROVIDER", "codeberg")
        .env("SPARSECLONE_BRANCH", "dev")
        .args(["-u", "carol", "-r", "site", "-p", "www", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git@codeberg.org:carol/site.git"))
        .stdout(predicate::str::contains("git checkout dev"));
}

#[test]
fn test_defaults_file_in_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("sparseclone.yaml"),
        "provider: gitlab\nprotocol: https\n",
    )
    .unwrap();

    sparseclone()
        .current_dir(temp_dir.path())
        .args(["-u", "bob", "-r", "tool", "-p", "lib", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://gitlab.com/bob/tool"));
}

#[test]
fn test_missing_explicit_config_file() {
    let temp_dir = TempDir::new().unwrap();
    sparseclone()
        .current_dir(temp_dir.path())
        .args(["-u", "a", "-r", "b", "-p", "c", "--config", "missing.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_unknown_provider() {
    let temp_dir = TempDir::new().unwrap();
    sparseclone()
        .current_dir(temp_dir.path())
        .args(["--provider", "sourceforge", "-u", "a", "-r", "b", "-p", "c"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown provider: sourceforge"));
}

#[test]
fn test_unknown_protocol() {
    let temp_dir = TempDir::new().unwrap();
    sparseclone()
        .current_dir(temp_dir.path())
        .args(["--protocol", "ftp", "-u", "a", "-r", "b", "-p", "c"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown protocol: ftp"));
}

#[test]
fn test_error_reported_when_logging_disabled() {
    let temp_dir = TempDir::new().unwrap();
    sparseclone()
        .current_dir(temp_dir.path())
        .env("RUST_LOG", "off")
        .args(["--protocol", "ftp", "-u", "a", "-r", "b", "-p", "c"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown protocol"));
}

#[test]
fn test_git_missing_from_path() {
    let temp_dir = TempDir::new().unwrap();
    sparseclone()
        .current_dir(temp_dir.path())
        .env("PATH", temp_dir.path())
        .args(["-u", "alice", "-r", "proj", "-p", "src"])
        .assert()
        .failure()
        .code(5)
        .stdout(predicate::str::contains("Cloning from").not())
        .stderr(predicate::str::contains("git is not installed or not in PATH"));

    assert!(!temp_dir.path().join("proj").exists());
}

#[test]
fn test_dry_run_without_git_on_path() {
    let temp_dir = TempDir::new().unwrap();
    sparseclone()
        .current_dir(temp_dir.path())
        .env("PATH", temp_dir.path())
        .args(["-u", "alice", "-r", "proj", "-p", "src", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git clone --no-checkout"));

    assert!(!temp_dir.path().join("proj").exists());
}

#[test]
fn test_dry_run_unknown_output_format() {
    let temp_dir = TempDir::new().unwrap();
    sparseclone()
        .current_dir(temp_dir.path())
        .args(["-u", "a", "-r", "b", "-p", "c", "--dry-run", "--output-format", "yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid format"));
}
