#![cfg(unix)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn helper_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("git-credential-azure-cli").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", home.path().join(".gitconfig"))
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn configured_helpers(home: &TempDir) -> Vec<String> {
    let output = std::process::Command::new("git")
        .args(["config", "--global", "--get-all", "credential.helper"])
        .current_dir(home.path())
        .env("HOME", home.path())
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", home.path().join(".gitconfig"))
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_init_configures_helpers() {
    if !git_available() {
        return;
    }
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join(".gitconfig"),
        "[credential]\n\thelper = manager\n\thelper = store\n",
    )
    .unwrap();

    helper_cmd(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added cache credential helper"))
        .stdout(predicate::str::contains("configuration complete"))
        .stderr(predicate::str::contains("WARNING").not());

    let exe = fs::canonicalize(assert_cmd::cargo::cargo_bin("git-credential-azure-cli")).unwrap();
    let helpers = configured_helpers(&home);
    assert_eq!(helpers, vec!["cache".to_string(), exe.display().to_string()]);
}

#[test]
fn test_init_warns_about_netrc_conflicts() {
    if !git_available() {
        return;
    }
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join(".netrc"),
        "machine github.com login me password x\nmachine dev.azure.com login me password y\n",
    )
    .unwrap();

    helper_cmd(&home)
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("WARNING"))
        .stderr(predicate::str::contains("- dev.azure.com"))
        .stderr(predicate::str::contains("github.com").not());
}
