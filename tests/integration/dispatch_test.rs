use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn helper_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("git-credential-azure-cli").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", home.path().join(".gitconfig"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    helper_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Azure CLI credentials"))
        .stdout(predicate::str::contains("exports"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    helper_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("git-credential-azure-cli"));
}

#[test]
fn test_version_command() {
    let home = TempDir::new().unwrap();
    helper_cmd(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_operation_is_silent() {
    let home = TempDir::new().unwrap();
    helper_cmd(&home)
        .arg("capability")
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn test_unknown_flag_is_silent() {
    let home = TempDir::new().unwrap();
    helper_cmd(&home)
        .args(["--no-such-flag", "get"])
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn test_no_operation_is_silent() {
    let home = TempDir::new().unwrap();
    helper_cmd(&home)
        .assert()
        .success()
        .stdout("")
        .stderr("");
}
