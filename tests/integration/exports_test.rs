use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_exports_points_goauth_at_install_dir() {
    let exe = assert_cmd::cargo::cargo_bin("git-credential-azure-cli");
    let dir = std::fs::canonicalize(&exe)
        .unwrap()
        .parent()
        .unwrap()
        .display()
        .to_string();

    Command::cargo_bin("git-credential-azure-cli")
        .unwrap()
        .arg("exports")
        .assert()
        .success()
        .stdout(format!("export GOAUTH=\"git {}\"\n", dir));
}

#[test]
fn test_exports_is_shell_syntax() {
    let output = Command::cargo_bin("git-credential-azure-cli")
        .unwrap()
        .arg("exports")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(predicate::str::starts_with("export GOAUTH=\"git ").eval(&stdout));
    assert_eq!(stdout.lines().count(), 1);
}
