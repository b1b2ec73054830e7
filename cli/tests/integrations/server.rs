use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_server_command_available() {
    Command::cargo_bin("deduce")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("server"));
}

#[test]
fn test_server_rejects_bad_port() {
    Command::cargo_bin("deduce")
        .unwrap()
        .args(["server", "--port", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
