use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_ytshuffle_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("ytshuffle")
}

#[test]
fn test_completion_command_help() {
    let mut cmd = Command::new(get_ytshuffle_bin());
    cmd.arg("completion").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generate shell completion scripts"))
        .stdout(predicate::str::contains("bash"))
        .stdout(predicate::str::contains("zsh"))
        .stdout(predicate::str::contains("fish"));
}

#[test]
fn test_completion_bash_generates_script() {
    let mut cmd = Command::new(get_ytshuffle_bin());
    cmd.arg("completion").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_ytshuffle()"))
        .stdout(predicate::str::contains("complete -F _ytshuffle"));
}

#[test]
fn test_completion_zsh_generates_script() {
    let mut cmd = Command::new(get_ytshuffle_bin());
    cmd.arg("completion").arg("zsh");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#compdef ytshuffle"));
}

#[test]
fn test_completion_fish_generates_script() {
    let mut cmd = Command::new(get_ytshuffle_bin());
    cmd.arg("completion").arg("fish");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("complete -c ytshuffle"));
}

#[test]
fn test_completion_does_not_need_config() {
    let mut cmd = Command::new(get_ytshuffle_bin());
    cmd.arg("--config")
        .arg("/nonexistent/config.json")
        .arg("completion")
        .arg("bash");

    cmd.assert().success();
}

#[test]
fn test_completion_invalid_shell() {
    let mut cmd = Command::new(get_ytshuffle_bin());
    cmd.arg("completion").arg("tcsh");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
