use assert_cmd::Command;
use predicates::prelude::*;

fn metastat() -> Command {
    Command::new(env!("CARGO_BIN_EXE_metastat"))
}

#[test]
fn shows_help() {
    metastat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("metastat"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn shows_version() {
    metastat().arg("--version").assert().success().stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_path_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    metastat()
        .current_dir(dir.path())
        .arg("does_not_exist.txt")
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("[-] Error:"));
    assert!(!dir.path().join("metadata_output").exists());
}

#[test]
fn path_below_a_regular_file_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("plain.txt"), "data").unwrap();

    metastat()
        .current_dir(dir.path())
        .arg("plain.txt/child")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("plain.txt"));
}

#[cfg(unix)]
#[test]
fn unreadable_parent_exits_with_three() {
    use std::{fs, os::unix::fs::PermissionsExt};

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("inside.txt"), "data").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // privileged users bypass directory permissions
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let assert = metastat().current_dir(dir.path()).args(["--no-file", "locked/inside.txt"]).assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    assert.code(3).stderr(predicate::str::starts_with("[-] Error:"));
}

#[test]
fn width_below_minimum_is_a_usage_failure() {
    metastat().args(["--width", "3", "Cargo.toml"]).assert().code(1).stderr(predicate::str::contains("--width"));
}

#[test]
fn unknown_style_is_rejected_by_clap() {
    metastat().args(["--style", "fancy", "Cargo.toml"]).assert().failure();
}
