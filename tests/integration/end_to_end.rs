use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("evidence.log"), "0123456789").unwrap();
    dir
}

fn metastat(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_metastat"));
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn writes_report_into_default_directory() {
    let dir = workspace();

    metastat(&dir)
        .arg("evidence.log")
        .assert()
        .success()
        .stdout(predicate::str::contains("File Size: 10 bytes"))
        .stdout(predicate::str::contains("[+] Metadata written to '"));

    let report = fs::read_to_string(dir.path().join("metadata_output/metadata_evidence.txt")).unwrap();
    assert!(report.contains(" Metadata of 'evidence.log' "));
    assert!(report.contains(" End of Metadata "));
}

#[test]
fn honours_output_dir_and_name() {
    let dir = workspace();

    metastat(&dir).args(["-d", "reports/nested", "-o", "JuicyFairies.txt", "evidence.log"]).assert().success();

    assert!(dir.path().join("reports/nested/JuicyFairies.txt").is_file());
    assert!(!dir.path().join("metadata_output").exists());
}

#[test]
fn existing_report_is_overwritten() {
    let dir = workspace();
    let out = dir.path().join("metadata_output");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("metadata_evidence.txt"), "stale contents that are long enough to notice").unwrap();

    metastat(&dir).args(["--style", "plain", "evidence.log"]).assert().success();

    let report = fs::read_to_string(out.join("metadata_evidence.txt")).unwrap();
    assert!(!report.contains("stale"));
    assert!(report.contains("File Size: 10 bytes"));
}

#[test]
fn console_json_is_valid_json() {
    let dir = workspace();

    let output = metastat(&dir).args(["--console", "json", "--no-file", "evidence.log"]).output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "evidence.log");
    assert_eq!(value["exists"], true);
    assert!(!dir.path().join("metadata_output").exists());
}

#[test]
fn console_json_stays_parseable_when_a_file_is_written() {
    let dir = workspace();

    let output = metastat(&dir).args(["--console", "json", "evidence.log"]).output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "evidence.log");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("[+] Metadata written to '"), "{stderr}");
    assert!(dir.path().join("metadata_output/metadata_evidence.txt").is_file());
}

#[test]
fn quiet_console_prints_only_the_written_path() {
    let dir = workspace();

    metastat(&dir)
        .args(["--console", "quiet", "evidence.log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File Size").not())
        .stdout(predicate::str::contains("metadata_evidence.txt"));
}

#[test]
fn directories_are_reported() {
    let dir = workspace();
    fs::create_dir(dir.path().join("folder")).unwrap();

    metastat(&dir)
        .args(["--no-file", "folder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File Type: Directory"));
}
