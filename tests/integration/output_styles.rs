use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn report_for(style: &str, extra: &[&str]) -> String {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sample.txt"), "abc").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_metastat"))
        .current_dir(dir.path())
        .args(["--console", "report", "--no-file", "--style", style])
        .args(extra)
        .arg("sample.txt")
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn table_uses_bordered_rows() {
    let text = report_for("table", &[]);
    assert!(text.lines().any(|l| l.starts_with("| ") && l.contains("Attribute") && l.contains("Value")));
    assert!(text.lines().any(|l| l.starts_with('+') && l.ends_with('+')));
}

#[test]
fn table_width_flag_changes_row_width() {
    let narrow = report_for("table", &["--width", "20"]);
    let rule = narrow.lines().find(|l| l.starts_with('+')).unwrap();
    assert_eq!(rule.chars().count(), 2 * 20 + 7);
}

#[test]
fn annotated_groups_sections() {
    let text = report_for("annotated", &[]);
    for section in ["Timestamps", "Permissions & Links", "Ownership & Size", "File System Details", "Path & Existence"] {
        assert!(text.contains(section), "missing {section}");
    }
    assert!(text.contains("└─"));
}

#[test]
fn plain_spacing_and_title_flags() {
    let text = report_for("plain", &["--spaced", "--no-title"]);
    assert!(!text.contains("Metadata of 'sample.txt'"));
    assert!(text.contains("File Size: 3 bytes\n\n"));
}

#[test]
fn mode_is_decimal_and_octal_everywhere() {
    for style in ["table", "annotated", "plain"] {
        let text = report_for(style, &[]);
        assert!(predicate::str::is_match(r"\d+ \(0o[0-7]+\)").unwrap().eval(&text), "{style}:\n{text}");
    }
}
