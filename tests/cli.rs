use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn include_order() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("include-order")
}

fn headers(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

fn chain() -> TempDir {
    headers(&[("A.h", ""), ("B.h", "A.h"), ("C.h", "B.h")])
}

#[test]
fn test_check_correct_order_from_stdin() {
    let dir = chain();
    include_order()
        .arg("check")
        .arg(dir.path())
        .write_stdin("A.h\nB.h\nC.h\n")
        .assert()
        .success()
        .stdout("The order of filenames is correct.\n");
}

#[test]
fn test_check_cycle_exits_one() {
    let dir = headers(&[("A.h", "B.h"), ("B.h", "A.h")]);
    include_order()
        .arg("check")
        .arg(dir.path())
        .write_stdin("A.h\n")
        .assert()
        .code(1)
        .stdout("The order of filenames is not correct.\n");
}

#[test]
fn test_check_scope_on_first_stdin_line() {
    let dir = chain();
    let input = format!("{}\nC.h\n", dir.path().display());
    include_order()
        .arg("check")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("is correct"));
}

#[test]
fn test_check_candidates_file() {
    let dir = headers(&[("A.h", "A.h")]);
    let list = tempfile::NamedTempFile::new().unwrap();
    fs::write(list.path(), "A.h\n").unwrap();

    include_order()
        .arg("check")
        .arg(dir.path())
        .arg("--candidates")
        .arg(list.path())
        .assert()
        .code(1);
}

#[test]
fn test_check_unknown_candidate_is_error() {
    let dir = chain();
    include_order()
        .arg("check")
        .arg(dir.path())
        .write_stdin("D.h\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown file in candidate ordering: D.h"));
}

#[test]
fn test_check_unknown_dependency_is_error() {
    let dir = headers(&[("A.h", "E.h")]);
    include_order()
        .arg("check")
        .arg(dir.path())
        .write_stdin("A.h\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("A.h depends on unknown file E.h"));
}

#[test]
fn test_check_json_output() {
    let dir = chain();
    let output = include_order()
        .args(["check", "--format", "json"])
        .arg(dir.path())
        .write_stdin("C.h\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["correct"], true);
    assert_eq!(parsed["known_files"], 3);
    assert_eq!(parsed["candidates"], 1);
}

#[test]
fn test_check_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    include_order()
        .arg("check")
        .arg(dir.path().join("nope"))
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_check_empty_stdin_without_dir() {
    include_order()
        .arg("check")
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read stdin"));
}

#[test]
fn test_stats_reports_cycles() {
    let dir = headers(&[("A.h", "B.h"), ("B.h", "A.h"), ("C.h", "")]);
    include_order()
        .arg("stats")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Known files: 3"))
        .stdout(predicate::str::contains("Dependency edges: 2"))
        .stdout(predicate::str::contains("Cycles: present"));
}

#[test]
fn test_version_subcommand() {
    include_order()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("include-order v"));
}

#[test]
fn test_invalid_format_rejected() {
    let dir = chain();
    include_order()
        .args(["check", "--format", "yaml"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format"));
}
