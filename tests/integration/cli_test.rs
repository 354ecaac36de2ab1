//! Integration tests for the CLI surface: dry run, commit mode, and abort
//! behavior for bad arguments

use std::fs::{self, File};
use std::io::Write;
use std::process::Command;

use tempfile::tempdir;

fn run_csvconv(args: &[&str]) -> (bool, String, String) {
    let output = Command::new("cargo")
        .args(["run", "--bin", "csvconv", "--"])
        .args(args)
        .output()
        .expect("failed to run csvconv");

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (output.status.success(), stdout, stderr)
}

#[test]
fn test_dry_run_writes_nothing() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let mut f = File::create(input.path().join("data.csv")).unwrap();
    write!(f, "a\n1\n").unwrap();

    let (success, _stdout, stderr) = run_csvconv(&[
        "--input",
        input.path().to_str().unwrap(),
        "--output",
        output.path().to_str().unwrap(),
    ]);

    assert!(!success, "dry run must exit non-zero");
    assert!(stderr.contains("dry run"), "expected dry run message: {}", stderr);
    assert!(!output.path().join("data.json").exists());
}

#[test]
fn test_commit_run_converts_and_exits_zero() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::create_dir(input.path().join("sub")).unwrap();
    let mut f = File::create(input.path().join("root.csv")).unwrap();
    write!(f, "id,name\n1,Alice\n").unwrap();
    let mut f = File::create(input.path().join("sub/child.csv")).unwrap();
    write!(f, "x\nnull\n").unwrap();

    let (success, _stdout, stderr) = run_csvconv(&[
        "--input",
        input.path().to_str().unwrap(),
        "--output",
        output.path().to_str().unwrap(),
        "--convert",
    ]);

    assert!(success, "commit run should succeed: {}", stderr);
    assert_eq!(
        fs::read_to_string(output.path().join("root.json")).unwrap(),
        r#"[{"id":"1","name":"Alice"}]"#
    );
    assert_eq!(
        fs::read_to_string(output.path().join("sub/child.json")).unwrap(),
        r#"[{"x":null}]"#
    );
}

#[test]
fn test_missing_output_directory_aborts_naming_the_path() {
    let input = tempdir().unwrap();
    let missing = input.path().join("no_such_dir");

    let (success, _stdout, stderr) = run_csvconv(&[
        "--input",
        input.path().to_str().unwrap(),
        "--output",
        missing.to_str().unwrap(),
        "--convert",
    ]);

    assert!(!success);
    assert!(
        stderr.contains("no_such_dir"),
        "error should name the missing path: {}",
        stderr
    );
}

#[test]
fn test_missing_input_option_aborts() {
    let output = tempdir().unwrap();

    let (success, _stdout, _stderr) =
        run_csvconv(&["--output", output.path().to_str().unwrap(), "--convert"]);

    assert!(!success);
}

#[test]
fn test_malformed_file_aborts_commit_run() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let mut f = File::create(input.path().join("bad.csv")).unwrap();
    write!(f, "a,b\nonly_one_cell\n").unwrap();

    let (success, _stdout, stderr) = run_csvconv(&[
        "--input",
        input.path().to_str().unwrap(),
        "--output",
        output.path().to_str().unwrap(),
        "--convert",
    ]);

    assert!(!success);
    assert!(stderr.contains("parse error"), "stderr: {}", stderr);
    assert!(!output.path().join("bad.json").exists());
}
