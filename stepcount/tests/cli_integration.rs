//! Integration tests for stepcount CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_stepcount(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_stepcount"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn create_project(dir: &Path) {
    fs::create_dir_all(dir.join("src")).unwrap();
    fs::create_dir_all(dir.join("gen")).unwrap();
    fs::create_dir_all(dir.join("node_modules/lib")).unwrap();

    fs::write(
        dir.join("src/Main.java"),
        "/**\n * Entry point.\n */\npublic class Main {\n\n    // run\n    void run() {}\n}\n",
    )
    .unwrap();
    fs::write(
        dir.join("src/util.go"),
        "package util\n\nvar s = `raw\n// text`\n",
    )
    .unwrap();
    fs::write(dir.join("gen/Gen.cs"), "class Gen {}\n").unwrap();
    fs::write(dir.join("node_modules/lib/index.js"), "module.exports = 1;\n").unwrap();
    fs::write(dir.join("notes.txt"), "plain text\n").unwrap();
}

#[test]
fn test_cli_help() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_stepcount(temp.path(), &["--help"]);

    assert!(success);
    assert!(stdout.contains("stepcount"));
    assert!(stdout.contains("--sort-by"));
    assert!(stdout.contains("--format"));
    assert!(stdout.contains("--exclude"));
}

#[test]
fn test_cli_version() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_stepcount(temp.path(), &["--version"]);

    assert!(success);
    assert!(stdout.contains("stepcount"));
}

#[test]
fn test_csv_output() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_stepcount(temp.path(), &["."]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(success);
    assert_eq!(
        lines,
        vec![
            "ファイル名,総行数,実行行数,コメント行数,空行数",
            "Gen.cs,1,1,0,0",
            "Main.java,8,3,4,1",
            "util.go,4,3,0,1",
            "合計,13,7,4,2",
        ]
    );
}

#[test]
fn test_sort_by_total_descending() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) =
        run_stepcount(temp.path(), &[".", "--sort-by", "total", "--order", "desc"]);
    let names: Vec<&str> = stdout
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();

    assert!(success);
    assert_eq!(names, vec!["Main.java", "util.go", "Gen.cs", "合計"]);
}

#[test]
fn test_exclude_pattern() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_stepcount(temp.path(), &[".", "--exclude", "**/gen/**"]);

    assert!(success);
    assert!(!stdout.contains("Gen.cs"));
    assert!(stdout.contains("合計,12,6,4,2"));
}

#[test]
fn test_explicit_unsupported_file_is_failed_row() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, stderr, success) =
        run_stepcount(temp.path(), &["src/Main.java", "notes.txt"]);

    assert!(success);
    assert!(stdout.contains("Main.java,8,3,4,1"));
    assert!(stdout.contains("notes.txt,-,-,-,-"));
    assert!(stdout.contains("合計,8,3,4,1"));
    assert!(stderr.contains("notes.txt"));
}

#[test]
fn test_file_named_twice_is_counted_once() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_stepcount(&temp.path().join("src"), &["Main.java", "."]);

    assert!(success);
    assert_eq!(stdout.matches("Main.java,").count(), 1);
    assert!(stdout.contains("合計,12,6,4,2"));
}

#[test]
fn test_json_output() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_stepcount(temp.path(), &[".", "--format", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["headers"][1], "総行数");
    assert_eq!(parsed["rows"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["footer"]["label"], "合計");
    assert_eq!(parsed["footer"]["values"][0], "13");
}

#[test]
fn test_table_output() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_stepcount(temp.path(), &[".", "-f", "table"]);

    assert!(success);
    assert!(stdout.contains("ファイル名"));
    assert!(stdout.contains("Main.java"));
    assert!(stdout.lines().any(|l| l.starts_with("---")));
    assert!(stdout.lines().last().unwrap().starts_with("合計"));
}

#[test]
fn test_out_file() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_stepcount(temp.path(), &["src", "-o", "report.csv"]);

    assert!(success);
    assert!(stdout.is_empty());
    let written = fs::read_to_string(temp.path().join("report.csv")).unwrap();
    assert!(written.starts_with("ファイル名,"));
    assert!(written.contains("Main.java,8,3,4,1"));
}

#[test]
fn test_nonexistent_path() {
    let temp = tempdir().unwrap();
    let (_, stderr, success) = run_stepcount(temp.path(), &["missing-dir"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("missing-dir"));
}

#[test]
fn test_invalid_glob() {
    let temp = tempdir().unwrap();
    let (_, stderr, success) = run_stepcount(temp.path(), &[".", "--include", "[bad"]);

    assert!(!success);
    assert!(stderr.contains("invalid glob pattern"));
}

#[test]
fn test_invalid_sort_target() {
    let temp = tempdir().unwrap();
    let (_, _, success) = run_stepcount(temp.path(), &[".", "--sort-by", "size"]);

    assert!(!success);
}
