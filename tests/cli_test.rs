//! End-to-end tests for the awards-import binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_awards-import"))
        .args(args)
        .current_dir(cwd)
        .env_remove("AWARDS_IMPORT_TARGET")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run awards-import")
}

fn sql_files(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".sql"))
        .collect()
}

#[test]
fn test_success_writes_converted_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("export.json"),
        r#"{"categories":[{"id":"c1","name":"Best Song"}]}"#,
    )
    .unwrap();

    let out = run(&["export.json"], dir.path());

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("export_converted.sql"));
    assert!(stdout.contains("Supabase SQL editor"));

    let sql = fs::read_to_string(dir.path().join("export_converted.sql")).unwrap();
    assert!(sql.contains("('c1', 'Best Song', '', '', '')"));
    assert!(sql.contains("-- Total Categories: 1\n"));
}

#[test]
fn test_no_arguments_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    let out = run(&[], dir.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage: awards-import"));
    assert!(sql_files(dir.path()).is_empty());
}

#[test]
fn test_two_arguments_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.json"), "{}").unwrap();
    fs::write(dir.path().join("b.json"), "{}").unwrap();

    let out = run(&["a.json", "b.json"], dir.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage: awards-import"));
    assert!(sql_files(dir.path()).is_empty());
}

#[test]
fn test_missing_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();

    let out = run(&["nope.json"], dir.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("File nope.json not found"));
    assert!(sql_files(dir.path()).is_empty());
}

#[test]
fn test_invalid_json_reports_parser_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.json"), "{\"users\": [").unwrap();

    let out = run(&["bad.json"], dir.path());

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("JSON error:"));
    assert!(stderr.contains("line 1"));
    assert!(sql_files(dir.path()).is_empty());
}

#[test]
fn test_flags_override_output_and_target() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("export.json"), r#"{"users":[{"id":"u1"}]}"#).unwrap();

    let out = run(
        &["export.json", "--output", "out.sql", "--target", "Postgres", "--no-breakdown"],
        dir.path(),
    );

    assert_eq!(out.status.code(), Some(0));
    assert!(!dir.path().join("export_converted.sql").exists());
    let sql = fs::read_to_string(dir.path().join("out.sql")).unwrap();
    assert!(sql.ends_with("-- Ready for import into Postgres\n"));
    assert!(!sql.contains("Users by role"));
}

#[test]
fn test_help_exits_successfully() {
    let dir = tempfile::tempdir().unwrap();

    let out = run(&["--help"], dir.path());

    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("awards-import"));
}
