//! Integration tests for newslookup CLI

use std::path::{Path, PathBuf};
use std::process::Command;

use rusqlite::Connection;
use tempfile::{tempdir, TempDir};

fn run_newslookup(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_newslookup"))
        .args(args)
        .env_remove("NEWSLOOKUP_DB")
        .env_remove("NEWSLOOKUP_TEMPLATE")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Write a small catalog database and return its directory and path.
fn create_catalog() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("news.sqlite");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE microfilm (
            state TEXT, abbrev TEXT, city TEXT, title TEXT,
            "begin" INTEGER, "end" INTEGER, callno TEXT
        );
        INSERT INTO microfilm VALUES ('NY', 'NY', 'Albany', 'Argus', 1813, 1921, 'MF 300');
        INSERT INTO microfilm VALUES ('CA', 'CA', 'Oakland', 'Tribune', 1874, 1950, 'MF 102');
        INSERT INTO microfilm VALUES ('CA', 'CA', 'LA', 'Times', 1881, 1990, 'MF 101');
        "#,
    )
    .unwrap();
    (dir, path)
}

fn db_arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_newslookup(&["--help"]);

    assert!(success);
    assert!(stdout.contains("newslookup"));
    assert!(stdout.contains("--choice"));
    assert!(stdout.contains("--state"));
    assert!(stdout.contains("--html"));
    assert!(stdout.contains("serve"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_newslookup(&["--version"]);

    assert!(success);
    assert!(stdout.contains("newslookup"));
}

#[test]
fn test_text_output_by_year() {
    let (_dir, db) = create_catalog();
    let db = db_arg(&db);
    let (stdout, _, success) = run_newslookup(&["--db", &db, "--choice", "1", "--year", "1900"]);

    assert!(success);
    assert_eq!(
        stdout,
        "1900\n\
         \n\
         CA\n\
         \n\
         LA         Times      1881    1990    MF 101\n\
         Oakland    Tribune    1874    1950    MF 102\n\
         \n\
         NY\n\
         \n\
         Albany     Argus      1813    1921    MF 300\n\
         \n"
    );
}

#[test]
fn test_state_lookup_omits_redundant_label() {
    let (_dir, db) = create_catalog();
    let db = db_arg(&db);
    let (stdout, _, success) = run_newslookup(&["--db", &db, "--choice", "2", "--state", "ca"]);

    assert!(success);
    assert!(stdout.starts_with("CA\n\nLA "));
    assert!(!stdout.contains("NY"));
}

#[test]
fn test_lookup_subcommand_html_output() {
    let (_dir, db) = create_catalog();
    let db = db_arg(&db);
    let (stdout, _, success) = run_newslookup(&[
        "lookup", "--db", &db, "--choice", "3", "--state", "All States", "--begin", "1800",
        "--end", "1850", "--html",
    ]);

    assert!(success);
    assert!(stdout.contains("<h1>ALL STATES 1800 - 1850</h1>"));
    assert!(stdout.contains("<td>Albany</td>"));
    assert!(!stdout.contains("<td>Oakland</td>"));
}

#[test]
fn test_json_output() {
    let (_dir, db) = create_catalog();
    let db = db_arg(&db);
    let (stdout, _, success) =
        run_newslookup(&["--db", &db, "--choice", "2", "--state", "ny", "--json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["header"], "NY");
    assert_eq!(parsed["state_groups"][0]["state"], "NY");
    assert_eq!(parsed["state_groups"][0]["entries"][0]["call_no"], "MF 300");
}

#[test]
fn test_custom_template() {
    let (dir, db) = create_catalog();
    let template = dir.path().join("page.html");
    std::fs::write(&template, "{{ header }}:{{ state_groups|length }}").unwrap();
    let (db, template) = (db_arg(&db), db_arg(&template));

    let (stdout, _, success) = run_newslookup(&[
        "--db", &db, "--template", &template, "--choice", "1", "--year", "1900", "--html",
    ]);

    assert!(success);
    assert_eq!(stdout, "1900:2");
}

#[test]
fn test_missing_year() {
    let (_dir, db) = create_catalog();
    let db = db_arg(&db);
    let (stdout, stderr, success) = run_newslookup(&["--db", &db, "--choice", "1"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error: choice 1 requires a year"));
}

#[test]
fn test_invalid_choice() {
    let (_, stderr, success) = run_newslookup(&["--choice", "9"]);

    assert!(!success);
    assert!(stderr.contains("Error: invalid choice"));
}

#[test]
fn test_missing_database() {
    let dir = tempdir().unwrap();
    let db = db_arg(&dir.path().join("absent.sqlite"));
    let (_, stderr, success) = run_newslookup(&["--db", &db, "--choice", "2", "--state", "ca"]);

    assert!(!success);
    assert!(stderr.contains("Error: [SQL] failed to open database"));
}
