use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a fixed user
fn waypoint_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wp").expect("Failed to find wp binary");
    cmd.arg("--no-color").args(["--user", "cli-test"]);
    cmd
}

/// Write a raw model response to a file inside the test directory
fn write_response(temp_dir: &TempDir, name: &str, content: &str) -> String {
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write response file");
    path.to_str().unwrap().to_string()
}

#[test]
fn test_cli_generate_from_file() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let response = write_response(
        &temp_dir,
        "response.json",
        r#"{"title": "Learn Rust", "steps": ["Ownership", "Lifetimes"]}"#,
    );

    waypoint_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "generate",
            &response,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created roadmap with ID: 1"))
        .stdout(predicate::str::contains("Learn Rust"))
        .stdout(predicate::str::contains("### 1. Ownership"))
        .stdout(predicate::str::contains("### 2. Lifetimes"));
}

#[test]
fn test_cli_generate_from_stdin() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "generate"])
        .write_stdin(
            "Here is your roadmap:\n```json\n{\"title\": \"Learn Go\", \"steps\": [\"Tour\"]}\n```",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Learn Go"));
}

#[test]
fn test_cli_generate_with_title_hint() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    waypoint_cmd()
        .args([
            "--database-file",
            db_arg,
            "generate",
            "--title-hint",
            "Learn Piano",
        ])
        .write_stdin(r#"{"steps": ["Scales", "Chords"]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Learn Piano"))
        .stdout(predicate::str::contains("Untitled Roadmap").not());

    // A title in the response wins over the hint.
    waypoint_cmd()
        .args([
            "--database-file",
            db_arg,
            "generate",
            "--title-hint",
            "Ignored Hint",
        ])
        .write_stdin(r#"{"title": "Learn Guitar", "steps": ["Tuning"]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Learn Guitar"))
        .stdout(predicate::str::contains("Ignored Hint").not());
}

#[test]
fn test_cli_generate_rejects_prose_only_response() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "generate"])
        .write_stdin("I'm sorry, I can't produce a roadmap for that.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON"));
}

#[test]
fn test_cli_generate_rejects_empty_roadmap() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "generate"])
        .write_stdin(r#"{"title": "Empty", "nodes": []}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no steps"));
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No roadmaps found."));
}

#[test]
fn test_cli_list_with_category_filter() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    waypoint_cmd()
        .args(["--database-file", db_arg, "generate"])
        .write_stdin(r#"{"title": "Learn Rust", "category": "programming", "steps": ["One"]}"#)
        .assert()
        .success();
    waypoint_cmd()
        .args(["--database-file", db_arg, "generate"])
        .write_stdin(r#"{"title": "Watercolors", "category": "art", "steps": ["One"]}"#)
        .assert()
        .success();

    waypoint_cmd()
        .args([
            "--database-file",
            db_arg,
            "list",
            "--category",
            "programming",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Roadmaps"))
        .stdout(predicate::str::contains("Learn Rust"))
        .stdout(predicate::str::contains("Watercolors").not());
}

#[test]
fn test_cli_show_roadmap() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    waypoint_cmd()
        .args(["--database-file", db_arg, "generate"])
        .write_stdin(
            r#"{"title": "Learn SQL", "description": "Databases end to end", "steps": ["Joins"]}"#,
        )
        .assert()
        .success();

    waypoint_cmd()
        .args(["--database-file", db_arg, "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Learn SQL"))
        .stdout(predicate::str::contains("Databases end to end"))
        .stdout(predicate::str::contains("## Steps"));
}

#[test]
fn test_cli_show_missing_roadmap() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "show", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Roadmap with ID 42 not found"));
}

#[test]
fn test_cli_edit_roadmap_title() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    waypoint_cmd()
        .args(["--database-file", db_arg, "generate"])
        .write_stdin(r#"{"title": "Before", "steps": ["One"]}"#)
        .assert()
        .success();

    waypoint_cmd()
        .args([
            "--database-file",
            db_arg,
            "edit",
            "1",
            "--title",
            "After",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated roadmap with ID: 1"))
        .stdout(predicate::str::contains("Changes made:"))
        .stdout(predicate::str::contains("After"));
}

#[test]
fn test_cli_edit_missing_roadmap_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "edit",
            "42",
            "--title",
            "Nope",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_duplicate_roadmap() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    waypoint_cmd()
        .args(["--database-file", db_arg, "generate"])
        .write_stdin(r#"{"title": "Learn Git", "steps": ["Commits"]}"#)
        .assert()
        .success();

    waypoint_cmd()
        .args(["--database-file", db_arg, "duplicate", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created roadmap with ID: 2"))
        .stdout(predicate::str::contains("Learn Git (copy)"));
}

#[test]
fn test_cli_delete_requires_confirm_flag() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    waypoint_cmd()
        .args(["--database-file", db_arg, "generate"])
        .write_stdin(r#"{"title": "Doomed", "steps": ["One"]}"#)
        .assert()
        .success();

    // Without --confirm the deletion is refused.
    waypoint_cmd()
        .args(["--database-file", db_arg, "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmation"));

    waypoint_cmd()
        .args(["--database-file", db_arg, "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted roadmap 'Doomed' (ID: 1)"));

    waypoint_cmd()
        .args(["--database-file", db_arg, "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn test_cli_users_are_isolated() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    waypoint_cmd()
        .args(["--database-file", db_arg, "generate"])
        .write_stdin(r#"{"title": "Mine", "steps": ["One"]}"#)
        .assert()
        .success();

    // A different user sees an empty list and cannot show the roadmap.
    Command::cargo_bin("wp")
        .expect("Failed to find wp binary")
        .args(["--no-color", "--user", "someone-else"])
        .args(["--database-file", db_arg, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No roadmaps found."));
}
