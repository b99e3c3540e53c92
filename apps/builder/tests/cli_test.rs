//! CLI binary integration tests using assert_cmd

use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;

fn resume(state: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_resume"));
    cmd.arg("--state").arg(state).env_remove("RUST_LOG");
    cmd
}

fn show(state: &Path) -> Value {
    let output = resume(state).arg("show").output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_show_without_snapshot_prints_empty_resume() {
    let dir = tempfile::TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    let doc = show(&state);
    assert_eq!(doc["about"]["name"], "");
    assert_eq!(doc["education"], serde_json::json!([]));
    assert_eq!(doc["skills"], serde_json::json!([]));
}

#[test]
fn test_about_merges_across_invocations() {
    let dir = tempfile::TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    resume(&state)
        .args(["about", "--name", "Ada Lovelace", "--email", "ada@example.com"])
        .assert()
        .success();
    resume(&state)
        .args(["about", "--phone", "555-0100"])
        .assert()
        .success();

    let doc = show(&state);
    assert_eq!(doc["about"]["name"], "Ada Lovelace");
    assert_eq!(doc["about"]["email"], "ada@example.com");
    assert_eq!(doc["about"]["phone"], "555-0100");
}

#[test]
fn test_education_add_update_remove() {
    let dir = tempfile::TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    let output = resume(&state)
        .args([
            "education",
            "add",
            "--institution",
            "MIT",
            "--degree",
            "BSc",
            "--field-of-study",
            "CS",
            "--start-date",
            "09/2018",
            "--end-date",
            "06/2022",
            "--location",
            "Cambridge",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = String::from_utf8(output.stdout).unwrap().trim().to_string();
    assert!(!id.is_empty());

    let doc = show(&state);
    assert_eq!(doc["education"][0]["id"], id.as_str());
    assert_eq!(doc["education"][0]["fieldOfStudy"], "CS");

    resume(&state)
        .args(["education", "update", &id, "--degree", "MSc"])
        .assert()
        .success();
    let doc = show(&state);
    assert_eq!(doc["education"].as_array().unwrap().len(), 1);
    assert_eq!(doc["education"][0]["degree"], "MSc");
    assert_eq!(doc["education"][0]["institution"], "MIT");

    resume(&state)
        .args(["education", "remove", &id])
        .assert()
        .success();
    assert_eq!(show(&state)["education"], serde_json::json!([]));
}

#[test]
fn test_update_unknown_entry_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    resume(&state)
        .args(["project", "update", "nope", "--name", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No project entry with id 'nope'"));
}

#[test]
fn test_project_technologies_are_split() {
    let dir = tempfile::TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    resume(&state)
        .args([
            "project",
            "add",
            "--name",
            "Resume builder",
            "--technologies",
            "Rust, Axum ,PostgreSQL",
        ])
        .assert()
        .success();

    let doc = show(&state);
    assert_eq!(
        doc["projects"][0]["technologies"],
        serde_json::json!(["Rust", "Axum", "PostgreSQL"])
    );
    assert_eq!(doc["projects"][0]["link"], "");
}

#[test]
fn test_skills_and_dispatch() {
    let dir = tempfile::TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    resume(&state).args(["skill", "add", "Rust"]).assert().success();
    resume(&state).args(["skill", "add", "Rust"]).assert().success();
    resume(&state).args(["skill", "add", "Go"]).assert().success();
    assert_eq!(show(&state)["skills"], serde_json::json!(["Rust", "Rust", "Go"]));

    resume(&state)
        .args(["dispatch", r#"{"type":"skills/removeSkill","payload":"Rust"}"#])
        .assert()
        .success();
    assert_eq!(show(&state)["skills"], serde_json::json!(["Go"]));

    resume(&state)
        .args(["skill", "set", "SQL", "Tokio"])
        .assert()
        .success();
    assert_eq!(show(&state)["skills"], serde_json::json!(["SQL", "Tokio"]));
}

#[test]
fn test_dispatch_rejects_unknown_action() {
    let dir = tempfile::TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    resume(&state)
        .args(["dispatch", r#"{"type":"skills/sortSkills","payload":null}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse action JSON"));
}

#[test]
fn test_corrupt_snapshot_starts_empty_and_reset_clears() {
    let dir = tempfile::TempDir::new().unwrap();
    let state = dir.path().join("state.json");
    std::fs::write(&state, "{ definitely not json").unwrap();

    assert_eq!(show(&state)["skills"], serde_json::json!([]));

    resume(&state).args(["skill", "add", "Rust"]).assert().success();
    assert!(state.exists());

    resume(&state).arg("reset").assert().success();
    assert!(!state.exists());
    assert_eq!(show(&state)["skills"], serde_json::json!([]));
}
