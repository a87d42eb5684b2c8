//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn run_standin(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_standin");
    Command::new(bin)
        .args(args)
        .env_remove("STANDIN_BASE_URL")
        .output()
        .expect("failed to run standin binary")
}

#[test]
fn now_with_fixed_instant_prints_iso() {
    let output = run_standin(&["now", "--fixed", "1001-01-01T00:00:00.000Z"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.trim(), "1001-01-01T00:00:00.000Z");
}

#[test]
fn now_with_unparsable_instant_fails() {
    let output = run_standin(&["now", "--fixed", "whenever"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Invalid instant"));
}

#[test]
fn user_not_found_scenario() {
    let output = run_standin(&["user", "1", "--scenario", "not-found"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.trim(), "User was not found. Status is 404");
}

#[test]
fn user_timeout_scenario_reports_error() {
    let output = run_standin(&["user", "1", "--scenario", "timeout"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.trim(), "Error: Connection failed ETIMEDOUT");
}

#[test]
fn message_unknown_content_type_scenario() {
    let output = run_standin(&["message", "--scenario", "unknown-content-type"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(
        stdout.trim(),
        r#"{"data":{"message":"Error: Content-Type is not application/json"}}"#
    );
}

#[test]
fn message_from_profile() {
    let dir = std::env::temp_dir().join("standin_cli_profile_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("profile.yaml");
    std::fs::write(
        &path,
        "fetch:\n  headers:\n    Content-Type: application/json\n  body: '{\"data\": {\"message\": \"Hello world!\"}}'\n",
    )
    .unwrap();

    let output = run_standin(&["message", "--profile", path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.trim(), r#"{"data":{"message":"Hello world!"}}"#);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_profile_fails() {
    let output = run_standin(&["user", "1", "--profile", "/nonexistent/standin.yaml"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("failed to read profile"));
}

#[test]
fn scenarios_lists_catalogue() {
    let output = run_standin(&["scenarios"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("broken-json"));
    assert!(stdout.contains("graphql-invalid-body"));
}

#[test]
fn help_succeeds() {
    let output = run_standin(&["user", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--scenario"));
    assert!(stdout.contains("--base-url"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_standin(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
