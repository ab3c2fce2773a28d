//! Offline checks of the `farmtrack` binary
//!
//! Every command here either never reaches the network or is pointed at a
//! closed local port.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const UNREACHABLE_API: &str = "http://127.0.0.1:9/api";

fn farmtrack(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("farmtrack").unwrap();
    cmd.env("FARM_TRACKER_HOME", home.path())
        .env("FARM_TRACKER_API_URL", UNREACHABLE_API)
        .env_remove("FARM_TRACKER_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    farmtrack(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("livestock"));
}

#[test]
fn config_shows_paths_and_api_url() {
    let home = TempDir::new().unwrap();
    farmtrack(&home)
        .env_remove("FARM_TRACKER_API_URL")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:5001/api"))
        .stdout(predicate::str::contains("Saved login: none"));
}

#[test]
fn api_url_flag_overrides_settings() {
    let home = TempDir::new().unwrap();
    farmtrack(&home)
        .args(["--api-url", "http://farm.example/api", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://farm.example/api"));
}

#[test]
fn zero_and_negative_amounts_are_rejected_before_any_request() {
    let home = TempDir::new().unwrap();
    for amount in ["0", "-5"] {
        farmtrack(&home)
            .args(["expense", "add", amount, "--category", "Feed"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Amount must be greater than 0"));
    }
}

#[test]
fn missing_category_is_rejected() {
    let home = TempDir::new().unwrap();
    farmtrack(&home)
        .args(["revenue", "add", "100", "--source", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in all required fields"));
}

#[test]
fn livestock_quantity_must_be_positive() {
    let home = TempDir::new().unwrap();
    farmtrack(&home)
        .args(["livestock", "add", "cattle", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quantity must be greater than 0"));
}

#[test]
fn invalid_budget_is_rejected() {
    let home = TempDir::new().unwrap();
    farmtrack(&home)
        .args(["budget", "set", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid budget amount"));
}

#[test]
fn short_password_is_rejected() {
    let home = TempDir::new().unwrap();
    farmtrack(&home)
        .args(["register", "meadow", "m@farm.test", "--password", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Password must be at least 6 characters"));
}

#[test]
fn dashboard_requires_login() {
    let home = TempDir::new().unwrap();
    farmtrack(&home)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn dashboard_rejects_bad_date() {
    let home = TempDir::new().unwrap();
    farmtrack(&home)
        .args(["dashboard", "--date", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date 'someday'"));
}

#[test]
fn livestock_delete_is_not_available() {
    let home = TempDir::new().unwrap();
    farmtrack(&home)
        .args(["livestock", "delete", "liv-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Livestock delete is not available yet"));
}

#[test]
fn logout_without_session_succeeds() {
    let home = TempDir::new().unwrap();
    farmtrack(&home)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));
}

#[test]
fn login_against_unreachable_api_fails() {
    let home = TempDir::new().unwrap();
    farmtrack(&home)
        .args(["login", "meadow", "--password", "pasture"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not reach the farm API"));

    assert!(!home.path().join("session.json").exists());
}

#[test]
fn logout_discards_unreadable_session_file() {
    let home = TempDir::new().unwrap();
    let session_file = home.path().join("session.json");
    std::fs::write(&session_file, "{not json").unwrap();

    farmtrack(&home)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    assert!(!session_file.exists());
}

#[test]
fn saved_session_with_unreachable_api_reports_connection_failure() {
    let home = TempDir::new().unwrap();
    let saved = format!(
        r#"{{"api_base_url": "{}", "cookie": "session=abc123", "username": "meadow"}}"#,
        UNREACHABLE_API
    );
    std::fs::write(home.path().join("session.json"), saved).unwrap();

    farmtrack(&home)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not reach the farm API"))
        .stderr(predicate::str::contains("Not logged in").not());
}

#[test]
fn failures_are_shown_as_error_notifications() {
    let home = TempDir::new().unwrap();
    farmtrack(&home)
        .args(["expense", "add", "0", "--category", "Feed"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("[x] Amount must be greater than 0"))
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn corrupt_settings_file_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.json"), "{not json").unwrap();

    farmtrack(&home)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[x] Could not load settings"));
}

#[test]
fn logs_are_plain_text_when_stderr_is_not_a_terminal() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("session.json"), "{not json").unwrap();

    farmtrack(&home)
        .env("FARM_TRACKER_LOG", "warn")
        .arg("logout")
        .assert()
        .success()
        .stderr(predicate::str::contains("discarding unreadable saved session"))
        .stderr(predicate::str::contains("\x1b[").not());
}
