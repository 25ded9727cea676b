use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn newsdesk_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("NEWSDESK_DB_PATH", temp_dir.path().join("test.db"))
        // nothing listens on the discard port, so fetches fail fast
        .env("NEWSDESK_RELAY_URL", "http://127.0.0.1:9/raw")
        .env("NEWSDESK_HTTP_TIMEOUT_SECS", "5")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let temp_dir = TempDir::new().unwrap();

    newsdesk_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("refresh"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_show_help_lists_range_flags() {
    let temp_dir = TempDir::new().unwrap();

    newsdesk_cmd(&temp_dir)
        .arg("show")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--refresh"));
}

#[test]
fn test_status_without_cache() {
    let temp_dir = TempDir::new().unwrap();

    newsdesk_cmd(&temp_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No cached records"));
}

#[test]
fn test_show_with_unreachable_relay_reports_fixed_message() {
    let temp_dir = TempDir::new().unwrap();

    newsdesk_cmd(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not load news. Please try again."))
        .stdout(predicate::str::contains("No articles in the selected date range."));
}

#[test]
fn test_refresh_failure_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();

    newsdesk_cmd(&temp_dir)
        .arg("refresh")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetching news..."))
        .stdout(predicate::str::contains("Could not load news. Please try again."));
}

#[test]
fn test_show_with_invalid_dates_still_succeeds() {
    let temp_dir = TempDir::new().unwrap();

    newsdesk_cmd(&temp_dir)
        .args(["show", "--from", "yesterday", "--to", "2024-13-45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No articles in the selected date range."));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();

    newsdesk_cmd(&temp_dir)
        .arg("status")
        .env("NEWSDESK_CACHE_TTL_SECS", "an hour")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NEWSDESK_CACHE_TTL_SECS"));
}
