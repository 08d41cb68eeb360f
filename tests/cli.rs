//! Runs the `hours-sync` binary against a mock BambooHR.
//!
//! These tests cover what only the binary decides: the order of checks
//! before any request is made, exit codes and what is printed.

use std::io::Write;
use std::process::Output;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tempfile::NamedTempFile;
use tokio::net::TcpListener;
use tokio::process::Command;

// =============================================================================
// Test Helpers
// =============================================================================

#[derive(Clone, Default)]
struct Hits(Arc<Mutex<Vec<&'static str>>>);

impl Hits {
    fn record(&self, endpoint: &'static str) {
        self.0.lock().unwrap().push(endpoint);
    }

    fn all(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

async fn timesheet_entries(State(hits): State<Hits>) -> Response {
    hits.record("timesheet_entries");
    Json(json!([])).into_response()
}

// BambooHR answers a reversed window with 400
async fn whos_out(State(hits): State<Hits>) -> Response {
    hits.record("whos_out");
    (StatusCode::BAD_REQUEST, "start must not be after end").into_response()
}

async fn store_clock_entries(State(hits): State<Hits>) -> Response {
    hits.record("store");
    StatusCode::CREATED.into_response()
}

/// Starts the mock and writes a config file pointing at it.
async fn mock_bamboo() -> (Hits, NamedTempFile) {
    let hits = Hits::default();
    let router = Router::new()
        .route("/v1/time_tracking/timesheet_entries", get(timesheet_entries))
        .route("/v1/time_off/whos_out", get(whos_out))
        .route("/v1/time_tracking/clock_entries/store", post(store_clock_entries))
        .with_state(hits.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = json!({
        "apiToken": "test-key",
        "employeeId": 1234,
        "baseUrl": format!("http://{}/v1", addr),
    });
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(config.to_string().as_bytes()).unwrap();

    (hits, file)
}

async fn hours_sync(config: &NamedTempFile, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hours-sync"))
        .arg("--config")
        .arg(config.path())
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .await
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// add
// =============================================================================

#[tokio::test]
async fn test_add_with_reversed_range_fails_before_any_request() {
    let (hits, config) = mock_bamboo().await;

    let output = hours_sync(
        &config,
        &["add", "--start", "2024-11-06", "--end", "2024-10-25", "--yes"],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid date range 2024-11-06..2024-10-25"));
    assert!(hits.all().is_empty());
}

#[tokio::test]
async fn test_add_with_range_over_31_days_fails_before_any_request() {
    let (hits, config) = mock_bamboo().await;

    let output = hours_sync(
        &config,
        &["add", "--start", "2024-10-01", "--end", "2024-11-15", "--yes"],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid date range"));
    assert!(hits.all().is_empty());
}

#[tokio::test]
async fn test_add_time_off_failure_exits_with_holiday_code() {
    let (hits, config) = mock_bamboo().await;

    let output = hours_sync(
        &config,
        &["add", "--start", "2024-11-04", "--end", "2024-11-06", "--yes"],
    )
    .await;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(hits.all(), vec!["whos_out"]);
}

#[tokio::test]
async fn test_add_over_weekend_lists_skipped_days() {
    let (hits, config) = mock_bamboo().await;

    // Sat 09 and Sun 10, Mon 11 is the end date
    let output = hours_sync(
        &config,
        &[
            "add",
            "--start",
            "2024-11-09",
            "--end",
            "2024-11-11",
            "--yes",
            "--no-time-off",
        ],
    )
    .await;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Excluded 2024-11-09 because it's a weekend"));
    assert!(out.contains("Excluded 2024-11-10 because it's a weekend"));
    assert!(out.contains("There are no generated entries"));
    assert_eq!(hits.all(), vec!["timesheet_entries"]);
}

#[tokio::test]
async fn test_add_with_yes_lists_skipped_days_and_submits() {
    let (hits, config) = mock_bamboo().await;

    // Fri 08 worked, weekend skipped, Mon 11 is the end date
    let output = hours_sync(
        &config,
        &[
            "add",
            "--start",
            "2024-11-08",
            "--end",
            "2024-11-11",
            "--yes",
            "--no-time-off",
        ],
    )
    .await;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Excluded 2024-11-09 because it's a weekend"));
    assert!(out.contains("Successfully populated working hour entries"));
    assert_eq!(hits.all(), vec!["timesheet_entries", "store"]);
}

// =============================================================================
// required-hours
// =============================================================================

#[tokio::test]
async fn test_required_hours_prints_twelve_months() {
    let (_hits, config) = mock_bamboo().await;

    let output = hours_sync(&config, &["required-hours", "--year", "2024"]).await;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 13);
    assert!(out.lines().nth(1).unwrap().starts_with("2024 January"));
}

#[tokio::test]
async fn test_required_hours_rejects_unrepresentable_year() {
    let (_hits, config) = mock_bamboo().await;

    let output = hours_sync(&config, &["required-hours", "--year", "300000"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("year is outside the supported calendar range"));
    assert!(stdout(&output).is_empty());
}
