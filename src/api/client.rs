//! HTTP client for the BambooHR time tracking API.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::error::{SyncError, SyncResult};
use crate::models::{HolidayMap, RawTimeEntry, SyntheticEntry};

use super::request::{DateWindow, TimeEntriesPostBody};
use super::response::{WhosOutEntry, time_off_days};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// BambooHR API client.
///
/// Authenticates with HTTP basic auth, the API key as user name and `x` as
/// password. Every non-success status is turned into a [`SyncError`]:
/// 401 into [`SyncError::AuthError`], 400 into [`SyncError::ValidationError`]
/// and anything else into [`SyncError::Api`].
///
/// # Example
///
/// ```no_run
/// use hours_sync::api::BambooClient;
/// use chrono::NaiveDate;
///
/// # async fn run() -> hours_sync::error::SyncResult<()> {
/// let client = BambooClient::new(
///     "https://api.bamboohr.com/api/gateway.php/flaviar/v1",
///     "api-key",
/// )?;
/// let start = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 10, 31).unwrap();
/// let entries = client.fetch_time_entries(1234, start, end).await?;
/// println!("{} entries", entries.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BambooClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl BambooClient {
    /// Creates a client for `base_url` (e.g. `.../gateway.php/{company}/v1`).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> SyncResult<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url: String = base_url.into();

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Creates a client from a validated configuration.
    pub fn from_config(config: &AppConfig) -> SyncResult<Self> {
        config.validate()?;
        Self::new(config.api_base_url(), config.api_token.clone())
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path_and_query: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path_and_query);
        debug!(%method, %url, "BambooHR request");
        self.http
            .request(method, url)
            .basic_auth(&self.api_key, Some("x"))
            .header(ACCEPT, "application/json")
    }

    async fn send(&self, request: RequestBuilder) -> SyncResult<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %body, "BambooHR request failed");

        Err(match status {
            StatusCode::UNAUTHORIZED => SyncError::AuthError,
            StatusCode::BAD_REQUEST => SyncError::ValidationError { body },
            _ => SyncError::Api {
                status: status.as_u16(),
                body,
            },
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
        what: &str,
    ) -> SyncResult<T> {
        let response = self.send(self.request(Method::GET, path_and_query)).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SyncError::parse(what, e.to_string()))
    }

    /// Fetches the logged timesheet entries of `employee_id` between `start`
    /// and `end`.
    pub async fn fetch_time_entries(
        &self,
        employee_id: u32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> SyncResult<Vec<RawTimeEntry>> {
        let query = DateWindow::new(start, end).timesheet_query(employee_id);
        let entries: Vec<RawTimeEntry> = self
            .get_json(
                &format!("time_tracking/timesheet_entries?{}", query),
                "timesheet entries response",
            )
            .await?;

        debug!(count = entries.len(), "Fetched timesheet entries");
        Ok(entries)
    }

    /// Fetches the days `employee_id` has off between `start` and `end`,
    /// each labelled `timeOff`.
    pub async fn fetch_time_off(
        &self,
        employee_id: u32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> SyncResult<HolidayMap> {
        let query = DateWindow::new(start, end).query();
        let entries: Vec<WhosOutEntry> = self
            .get_json(&format!("time_off/whos_out?{}", query), "who's out response")
            .await?;

        let days = time_off_days(&entries, employee_id)?;
        debug!(count = days.len(), "Fetched time off");
        Ok(days)
    }

    /// Stores generated clock entries.
    pub async fn submit_entries(&self, entries: &[SyntheticEntry]) -> SyncResult<()> {
        let request = self
            .request(Method::POST, "time_tracking/clock_entries/store")
            .json(&TimeEntriesPostBody { entries });

        let response = self.send(request).await?;
        debug!(
            status = response.status().as_u16(),
            count = entries.len(),
            "Stored clock entries"
        );
        Ok(())
    }
}
