//! Request types for the BambooHR API.
//!
//! This module defines the query and body structures sent to BambooHR.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::SyntheticEntry;

/// Date format used in BambooHR query strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Body of `POST time_tracking/clock_entries/store`.
///
/// # Example
///
/// ```
/// use hours_sync::api::TimeEntriesPostBody;
///
/// let body = TimeEntriesPostBody { entries: &[] };
/// assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"entries":[]}"#);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntriesPostBody<'a> {
    /// Clock entries to store.
    pub entries: &'a [SyntheticEntry],
}

/// Date window of a BambooHR query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// First day, inclusive.
    pub start: NaiveDate,
    /// Last day.
    pub end: NaiveDate,
}

impl DateWindow {
    /// Creates a window from `start` to `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Renders `start=...&end=...`.
    pub fn query(&self) -> String {
        format!(
            "start={}&end={}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }

    /// Query string of `GET time_tracking/timesheet_entries`.
    pub fn timesheet_query(&self, employee_id: u32) -> String {
        format!("employeeIds={}&{}", employee_id, self.query())
    }
}
