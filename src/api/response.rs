//! Response types for the BambooHR API.
//!
//! This module defines the structures returned by the `time_off/whos_out`
//! endpoint and their conversion into days off.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};
use crate::models::HolidayMap;

/// Label given to days taken off by the employee.
pub const TIME_OFF_LABEL: &str = "timeOff";

/// One entry of the "who's out" list.
///
/// Company holidays show up without an `employeeId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhosOutEntry {
    /// BambooHR id of the request or holiday.
    pub id: u64,
    /// `timeOff` or `holiday`.
    #[serde(rename = "type")]
    pub entry_type: String,
    /// The absent employee.
    #[serde(default)]
    pub employee_id: Option<u32>,
    /// Employee or holiday name.
    #[serde(default)]
    pub name: String,
    /// First day off.
    pub start: NaiveDate,
    /// Last day off, inclusive.
    pub end: NaiveDate,
}

impl WhosOutEntry {
    /// Every day from `start` through `end`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::ParseError`] when `start` is after `end`.
    pub fn days(&self) -> SyncResult<Vec<NaiveDate>> {
        if self.start > self.end {
            return Err(SyncError::parse(
                format!("time off entry {}", self.id),
                format!(
                    "entry start {} should not be after entry end {}",
                    self.start, self.end
                ),
            ));
        }
        Ok(self
            .start
            .iter_days()
            .take_while(|d| *d <= self.end)
            .collect())
    }
}

/// Collects the days off of `employee_id` from a "who's out" list.
///
/// Entries of other employees, and company holidays, are ignored.
///
/// # Example
///
/// ```
/// use hours_sync::api::{WhosOutEntry, time_off_days};
/// use chrono::NaiveDate;
///
/// let entries = vec![WhosOutEntry {
///     id: 1,
///     entry_type: "timeOff".to_string(),
///     employee_id: Some(42),
///     name: "Jane Doe".to_string(),
///     start: NaiveDate::from_ymd_opt(2024, 10, 28).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 10, 30).unwrap(),
/// }];
///
/// let days = time_off_days(&entries, 42).unwrap();
/// assert_eq!(days.len(), 3);
/// assert!(time_off_days(&entries, 7).unwrap().is_empty());
/// ```
pub fn time_off_days(entries: &[WhosOutEntry], employee_id: u32) -> SyncResult<HolidayMap> {
    let mut days = HolidayMap::new();
    for entry in entries
        .iter()
        .filter(|e| e.employee_id == Some(employee_id))
    {
        for day in entry.days()? {
            days.insert(day, TIME_OFF_LABEL.to_string());
        }
    }
    Ok(days)
}
