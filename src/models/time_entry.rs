//! Time entry model as returned by the BambooHR timesheet API.
//!
//! This module defines [`RawTimeEntry`], the only input the report aggregator
//! consumes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A logged timesheet entry fetched from BambooHR.
///
/// Only `employee_id`, `date` and `hours` are used by the engine; the other
/// fields are kept so that fetched entries can be logged and inspected.
///
/// # Example
///
/// ```
/// use hours_sync::models::RawTimeEntry;
/// use rust_decimal::Decimal;
///
/// let json = r#"{"id": 17, "employeeId": 42, "type": "clock", "date": "2024-11-05", "hours": 7.7}"#;
/// let entry: RawTimeEntry = serde_json::from_str(json).unwrap();
/// assert_eq!(entry.employee_id, 42);
/// assert_eq!(entry.hours, Decimal::new(77, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimeEntry {
    /// BambooHR id of the timesheet entry.
    #[serde(default)]
    pub id: Option<u64>,
    /// The employee the hours belong to.
    pub employee_id: u32,
    /// Entry kind reported by BambooHR (e.g. "clock", "hour").
    #[serde(default, rename = "type")]
    pub entry_type: Option<String>,
    /// The calendar day the hours were worked on.
    pub date: NaiveDate,
    /// Worked hours in decimal form (7.5 = 7h30).
    #[serde(default, deserialize_with = "null_as_zero")]
    pub hours: Decimal,
    /// Whether a manager approved the entry.
    #[serde(default)]
    pub approved: bool,
}

impl RawTimeEntry {
    /// Creates an entry with only the fields the engine needs.
    pub fn new(employee_id: u32, date: NaiveDate, hours: Decimal) -> Self {
        Self {
            id: None,
            employee_id,
            entry_type: None,
            date,
            hours,
            approved: false,
        }
    }
}

// Clock entries that are still open come back with `"hours": null`.
fn null_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}
