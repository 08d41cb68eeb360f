//! Logged-hours report models.
//!
//! [`Report`] is built by [`crate::calculation::aggregate`] and consumed by the
//! entry synthesizer and the table renderer.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Total logged hours for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    /// The day the hours were logged for.
    pub date: NaiveDate,
    /// Sum of all entries logged on this day.
    pub work_hours: Decimal,
}

/// Logged hours grouped by day.
///
/// Days are kept in date order, so iterating a report always yields the
/// oldest day first. The total always equals the sum of the day totals.
///
/// # Example
///
/// ```
/// use hours_sync::models::Report;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut report = Report::new();
/// let day = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
/// report.record(day, Decimal::new(4, 0));
/// report.record(day, Decimal::new(35, 1));
///
/// assert!(report.has_day(day));
/// assert_eq!(report.day(day).unwrap().work_hours, Decimal::new(75, 1));
/// assert_eq!(report.total_work_hours(), Decimal::new(75, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    days: BTreeMap<NaiveDate, DayReport>,
    total_work_hours: Decimal,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `hours` to the given day, creating the day if needed.
    pub fn record(&mut self, date: NaiveDate, hours: Decimal) {
        self.days
            .entry(date)
            .or_insert_with(|| DayReport {
                date,
                work_hours: Decimal::ZERO,
            })
            .work_hours += hours;
        self.total_work_hours += hours;
    }

    /// Returns `true` if hours were logged on `date`.
    pub fn has_day(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Returns the report for a single day, if any hours were logged on it.
    pub fn day(&self, date: NaiveDate) -> Option<&DayReport> {
        self.days.get(&date)
    }

    /// Iterates over the logged days in date order.
    pub fn days(&self) -> impl Iterator<Item = &DayReport> {
        self.days.values()
    }

    /// Number of days with logged hours.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if no hours were logged at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Sum of all logged hours.
    pub fn total_work_hours(&self) -> Decimal {
        self.total_work_hours
    }
}
