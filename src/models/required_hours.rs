//! Required working-hour baselines.
//!
//! [`YearReport`] is produced by [`crate::calculation::compute_required_hours`]
//! and holds one [`MonthReport`] per calendar month.

use std::collections::BTreeMap;

use serde::Serialize;

/// Working days and hours for one month.
///
/// All hour values are whole days multiplied by eight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthReport {
    /// Weekdays that are not holidays.
    pub work_days: u32,
    /// Weekdays that are holidays.
    pub holidays: u32,
    /// `work_days * 8`.
    pub work_hours: u32,
    /// `holidays * 8`.
    pub total_holiday_hours: u32,
    /// All weekdays of the month times eight.
    pub total_hours: u32,
}

/// Month reports for a full year, keyed by `"YYYY-MM"`.
///
/// A report built by the calculator always holds exactly twelve months.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct YearReport {
    /// The year the report covers.
    pub year: i32,
    months: BTreeMap<String, MonthReport>,
}

impl YearReport {
    /// Creates an empty report for `year`.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            months: BTreeMap::new(),
        }
    }

    /// Stores the report for a `"YYYY-MM"` month key.
    pub fn insert(&mut self, month: String, report: MonthReport) {
        self.months.insert(month, report);
    }

    /// Looks up a month by its `"YYYY-MM"` key.
    pub fn month(&self, key: &str) -> Option<&MonthReport> {
        self.months.get(key)
    }

    /// Iterates months in calendar order.
    pub fn months(&self) -> impl Iterator<Item = (&str, &MonthReport)> {
        self.months.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of months in the report.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Returns `true` if the report has no months.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Sum of all month reports.
    pub fn totals(&self) -> MonthReport {
        self.months
            .values()
            .fold(MonthReport::default(), |acc, m| MonthReport {
                work_days: acc.work_days + m.work_days,
                holidays: acc.holidays + m.holidays,
                work_hours: acc.work_hours + m.work_hours,
                total_holiday_hours: acc.total_holiday_hours + m.total_holiday_hours,
                total_hours: acc.total_hours + m.total_hours,
            })
    }
}
