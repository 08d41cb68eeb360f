//! Workday eligibility.
//!
//! Decides whether synthetic clock entries may be generated for a calendar
//! day. The rules are checked in a fixed order and the first match wins:
//! weekend, already logged, public holiday, user exclusion.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{Report, WorkCalendar};

/// Why a day was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Saturday or Sunday.
    Weekend,
    /// Hours were already logged for the day.
    AlreadyLogged,
    /// The day is in the holiday map; carries the holiday name.
    Holiday(String),
    /// The user excluded the day.
    UserExcluded,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Weekend => write!(f, "weekend"),
            SkipReason::AlreadyLogged => write!(f, "already logged"),
            SkipReason::Holiday(name) => write!(f, "holiday: {}", name),
            SkipReason::UserExcluded => write!(f, "user-excluded"),
        }
    }
}

/// The outcome of checking a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    /// Entries may be generated.
    Eligible,
    /// The day must be skipped.
    Skipped(SkipReason),
}

impl Eligibility {
    /// Returns `true` for [`Eligibility::Eligible`].
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

/// Returns `true` for Saturdays and Sundays.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Checks whether entries may be generated for `date`.
///
/// # Example
///
/// ```
/// use hours_sync::calculation::{check_eligibility, Eligibility, SkipReason};
/// use hours_sync::models::{Report, WorkCalendar};
/// use chrono::NaiveDate;
///
/// let report = Report::new();
/// let calendar = WorkCalendar::default();
///
/// // 2024-10-26 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2024, 10, 26).unwrap();
/// assert_eq!(
///     check_eligibility(saturday, &report, &calendar),
///     Eligibility::Skipped(SkipReason::Weekend)
/// );
///
/// let monday = NaiveDate::from_ymd_opt(2024, 10, 28).unwrap();
/// assert!(check_eligibility(monday, &report, &calendar).is_eligible());
/// ```
pub fn check_eligibility(date: NaiveDate, report: &Report, calendar: &WorkCalendar) -> Eligibility {
    if is_weekend(date) {
        return Eligibility::Skipped(SkipReason::Weekend);
    }
    if report.has_day(date) {
        return Eligibility::Skipped(SkipReason::AlreadyLogged);
    }
    if let Some(name) = calendar.holiday_name(date) {
        return Eligibility::Skipped(SkipReason::Holiday(name.to_string()));
    }
    if calendar.is_excluded(date) {
        return Eligibility::Skipped(SkipReason::UserExcluded);
    }
    Eligibility::Eligible
}
