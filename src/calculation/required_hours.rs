//! Required working-hour baselines.
//!
//! Computes, for each month of a year, how many weekdays there are, how many
//! of them are public holidays and the resulting contractual hours at eight
//! hours per day.

use chrono::NaiveDate;

use crate::error::{SyncError, SyncResult};
use crate::models::{HolidayMap, MonthReport, YearReport};

use super::eligibility::is_weekend;

/// Contractual hours per working day.
pub const HOURS_PER_DAY: u32 = 8;

/// Number of days in `month` of `year`, leap years included.
///
/// Returns 0 for a month outside 1..=12.
///
/// # Example
///
/// ```
/// use hours_sync::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2025, 2), 28);
/// assert_eq!(days_in_month(2024, 12), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.map_or(0, |next| (next - first).num_days() as u32)
}

/// Computes the per-month baseline for `year`.
///
/// Weekends never count. A weekday present in `holidays` counts as a holiday
/// instead of a work day. Holidays falling on weekends are ignored, as are
/// holidays from other years. The report always contains all twelve months.
///
/// # Errors
///
/// Returns [`SyncError::ParseError`] for a year outside the range the
/// calendar can represent.
///
/// # Example
///
/// ```
/// use hours_sync::calculation::compute_required_hours;
/// use hours_sync::models::{HolidayMap, MonthReport};
/// use chrono::NaiveDate;
///
/// let holidays = HolidayMap::from([(
///     NaiveDate::from_ymd_opt(2024, 2, 8).unwrap(),
///     "Prešernov dan".to_string(),
/// )]);
///
/// let report = compute_required_hours(2024, &holidays).unwrap();
/// assert_eq!(report.len(), 12);
/// assert_eq!(
///     report.month("2024-02"),
///     Some(&MonthReport {
///         work_days: 20,
///         holidays: 1,
///         work_hours: 160,
///         total_holiday_hours: 8,
///         total_hours: 168,
///     })
/// );
/// ```
pub fn compute_required_hours(year: i32, holidays: &HolidayMap) -> SyncResult<YearReport> {
    let unsupported =
        || SyncError::parse(year.to_string(), "year is outside the supported calendar range");

    // December needs the first day of the following year
    year.checked_add(1)
        .and_then(|next| NaiveDate::from_ymd_opt(next, 1, 1))
        .ok_or_else(unsupported)?;

    let mut report = YearReport::new(year);

    for month in 1..=12 {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(unsupported)?;

        let (total_days, holiday_days) = first
            .iter_days()
            .take(days_in_month(year, month) as usize)
            .filter(|d| !is_weekend(*d))
            .fold((0u32, 0u32), |(total, hols), d| {
                (total + 1, hols + u32::from(holidays.contains_key(&d)))
            });

        let work_days = total_days - holiday_days;
        report.insert(
            first.format("%Y-%m").to_string(),
            MonthReport {
                work_days,
                holidays: holiday_days,
                work_hours: work_days * HOURS_PER_DAY,
                total_holiday_hours: holiday_days * HOURS_PER_DAY,
                total_hours: total_days * HOURS_PER_DAY,
            },
        );
    }

    Ok(report)
}
