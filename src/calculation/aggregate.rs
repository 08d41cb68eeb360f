//! Report aggregation.
//!
//! Folds raw BambooHR timesheet entries into a per-day [`Report`].

use crate::models::{RawTimeEntry, Report};

/// Groups logged hours by date.
///
/// Every entry's hours are added to its day and to the report total. An empty
/// slice yields an empty report. Decimal addition is exact, so the order of
/// `entries` never changes the result.
///
/// # Example
///
/// ```
/// use hours_sync::calculation::aggregate;
/// use hours_sync::models::RawTimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
/// let entries = vec![
///     RawTimeEntry::new(42, day, Decimal::new(383, 2)),
///     RawTimeEntry::new(42, day, Decimal::new(387, 2)),
/// ];
///
/// let report = aggregate(&entries);
/// assert_eq!(report.len(), 1);
/// assert_eq!(report.total_work_hours(), Decimal::new(77, 1));
/// ```
pub fn aggregate(entries: &[RawTimeEntry]) -> Report {
    entries.iter().fold(Report::new(), |mut report, entry| {
        report.record(entry.date, entry.hours);
        report
    })
}
