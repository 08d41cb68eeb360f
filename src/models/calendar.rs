//! Holiday and exclusion calendars.
//!
//! This module contains the [`HolidayMap`] and [`ExclusionSet`] types and the
//! [`WorkCalendar`] that bundles them for a single run.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

/// Days off keyed by date, with the holiday (or time-off) name as value.
pub type HolidayMap = BTreeMap<NaiveDate, String>;

/// Days the user asked to skip (PTO, collective leave, ...).
pub type ExclusionSet = BTreeSet<NaiveDate>;

/// The read-only calendar a generation run is evaluated against.
///
/// # Example
///
/// ```
/// use hours_sync::models::{HolidayMap, ExclusionSet, WorkCalendar};
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// let pto = NaiveDate::from_ymd_opt(2024, 12, 27).unwrap();
///
/// let calendar = WorkCalendar::new(
///     HolidayMap::from([(christmas, "božič".to_string())]),
///     ExclusionSet::from([pto]),
/// );
///
/// assert_eq!(calendar.holiday_name(christmas), Some("božič"));
/// assert!(calendar.is_excluded(pto));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkCalendar {
    holidays: HolidayMap,
    excluded: ExclusionSet,
}

impl WorkCalendar {
    /// Creates a calendar from a holiday map and a set of excluded days.
    pub fn new(holidays: HolidayMap, excluded: ExclusionSet) -> Self {
        Self { holidays, excluded }
    }

    /// Returns the holiday name if `date` is a day off.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }

    /// Returns `true` if the user excluded `date`.
    pub fn is_excluded(&self, date: NaiveDate) -> bool {
        self.excluded.contains(&date)
    }

    /// The holiday map.
    pub fn holidays(&self) -> &HolidayMap {
        &self.holidays
    }

    /// The excluded days.
    pub fn excluded(&self) -> &ExclusionSet {
        &self.excluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_calendar_is_empty() {
        let calendar = WorkCalendar::default();
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(calendar.holiday_name(day), None);
        assert!(!calendar.is_excluded(day));
        assert!(calendar.holidays().is_empty());
        assert!(calendar.excluded().is_empty());
    }

    #[test]
    fn test_holiday_is_not_an_exclusion() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 8).unwrap();
        let calendar = WorkCalendar::new(
            HolidayMap::from([(day, "Prešernov dan".to_string())]),
            ExclusionSet::new(),
        );
        assert_eq!(calendar.holiday_name(day), Some("Prešernov dan"));
        assert!(!calendar.is_excluded(day));
    }
}
