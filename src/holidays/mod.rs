//! Holiday and exclusion sources.
//!
//! Anything that can produce a [`HolidayMap`] implements [`HolidayProvider`]:
//! the CSV calendar in [`CsvHolidays`], a fixed map, or a closure.
//! Employee time off fetched from BambooHR is merged in with
//! [`merge_time_off`].

mod csv_file;
mod exclusions;

pub use csv_file::{CsvHolidays, read_holidays};
pub use exclusions::parse_excluded_days;

use crate::error::SyncResult;
use crate::models::HolidayMap;

/// Something that can produce the days off for a run.
pub trait HolidayProvider {
    /// Loads the holiday map.
    fn load(&self) -> SyncResult<HolidayMap>;
}

impl HolidayProvider for HolidayMap {
    fn load(&self) -> SyncResult<HolidayMap> {
        Ok(self.clone())
    }
}

impl<F> HolidayProvider for F
where
    F: Fn() -> SyncResult<HolidayMap>,
{
    fn load(&self) -> SyncResult<HolidayMap> {
        self()
    }
}

/// Merges employee time off into public holidays.
///
/// A day that is both keeps the public holiday name.
///
/// # Example
///
/// ```
/// use hours_sync::holidays::merge_time_off;
/// use hours_sync::models::HolidayMap;
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2024, 12, 27).unwrap();
///
/// let merged = merge_time_off(
///     HolidayMap::from([(christmas, "božič".to_string())]),
///     HolidayMap::from([
///         (christmas, "timeOff".to_string()),
///         (friday, "timeOff".to_string()),
///     ]),
/// );
///
/// assert_eq!(merged[&christmas], "božič");
/// assert_eq!(merged[&friday], "timeOff");
/// ```
pub fn merge_time_off(holidays: HolidayMap, time_off: HolidayMap) -> HolidayMap {
    let mut merged = time_off;
    merged.extend(holidays);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_closure_is_a_provider() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let provider = move || -> SyncResult<HolidayMap> {
            Ok(HolidayMap::from([(day, "praznik dela".to_string())]))
        };

        let holidays = provider.load().unwrap();
        assert_eq!(holidays.len(), 1);
    }

    #[test]
    fn test_provider_errors_propagate() {
        let provider =
            || -> SyncResult<HolidayMap> { Err(crate::error::SyncError::parse("test", "boom")) };
        assert!(provider.load().is_err());
    }

    #[test]
    fn test_fixed_map_is_a_provider() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 25).unwrap();
        let holidays = HolidayMap::from([(day, "dan državnosti".to_string())]);
        assert_eq!(holidays.load().unwrap(), holidays);
    }

    #[test]
    fn test_merge_with_no_time_off_keeps_holidays() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let holidays = HolidayMap::from([(day, "praznik dela".to_string())]);
        assert_eq!(merge_time_off(holidays.clone(), HolidayMap::new()), holidays);
    }
}
