//! Generated clock entries.
//!
//! A [`SyntheticEntry`] is a clock-in/clock-out pair submitted to BambooHR for
//! a day that had no logged hours. It serializes exactly as the
//! `clock_entries/store` endpoint expects.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A generated clock entry with minute precision.
///
/// # Example
///
/// ```
/// use hours_sync::models::SyntheticEntry;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let entry = SyntheticEntry {
///     employee_id: 42,
///     date: NaiveDate::from_ymd_opt(2024, 10, 28).unwrap(),
///     start: NaiveTime::from_hms_opt(8, 15, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(12, 5, 0).unwrap(),
/// };
///
/// assert_eq!(entry.duration_minutes(), 230);
/// assert_eq!(
///     serde_json::to_string(&entry).unwrap(),
///     r#"{"employeeId":42,"date":"2024-10-28","start":"08:15","end":"12:05"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticEntry {
    /// The employee the entry is created for.
    pub employee_id: u32,
    /// The day of the entry.
    pub date: NaiveDate,
    /// Clock-in time.
    #[serde(with = "hh_mm")]
    pub start: NaiveTime,
    /// Clock-out time.
    #[serde(with = "hh_mm")]
    pub end: NaiveTime,
}

impl SyntheticEntry {
    /// Length of the entry in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// `HH:MM` (de)serialization for [`NaiveTime`].
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(start: (u32, u32), end: (u32, u32)) -> SyntheticEntry {
        SyntheticEntry {
            employee_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 10, 28).unwrap(),
            start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        }
    }

    #[test]
    fn test_duration_minutes() {
        assert_eq!(entry((8, 0), (8, 30)).duration_minutes(), 30);
        assert_eq!(entry((9, 59), (13, 49)).duration_minutes(), 230);
    }

    #[test]
    fn test_serializes_times_without_seconds() {
        let json = serde_json::to_value(entry((9, 5), (12, 55))).unwrap();
        assert_eq!(json["start"], "09:05");
        assert_eq!(json["end"], "12:55");
        assert_eq!(json["date"], "2024-10-28");
        assert_eq!(json["employeeId"], 1);
    }

    #[test]
    fn test_deserializes_hh_mm() {
        let json = r#"{"employeeId":1,"date":"2024-10-28","start":"13:25","end":"17:15"}"#;
        let parsed: SyntheticEntry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, entry((13, 25), (17, 15)));
    }

    #[test]
    fn test_deserialize_rejects_bad_time() {
        let json = r#"{"employeeId":1,"date":"2024-10-28","start":"1325","end":"17:15"}"#;
        assert!(serde_json::from_str::<SyntheticEntry>(json).is_err());
    }
}
