//! Public holiday calendars stored as semicolon separated CSV.
//!
//! The expected layout is the one published by the Slovenian statistical
//! office:
//!
//! ```text
//! DATUM;IME_PRAZNIKA;DAN_V_TEDNU;DELA_PROST_DAN;DAN;MESEC;LETO
//! 1.01.2024;novo leto;ponedeljek;da;1;1;2024
//! ```
//!
//! Only rows whose `DELA_PROST_DAN` column is `da` are days off; the others
//! are commemorative days that are still worked.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{SyncError, SyncResult};
use crate::models::HolidayMap;

use super::HolidayProvider;

const NAME_COLUMN: usize = 1;
const DAY_OFF_COLUMN: usize = 3;
const DAY_COLUMN: usize = 4;
const MONTH_COLUMN: usize = 5;
const YEAR_COLUMN: usize = 6;

const DAY_OFF_MARKER: &str = "da";

static BUNDLED_CALENDAR: &str = include_str!("../../data/slovenian_public_work_off_days.csv");

#[derive(Debug, Clone)]
enum Source {
    File(PathBuf),
    Bundled,
}

/// A [`HolidayProvider`] backed by a holiday CSV file.
///
/// # Example
///
/// ```
/// use hours_sync::holidays::{CsvHolidays, HolidayProvider};
/// use chrono::NaiveDate;
///
/// let holidays = CsvHolidays::bundled().load().unwrap();
/// let christmas = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// assert_eq!(holidays.get(&christmas).map(String::as_str), Some("božič"));
/// ```
#[derive(Debug, Clone)]
pub struct CsvHolidays {
    source: Source,
}

impl CsvHolidays {
    /// Reads holidays from the CSV file at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            source: Source::File(path.into()),
        }
    }

    /// Uses the Slovenian calendar compiled into the binary.
    pub fn bundled() -> Self {
        Self {
            source: Source::Bundled,
        }
    }

    fn open(path: &Path) -> SyncResult<File> {
        File::open(path).map_err(|e| {
            SyncError::parse(
                format!("holiday file '{}'", path.display()),
                format!("unable to open file: {}", e),
            )
        })
    }
}

impl HolidayProvider for CsvHolidays {
    fn load(&self) -> SyncResult<HolidayMap> {
        match &self.source {
            Source::File(path) => {
                debug!(path = %path.display(), "Loading holiday calendar");
                read_holidays(Self::open(path)?)
            }
            Source::Bundled => read_holidays(BUNDLED_CALENDAR.as_bytes()),
        }
    }
}

/// Parses a holiday CSV into a [`HolidayMap`].
///
/// The header row is required and skipped. Rows that are not days off are
/// left out.
///
/// # Errors
///
/// Returns [`SyncError::ParseError`] when the header is missing, a row has the
/// wrong number of columns, or a row's day, month or year is not a valid date.
pub fn read_holidays<R: Read>(reader: R) -> SyncResult<HolidayMap> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| SyncError::parse("holiday header row", e.to_string()))?;
    if headers.len() <= YEAR_COLUMN {
        return Err(SyncError::parse(
            "holiday header row",
            format!("expected at least {} columns", YEAR_COLUMN + 1),
        ));
    }

    let mut holidays = HolidayMap::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| SyncError::parse("holiday row", e.to_string()))?;
        let line = record.position().map_or(0, |p| p.line());

        if !is_day_off(&record[DAY_OFF_COLUMN]) {
            continue;
        }

        let date = parse_row_date(&record).ok_or_else(|| {
            SyncError::parse(
                format!("holiday row on line {}", line),
                format!(
                    "invalid date {}.{}.{}",
                    &record[DAY_COLUMN], &record[MONTH_COLUMN], &record[YEAR_COLUMN]
                ),
            )
        })?;

        holidays.insert(date, record[NAME_COLUMN].trim().to_string());
    }

    Ok(holidays)
}

fn is_day_off(flag: &str) -> bool {
    flag.trim().eq_ignore_ascii_case(DAY_OFF_MARKER)
}

fn parse_row_date(record: &csv::StringRecord) -> Option<NaiveDate> {
    let day = record[DAY_COLUMN].trim().parse().ok()?;
    let month = record[MONTH_COLUMN].trim().parse().ok()?;
    let year = record[YEAR_COLUMN].trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
