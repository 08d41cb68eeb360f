//! Synthetic clock entry generation.
//!
//! For every eligible day in a range this module produces three contiguous
//! clock entries: a morning block, a 30 minute lunch block and an afternoon
//! block. The work span (morning plus afternoon) is drawn between 7h20 and
//! 7h40 so that generated days look like hand-punched eight hour days.

use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{SyncError, SyncResult};
use crate::models::{Report, SyntheticEntry, WorkCalendar};

use super::eligibility::{Eligibility, SkipReason, check_eligibility};

/// Longest accepted distance between start and end date, in days.
pub const MAX_RANGE_DAYS: i64 = 31;

/// Shortest generated work span, lunch excluded (7h20).
pub const MIN_WORK_MINUTES: i64 = 440;

/// Longest generated work span, lunch excluded (7h40).
pub const MAX_WORK_MINUTES: i64 = 460;

/// Fixed lunch break length.
pub const LUNCH_MINUTES: i64 = 30;

/// A day the synthesizer did not generate entries for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDay {
    /// The skipped day.
    pub date: NaiveDate,
    /// Why it was skipped.
    #[serde(serialize_with = "serialize_reason")]
    pub reason: SkipReason,
}

/// Entries generated for a range, plus the days that were left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedEntries {
    /// Generated entries in date order, three per eligible day.
    pub entries: Vec<SyntheticEntry>,
    /// Days skipped by the calendar policy, in date order.
    pub skipped: Vec<SkippedDay>,
}

impl GeneratedEntries {
    /// Returns `true` if no entries were generated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn serialize_reason<S: serde::Serializer>(reason: &SkipReason, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(reason)
}

/// Rejects reversed ranges and ranges longer than [`MAX_RANGE_DAYS`].
pub fn validate_range(start: NaiveDate, end: NaiveDate) -> SyncResult<()> {
    if end < start {
        return Err(SyncError::InvalidRange {
            start,
            end,
            message: "end date cannot be before start date".to_string(),
        });
    }
    if (end - start).num_days() > MAX_RANGE_DAYS {
        return Err(SyncError::InvalidRange {
            start,
            end,
            message: format!("max difference between days is {} days", MAX_RANGE_DAYS),
        });
    }
    Ok(())
}

/// Generates clock entries for every eligible day in `start..end`.
///
/// The end date is never included. Days rejected by
/// [`check_eligibility`] are logged and returned in
/// [`GeneratedEntries::skipped`]; they are not errors.
///
/// # Errors
///
/// Returns [`SyncError::InvalidRange`] if `end` is before `start` or the
/// range spans more than [`MAX_RANGE_DAYS`] days.
///
/// # Example
///
/// ```
/// use hours_sync::calculation::generate_entries;
/// use hours_sync::models::{Report, WorkCalendar};
/// use chrono::NaiveDate;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// // Monday 2024-10-28 to Wednesday 2024-10-30: Monday and Tuesday only
/// let generated = generate_entries(
///     &Report::new(),
///     NaiveDate::from_ymd_opt(2024, 10, 28).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 10, 30).unwrap(),
///     &WorkCalendar::default(),
///     42,
///     &mut rng,
/// )
/// .unwrap();
///
/// assert_eq!(generated.entries.len(), 6);
/// assert!(generated.skipped.is_empty());
/// ```
pub fn generate_entries<R: Rng + ?Sized>(
    report: &Report,
    start: NaiveDate,
    end: NaiveDate,
    calendar: &WorkCalendar,
    employee_id: u32,
    rng: &mut R,
) -> SyncResult<GeneratedEntries> {
    validate_range(start, end)?;

    let mut generated = GeneratedEntries::default();

    for date in start.iter_days().take_while(|d| *d < end) {
        match check_eligibility(date, report, calendar) {
            Eligibility::Eligible => {
                generated
                    .entries
                    .extend(synthesize_day(date, employee_id, rng));
            }
            Eligibility::Skipped(reason) => {
                info!(date = %date, reason = %reason, "Skipping day");
                generated.skipped.push(SkippedDay { date, reason });
            }
        }
    }

    debug!(
        entries = generated.entries.len(),
        skipped = generated.skipped.len(),
        "Generated clock entries"
    );

    Ok(generated)
}

/// Builds the morning, lunch and afternoon entries for one day.
///
/// The day starts at a random minute between 8:00 and 9:59. The work span is
/// split in half (the morning gets the smaller half), with the lunch break
/// placed between the halves.
pub fn synthesize_day<R: Rng + ?Sized>(
    date: NaiveDate,
    employee_id: u32,
    rng: &mut R,
) -> [SyntheticEntry; 3] {
    let work_minutes = rng.gen_range(MIN_WORK_MINUTES..=MAX_WORK_MINUTES);
    let start_hour: i64 = rng.gen_range(8..=9);
    let start_minute: i64 = rng.gen_range(0..60);

    let morning_start = NaiveTime::default() + Duration::minutes(start_hour * 60 + start_minute);
    let morning_end = morning_start + Duration::minutes(work_minutes / 2);
    let lunch_end = morning_end + Duration::minutes(LUNCH_MINUTES);
    let afternoon_end = lunch_end + Duration::minutes(work_minutes - work_minutes / 2);

    let entry = |start, end| SyntheticEntry {
        employee_id,
        date,
        start,
        end,
    };

    [
        entry(morning_start, morning_end),
        entry(morning_end, lunch_end),
        entry(lunch_end, afternoon_end),
    ]
}
