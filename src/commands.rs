//! The `list`, `add` and `required-hours` workflows.
//!
//! Each function wires the BambooHR client, the holiday sources and the
//! calculation engine together. Printing and exit codes stay in the binary.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use chrono::NaiveDate;
use rand::Rng;
use tracing::{info, warn};

use crate::api::BambooClient;
use crate::calculation::{
    GeneratedEntries, SkippedDay, aggregate, compute_required_hours, generate_entries,
    validate_range,
};
use crate::config::AppConfig;
use crate::error::{SyncError, SyncResult};
use crate::holidays::{CsvHolidays, HolidayProvider, merge_time_off};
use crate::models::{ExclusionSet, HolidayMap, Report, WorkCalendar, YearReport};
use crate::render::{render_entries, render_skipped};

/// Asks the user whether generated entries should be submitted.
pub trait Confirm {
    /// Returns `true` to submit `generated.entries`.
    fn confirm(&mut self, generated: &GeneratedEntries) -> SyncResult<bool>;
}

/// Accepts without asking (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _generated: &GeneratedEntries) -> SyncResult<bool> {
        Ok(true)
    }
}

/// Prompts on a terminal.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a prompt reading answers from `input`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
    /// A prompt on stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn confirm(&mut self, generated: &GeneratedEntries) -> SyncResult<bool> {
        ask_for_confirmation(&mut self.input, &mut self.output, generated)
    }
}

/// Lists the skipped days and the generated entries, then asks `[y/n]`
/// until a valid answer is given.
///
/// # Errors
///
/// Returns [`SyncError::Io`] if `input` is closed before an answer.
pub fn ask_for_confirmation<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    generated: &GeneratedEntries,
) -> SyncResult<bool> {
    write!(output, "{}", render_skipped(&generated.skipped))?;

    let listing = render_entries(&generated.entries);
    loop {
        write!(
            output,
            "\nGenerated work entries:\n\n{}\nAre you sure you want to populate your work hours with the generated entries listed above? [y/n] ",
            listing
        )?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Err(SyncError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no answer given to the confirmation prompt",
            )));
        }

        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(
                output,
                "You selected invalid option, retrying... Press Ctrl+c to exit"
            )?,
        }
    }
}

/// What `add` ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Every day in the range was skipped.
    NothingToAdd {
        /// The skipped days, in date order.
        skipped: Vec<SkippedDay>,
    },
    /// The user declined the generated entries.
    Declined,
    /// The entries were stored in BambooHR.
    Submitted {
        /// Number of clock entries stored.
        entries: usize,
    },
}

/// Holiday source for `config`: its CSV file, or the bundled calendar.
pub fn holiday_source(config: &AppConfig) -> CsvHolidays {
    match &config.holidays_file {
        Some(path) => CsvHolidays::new(path),
        None => CsvHolidays::bundled(),
    }
}

/// Builds the calendar for a run from public holidays, optional time off and
/// the user's excluded days.
pub fn load_calendar<P: HolidayProvider + ?Sized>(
    holidays: &P,
    time_off: Option<HolidayMap>,
    excluded: ExclusionSet,
) -> SyncResult<WorkCalendar> {
    let mut holidays = holidays.load()?;
    if let Some(time_off) = time_off {
        holidays = merge_time_off(holidays, time_off);
    }

    info!(
        holidays = holidays.len(),
        excluded = excluded.len(),
        "Loaded work calendar"
    );
    Ok(WorkCalendar::new(holidays, excluded))
}

/// Fetches logged hours between `start` and `end` and aggregates them.
pub async fn list(
    client: &BambooClient,
    employee_id: u32,
    start: NaiveDate,
    end: NaiveDate,
) -> SyncResult<Report> {
    if end < start {
        return Err(SyncError::InvalidRange {
            start,
            end,
            message: "end date cannot be before start date".to_string(),
        });
    }

    let entries = client.fetch_time_entries(employee_id, start, end).await?;
    let report = aggregate(&entries);

    info!(
        employee_id,
        days = report.len(),
        total_hours = %report.total_work_hours(),
        "Built report"
    );
    Ok(report)
}

/// Generates entries for the unlogged workdays in `start..end` and, once
/// confirmed, submits them.
///
/// Nothing is posted when generation yields no entries or the user declines.
pub async fn add<R: Rng + ?Sized>(
    client: &BambooClient,
    calendar: &WorkCalendar,
    employee_id: u32,
    start: NaiveDate,
    end: NaiveDate,
    confirm: &mut dyn Confirm,
    rng: &mut R,
) -> SyncResult<AddOutcome> {
    validate_range(start, end)?;

    let logged = client.fetch_time_entries(employee_id, start, end).await?;
    let report = aggregate(&logged);

    let start_time = Instant::now();
    let generated = generate_entries(&report, start, end, calendar, employee_id, rng)?;
    info!(
        employee_id,
        entries = generated.entries.len(),
        skipped = generated.skipped.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Generated clock entries"
    );

    if generated.is_empty() {
        return Ok(AddOutcome::NothingToAdd {
            skipped: generated.skipped,
        });
    }
    if !confirm.confirm(&generated)? {
        warn!(employee_id, "Submission declined");
        return Ok(AddOutcome::Declined);
    }

    info!(entries = generated.entries.len(), "Pushing hours to BambooHR");
    client.submit_entries(&generated.entries).await?;

    Ok(AddOutcome::Submitted {
        entries: generated.entries.len(),
    })
}

/// Computes the required hours of `year` against `holidays`.
pub fn required_hours<P: HolidayProvider + ?Sized>(
    year: i32,
    holidays: &P,
) -> SyncResult<YearReport> {
    let holidays = holidays.load()?;
    let report = compute_required_hours(year, &holidays)?;
    info!(year, work_days = report.totals().work_days, "Computed required hours");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::SkipReason;
    use crate::models::SyntheticEntry;
    use chrono::NaiveTime;
    use std::path::PathBuf;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn generated() -> GeneratedEntries {
        GeneratedEntries {
            entries: vec![SyntheticEntry {
                employee_id: 1,
                date: date("2024-10-28"),
                start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(11, 50, 0).unwrap(),
            }],
            skipped: vec![SkippedDay {
                date: date("2024-10-27"),
                reason: SkipReason::Weekend,
            }],
        }
    }

    fn ask(answers: &str) -> (SyncResult<bool>, String) {
        let mut output = Vec::new();
        let result = ask_for_confirmation(answers.as_bytes(), &mut output, &generated());
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_confirmation_accepts_yes() {
        assert!(ask("y\n").0.unwrap());
        assert!(ask("YES\n").0.unwrap());
    }

    #[test]
    fn test_confirmation_accepts_no() {
        assert!(!ask("n\n").0.unwrap());
        assert!(!ask(" No \n").0.unwrap());
    }

    #[test]
    fn test_confirmation_reasks_on_invalid_answer() {
        let (result, output) = ask("maybe\n\ny\n");
        assert!(result.unwrap());
        assert_eq!(output.matches("[y/n]").count(), 3);
        assert_eq!(output.matches("invalid option").count(), 2);
        assert!(output.contains("Date: 2024-10-28 ; Start: 08:00 ; End: 11:50"));
    }

    #[test]
    fn test_confirmation_lists_skipped_days_once_before_entries() {
        let (_, output) = ask("x\ny\n");
        let skipped = "Excluded 2024-10-27 because it's a weekend";
        assert_eq!(output.matches(skipped).count(), 1);
        assert!(output.find(skipped) < output.find("Date: 2024-10-28"));
    }

    #[test]
    fn test_confirmation_fails_on_closed_input() {
        assert!(matches!(ask("").0, Err(SyncError::Io(_))));
        assert!(matches!(ask("what\n").0, Err(SyncError::Io(_))));
    }

    #[test]
    fn test_assume_yes() {
        assert!(AssumeYes.confirm(&generated()).unwrap());
    }

    #[test]
    fn test_load_calendar_merges_time_off_under_holidays() {
        let holidays = || -> SyncResult<HolidayMap> {
            Ok(HolidayMap::from([(date("2024-12-25"), "božič".to_string())]))
        };
        let time_off = HolidayMap::from([
            (date("2024-12-25"), "timeOff".to_string()),
            (date("2024-12-27"), "timeOff".to_string()),
        ]);

        let excluded = ExclusionSet::from([date("2024-12-30")]);
        let calendar = load_calendar(&holidays, Some(time_off), excluded).unwrap();

        assert_eq!(calendar.holiday_name(date("2024-12-25")), Some("božič"));
        assert_eq!(calendar.holiday_name(date("2024-12-27")), Some("timeOff"));
        assert!(calendar.is_excluded(date("2024-12-30")));
    }

    #[test]
    fn test_load_calendar_propagates_provider_errors() {
        let holidays =
            || -> SyncResult<HolidayMap> { Err(SyncError::parse("holiday file", "unreadable")) };
        assert!(load_calendar(&holidays, None, ExclusionSet::new()).is_err());
    }

    #[test]
    fn test_holiday_source_prefers_configured_file() {
        let config = AppConfig {
            holidays_file: Some(PathBuf::from("/nonexistent/holidays.csv")),
            ..AppConfig::default()
        };
        assert!(holiday_source(&config).load().is_err());
        assert!(holiday_source(&AppConfig::default()).load().is_ok());
    }

    #[test]
    fn test_required_hours_uses_provider() {
        let holidays = || -> SyncResult<HolidayMap> {
            Ok(HolidayMap::from([(date("2024-02-08"), "Prešernov dan".to_string())]))
        };
        let report = required_hours(2024, &holidays).unwrap();
        assert_eq!(report.month("2024-02").unwrap().holidays, 1);
    }
}
