//! Plain-text rendering of reports and generated entries.
//!
//! Every function returns a `String`; printing is left to the caller.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::api::TIME_OFF_LABEL;
use crate::calculation::{SkipReason, SkippedDay};
use crate::models::{Report, SyntheticEntry, YearReport};

const COLUMN_PADDING: usize = 5;

/// Formats decimal hours as `"H hours and M minutes"`.
///
/// Minutes are rounded to the nearest whole minute.
///
/// # Example
///
/// ```
/// use hours_sync::render::format_decimal_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_decimal_hours(Decimal::new(75, 1)), "7 hours and 30 minutes");
/// assert_eq!(format_decimal_hours(Decimal::ZERO), "0 hours and 0 minutes");
/// ```
pub fn format_decimal_hours(hours: Decimal) -> String {
    let total_minutes = (hours * Decimal::from(60)).round().to_i64().unwrap_or(0);
    format!(
        "{} hours and {} minutes",
        total_minutes / 60,
        total_minutes % 60
    )
}

/// Renders the logged hours per day followed by the total.
pub fn render_report(report: &Report) -> String {
    let mut table = Table::new(&["Date", "Weekday", "Total"]);
    for day in report.days() {
        table.row(vec![
            day.date.to_string(),
            day.date.format("%A").to_string(),
            format_decimal_hours(day.work_hours),
        ]);
    }

    format!(
        "{}\nYour total working hours: {}\n",
        table.render(),
        format_decimal_hours(report.total_work_hours())
    )
}

/// Renders the required hours of every month of a year.
pub fn render_year_report(report: &YearReport) -> String {
    let mut table = Table::new(&[
        "Month",
        "Work Days",
        "Work Hours",
        "Holidays",
        "Holiday Hours",
        "Total",
    ]);
    for (key, month) in report.months() {
        table.row(vec![
            month_label(key),
            format!("{} days", month.work_days),
            format!("{}h", month.work_hours),
            format!("{} days", month.holidays),
            format!("{}h", month.total_holiday_hours),
            format!("{}h", month.total_hours),
        ]);
    }
    table.render()
}

/// Lists generated entries, one per line.
pub fn render_entries(entries: &[SyntheticEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            format!(
                "Date: {} ; Start: {} ; End: {}\n",
                e.date,
                e.start.format("%H:%M"),
                e.end.format("%H:%M")
            )
        })
        .collect()
}

/// Explains each skipped day, one per line.
pub fn render_skipped(skipped: &[SkippedDay]) -> String {
    skipped
        .iter()
        .map(|day| {
            let because = match &day.reason {
                SkipReason::Weekend => "it's a weekend".to_string(),
                SkipReason::AlreadyLogged => "hours were already logged for this day".to_string(),
                SkipReason::Holiday(name) if name == TIME_OFF_LABEL => {
                    "you have time off".to_string()
                }
                SkipReason::Holiday(name) => format!("it's a public holiday - {}", name),
                SkipReason::UserExcluded => "you excluded it".to_string(),
            };
            format!("Excluded {} because {}\n", day.date, because)
        })
        .collect()
}

// "2024-02" -> "2024 February"
fn month_label(key: &str) -> String {
    NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d")
        .map(|d| d.format("%Y %B").to_string())
        .unwrap_or_else(|_| key.to_string())
}

/// Left-aligned text columns separated by at least [`COLUMN_PADDING`] spaces.
struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(headers: &[&str]) -> Self {
        Self {
            rows: vec![headers.iter().map(|h| h.to_string()).collect()],
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn render(&self) -> String {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|i| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        for row in &self.rows {
            let mut line = String::new();
            for (cell, width) in row.iter().zip(&widths) {
                line.push_str(&format!("{:<w$}", cell, w = width + COLUMN_PADDING));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
