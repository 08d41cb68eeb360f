//! Calculation logic for hours-sync.
//!
//! This module contains the pure parts of the tool: aggregation of fetched
//! timesheet entries into a report, the workday eligibility policy, synthetic
//! clock entry generation and the yearly required-hours baseline.

mod aggregate;
mod eligibility;
mod entry_synthesis;
mod required_hours;

pub use aggregate::aggregate;
pub use eligibility::{Eligibility, SkipReason, check_eligibility, is_weekend};
pub use entry_synthesis::{
    GeneratedEntries, LUNCH_MINUTES, MAX_RANGE_DAYS, MAX_WORK_MINUTES, MIN_WORK_MINUTES,
    SkippedDay, generate_entries, synthesize_day, validate_range,
};
pub use required_hours::{HOURS_PER_DAY, compute_required_hours, days_in_month};
