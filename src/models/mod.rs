//! Core data models for hours-sync.
//!
//! This module contains all the domain models used throughout the engine.

mod calendar;
mod report;
mod required_hours;
mod synthetic_entry;
mod time_entry;

pub use calendar::{ExclusionSet, HolidayMap, WorkCalendar};
pub use report::{DayReport, Report};
pub use required_hours::{MonthReport, YearReport};
pub use synthetic_entry::SyntheticEntry;
pub use time_entry::RawTimeEntry;
