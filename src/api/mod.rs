//! BambooHR API client.
//!
//! This module talks to the three BambooHR endpoints the tool needs:
//!
//! - `GET time_tracking/timesheet_entries` - logged hours
//! - `GET time_off/whos_out` - approved time off
//! - `POST time_tracking/clock_entries/store` - generated clock entries

mod client;
mod request;
mod response;

pub use client::BambooClient;
pub use request::{DATE_FORMAT, DateWindow, TimeEntriesPostBody};
pub use response::{TIME_OFF_LABEL, WhosOutEntry, time_off_days};
