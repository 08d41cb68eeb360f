//! Parsing of user-excluded days.

use chrono::NaiveDate;

use crate::error::{SyncError, SyncResult};
use crate::models::ExclusionSet;

/// Parses a comma separated list of `YYYY-MM-DD` dates.
///
/// An empty string means no exclusions. Whitespace around a date is ignored.
///
/// # Errors
///
/// Returns [`SyncError::ParseError`] for a trailing comma, an empty element
/// or a date that does not parse.
///
/// # Example
///
/// ```
/// use hours_sync::holidays::parse_excluded_days;
///
/// let excluded = parse_excluded_days("2024-10-28,2024-10-29").unwrap();
/// assert_eq!(excluded.len(), 2);
///
/// assert!(parse_excluded_days("2024-10-28,").is_err());
/// ```
pub fn parse_excluded_days(input: &str) -> SyncResult<ExclusionSet> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(ExclusionSet::new());
    }
    if input.ends_with(',') {
        return Err(SyncError::parse(
            format!("excluded days '{}'", input),
            "list must not end with a comma",
        ));
    }

    input
        .split(',')
        .map(|part| {
            let part = part.trim();
            NaiveDate::parse_from_str(part, "%Y-%m-%d").map_err(|e| {
                SyncError::parse(
                    format!("excluded day '{}'", part),
                    format!("expected YYYY-MM-DD: {}", e),
                )
            })
        })
        .collect()
}
