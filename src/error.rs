//! Error types for hours-sync.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine, the holiday loaders and the BambooHR client
//! can report.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for hours-sync.
///
/// All fallible operations return this error type. Skipped days during entry
/// generation are not errors; they are reported alongside the generated entries.
///
/// # Example
///
/// ```
/// use hours_sync::error::SyncError;
///
/// let error = SyncError::ConfigNotFound {
///     path: "/missing/config.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/config.json");
/// ```
#[derive(Debug, Error)]
pub enum SyncError {
    /// The requested date range is reversed or too long.
    #[error("Invalid date range {start}..{end}: {message}")]
    InvalidRange {
        /// First day of the range.
        start: NaiveDate,
        /// Exclusive end of the range.
        end: NaiveDate,
        /// Why the range was rejected.
        message: String,
    },

    /// A date, holiday row or exclusion list could not be parsed.
    #[error("Failed to parse {input}: {message}")]
    ParseError {
        /// What was being parsed (a date string, a CSV row, ...).
        input: String,
        /// A description of the parse failure.
        message: String,
    },

    /// BambooHR rejected the API key (HTTP 401).
    #[error("Invalid API key provided - BambooHR returned 401 (Unauthorized)")]
    AuthError,

    /// BambooHR rejected the request payload (HTTP 400).
    #[error("BambooHR rejected the request (400): {body}")]
    ValidationError {
        /// The response body returned by BambooHR.
        body: String,
    },

    /// BambooHR answered with another non-success status.
    #[error("BambooHR API error: status {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The response body.
        body: String,
    },

    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value is missing or invalid.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Reading a file or the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyncError {
    /// Shorthand for a [`SyncError::ParseError`].
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        SyncError::ParseError {
            input: input.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return SyncError.
pub type SyncResult<T> = Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = SyncError::ConfigNotFound {
            path: "/missing/config.json".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/config.json"
        );
    }

    #[test]
    fn test_invalid_range_displays_dates_and_message() {
        let error = SyncError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 11, 6).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 10, 25).unwrap(),
            message: "end date is before start date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range 2024-11-06..2024-10-25: end date is before start date"
        );
    }

    #[test]
    fn test_parse_error_helper() {
        let error = SyncError::parse("exclusion list '2024-01-01,'", "trailing comma");
        assert_eq!(
            error.to_string(),
            "Failed to parse exclusion list '2024-01-01,': trailing comma"
        );
    }

    #[test]
    fn test_auth_error_message() {
        assert_eq!(
            SyncError::AuthError.to_string(),
            "Invalid API key provided - BambooHR returned 401 (Unauthorized)"
        );
    }

    #[test]
    fn test_validation_error_displays_body() {
        let error = SyncError::ValidationError {
            body: "entries[0].start is invalid".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "BambooHR rejected the request (400): entries[0].start is invalid"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = SyncError::InvalidConfig {
            field: "employeeId".to_string(),
            message: "must be set".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'employeeId': must be set"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<SyncError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_auth_error() -> SyncResult<()> {
            Err(SyncError::AuthError)
        }

        fn propagates_error() -> SyncResult<()> {
            returns_auth_error()?;
            Ok(())
        }

        assert!(matches!(propagates_error(), Err(SyncError::AuthError)));
    }
}
