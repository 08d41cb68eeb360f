//! Configuration types for hours-sync.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the JSON or YAML configuration file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{SyncError, SyncResult};

/// BambooHR company subdomain used when none is configured.
pub const DEFAULT_COMPANY_DOMAIN: &str = "flaviar";

/// Root of the BambooHR REST gateway.
pub const BAMBOO_GATEWAY: &str = "https://api.bamboohr.com/api/gateway.php";

/// Per-run configuration.
///
/// Every field has a serde default so that a partial file, or no file at all
/// when command line flags supply the credentials, still yields a value.
/// Use [`AppConfig::validate`] before talking to BambooHR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// BambooHR API key.
    #[serde(default)]
    pub api_token: String,
    /// BambooHR employee id whose timesheet is synchronised.
    #[serde(default)]
    pub employee_id: u32,
    /// BambooHR company subdomain.
    #[serde(default = "default_company_domain")]
    pub company_domain: String,
    /// Full API base URL, overriding the one derived from `company_domain`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Holiday CSV file. The bundled calendar is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays_file: Option<PathBuf>,
}

fn default_company_domain() -> String {
    DEFAULT_COMPANY_DOMAIN.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            employee_id: 0,
            company_domain: default_company_domain(),
            base_url: None,
            holidays_file: None,
        }
    }
}

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces [`AppConfig::api_token`].
    pub api_token: Option<String>,
    /// Replaces [`AppConfig::employee_id`].
    pub employee_id: Option<u32>,
    /// Replaces [`AppConfig::holidays_file`].
    pub holidays_file: Option<PathBuf>,
}

impl AppConfig {
    /// Returns a copy with every set override applied.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(api_token) = overrides.api_token {
            self.api_token = api_token;
        }
        if let Some(employee_id) = overrides.employee_id {
            self.employee_id = employee_id;
        }
        if overrides.holidays_file.is_some() {
            self.holidays_file = overrides.holidays_file;
        }
        self
    }

    /// Checks that the credentials needed for BambooHR calls are present.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::InvalidConfig`] naming the first offending field.
    ///
    /// # Example
    ///
    /// ```
    /// use hours_sync::config::AppConfig;
    ///
    /// let config = AppConfig {
    ///     api_token: "secret".to_string(),
    ///     employee_id: 1234,
    ///     ..AppConfig::default()
    /// };
    /// assert!(config.validate().is_ok());
    /// assert!(AppConfig::default().validate().is_err());
    /// ```
    pub fn validate(&self) -> SyncResult<()> {
        if self.api_token.trim().is_empty() {
            return Err(SyncError::InvalidConfig {
                field: "apiToken".to_string(),
                message: "an API key is required, set it in the config file or pass --api-key"
                    .to_string(),
            });
        }
        if self.employee_id == 0 {
            return Err(SyncError::InvalidConfig {
                field: "employeeId".to_string(),
                message: "an employee id is required, set it in the config file or pass --employee-id"
                    .to_string(),
            });
        }
        if self.base_url.is_none() && self.company_domain.trim().is_empty() {
            return Err(SyncError::InvalidConfig {
                field: "companyDomain".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let Some(base_url) = &self.base_url {
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(SyncError::InvalidConfig {
                    field: "baseUrl".to_string(),
                    message: format!("'{}' is not an http(s) URL", base_url),
                });
            }
        }
        Ok(())
    }

    /// The BambooHR API base URL, without a trailing slash.
    ///
    /// # Example
    ///
    /// ```
    /// use hours_sync::config::AppConfig;
    ///
    /// assert_eq!(
    ///     AppConfig::default().api_base_url(),
    ///     "https://api.bamboohr.com/api/gateway.php/flaviar/v1"
    /// );
    /// ```
    pub fn api_base_url(&self) -> String {
        match &self.base_url {
            Some(base_url) => base_url.trim_end_matches('/').to_string(),
            None => format!("{}/{}/v1", BAMBOO_GATEWAY, self.company_domain.trim()),
        }
    }
}
