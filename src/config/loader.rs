//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the per-run
//! configuration from a JSON or YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{SyncError, SyncResult};

use super::types::{AppConfig, ConfigOverrides};

/// File formats understood by the loader, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

/// Loads and provides access to the run configuration.
///
/// A `.yaml` or `.yml` file is read as YAML, anything else as JSON. Keys are
/// camelCase in both formats:
///
/// ```text
/// {"apiToken": "...", "employeeId": 1234}
/// ```
///
/// # Example
///
/// ```no_run
/// use hours_sync::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("config.json")?;
/// println!("Employee: {}", loader.config().employee_id);
/// # Ok::<(), hours_sync::error::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    source: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loads configuration from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::ConfigNotFound`] when the file cannot be read and
    /// [`SyncError::ConfigParseError`] when its content is not valid.
    pub fn load<P: AsRef<Path>>(path: P) -> SyncResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| SyncError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, Format::from_path(path)).map_err(|message| {
            SyncError::ConfigParseError {
                path: path_str,
                message,
            }
        })?;

        debug!(path = %path.display(), employee_id = config.employee_id, "Loaded configuration");

        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// Like [`ConfigLoader::load`], but a missing file yields the defaults.
    ///
    /// Lets command line flags stand in for the whole file. A file that
    /// exists but does not parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> SyncResult<Self> {
        match Self::load(path.as_ref()) {
            Err(SyncError::ConfigNotFound { path }) => {
                debug!(path = %path, "No configuration file, using defaults");
                Ok(Self {
                    config: AppConfig::default(),
                    source: None,
                })
            }
            other => other,
        }
    }

    /// Parses configuration text in the given format.
    fn parse(content: &str, format: Format) -> Result<AppConfig, String> {
        match format {
            Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Applies command line overrides on top of the loaded values.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.config = self.config.with_overrides(overrides);
        self
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// The file the configuration came from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
