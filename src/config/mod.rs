//! Configuration loading and management for hours-sync.
//!
//! This module loads the BambooHR credentials and run settings from a JSON or
//! YAML file, and lets command line flags override them.
//!
//! # Example
//!
//! ```no_run
//! use hours_sync::config::{ConfigLoader, ConfigOverrides};
//!
//! let config = ConfigLoader::load_or_default("config.json")
//!     .unwrap()
//!     .with_overrides(ConfigOverrides {
//!         employee_id: Some(1234),
//!         ..ConfigOverrides::default()
//!     })
//!     .into_config();
//! println!("Using {}", config.api_base_url());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, BAMBOO_GATEWAY, ConfigOverrides, DEFAULT_COMPANY_DOMAIN};
