//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.
//! Configuration only picks defaults (initial format, log location); it
//! never changes what the templates emit.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::error::Result;
use crate::types::Format;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Format selected at startup
    pub initial_format: Format,
    /// Directory for the diagnostics log file, if logging is possible
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            initial_format: Format::default(),
            log_dir: default_log_dir(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        // Initial format selection, e.g. QUOTEFLOW_FORMAT=wholesale
        if let Ok(format) = env::var("QUOTEFLOW_FORMAT") {
            config.initial_format = format.parse()?;
        }

        // Log directory override, tilde-expanded
        if let Ok(dir) = env::var("QUOTEFLOW_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(shellexpand::tilde(&dir).to_string()));
        }

        Ok(config)
    }
}

/// Default diagnostics location: `<platform data dir>/quoteflow/logs`.
fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("quoteflow").join("logs"))
}
