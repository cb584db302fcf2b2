//! Location, navigation and logging configuration sections

use std::time::Duration;

use serde::{Deserialize, Serialize};

// ==============================
// Location Configuration
// ==============================

/// Location update settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Upper bound for a single address lookup, in seconds
    #[serde(default = "default_lookup_timeout_secs")]
    pub lookup_timeout_secs: u64,
}

const fn default_lookup_timeout_secs() -> u64 {
    10
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_secs: default_lookup_timeout_secs(),
        }
    }
}

impl LocationConfig {
    #[must_use]
    pub const fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.lookup_timeout_secs == 0 {
            return Err("lookup_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

// ==============================
// Navigation Configuration
// ==============================

/// Where entity detail links point to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Base URL of the application showing entity details
    #[serde(default = "default_navigation_base_url")]
    pub base_url: String,
}

fn default_navigation_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            base_url: default_navigation_base_url(),
        }
    }
}

impl NavigationConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an http(s) URL.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!("base_url must be an http(s) URL, got {:?}", self.base_url));
        }
        Ok(())
    }
}

// ==============================
// Logging Configuration
// ==============================

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "routemap=debug,integration_geocoding=trace")
    ///
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the filter cannot be parsed.
    pub fn validate(&self) -> Result<(), String> {
        tracing_subscriber::EnvFilter::try_new(&self.filter)
            .map(|_| ())
            .map_err(|e| format!("invalid filter {:?}: {e}", self.filter))
    }
}
