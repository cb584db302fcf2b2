//! Application configuration
//!
//! Sources, later ones overriding earlier ones:
//! - built-in defaults
//! - `config.toml` in the working directory (optional), or an explicit file
//! - environment variables prefixed with `ROUTEMAP_`, nested keys joined
//!   with `__` (e.g. `ROUTEMAP_GEOCODING__TIMEOUT_SECS=10`)

mod sections;

use std::path::Path;

pub use application::services::RendererConfig as MapConfig;
pub use integration_geocoding::GeocodingConfig;
use serde::{Deserialize, Serialize};
pub use sections::{LocationConfig, LoggingConfig, NavigationConfig};
use tracing::debug;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ROUTEMAP";

/// Default configuration file name (extension is detected)
pub const DEFAULT_CONFIG_FILE: &str = "config";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address lookup provider
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Location updates
    #[serde(default)]
    pub location: LocationConfig,

    /// Map rendering
    #[serde(default)]
    pub map: MapConfig,

    /// Entity navigation links
    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file
    ///
    /// An explicit file must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::build(path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn build(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                config::File::from(path).required(true)
            },
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?;
        config.try_deserialize()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting, prefixed with its section.
    pub fn validate(&self) -> Result<(), String> {
        self.geocoding
            .validate()
            .map_err(|e| format!("geocoding: {e}"))?;
        self.location
            .validate()
            .map_err(|e| format!("location: {e}"))?;
        self.map.validate().map_err(|e| format!("map: {e}"))?;
        self.navigation
            .validate()
            .map_err(|e| format!("navigation: {e}"))?;
        self.logging
            .validate()
            .map_err(|e| format!("logging: {e}"))?;
        Ok(())
    }
}
