//! Geocoding service configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of the Nominatim-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `key` parameter (not needed by the public Nominatim)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Cache TTL in hours (0 disables the cache, every lookup hits the provider)
    #[serde(default)]
    pub cache_ttl_hours: u64,

    /// Country code filter (e.g. "gb"); empty searches worldwide
    #[serde(default)]
    pub country_filter: String,

    /// Minimum delay between two requests in milliseconds (0 disables)
    #[serde(default = "default_min_request_interval_ms")]
    pub min_request_interval_ms: u64,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

/// Nominatim usage policy allows one request per second
const fn default_min_request_interval_ms() -> u64 {
    1100
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            cache_ttl_hours: 0,
            country_filter: String::new(),
            min_request_interval_ms: default_min_request_interval_ms(),
        }
    }
}

impl GeocodingConfig {
    /// Create a configuration suitable for testing against a mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 2,
            min_request_interval_ms: 0,
            ..Default::default()
        }
    }

    /// Check if caching is enabled
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_hours > 0
    }

    /// The API key, if one is configured and non-empty
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .filter(|key| !key.is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("base_url must be an http(s) URL".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeocodingConfig::default();
        assert_eq!(config.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.cache_ttl_hours, 0);
        assert!(config.country_filter.is_empty());
        assert_eq!(config.min_request_interval_ms, 1100);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_testing_config() {
        let config = GeocodingConfig::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.min_request_interval_ms, 0);
        assert!(!config.caching_enabled());
    }

    #[test]
    fn test_empty_api_key_is_ignored() {
        let config = GeocodingConfig {
            api_key: Some(SecretString::from(String::new())),
            ..Default::default()
        };
        assert!(config.api_key().is_none());

        let config = GeocodingConfig {
            api_key: Some(SecretString::from("pk.123".to_string())),
            ..Default::default()
        };
        assert_eq!(config.api_key(), Some("pk.123"));
    }

    #[test]
    fn test_validation_success() {
        assert!(GeocodingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = GeocodingConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_non_http_base_url() {
        let config = GeocodingConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = GeocodingConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_is_not_serialized() {
        let config = GeocodingConfig {
            api_key: Some(SecretString::from("pk.secret".to_string())),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("pk.secret"));

        let deserialized: GeocodingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.base_url, config.base_url);
        assert!(deserialized.api_key.is_none());
    }
}
