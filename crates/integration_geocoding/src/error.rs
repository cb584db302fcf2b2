//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Address could not be resolved to coordinates
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Provider rejected the request because of its rate limit
    #[error("Geocoding rate limit exceeded")]
    RateLimitExceeded,

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,

    /// Configuration is unusable
    #[error("Geocoding configuration error: {0}")]
    Configuration(String),
}

impl GeocodingError {
    /// Returns true if a later attempt could succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::RateLimitExceeded | Self::Timeout
        )
    }

    /// Returns true if the provider answered but knows no such address
    #[must_use]
    pub const fn is_miss(&self) -> bool {
        matches!(self, Self::AddressNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(GeocodingError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(GeocodingError::RequestFailed("test".to_string()).is_retryable());
        assert!(GeocodingError::RateLimitExceeded.is_retryable());
        assert!(GeocodingError::Timeout.is_retryable());
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!GeocodingError::ParseError("test".to_string()).is_retryable());
        assert!(!GeocodingError::AddressNotFound("test".to_string()).is_retryable());
        assert!(!GeocodingError::Configuration("test".to_string()).is_retryable());
    }

    #[test]
    fn test_only_address_not_found_is_a_miss() {
        assert!(GeocodingError::AddressNotFound("nowhere".to_string()).is_miss());
        assert!(!GeocodingError::Timeout.is_miss());
        assert!(!GeocodingError::ParseError("bad".to_string()).is_miss());
    }

    #[test]
    fn test_error_display() {
        let err = GeocodingError::AddressNotFound("10 Downing Street".to_string());
        assert!(err.to_string().contains("10 Downing Street"));

        let err = GeocodingError::Timeout;
        assert!(err.to_string().contains("timed out"));
    }
}
