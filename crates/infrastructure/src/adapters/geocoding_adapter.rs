//! Geocoding adapter - Implements `GeocodingPort` using the geocoding integration

use std::sync::Arc;

use application::{error::ApplicationError, ports::GeocodingPort};
use async_trait::async_trait;
use domain::value_objects::GeoPoint;
use integration_geocoding::{
    GeocodingClient, GeocodingConfig, GeocodingError, NominatimGeocodingClient,
};
use tracing::{debug, instrument, warn};

/// Adapter exposing a geocoding client through the application port
///
/// Every client failure is reported as "no location found".
pub struct GeocodingAdapter {
    client: Arc<dyn GeocodingClient>,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter").finish_non_exhaustive()
    }
}

impl GeocodingAdapter {
    /// Create an adapter backed by a Nominatim client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &GeocodingConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around any geocoding client
    #[must_use]
    pub fn with_client(client: Arc<dyn GeocodingClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn lookup(&self, address: &str) -> Result<Option<GeoPoint>, ApplicationError> {
        debug!("Geocoding address");

        match self.client.geocode(address).await {
            Ok(point) => Ok(Some(point)),
            Err(GeocodingError::AddressNotFound(_)) => {
                debug!("No location found");
                Ok(None)
            },
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "Failed to geocode address");
                Ok(None)
            },
        }
    }
}
