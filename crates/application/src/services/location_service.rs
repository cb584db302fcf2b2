//! Location service
//!
//! Geocodes addresses for locatable entities. Lookups run under a timeout
//! and dropping the returned future cancels the request. Every failure is
//! reported as "no location found".

use std::sync::Arc;
use std::time::Duration;

use domain::Locatable;
use domain::value_objects::GeoPoint;
use tracing::{debug, instrument, warn};

use crate::ports::GeocodingPort;

/// Default upper bound for a single lookup
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Service resolving addresses and updating entity locations
pub struct LocationService {
    geocoder: Arc<dyn GeocodingPort>,
    timeout: Duration,
}

impl std::fmt::Debug for LocationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationService")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl LocationService {
    /// Create a new location service with the default timeout
    #[must_use]
    pub fn new(geocoder: Arc<dyn GeocodingPort>) -> Self {
        Self {
            geocoder,
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    /// Set the lookup timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve an address, returning `None` when nothing is found
    #[instrument(skip(self))]
    pub async fn lookup(&self, address: &str) -> Option<GeoPoint> {
        if address.trim().is_empty() {
            debug!("Empty address, skipping lookup");
            return None;
        }

        match tokio::time::timeout(self.timeout, self.geocoder.lookup(address)).await {
            Ok(Ok(Some(point))) => {
                debug!(%point, "Address resolved");
                Some(point)
            },
            Ok(Ok(None)) => {
                debug!("No location found");
                None
            },
            Ok(Err(e)) => {
                warn!(error = %e, "Geocoding failed");
                None
            },
            Err(_) => {
                warn!(timeout = ?self.timeout, "Geocoding timed out");
                None
            },
        }
    }

    /// Geocode `address` and store the result as the entity's location
    ///
    /// A miss clears the location. Returns the new location.
    pub async fn update_location<L>(&self, entity: &mut L, address: &str) -> Option<GeoPoint>
    where
        L: Locatable + Send + ?Sized,
    {
        let location = self.lookup(address).await;
        entity.set_location(location);
        location
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use domain::ToDoItem;

    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::MockGeocodingPort;

    fn downing_street() -> GeoPoint {
        GeoPoint::new(51.5034, -0.1276).unwrap()
    }

    fn geocoder_returning(
        result: fn() -> Result<Option<GeoPoint>, ApplicationError>,
    ) -> Arc<dyn GeocodingPort> {
        let mut geocoder = MockGeocodingPort::new();
        geocoder.expect_lookup().returning(move |_| result());
        Arc::new(geocoder)
    }

    #[tokio::test]
    async fn lookup_returns_point() {
        let service = LocationService::new(geocoder_returning(|| Ok(Some(downing_street()))));
        let point = service.lookup("10 Downing Street, London, UK").await.unwrap();
        assert!(point.is_near(&GeoPoint::new_unchecked(51.503, -0.128), 0.01));
    }

    #[tokio::test]
    async fn lookup_miss_is_none() {
        let service = LocationService::new(geocoder_returning(|| Ok(None)));
        assert!(service.lookup("$%$%^Y%^fgnsdlfk glfg").await.is_none());
    }

    #[tokio::test]
    async fn lookup_error_is_none() {
        let service = LocationService::new(geocoder_returning(|| {
            Err(ApplicationError::ExternalService("connection refused".to_string()))
        }));
        assert!(service.lookup("Berlin").await.is_none());
    }

    #[tokio::test]
    async fn empty_address_does_not_call_geocoder() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder.expect_lookup().never();
        let service = LocationService::new(Arc::new(geocoder));

        assert!(service.lookup("  ").await.is_none());
    }

    struct SlowGeocoder;

    #[async_trait]
    impl GeocodingPort for SlowGeocoder {
        async fn lookup(&self, _address: &str) -> Result<Option<GeoPoint>, ApplicationError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Some(GeoPoint::berlin()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn lookup_times_out() {
        let service =
            LocationService::new(Arc::new(SlowGeocoder)).with_timeout(Duration::from_secs(1));
        assert!(service.lookup("Berlin").await.is_none());
    }

    #[tokio::test]
    async fn update_location_sets_and_clears() {
        let mut item = ToDoItem::new("Visit the PM", "sven").unwrap();

        let service = LocationService::new(geocoder_returning(|| Ok(Some(downing_street()))));
        let location = service
            .update_location(&mut item, "10 Downing Street, London, UK")
            .await;
        assert_eq!(location, Some(downing_street()));
        assert_eq!(item.location(), Some(downing_street()));

        let service = LocationService::new(geocoder_returning(|| Ok(None)));
        assert!(service.update_location(&mut item, "nowhere").await.is_none());
        assert!(item.location().is_none());
    }
}
