//! Geocoding port
//!
//! Resolves a free-text address to a point. "No location found" is a normal
//! outcome, reported as `Ok(None)` rather than an error.

use async_trait::async_trait;
use domain::value_objects::GeoPoint;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for address geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Look up the coordinates of an address
    ///
    /// Returns `Ok(None)` when the provider finds nothing or cannot be
    /// reached. A single attempt is made per call.
    async fn lookup(&self, address: &str) -> Result<Option<GeoPoint>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocodingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }

    #[test]
    fn mock_reports_miss_as_none() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_lookup()
            .withf(|address| address == "$%$%^Y%^fgnsdlfk glfg")
            .returning(|_| Ok(None));

        let result = tokio_test::block_on(geocoder.lookup("$%$%^Y%^fgnsdlfk glfg"));
        assert!(result.unwrap().is_none());
    }
}
