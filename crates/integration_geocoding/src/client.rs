//! Nominatim geocoding client
//!
//! Converts free-form address strings to geographic coordinates using a
//! Nominatim-compatible `/search` endpoint. Each call is a single attempt.
//!
//! Requests are spaced by `min_request_interval_ms` (the public Nominatim
//! allows one request per second). Results may be cached when
//! `cache_ttl_hours` is non-zero.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoPoint;
use moka::future::Cache;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::config::GeocodingConfig;
use crate::error::GeocodingError;
use crate::models::SearchResult;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to geographic coordinates
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodingError>;
}

/// Nominatim-based geocoding client with request spacing and optional caching
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: GeocodingConfig,
    cache: Option<Cache<String, GeoPoint>>,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        config.validate().map_err(GeocodingError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("routemap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        let cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(1000)
                .time_to_live(Duration::from_secs(config.cache_ttl_hours * 3600))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            cache,
            last_request: Arc::new(Mutex::new(None)),
        })
    }

    /// Space out requests according to `min_request_interval_ms`
    async fn rate_limit(&self) {
        if self.config.min_request_interval_ms == 0 {
            return;
        }
        let interval = Duration::from_millis(self.config.min_request_interval_ms);

        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < interval {
                let wait = interval.saturating_sub(elapsed);
                debug!(?wait, "Rate limiting geocoding request");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    fn search_params(&self, address: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", address.to_string()),
            ("format", "jsonv2".to_string()),
            ("limit", "1".to_string()),
        ];

        if !self.config.country_filter.is_empty() {
            params.push(("countrycodes", self.config.country_filter.clone()));
        }

        if let Some(key) = self.config.api_key() {
            params.push(("key", key.to_string()));
        }

        params
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodingError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodingError::AddressNotFound(
                "Address must not be empty".to_string(),
            ));
        }

        let cache_key = address.to_lowercase();
        if let Some(cache) = &self.cache {
            if let Some(point) = cache.get(&cache_key).await {
                debug!(%address, "Geocoding cache hit");
                return Ok(point);
            }
        }

        self.rate_limit().await;

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        debug!(%address, "Geocoding address");

        let response = self
            .client
            .get(&url)
            .query(&self.search_params(address))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let results: Vec<SearchResult> = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let result = results
            .first()
            .ok_or_else(|| GeocodingError::AddressNotFound(address.to_string()))?;

        let (lat, lon) = result
            .coordinates()
            .ok_or_else(|| GeocodingError::ParseError("Invalid coordinates".to_string()))?;
        let point =
            GeoPoint::new(lat, lon).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, point).await;
        }
        debug!(%address, %lat, %lon, "Geocoded address");

        Ok(point)
    }
}
