//! Address geocoding integration for routemap
//!
//! Resolves free-form address strings to coordinates using a
//! [Nominatim](https://nominatim.openstreetmap.org)-compatible search API.
//! Providers that require an API key (e.g. hosted Nominatim services)
//! receive it as the `key` query parameter.
//!
//! # Architecture
//!
//! [`GeocodingClient`] defines the interface, implemented by
//! [`NominatimGeocodingClient`]. Every call is a single attempt; failures are
//! reported as [`GeocodingError`] and callers decide whether a failure is
//! just "no location found".
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, GeocodingConfig, NominatimGeocodingClient};
//!
//! let client = NominatimGeocodingClient::new(&GeocodingConfig::default())?;
//! let point = client.geocode("10 Downing Street, London, UK").await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, NominatimGeocodingClient};
pub use config::GeocodingConfig;
pub use error::GeocodingError;
