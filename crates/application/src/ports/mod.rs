//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod entity_collection_port;
mod geocoding_port;
mod navigation_port;

#[cfg(test)]
pub use entity_collection_port::MockEntityCollectionPort;
pub use entity_collection_port::EntityCollectionPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use navigation_port::MockNavigationPort;
pub use navigation_port::NavigationPort;
