//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the geocoding and navigation adapters, the in-memory to-do
//! collection, fixture loading, configuration and logging setup.

pub mod adapters;
pub mod config;
pub mod fixtures;
pub mod logging;
pub mod persistence;

pub use adapters::*;
pub use config::{AppConfig, LoggingConfig, MapConfig, NavigationConfig};
pub use fixtures::{FixtureError, load_fixtures, parse_fixtures};
pub use logging::{LoggingError, init_logging};
pub use persistence::InMemoryToDoItems;
