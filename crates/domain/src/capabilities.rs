//! Capabilities an entity implements to take part in map rendering
//!
//! Any entity type qualifies by implementing the trait; there is no common
//! base type.

use crate::value_objects::{EntityId, GeoPoint, Route};

/// An entity exposing an ordered sequence of geographic points
pub trait RouteSource: Send + Sync {
    /// Identity forwarded to navigation when the route is clicked
    fn entity_id(&self) -> EntityId;

    /// The entity's route; entries that could not be read are `None`
    fn route(&self) -> Route;
}

/// An entity with an optional single location
pub trait Locatable {
    fn location(&self) -> Option<GeoPoint>;

    fn set_location(&mut self, location: Option<GeoPoint>);
}
