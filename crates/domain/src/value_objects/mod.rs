//! Value Objects - Immutable, identity-less domain primitives

mod entity_id;
mod geo_point;
mod route;

pub use entity_id::EntityId;
pub use geo_point::GeoPoint;
pub use route::{ROUTE_POINT_SEPARATOR, Route, format_route_point, parse_route_point};
