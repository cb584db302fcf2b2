//! Route value object and the textual route point format
//!
//! Route points are stored as `"<longitude>;<latitude>"`, optionally with a
//! trailing `;`. An entry that cannot be read stays in the route as `None`
//! so positions are preserved; what to do with it is the renderer's call.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::GeoPoint;

/// Separator between the two components of a stored route point
pub const ROUTE_POINT_SEPARATOR: char = ';';

/// An ordered sequence of route entries, `None` marking a malformed point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(Vec<Option<GeoPoint>>);

impl Route {
    /// Create a route from raw entries
    #[must_use]
    pub const fn new(entries: Vec<Option<GeoPoint>>) -> Self {
        Self(entries)
    }

    /// Create a route in which every entry is valid
    pub fn from_points(points: impl IntoIterator<Item = GeoPoint>) -> Self {
        Self(points.into_iter().map(Some).collect())
    }

    /// Parse stored route text, keeping malformed entries as `None`
    pub fn parse_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            lines
                .into_iter()
                .map(|line| parse_route_point(line.as_ref()).ok())
                .collect(),
        )
    }

    /// The first entry, which is `None` when the route is empty or its
    /// first point is malformed
    #[must_use]
    pub fn first(&self) -> Option<GeoPoint> {
        self.0.first().copied().flatten()
    }

    /// Number of entries, malformed ones included
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of malformed entries
    #[must_use]
    pub fn malformed_count(&self) -> usize {
        self.0.iter().filter(|entry| entry.is_none()).count()
    }

    /// Iterate over all entries in order
    pub fn iter(&self) -> impl Iterator<Item = Option<GeoPoint>> + '_ {
        self.0.iter().copied()
    }

    /// Iterate over the valid points only
    pub fn points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.0.iter().filter_map(|entry| *entry)
    }
}

impl FromIterator<Option<GeoPoint>> for Route {
    fn from_iter<T: IntoIterator<Item = Option<GeoPoint>>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse a single stored route point (`"<longitude>;<latitude>"`)
///
/// # Errors
///
/// Returns `DomainError::MalformedRoutePoint` if the text does not hold
/// exactly two numeric components or the coordinates are out of range.
pub fn parse_route_point(text: &str) -> Result<GeoPoint, DomainError> {
    let malformed = || DomainError::MalformedRoutePoint(text.to_string());

    let mut parts: Vec<&str> = text.split(ROUTE_POINT_SEPARATOR).map(str::trim).collect();
    if parts.last().is_some_and(|last| last.is_empty()) {
        parts.pop();
    }
    let [longitude, latitude] = parts.as_slice() else {
        return Err(malformed());
    };

    let longitude: f64 = longitude.parse().map_err(|_| malformed())?;
    let latitude: f64 = latitude.parse().map_err(|_| malformed())?;

    GeoPoint::new(latitude, longitude).map_err(|_| malformed())
}

/// Format a point in the stored route text form
#[must_use]
pub fn format_route_point(point: &GeoPoint) -> String {
    format!(
        "{}{ROUTE_POINT_SEPARATOR}{}",
        point.longitude(),
        point.latitude()
    )
}
