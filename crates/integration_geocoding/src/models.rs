//! Raw provider response types

use serde::Deserialize;

/// One candidate of a Nominatim `/search` response
///
/// Coordinates arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SearchResult {
    /// Parse the coordinates as `(latitude, longitude)`
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.lat.trim().parse().ok()?;
        let lon = self.lon.trim().parse().ok()?;
        Some((lat, lon))
    }
}
