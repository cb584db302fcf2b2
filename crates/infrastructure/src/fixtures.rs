//! JSON fixtures for to-do items
//!
//! ```json
//! {
//!   "items": [
//!     {
//!       "id": "5f0c6a9e-2f7c-4b1e-9a57-0f4c2b8f1d21",
//!       "description": "Walk to the office",
//!       "owned_by": "sven",
//!       "complete": false,
//!       "location": { "latitude": 51.5034, "longitude": -0.1276 },
//!       "points": ["-0.1276;51.5034", "-0.1280;51.5010"]
//!     }
//!   ]
//! }
//! ```
//!
//! `id`, `complete`, `location` and `points` are optional. Route points are
//! kept as text, so malformed entries load fine and are handled at render
//! time.

use std::path::Path;

use domain::{DomainError, EntityId, GeoPoint, Locatable, TODO_OBJECT_TYPE, ToDoItem};
use serde::Deserialize;
use uuid::Uuid;

/// Error loading fixtures
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read fixtures from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid fixture item {index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: DomainError,
    },
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    items: Vec<FixtureItem>,
}

#[derive(Debug, Deserialize)]
struct FixtureItem {
    #[serde(default)]
    id: Option<Uuid>,
    description: String,
    owned_by: String,
    #[serde(default)]
    complete: bool,
    #[serde(default)]
    location: Option<GeoPoint>,
    #[serde(default)]
    points: Vec<String>,
}

impl FixtureItem {
    fn into_item(self) -> Result<ToDoItem, DomainError> {
        let mut item = ToDoItem::new(self.description, self.owned_by)?.with_points(self.points);
        if let Some(id) = self.id {
            item.id = EntityId::from_uuid(TODO_OBJECT_TYPE, id);
        }
        if let Some(location) = self.location {
            item.set_location(Some(GeoPoint::new(location.latitude(), location.longitude())?));
        }
        if self.complete {
            item.completed()?;
        }
        Ok(item)
    }
}

/// Parse fixtures from a JSON string
///
/// # Errors
///
/// Returns an error if the JSON is invalid or an item fails validation.
pub fn parse_fixtures(json: &str) -> Result<Vec<ToDoItem>, FixtureError> {
    let file: FixtureFile = serde_json::from_str(json)?;
    file.items
        .into_iter()
        .enumerate()
        .map(|(index, item)| item.into_item().map_err(|source| FixtureError::Item { index, source }))
        .collect()
}

/// Load fixtures from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_fixtures(path: impl AsRef<Path>) -> Result<Vec<ToDoItem>, FixtureError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let items = parse_fixtures(&json)?;
    tracing::debug!(path = %path.display(), count = items.len(), "Loaded fixtures");
    Ok(items)
}
