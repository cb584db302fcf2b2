//! Entity collection port
//!
//! The collection a map is rendered from. The renderer only ever takes a
//! snapshot; it never mutates the entities.

use std::sync::Arc;

use domain::RouteSource;
#[cfg(test)]
use mockall::automock;

/// Port for reading the current entity collection
#[cfg_attr(test, automock)]
pub trait EntityCollectionPort: Send + Sync {
    /// Snapshot of the collection, in display order
    fn snapshot(&self) -> Vec<Arc<dyn RouteSource>>;
}
