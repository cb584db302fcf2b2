//! In-memory to-do item collection
//!
//! Items keep insertion order, which is the iteration order seen by the
//! route overlay renderer. Every mutation bumps a version counter on a
//! `watch` channel so listeners can trigger a rebuild.

use std::sync::Arc;

use application::ports::EntityCollectionPort;
use domain::{DomainError, EntityId, RouteSource, TODO_OBJECT_TYPE, ToDoItem};
use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::debug;

/// Minimum search length for dependency candidates
pub const MIN_SEARCH_LEN: usize = 2;

/// Thread-safe, ordered collection of to-do items
#[derive(Debug)]
pub struct InMemoryToDoItems {
    items: RwLock<Vec<ToDoItem>>,
    changes: watch::Sender<u64>,
}

impl Default for InMemoryToDoItems {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryToDoItems {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    /// Create a collection holding `items`
    #[must_use]
    pub fn from_items(items: Vec<ToDoItem>) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            items: RwLock::new(items),
            changes,
        }
    }

    /// Subscribe to change notifications
    ///
    /// The received value is a version counter incremented on every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    fn notify(&self) {
        self.changes.send_modify(|version| *version += 1);
    }

    /// Replace the whole collection
    pub fn replace(&self, items: Vec<ToDoItem>) {
        debug!(count = items.len(), "Replacing to-do items");
        *self.items.write() = items;
        self.notify();
    }

    /// Add an item, returning its id
    pub fn insert(&self, item: ToDoItem) -> EntityId {
        let id = item.id.clone();
        self.items.write().push(item);
        self.notify();
        id
    }

    /// Remove an item
    pub fn remove(&self, id: &EntityId) -> Option<ToDoItem> {
        let removed = {
            let mut items = self.items.write();
            let index = items.iter().position(|item| &item.id == id)?;
            items.remove(index)
        };
        self.notify();
        Some(removed)
    }

    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<ToDoItem> {
        self.items.read().iter().find(|item| &item.id == id).cloned()
    }

    /// Apply `f` to the item with `id`
    ///
    /// Listeners are notified only when `f` succeeds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no item has `id`, or the error
    /// returned by `f`.
    pub fn update<T, F>(&self, id: &EntityId, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut ToDoItem) -> Result<T, DomainError>,
    {
        let result = {
            let mut items = self.items.write();
            let item = items
                .iter_mut()
                .find(|item| &item.id == id)
                .ok_or_else(|| DomainError::not_found(TODO_OBJECT_TYPE, id.to_string()))?;
            f(item)?
        };
        self.notify();
        Ok(result)
    }

    /// All items in insertion order
    #[must_use]
    pub fn all(&self) -> Vec<ToDoItem> {
        self.items.read().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    fn query(&self, predicate: impl Fn(&ToDoItem) -> bool) -> Vec<ToDoItem> {
        self.items
            .read()
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Items owned by `user`
    #[must_use]
    pub fn owned_by(&self, user: &str) -> Vec<ToDoItem> {
        self.query(|item| item.owned_by == user)
    }

    /// Incomplete items owned by `user`
    #[must_use]
    pub fn not_yet_complete(&self, user: &str) -> Vec<ToDoItem> {
        self.query(|item| item.owned_by == user && !item.is_complete())
    }

    /// Completed items owned by `user`
    #[must_use]
    pub fn complete(&self, user: &str) -> Vec<ToDoItem> {
        self.query(|item| item.owned_by == user && item.is_complete())
    }

    /// Items owned by `user` whose description contains `search`
    #[must_use]
    pub fn auto_complete(&self, user: &str, search: &str) -> Vec<ToDoItem> {
        self.query(|item| item.owned_by == user && item.description().contains(search))
    }

    /// Items that could be added as dependencies of `id`
    ///
    /// Excludes the item itself and its current dependencies. Searches
    /// shorter than [`MIN_SEARCH_LEN`] return nothing.
    #[must_use]
    pub fn dependency_candidates(&self, id: &EntityId, search: &str) -> Vec<ToDoItem> {
        if search.chars().count() < MIN_SEARCH_LEN {
            return Vec::new();
        }
        let Some(item) = self.get(id) else {
            return Vec::new();
        };
        self.auto_complete(&item.owned_by, search)
            .into_iter()
            .filter(|candidate| {
                candidate.id != item.id && !item.dependencies().contains(&candidate.id)
            })
            .collect()
    }
}

impl EntityCollectionPort for InMemoryToDoItems {
    fn snapshot(&self) -> Vec<Arc<dyn RouteSource>> {
        self.items
            .read()
            .iter()
            .map(|item| Arc::new(item.clone()) as Arc<dyn RouteSource>)
            .collect()
    }
}
