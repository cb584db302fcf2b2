//! Navigation adapter - turns navigation requests into entity detail links

use application::ports::NavigationPort;
use domain::value_objects::EntityId;
use parking_lot::Mutex;
use tracing::info;

/// Navigator that resolves entities to `{base_url}/entity/{TYPE}:{id}` links
///
/// Requests are logged and kept in order, so callers can pick up the most
/// recent link after a click.
#[derive(Debug)]
pub struct LinkNavigator {
    base_url: String,
    requested: Mutex<Vec<String>>,
}

impl LinkNavigator {
    /// Create a navigator for the given application base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Detail link of an entity
    #[must_use]
    pub fn link_for(&self, target: &EntityId) -> String {
        format!("{}/entity/{target}", self.base_url)
    }

    /// Most recently requested link
    #[must_use]
    pub fn last_link(&self) -> Option<String> {
        self.requested.lock().last().cloned()
    }

    /// All requested links, oldest first
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

impl NavigationPort for LinkNavigator {
    fn show_entity(&self, target: &EntityId) {
        let link = self.link_for(target);
        info!(entity = %target, %link, "Navigating to entity");
        self.requested.lock().push(link);
    }
}
