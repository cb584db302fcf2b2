//! Navigation port
//!
//! One-way notification asking the host UI to show an entity's detail view.

use domain::value_objects::EntityId;
#[cfg(test)]
use mockall::automock;

/// Port for requesting navigation to an entity
#[cfg_attr(test, automock)]
pub trait NavigationPort: Send + Sync {
    /// Request the detail view of `target`
    fn show_entity(&self, target: &EntityId);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn NavigationPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn NavigationPort>();
    }
}
