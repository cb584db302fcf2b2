//! Entity storage

mod todo_items;

pub use todo_items::{InMemoryToDoItems, MIN_SEARCH_LEN};
