//! Domain entities - objects with identity

mod todo_item;

pub use todo_item::{MAX_DESCRIPTION_LEN, TODO_OBJECT_TYPE, ToDoItem};
