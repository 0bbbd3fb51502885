//! Task list: a small persistent to-do collection.
//!
//! Tasks support add/edit/complete/remove plus filtered and sorted
//! listing. Everything is stored in the local database.

pub mod quickadd;
pub mod store;
pub mod task;

pub use quickadd::parse_quick_add;
pub use store::TaskStore;
pub use task::{Priority, Task, TaskFilter, TaskSort};
