//! List Store
//!
//! In-memory owner of the ordered task sequence.

mod task_list;

pub use task_list::{TaskList, TaskStats};
