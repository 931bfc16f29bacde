//! Domain Layer
//!
//! Task entity and the filter view over it.
//! This layer has NO external dependencies (except serde for serialization).

mod task;
pub mod filter;

pub use task::{normalize_text, Task, TaskId};
pub use filter::Filter;
