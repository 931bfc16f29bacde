//! Task List Core
//!
//! List store, filter view, drag coordinator and persistence adapter for the
//! task list widget. Pure Rust with no DOM dependency.

pub mod domain;
pub mod drag;
pub mod error;
pub mod persistence;
pub mod session;
pub mod store;


pub use domain::{Filter, Task, TaskId};
pub use drag::{DragEvent, DragState, Reorder};
pub use error::{PersistError, PersistResult, StorageError};
pub use persistence::{KeyValueStore, MemoryStore, Persistence, PersistenceConfig, Snapshot, WriteOutcome};
pub use session::{Action, Effect, Session};
pub use store::{TaskList, TaskStats};
