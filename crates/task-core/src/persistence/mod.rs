//! Persistence Layer
//!
//! Key-value storage abstraction and the adapter that mirrors session state
//! into it.

mod adapter;
mod config;
mod memory;
mod traits;

pub use adapter::{Persistence, Snapshot, WriteOutcome};
pub use config::PersistenceConfig;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
