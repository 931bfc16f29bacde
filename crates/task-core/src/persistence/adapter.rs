//! Persistence Adapter
//!
//! Mirrors the task list and theme flag to a key-value store.
//! Writes are refused until `hydrate` has run, so defaults built before the
//! first read can never clobber stored data.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::PersistenceConfig;
use super::traits::KeyValueStore;
use crate::domain::{normalize_text, Task};
use crate::error::{PersistError, PersistResult};

/// Values recovered from storage; `None` means keep the default
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub tasks: Option<Vec<Task>>,
    pub dark_mode: Option<bool>,
}

/// Result of a save call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// Refused because hydration has not happened yet
    Skipped,
}

pub struct Persistence<S> {
    store: S,
    config: PersistenceConfig,
    hydrated: bool,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, config: PersistenceConfig) -> Self {
        Self {
            store,
            config,
            hydrated: false,
        }
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read both keys. Absent, unreadable or malformed values come back as
    /// `None`. Unlocks writes.
    pub fn hydrate(&mut self) -> Snapshot {
        let tasks = self
            .read_json::<Vec<Task>>(&self.config.tasks_key)
            .and_then(|tasks| validate_tasks(&self.config.tasks_key, tasks));
        let dark_mode = self.read_json::<bool>(&self.config.theme_key);
        self.hydrated = true;

        log::info!(
            "[PERSIST] Hydrated: tasks={:?}, dark_mode={:?}",
            tasks.as_ref().map(Vec::len),
            dark_mode
        );
        Snapshot { tasks, dark_mode }
    }

    pub fn save_tasks(&mut self, tasks: &[Task]) -> PersistResult<WriteOutcome> {
        let key = self.config.tasks_key.clone();
        self.write_json(&key, &tasks)
    }

    pub fn save_theme(&mut self, dark_mode: bool) -> PersistResult<WriteOutcome> {
        let key = self.config.theme_key.clone();
        self.write_json(&key, &dark_mode)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.read(key) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("[PERSIST] Ignoring unreadable {}: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("[PERSIST] Ignoring malformed {}: {}", key, e);
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> PersistResult<WriteOutcome> {
        if !self.hydrated {
            log::debug!("[PERSIST] Skipping write of {} before hydration", key);
            return Ok(WriteOutcome::Skipped);
        }
        let json = serde_json::to_string(value).map_err(|source| PersistError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.write(key, &json)?;
        Ok(WriteOutcome::Written)
    }
}

/// Reject stored lists that break list invariants (duplicate ids, blank text)
fn validate_tasks(key: &str, tasks: Vec<Task>) -> Option<Vec<Task>> {
    let mut seen = HashSet::new();
    for task in &tasks {
        if !seen.insert(task.id) {
            log::warn!("[PERSIST] Ignoring {}: duplicate id {}", key, task.id);
            return None;
        }
        if normalize_text(&task.text).is_none() {
            log::warn!("[PERSIST] Ignoring {}: blank text for id {}", key, task.id);
            return None;
        }
    }
    Some(tasks)
}
