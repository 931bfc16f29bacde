//! Task Entity
//!
//! A single entry in the task list.

use serde::{Deserialize, Serialize};

/// Unique task identifier, assigned once at creation
pub type TaskId = u64;

/// A short text task with a completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Trimmed, non-empty text
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new open task from raw user input.
    ///
    /// Returns `None` when the input is empty or whitespace only.
    pub fn new(id: TaskId, text: &str) -> Option<Self> {
        let text = normalize_text(text)?;
        Some(Self {
            id,
            text,
            completed: false,
        })
    }

    /// Whether the task is still open
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Trim user input, rejecting blank text
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
