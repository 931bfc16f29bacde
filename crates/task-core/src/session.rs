//! Session Control Loop
//!
//! All UI events go through `Session::apply`, which mutates the in-memory
//! state and returns the side effects the host must run. Keeping effects as
//! data lets the whole loop run without a DOM.

use crate::domain::filter::{self, Filter};
use crate::domain::{Task, TaskId};
use crate::drag::{DragEvent, DragState};
use crate::persistence::Snapshot;
use crate::store::{TaskList, TaskStats};

/// User intents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Text-entry contents changed
    EditDraft(String),
    /// Submit the draft (button click or Enter)
    SubmitDraft,
    Toggle(TaskId),
    Delete(TaskId),
    /// Direct move by full-list index
    Reorder { from: usize, to: usize },
    SetFilter(Filter),
    ToggleTheme,
    Drag(DragEvent),
}

/// Side effects requested by `apply`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Task list changed; flush it
    PersistTasks,
    /// Theme flag changed; flush it
    PersistTheme,
    /// The draft was consumed and the input should be cleared
    DraftCleared,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    tasks: TaskList,
    filter: Filter,
    dark_mode: bool,
    draft: String,
    drag: DragState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install hydrated values; `None` fields keep their defaults
    pub fn hydrate(&mut self, snapshot: Snapshot) {
        if let Some(tasks) = snapshot.tasks {
            self.tasks.replace_all(tasks);
        }
        if let Some(dark_mode) = snapshot.dark_mode {
            self.dark_mode = dark_mode;
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn stats(&self) -> TaskStats {
        self.tasks.stats()
    }

    /// Visible tasks with their full-list index
    pub fn visible_entries(&self) -> Vec<(usize, Task)> {
        filter::visible_entries(self.tasks.tasks(), self.filter)
    }

    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::EditDraft(text) => {
                self.draft = text;
                Vec::new()
            }
            Action::SubmitDraft => match self.tasks.add(&self.draft) {
                Some(id) => {
                    log::debug!("[SESSION] Added task {}", id);
                    self.draft.clear();
                    vec![Effect::PersistTasks, Effect::DraftCleared]
                }
                None => Vec::new(),
            },
            Action::Toggle(id) => persist_if(self.tasks.toggle(id)),
            Action::Delete(id) => persist_if(self.tasks.delete(id)),
            Action::Reorder { from, to } => persist_if(self.tasks.reorder(Some(from), Some(to))),
            Action::SetFilter(filter) => {
                self.filter = filter;
                Vec::new()
            }
            Action::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                vec![Effect::PersistTheme]
            }
            Action::Drag(event) => match self.drag.handle(event) {
                Some(reorder) => {
                    log::debug!("[SESSION] Drop: {} -> {}", reorder.from, reorder.to);
                    persist_if(self.tasks.reorder(Some(reorder.from), Some(reorder.to)))
                }
                None => Vec::new(),
            },
        }
    }
}

fn persist_if(changed: bool) -> Vec<Effect> {
    if changed {
        vec![Effect::PersistTasks]
    } else {
        Vec::new()
    }
}
