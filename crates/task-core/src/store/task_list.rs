//! Task List Store
//!
//! Ordered task sequence with add/toggle/delete/reorder.
//! Stale ids and indices are no-ops, never errors.

use serde::Serialize;

use crate::domain::{Task, TaskId};

/// Completion counts for the footer line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

/// Ordered list of tasks; display order == stored order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    /// `None` once the id space is used up
    next_id: Option<TaskId>,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Build a list from hydrated tasks, seeding the id counter past them
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut list = Self::new();
        list.replace_all(tasks);
        list
    }

    /// Replace the whole list (hydration)
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        let max_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        self.next_id = match (self.next_id, max_id.checked_add(1)) {
            (Some(current), Some(seed)) => Some(current.max(seed)),
            _ => None,
        };
        self.tasks = tasks;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new open task.
    ///
    /// Returns the new id, or `None` if the text was blank or no unused id
    /// is left.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let Some(id) = self.next_id else {
            log::warn!("[STORE] Task id space exhausted; ignoring add");
            return None;
        };
        let task = Task::new(id, text)?;
        self.next_id = id.checked_add(1);
        self.tasks.push(task);
        Some(id)
    }

    /// Flip completion for `id`. Returns whether anything changed.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the task with `id`. Returns whether anything changed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Move the task at `from` so it ends up at index `to`.
    ///
    /// No-op when either index is missing or out of range, or they are equal.
    pub fn reorder(&mut self, from: Option<usize>, to: Option<usize>) -> bool {
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };
        if from == to || from >= self.tasks.len() || to >= self.tasks.len() {
            return false;
        }
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        true
    }

    pub fn stats(&self) -> TaskStats {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskStats {
            total: self.tasks.len(),
            completed,
            active: self.tasks.len() - completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(list: &TaskList) -> Vec<&str> {
        list.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    fn list_of(names: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for name in names {
            list.add(name).unwrap();
        }
        list
    }

    #[test]
    fn test_add_appends_open_task() {
        let mut list = TaskList::new();
        for (n, text) in ["a", " b ", "c d"].iter().enumerate() {
            let id = list.add(text).unwrap();
            assert_eq!(list.len(), n + 1);
            let task = list.get(id).unwrap();
            assert!(!task.completed);
            assert_eq!(task.text, text.trim());
        }
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = list_of(&["keep"]);
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   "), None);
        assert_eq!(texts(&list), vec!["keep"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut list = list_of(&["a", "b"]);
        let first = list.tasks()[0].id;
        list.delete(first);
        let id = list.add("c").unwrap();
        let mut ids: Vec<u64> = list.tasks().iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 2);
        assert_ne!(id, first);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut list = list_of(&["a", "b"]);
        let id = list.tasks()[1].id;
        assert!(list.toggle(id));
        assert!(list.get(id).unwrap().completed);
        assert!(list.toggle(id));
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let mut list = list_of(&["a"]);
        let before = list.clone();
        assert!(!list.toggle(999));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut list = list_of(&["a", "b", "c"]);
        let id = list.tasks()[1].id;
        assert!(list.delete(id));
        let after_first = list.clone();
        assert!(!list.delete(id));
        assert_eq!(list, after_first);
        assert_eq!(texts(&list), vec!["a", "c"]);
    }

    #[test]
    fn test_reorder_moves_and_shifts() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        assert!(list.reorder(Some(0), Some(2)));
        assert_eq!(texts(&list), vec!["b", "c", "a", "d"]);
        assert!(list.reorder(Some(3), Some(0)));
        assert_eq!(texts(&list), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_reorder_round_trip_restores_order() {
        let original = list_of(&["a", "b", "c", "d", "e"]);
        for (a, b) in [(0, 4), (1, 3), (4, 0), (2, 2), (3, 1)] {
            let mut list = original.clone();
            list.reorder(Some(a), Some(b));
            list.reorder(Some(b), Some(a));
            assert_eq!(list, original, "reorder({a}, {b}) round trip");
        }
    }

    #[test]
    fn test_reorder_noops() {
        let mut list = list_of(&["a", "b"]);
        let before = list.clone();
        assert!(!list.reorder(Some(1), Some(1)));
        assert!(!list.reorder(None, Some(1)));
        assert!(!list.reorder(Some(0), None));
        assert!(!list.reorder(Some(0), Some(2)));
        assert!(!list.reorder(Some(5), Some(0)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_replace_all_seeds_id_counter() {
        let mut list = TaskList::from_tasks(vec![
            Task { id: 41, text: "x".to_string(), completed: true },
            Task { id: 7, text: "y".to_string(), completed: false },
        ]);
        assert_eq!(list.add("z"), Some(42));
    }

    #[test]
    fn test_max_hydrated_id_never_reused() {
        let mut list = TaskList::from_tasks(vec![
            Task { id: u64::MAX, text: "x".to_string(), completed: false },
        ]);
        assert_eq!(list.add("y"), None);
        assert_eq!(list.len(), 1);
        // Other operations keep working
        assert!(list.toggle(u64::MAX));
    }

    #[test]
    fn test_last_id_is_usable_once() {
        let mut list = TaskList::from_tasks(vec![
            Task { id: u64::MAX - 1, text: "x".to_string(), completed: false },
        ]);
        assert_eq!(list.add("y"), Some(u64::MAX));
        assert_eq!(list.add("z"), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_stats() {
        let mut list = list_of(&["a", "b", "c"]);
        let id = list.tasks()[0].id;
        list.toggle(id);
        assert_eq!(list.stats(), TaskStats { total: 3, completed: 1, active: 2 });
    }
}
