//! Filter View
//!
//! Derives the visible subset of the task list by completion status.

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Which tasks are currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Whether a task passes this filter
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => task.is_active(),
            Filter::Completed => task.completed,
        }
    }
}

/// Visible tasks in list order
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: Filter) -> Vec<&'a Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Visible tasks paired with their index in the full list.
///
/// Rows hand the full index to the drag coordinator, so a reorder under a
/// filter moves items in the underlying list.
pub fn visible_entries(tasks: &[Task], filter: Filter) -> Vec<(usize, Task)> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| filter.matches(task))
        .map(|(index, task)| (index, task.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u64, completed: bool) -> Task {
        Task { id, text: format!("Task {}", id), completed }
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task(1, false),
            make_task(2, true),
            make_task(3, false),
            make_task(4, true),
        ]
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        let tasks = sample();
        let ids: Vec<u64> = filter_tasks(&tasks, Filter::All).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_active_and_completed_partition_list() {
        let tasks = sample();
        let active = filter_tasks(&tasks, Filter::Active);
        let completed = filter_tasks(&tasks, Filter::Completed);

        assert_eq!(active.len() + completed.len(), tasks.len());
        assert!(active.iter().all(|t| !t.completed));
        assert!(completed.iter().all(|t| t.completed));
        // Order preserved within each side
        assert_eq!(active.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(completed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_visible_entries_carry_full_index() {
        let tasks = sample();
        let entries = visible_entries(&tasks, Filter::Completed);
        let indices: Vec<usize> = entries.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn test_filter_serialization() {
        assert_eq!(Filter::Active.as_str(), "active");
        assert_eq!(serde_json::to_string(&Filter::Completed).unwrap(), r#""completed""#);
    }
}
