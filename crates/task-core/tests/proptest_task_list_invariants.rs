//! Property-based invariant tests for the task list store and filter view.
//!
//! 1. Adding non-blank text grows the list by exactly one open task
//! 2. Adding blank text never changes the list
//! 3. Toggling the same id twice restores the list
//! 4. Deleting the same id twice equals deleting it once
//! 5. reorder(a, b) then reorder(b, a) restores order, for any index pair
//! 6. Active and completed views partition the list in order

use proptest::prelude::*;
use task_core::domain::filter::filter_tasks;
use task_core::{Filter, Task, TaskList};

// ── Strategies ──────────────────────────────────────────────────────────

/// Arbitrary list state as (text, completed) pairs
fn list_strategy() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::vec(("[a-z]{1,12}", any::<bool>()), 0..24)
}

/// Build a list through the public API, completing where requested
fn build_list(entries: &[(String, bool)]) -> TaskList {
    let mut list = TaskList::new();
    for (text, completed) in entries {
        if let Some(id) = list.add(text) {
            if *completed {
                list.toggle(id);
            }
        }
    }
    list
}

fn ids(list: &TaskList) -> Vec<u64> {
    list.tasks().iter().map(|t| t.id).collect()
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn add_non_blank_appends_one_open_task(entries in list_strategy(), text in "\\PC*") {
        prop_assume!(!text.trim().is_empty());
        let mut list = build_list(&entries);
        let before = list.len();

        let id = list.add(&text);
        prop_assert!(id.is_some());
        prop_assert_eq!(list.len(), before + 1);

        let last = &list.tasks()[before];
        prop_assert_eq!(Some(last.id), id);
        prop_assert!(!last.completed);
        prop_assert_eq!(last.text.as_str(), text.trim());
        // Ids stay unique
        let mut sorted = ids(&list);
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), list.len());
    }

    #[test]
    fn add_blank_is_noop(entries in list_strategy(), blank in "[ \\t\\n\\r]{0,8}") {
        let mut list = build_list(&entries);
        let before = list.clone();
        prop_assert_eq!(list.add(&blank), None);
        prop_assert_eq!(list, before);
    }

    #[test]
    fn toggle_twice_restores(entries in list_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!entries.is_empty());
        let mut list = build_list(&entries);
        let before = list.clone();
        let id = list.tasks()[pick.index(list.len())].id;

        prop_assert!(list.toggle(id));
        prop_assert!(list.toggle(id));
        prop_assert_eq!(list, before);
    }

    #[test]
    fn delete_is_idempotent(entries in list_strategy(), id in 0u64..32) {
        let mut once = build_list(&entries);
        once.delete(id);
        let mut twice = once.clone();
        prop_assert!(!twice.delete(id));
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn reorder_round_trip_restores(entries in list_strategy(), a in 0usize..32, b in 0usize..32) {
        // Index range exceeds the list length, so out-of-range pairs are covered
        let original = build_list(&entries);
        let mut list = original.clone();
        let moved = list.reorder(Some(a), Some(b));
        let in_range = a < original.len() && b < original.len();
        prop_assert_eq!(moved, in_range && a != b);

        list.reorder(Some(b), Some(a));
        prop_assert_eq!(list, original);
    }

    #[test]
    fn reorder_keeps_same_tasks(entries in list_strategy(), a in 0usize..32, b in 0usize..32) {
        let original = build_list(&entries);
        let mut list = original.clone();
        list.reorder(Some(a), Some(b));

        let mut before = original.tasks().to_vec();
        let mut after = list.tasks().to_vec();
        before.sort_by_key(|t| t.id);
        after.sort_by_key(|t| t.id);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn active_and_completed_partition_list(entries in list_strategy()) {
        let list = build_list(&entries);
        let tasks = list.tasks();
        let active = filter_tasks(tasks, Filter::Active);
        let completed = filter_tasks(tasks, Filter::Completed);

        prop_assert_eq!(active.len() + completed.len(), tasks.len());
        prop_assert_eq!(filter_tasks(tasks, Filter::All).len(), tasks.len());

        // Each side keeps list order, and every task lands on exactly one side
        let expected_active: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();
        let expected_completed: Vec<&Task> = tasks.iter().filter(|t| t.completed).collect();
        prop_assert_eq!(active, expected_active);
        prop_assert_eq!(completed, expected_completed);
    }
}
