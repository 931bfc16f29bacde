//! UI Components
//!
//! Leptos components for the task list page.

mod filter_bar;
mod new_task_form;
mod task_list_view;
mod task_row;
mod theme_toggle;

pub use filter_bar::FilterBar;
pub use new_task_form::NewTaskForm;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
pub use theme_toggle::ThemeToggle;
