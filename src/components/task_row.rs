//! Task Row Component
//!
//! Individual task in the list.

use leptos::prelude::*;
use task_core::{Action, Task};

use crate::context::AppContext;

/// A single task row: checkbox, text, delete
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let id = task.id;
    let completed = task.completed;

    view! {
        <div class=if completed { "item-row completed" } else { "item-row" }>
            <span class="drag-handle">"⋮⋮"</span>

            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| ctx.dispatch(Action::Toggle(id))
            />

            <span class="item-text">{task.text}</span>

            <button class="delete-btn" title="Delete" on:click=move |_| ctx.dispatch(Action::Delete(id))>
                "×"
            </button>
        </div>
    }
}
