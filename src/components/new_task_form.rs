//! New Task Form Component
//!
//! Text entry that submits on button click or Enter.

use leptos::prelude::*;
use task_core::Action;

use crate::context::AppContext;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    // Form submit covers both the button and Enter in the input
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Action::SubmitDraft);
    };

    view! {
        <form class="new-item-form" on:submit=on_submit>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="Add a new task..."
                    prop:value=move || ctx.session.with(|s| s.draft().to_string())
                    on:input=move |ev| ctx.dispatch(Action::EditDraft(event_target_value(&ev)))
                />
                <button type="submit">"Add"</button>
            </div>
        </form>
    }
}
