//! Filter Bar Component
//!
//! Three mutually exclusive filter buttons.

use leptos::prelude::*;
use task_core::{Action, Filter};

use crate::context::AppContext;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let current = Memo::new(move |_| ctx.session.with(|s| s.filter()));

    view! {
        <div class="filter-bar">
            {Filter::ALL.iter().map(|&filter| {
                let is_selected = move || current.get() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| ctx.dispatch(Action::SetFilter(filter))
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
