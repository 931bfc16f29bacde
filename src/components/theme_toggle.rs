//! Theme Toggle Component

use leptos::prelude::*;
use task_core::Action;

use crate::context::AppContext;

/// Light/dark switch
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let dark_mode = Memo::new(move |_| ctx.session.with(|s| s.dark_mode()));

    view! {
        <button
            type="button"
            class=move || if dark_mode.get() { "theme-btn active" } else { "theme-btn" }
            title=move || if dark_mode.get() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| ctx.dispatch(Action::ToggleTheme)
        >
            {move || if dark_mode.get() { "☀" } else { "☾" }}
        </button>
    }
}
