//! Task List Frontend App
//!
//! Hydrates state once, then renders the form, filters, list and footer.

use leptos::prelude::*;
use task_core::{Persistence, PersistenceConfig, Session};

use crate::components::{FilterBar, NewTaskForm, TaskListView, ThemeToggle};
use crate::context::AppContext;
use crate::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    // Hydrate before anything can dispatch, so no write precedes the read
    let mut persistence = Persistence::new(BrowserStorage, PersistenceConfig::default());
    let mut session = Session::new();
    session.hydrate(persistence.hydrate());
    log::info!("[APP] Started with {} tasks", session.tasks().len());

    let ctx = AppContext::new(session, persistence);
    provide_context(ctx);

    let dark_mode = Memo::new(move |_| ctx.session.with(|s| s.dark_mode()));
    let stats = Memo::new(move |_| ctx.session.with(|s| s.stats()));

    view! {
        <div class="app-layout" class:dark=move || dark_mode.get()>
            <main class="main-content">
                <header class="app-header">
                    <h1>"Todo App"</h1>
                    <ThemeToggle />
                </header>

                <NewTaskForm />
                <FilterBar />
                <TaskListView />

                <Show when=move || { stats.get().total > 0 }>
                    <p class="item-count">
                        {move || {
                            let s = stats.get();
                            format!("{} total / {} completed", s.total, s.completed)
                        }}
                    </p>
                </Show>
            </main>
        </div>
    }
}
