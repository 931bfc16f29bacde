//! Task List View Component
//!
//! Displays the filtered tasks with drag-and-drop reordering.
//! Rows are keyed by their full-list index, so a drop under a filter moves
//! tasks in the underlying list.

use leptos::prelude::*;
use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, make_on_item_mouseenter, make_on_mousedown,
    make_on_mouseleave, Gesture,
};
use task_core::{Action, DragEvent};

use crate::components::TaskRow;
use crate::context::AppContext;

fn to_drag_event(gesture: Gesture) -> DragEvent {
    match gesture {
        Gesture::Start(index) => DragEvent::Start(index),
        Gesture::Enter(index) => DragEvent::Over(index),
        Gesture::Leave => DragEvent::Leave,
        Gesture::Release => DragEvent::Drop,
        Gesture::Cancel => DragEvent::Cancel,
    }
}

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let dnd = create_dnd_signals();
    let on_gesture = move |gesture: Gesture| {
        log::debug!("[DND] {:?}", gesture);
        ctx.dispatch(Action::Drag(to_drag_event(gesture)));
    };
    bind_global_mouseup(dnd, on_gesture);

    let entries = Memo::new(move |_| ctx.session.with(|s| s.visible_entries()));
    let list_is_empty = Memo::new(move |_| ctx.session.with(|s| s.tasks().is_empty()));
    let drag = Memo::new(move |_| ctx.session.with(|s| s.drag()));

    let empty_hint = move || {
        if !entries.get().is_empty() {
            return None;
        }
        let text = if list_is_empty.get() {
            "No tasks yet. Add one above!"
        } else {
            "Nothing to show for this filter."
        };
        Some(view! { <p class="empty-hint">{text}</p> })
    };

    view! {
        <div class="task-list" class:dragging=move || drag.get().is_dragging()>
            {empty_hint}

            <For
                each=move || entries.get()
                // Include mutable fields so toggles re-render the row
                key=|(index, task)| (*index, task.id, task.completed)
                children=move |(index, task)| {
                    let on_mousedown = make_on_mousedown(dnd, index);
                    let on_mouseenter = make_on_item_mouseenter(dnd, index, on_gesture);
                    let on_mouseleave = make_on_mouseleave(dnd, on_gesture);

                    // Visual state
                    let is_dragging = move || drag.get().source() == Some(index);
                    let is_drop_target = move || {
                        let state = drag.get();
                        state.hover() == Some(index) && state.source() != Some(index)
                    };

                    let item_class = move || {
                        let mut c = String::from("task-wrapper");
                        if is_dragging() { c.push_str(" dragging"); }
                        if is_drop_target() { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <div
                            class=item_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            <TaskRow task=task />
                        </div>
                    }
                }
            />
        </div>
    }
}
