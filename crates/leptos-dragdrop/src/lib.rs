//! Leptos DragDrop Utilities
//!
//! Simple list reordering for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, and reports
//! gestures by row index so the caller owns the reorder decision.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Gesture notifications sent to the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Pointer moved past the threshold while pressed on this row
    Start(usize),
    /// Pointer entered this row during a drag
    Enter(usize),
    /// Pointer left the hovered row during a drag
    Leave,
    /// Button released during a drag
    Release,
    /// Drag abandoned (Escape)
    Cancel,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub active_read: ReadSignal<bool>,
    pub active_write: WriteSignal<bool>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_index_read: ReadSignal<Option<usize>>,
    pub pending_index_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether the pointer has moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals() -> DndSignals {
    let (active_read, active_write) = signal(false);
    let (pending_index_read, pending_index_write) = signal(None::<usize>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        active_read,
        active_write,
        pending_index_read,
        pending_index_write,
        start_read,
        start_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.active_write.set(false);
    dnd.pending_index_write.set(None);
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Checkboxes and buttons keep their own click behaviour
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_index_write.set(Some(index));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for rows (become hover target)
pub fn make_on_item_mouseenter<F>(dnd: DndSignals, index: usize, on_gesture: F) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    F: Fn(Gesture) + Copy + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.active_read.get_untracked() {
            on_gesture(Gesture::Enter(index));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<F>(dnd: DndSignals, on_gesture: F) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    F: Fn(Gesture) + Copy + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.active_read.get_untracked() {
            on_gesture(Gesture::Leave);
        }
    }
}

fn add_document_listener(event: &str, listener: &wasm_bindgen::JsValue) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, listener.unchecked_ref());
    }
}

/// Bind document mousemove - starts drag if moved enough
pub fn bind_global_mousemove<F>(dnd: DndSignals, on_gesture: F)
where
    F: Fn(Gesture) + Clone + 'static,
{
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.active_read.get_untracked() {
            return;
        }
        let Some(index) = dnd.pending_index_read.get_untracked() else {
            return;
        };
        if exceeds_threshold(dnd.start_read.get_untracked(), (ev.client_x(), ev.client_y())) {
            dnd.active_write.set(true);
            on_gesture(Gesture::Start(index));
        }
    });
    add_document_listener("mousemove", on_mousemove.as_ref());
    on_mousemove.forget();
}

/// Bind document keydown - Escape cancels an active drag
pub fn bind_global_keydown<F>(dnd: DndSignals, on_gesture: F)
where
    F: Fn(Gesture) + Clone + 'static,
{
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && dnd.active_read.get_untracked() {
            end_drag(&dnd);
            on_gesture(Gesture::Cancel);
        }
    });
    add_document_listener("keydown", on_keydown.as_ref());
    on_keydown.forget();
}

/// Bind global mouseup handler for drop detection.
/// Also binds the mousemove and keydown listeners.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_gesture: F)
where
    F: Fn(Gesture) + Clone + 'static,
{
    let on_release = on_gesture.clone();
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let was_dragging = dnd.active_read.get_untracked();
        end_drag(&dnd);
        // A plain click never started a gesture, so there is nothing to drop
        if was_dragging {
            on_release(Gesture::Release);
        }
    });
    add_document_listener("mouseup", on_mouseup.as_ref());
    on_mouseup.forget();

    bind_global_mousemove(dnd, on_gesture.clone());
    bind_global_keydown(dnd, on_gesture);
}
