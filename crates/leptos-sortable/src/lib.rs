//! Leptos Sortable-List Utilities
//!
//! Pointer and keyboard reordering for flat vertical lists using mouse
//! events. Uses a movement threshold to distinguish click from drag.
//! A completed gesture is reported as an (active, over) id pair; what
//! that pair means for the underlying data is the caller's business.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Sort state signals
#[derive(Clone, Copy)]
pub struct SortSignals {
    /// Row being moved (pointer past threshold, or keyboard pick-up)
    pub active_read: ReadSignal<Option<u32>>,
    pub active_write: WriteSignal<Option<u32>>,
    /// Row currently under the gesture
    pub over_read: ReadSignal<Option<u32>>,
    pub over_write: WriteSignal<Option<u32>>,
    /// Pending row id (mousedown but not yet past the threshold)
    pub pending_read: ReadSignal<Option<u32>>,
    pub pending_write: WriteSignal<Option<u32>>,
    /// Press origin for activation-distance detection
    pub press_x_read: ReadSignal<i32>,
    pub press_x_write: WriteSignal<i32>,
    pub press_y_read: ReadSignal<i32>,
    pub press_y_write: WriteSignal<i32>,
}

/// Movement in device pixels before a press becomes a drag
const ACTIVATION_DISTANCE_PX: i32 = 8;

pub fn create_sort_signals() -> SortSignals {
    let (active_read, active_write) = signal(None::<u32>);
    let (over_read, over_write) = signal(None::<u32>);
    let (pending_read, pending_write) = signal(None::<u32>);
    let (press_x_read, press_x_write) = signal(0i32);
    let (press_y_read, press_y_write) = signal(0i32);
    SortSignals {
        active_read,
        active_write,
        over_read,
        over_write,
        pending_read,
        pending_write,
        press_x_read,
        press_x_write,
        press_y_read,
        press_y_write,
    }
}

/// Abort any gesture without emitting a drop
pub fn cancel_sort(sort: &SortSignals) {
    sort.active_write.set(None);
    sort.over_write.set(None);
    sort.pending_write.set(None);
}

/// Create mousedown handler for sortable rows.
/// Records a pending drag with the press position; presses on form
/// controls never start a drag.
pub fn make_on_pointerdown(sort: SortSignals, row_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            sort.pending_write.set(Some(row_id));
            sort.press_x_write.set(ev.client_x());
            sort.press_y_write.set(ev.client_y());
        }
    }
}

/// Create mouseenter handler for rows: marks the row as the drop target
pub fn make_on_row_mouseenter(sort: SortSignals, row_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(active) = sort.active_read.get_untracked() {
            // Dropping on self is a no-op; don't mark it
            if active != row_id {
                sort.over_write.set(Some(row_id));
            }
        }
    }
}

/// Create mouseleave handler for rows
pub fn make_on_row_mouseleave(sort: SortSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.active_read.get_untracked().is_some() {
            sort.over_write.set(None);
        }
    }
}

/// Create keydown handler for a row's drag handle.
///
/// Space/Enter picks the row up or drops it, ArrowUp/ArrowDown step the
/// drop target through the displayed order, Escape aborts. Pick-up seeds
/// the target at the row itself, so an immediate drop changes nothing.
pub fn make_on_handle_keydown<O, D>(
    sort: SortSignals,
    row_id: u32,
    display_order: O,
    on_drop: D,
) -> impl Fn(web_sys::KeyboardEvent) + Clone + 'static
where
    O: Fn() -> Vec<u32> + Clone + 'static,
    D: Fn(u32, u32) + Clone + 'static,
{
    move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        match key.as_str() {
            " " | "Enter" => {
                ev.prevent_default();
                ev.stop_propagation();
                if sort.active_read.get_untracked() == Some(row_id) {
                    let over = sort.over_read.get_untracked();
                    cancel_sort(&sort);
                    if let Some(over) = over {
                        if over != row_id {
                            on_drop(row_id, over);
                        }
                    }
                } else {
                    sort.active_write.set(Some(row_id));
                    sort.over_write.set(Some(row_id));
                }
            }
            "ArrowUp" | "ArrowDown" => {
                if sort.active_read.get_untracked() != Some(row_id) {
                    return;
                }
                ev.prevent_default();
                let delta = if key == "ArrowUp" { -1 } else { 1 };
                let current = sort.over_read.get_untracked().unwrap_or(row_id);
                if let Some(next) = step_target(&display_order(), current, delta) {
                    sort.over_write.set(Some(next));
                }
            }
            "Escape" => {
                if sort.active_read.get_untracked() == Some(row_id) {
                    cancel_sort(&sort);
                }
            }
            _ => {}
        }
    }
}

/// Id after stepping `delta` rows from `current` through `order`.
/// None at the ends and for unknown ids.
fn step_target(order: &[u32], current: u32, delta: i32) -> Option<u32> {
    let pos = order.iter().position(|&id| id == current)? as i32;
    let next = pos + delta;
    if next < 0 || next >= order.len() as i32 {
        return None;
    }
    Some(order[next as usize])
}

/// Bind the global pointer machinery: mousemove for activation-distance
/// detection, mouseup for drop commit, keydown for Escape cancel.
///
/// `on_drop(active, over)` fires only when a drag was active and ended
/// over a different row; everything else clears silently.
pub fn bind_global_pointer<D>(sort: SortSignals, on_drop: D)
where
    D: Fn(u32, u32) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = sort.pending_read.get_untracked();

        // Pending press, drag not started yet
        if pending.is_some() && sort.active_read.get_untracked().is_none() {
            let dx = (ev.client_x() - sort.press_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - sort.press_y_read.get_untracked()).abs();

            if dx >= ACTIVATION_DISTANCE_PX || dy >= ACTIVATION_DISTANCE_PX {
                sort.active_write.set(pending);
            }
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let pending = sort.pending_read.get_untracked();
        let active = sort.active_read.get_untracked();
        let over = sort.over_read.get_untracked();
        cancel_sort(&sort);

        // A keyboard gesture has no pending press; a stray click cancels it
        if pending.is_none() {
            return;
        }

        // Only an actual drag over another row commits
        if let (Some(active), Some(over)) = (active, over) {
            if active != over {
                on_drop(active, over);
            }
        }
    });

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && sort.active_read.get_untracked().is_some() {
            cancel_sort(&sort);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
    on_keydown.forget();
}
