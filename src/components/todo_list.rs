//! Todo List Component
//!
//! Renders the derived (filtered + sorted) view and hosts pointer and
//! keyboard reordering over it, via leptos-sortable.

use leptos::prelude::*;

use leptos_sortable::*;

use crate::components::TodoRow;
use crate::list;
use crate::store::{store_move_todo, use_app_store, AppStateStoreFields};

/// List view with reorder support
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    // Create sort signals
    let sort = create_sort_signals();

    // Bind global pointer handlers. A drop only picks the (active, over)
    // pair from the displayed view; the move itself is applied to the
    // authoritative sequence.
    bind_global_pointer(sort, move |active_id, over_id| {
        web_sys::console::log_1(&format!("[DND] drop: active={}, over={}", active_id, over_id).into());
        store_move_todo(&store, active_id, over_id);
    });

    let visible_todos = move || list::visible(&store.todos().get(), store.filter().get());
    let visible_ids = move || visible_todos().iter().map(|t| t.id).collect::<Vec<_>>();

    view! {
        <ul class="todo-list">
            <For
                each=visible_todos
                key=|todo| {
                    // Tuple of all mutable fields so changes cause re-render
                    (
                        todo.id,
                        todo.text.clone(),
                        todo.completed,
                        todo.category,
                        todo.due_date,
                    )
                }
                children=move |todo| {
                    let id = todo.id;

                    // DnD handlers
                    let on_mousedown = make_on_pointerdown(sort, id);
                    let on_mouseenter = make_on_row_mouseenter(sort, id);
                    let on_mouseleave = make_on_row_mouseleave(sort);
                    let on_handle_keydown = make_on_handle_keydown(sort, id, visible_ids, move |active_id, over_id| {
                        web_sys::console::log_1(&format!("[DND] keyboard drop: active={}, over={}", active_id, over_id).into());
                        store_move_todo(&store, active_id, over_id);
                    });

                    // Visual state
                    let is_dragging = move || sort.active_read.get() == Some(id);
                    let is_drop_target = move || {
                        sort.over_read.get() == Some(id) && sort.active_read.get() != Some(id)
                    };

                    let row_class = move || {
                        let mut c = String::from("todo-row-wrapper");
                        if is_dragging() { c.push_str(" dragging"); }
                        if is_drop_target() { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <li
                            class=row_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            // Focusable span, not a button: buttons are exempt
                            // from pointer-drag activation
                            <span
                                class="drag-handle"
                                tabindex="0"
                                role="button"
                                title="Drag to reorder; Space then arrows with the keyboard"
                                on:keydown=on_handle_keydown
                            >
                                "⠿"
                            </span>
                            <TodoRow todo=todo />
                        </li>
                    }
                }
            />
        </ul>
    }
}
