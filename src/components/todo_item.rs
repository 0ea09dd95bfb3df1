//! Todo Row Component
//!
//! A single item row: checkbox, text, category and due-date badges with
//! inline editors, and a delete button.

use leptos::prelude::*;

use crate::components::CategorySelect;
use crate::models::{due_date_input_value, due_date_label, parse_due_date, Todo};
use crate::store::{
    store_remove_todo, store_set_category, store_set_due_date, store_toggle_todo, use_app_store,
};

/// A single to-do row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let category = todo.category;
    let due_date = todo.due_date;
    let text = todo.text.clone();

    // Per-field viewing/editing toggles; entered by click, left on
    // commit or focus loss.
    let (editing_category, set_editing_category) = signal(false);
    let (editing_due, set_editing_due) = signal(false);

    view! {
        <div class=move || if completed { "todo-row completed" } else { "todo-row" }>
            // Checkbox
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| store_toggle_todo(&store, id)
            />

            // Text
            <span class="todo-text">{text}</span>

            // Category badge / inline selector
            {move || if editing_category.get() {
                view! {
                    <CategorySelect
                        current=category
                        on_change=move |c| {
                            store_set_category(&store, id, c);
                            set_editing_category.set(false);
                        }
                    />
                }.into_any()
            } else {
                view! {
                    <button
                        class=move || format!("category-badge {}", category.as_str())
                        on:click=move |_| set_editing_category.set(true)
                    >
                        {category.label()}
                    </button>
                }.into_any()
            }}

            // Due-date badge / inline picker
            {move || if editing_due.get() {
                view! {
                    <span class="due-edit">
                        <input
                            type="datetime-local"
                            prop:value=due_date_input_value(due_date)
                            on:change=move |ev| {
                                store_set_due_date(&store, id, parse_due_date(&event_target_value(&ev)));
                                set_editing_due.set(false);
                            }
                            on:blur=move |_| set_editing_due.set(false)
                        />
                        // mousedown, so the input's blur doesn't swallow the click
                        <button
                            class="due-clear-btn"
                            on:mousedown=move |ev: web_sys::MouseEvent| {
                                ev.prevent_default();
                                store_set_due_date(&store, id, None);
                                set_editing_due.set(false);
                            }
                        >
                            "Clear"
                        </button>
                    </span>
                }.into_any()
            } else {
                view! {
                    <button
                        class=move || if due_date.is_some() { "due-badge" } else { "due-badge empty" }
                        on:click=move |_| set_editing_due.set(true)
                    >
                        {move || due_date.map(due_date_label).unwrap_or_else(|| "No due date".to_string())}
                    </button>
                }.into_any()
            }}

            // Delete button
            <button class="delete-btn" on:click=move |_| store_remove_todo(&store, id)>"×"</button>
        </div>
    }
}
