//! Todo Form Component
//!
//! Form for creating new items with category and due-date inputs.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{parse_due_date, Category};
use crate::store::{store_create_todo, use_app_store};

/// Form for creating new items
#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());
    let (category, set_category) = signal(Category::default());
    let (due_raw, set_due_raw) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() { return; }
        let due_date = parse_due_date(&due_raw.get());

        store_create_todo(&store, &text, category.get(), due_date);

        // Reset to defaults on success
        set_new_text.set(String::new());
        set_category.set(Category::default());
        set_due_raw.set(String::new());
    };

    view! {
        <form class="todo-form" on:submit=create_todo>
            <div class="todo-form-row">
                <input
                    type="text"
                    placeholder="Add a new task..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_text.set(input.value());
                    }
                />
                <button type="submit">"Add"</button>
            </div>

            <div class="category-selector-row">
                {Category::ALL.iter().map(|c| {
                    let c = *c;
                    let is_selected = move || category.get() == c;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "category-btn small active" } else { "category-btn small" }
                            on:click=move |_| set_category.set(c)
                        >
                            {c.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="due-date-row">
                <label class="due-date-label">"Due"</label>
                <input
                    type="datetime-local"
                    prop:value=move || due_raw.get()
                    on:input=move |ev| set_due_raw.set(event_target_value(&ev))
                />
            </div>
        </form>
    }
}
