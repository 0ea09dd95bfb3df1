//! Todo Frontend App
//!
//! Top-level application component. Owns the store and passes it to
//! children via context; all mutations flow back through the store
//! helpers.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategoryTabs, TodoForm, TodoList};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());

    // Provide the store to all children
    provide_context(store);

    let count = move || store.todos().get().len();

    view! {
        <div class="todo-app">
            <h1>"My Todo List"</h1>

            <TodoForm />

            <CategoryTabs />

            <TodoList />

            {move || if count() == 0 {
                view! {
                    <p class="empty-state">"No tasks yet. Add one above."</p>
                }.into_any()
            } else {
                view! {
                    <p class="item-count">{move || format!("{} items", count())}</p>
                }.into_any()
            }}
        </div>
    }
}
