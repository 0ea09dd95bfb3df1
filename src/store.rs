//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store
//! owns the single authoritative item sequence; components mutate only
//! through the helpers below, which apply the pure `list` transitions
//! and replace the sequence wholesale.

use chrono::NaiveDateTime;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::{Category, Todo};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authoritative item sequence, in display/storage order
    pub todos: Vec<Todo>,
    /// Next item id; session-unique, never reused after deletion
    pub next_id: u32,
    /// Category tab selection (None = all)
    pub filter: Option<Category>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new item; whitespace-only text is silently discarded
pub fn store_create_todo(
    store: &AppStore,
    raw_text: &str,
    category: Category,
    due_date: Option<NaiveDateTime>,
) {
    let id = store.next_id().get_untracked();
    let current = store.todos().get_untracked();
    let before = current.len();
    let next = list::create(current, id, raw_text, category, due_date);
    if next.len() == before {
        return;
    }
    *store.todos().write() = next;
    *store.next_id().write() = id + 1;
}

/// Flip `completed` on the item matching `id`
pub fn store_toggle_todo(store: &AppStore, id: u32) {
    let next = list::toggle(store.todos().get_untracked(), id);
    *store.todos().write() = next;
}

/// Remove the item matching `id`
pub fn store_remove_todo(store: &AppStore, id: u32) {
    let next = list::remove(store.todos().get_untracked(), id);
    *store.todos().write() = next;
}

/// Replace the category on the item matching `id`
pub fn store_set_category(store: &AppStore, id: u32, category: Category) {
    let next = list::set_category(store.todos().get_untracked(), id, category);
    *store.todos().write() = next;
}

/// Replace the due date on the item matching `id`; `None` clears it
pub fn store_set_due_date(store: &AppStore, id: u32, due_date: Option<NaiveDateTime>) {
    let next = list::set_due_date(store.todos().get_untracked(), id, due_date);
    *store.todos().write() = next;
}

/// Move `active_id` to `over_id`'s position in the authoritative order
pub fn store_move_todo(store: &AppStore, active_id: u32, over_id: u32) {
    let next = list::move_by_id(store.todos().get_untracked(), active_id, over_id);
    *store.todos().write() = next;
}

/// Select the category tab (None = all)
pub fn store_set_filter(store: &AppStore, selected: Option<Category>) {
    *store.filter().write() = selected;
}
