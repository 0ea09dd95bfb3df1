//! Category Tabs Component
//!
//! Tab strip narrowing the list to one category, with an "All" pseudo-tab.

use leptos::prelude::*;

use crate::models::Category;
use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

/// Filter tab strip: "All" plus the four fixed categories
#[component]
pub fn CategoryTabs() -> impl IntoView {
    let store = use_app_store();

    let tabs: Vec<Option<Category>> = std::iter::once(None)
        .chain(Category::ALL.iter().copied().map(Some))
        .collect();

    view! {
        <div class="category-tabs">
            <For
                each=move || tabs.clone()
                key=|tab| tab.map(|c| c.as_str()).unwrap_or("all")
                children=move |tab| {
                    let label = tab.map(|c| c.label()).unwrap_or("All");
                    let is_active = move || store.filter().get() == tab;
                    let tab_class = move || {
                        if is_active() { "category-tab active" } else { "category-tab" }
                    };

                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| store_set_filter(&store, tab)
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}
