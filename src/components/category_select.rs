//! Category Select Component
//!
//! Reusable category selector buttons.

use leptos::prelude::*;

use crate::models::Category;

/// Category selector buttons for a single item
#[component]
pub fn CategorySelect(
    current: Category,
    on_change: impl Fn(Category) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="category-select">
            {Category::ALL.iter().map(|c| {
                let c = *c;
                view! {
                    <button
                        class=move || if current == c { "category-btn active" } else { "category-btn" }
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_change(c);
                        }
                    >
                        {c.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
