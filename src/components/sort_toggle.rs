//! Sort Toggle Component
//!
//! Button flipping the project list between newest-first and oldest-first.
//! The label names the order a click switches to; the tooltip names the
//! current one.

use leptos::prelude::*;

use crate::store::{store_toggle_sort, ProjectListStateStoreFields, ProjectListStore};

#[component]
pub fn SortToggle(store: ProjectListStore) -> impl IntoView {
    let direction = move || store.sort_direction().get();

    view! {
        <button
            type="button"
            class="shrink-0 rounded-2xl border border-white/10 bg-white/5 px-4 py-3 text-sm hover:border-white/20"
            title=move || format!("Currently sorted {}", direction().describe())
            on:click=move |_| {
                store_toggle_sort(&store);
                log::debug!("[PROJECTS] sort is now {}", store.sort_direction().get().describe());
            }
        >
            {move || direction().toggle_label()}
        </button>
    }
}
