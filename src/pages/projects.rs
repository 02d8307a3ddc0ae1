//! Projects Page
//!
//! Searchable, date-sorted project list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Card, ProjectCard, SortToggle};
use crate::context::AppContext;
use crate::models::Project;
use crate::store::{store_set_query, ProjectListState, ProjectListStateStoreFields};
use crate::view_model::visible_projects;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Fresh state every time the page mounts
    let store = Store::new(ProjectListState::default());

    let visible = Memo::new(move |_| {
        let query = store.query().get();
        let direction = store.sort_direction().get();
        let projects = ctx.portfolio.with_value(|p| {
            visible_projects(&p.projects, &query, direction)
                .into_iter()
                .cloned()
                .collect::<Vec<Project>>()
        });
        log::debug!(
            "[PROJECTS] query={:?} order={} -> {} projects",
            query,
            direction.describe(),
            projects.len()
        );
        projects
    });

    view! {
        <Card>
            <h1 class="text-2xl font-extrabold">"Projects"</h1>
            <p class="mt-2 text-slate-400">"Click a project to view a summary page."</p>
            <div class="mt-4 flex gap-2">
                <input
                    type="search"
                    placeholder="Search projects (title, tags, summary)..."
                    class="w-full rounded-2xl border border-white/10 bg-white/5 px-4 py-3 text-slate-100 outline-none placeholder:text-slate-500"
                    prop:value=move || store.query().get()
                    on:input=move |ev| store_set_query(&store, event_target_value(&ev))
                />
                <SortToggle store=store />
            </div>
        </Card>

        <section class="mt-6 grid gap-3">
            {move || {
                let projects = visible.get();
                if projects.is_empty() {
                    view! {
                        <Card class="border-dashed text-slate-400">"No projects match your search."</Card>
                    }
                    .into_any()
                } else {
                    projects
                        .into_iter()
                        .map(|p| view! { <ProjectCard project=p show_date=true /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </section>
    }
}
