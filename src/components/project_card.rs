//! Project Card Component
//!
//! Clickable project summary linking to the detail page.

use leptos::prelude::*;

use crate::components::TagList;
use crate::models::Project;
use crate::routes::Route;

#[component]
pub fn ProjectCard(
    project: Project,
    /// Show the project date next to the title
    #[prop(optional)]
    show_date: bool,
) -> impl IntoView {
    let href = Route::Project(project.id.clone()).href();
    let alt = format!("{} thumbnail", project.title);
    let date = show_date.then(|| project.date.clone());
    let columns = if show_date { "md:grid-cols-[160px_1fr]" } else { "md:grid-cols-[140px_1fr]" };

    view! {
        <a
            href=href
            class=format!("grid overflow-hidden rounded-2xl border border-white/10 bg-white/[0.03] transition hover:border-white/20 {}", columns)
        >
            <img src=project.thumbnail alt=alt class="h-full w-full object-cover" />
            <div class="p-4">
                <div class="flex flex-wrap items-start justify-between gap-2">
                    <div class="font-extrabold">{project.title}</div>
                    {date.map(|d| view! { <div class="text-sm text-slate-500">{d}</div> })}
                </div>
                <div class="mt-1 text-sm text-slate-400">{project.summary}</div>
                <div class="mt-3">
                    <TagList tags=project.tags />
                </div>
            </div>
        </a>
    }
}
