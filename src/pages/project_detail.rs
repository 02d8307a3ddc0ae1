//! Project Detail Page

use leptos::prelude::*;

use crate::components::{BtnExternal, BtnLink, Card, MarkdownView, TagList};
use crate::context::AppContext;
use crate::models::Project;
use crate::routes::Route;

#[component]
pub fn ProjectDetailPage(id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    match ctx.portfolio.with_value(|p| p.find_project(&id).cloned()) {
        Some(project) => view! { <ProjectDetail project=project /> }.into_any(),
        None => {
            log::warn!("[ROUTER] no project with id {:?}", id);
            view! {
                <Card class="border-dashed text-slate-400">
                    "Project not found."
                    <div class="mt-3">
                        <BtnLink href=Route::Projects.href()>"Back to Projects"</BtnLink>
                    </div>
                </Card>
            }
            .into_any()
        }
    }
}

#[component]
fn ProjectDetail(project: Project) -> impl IntoView {
    let alt = format!("{} thumbnail", project.title);

    let go_back = move |_| {
        if let Err(err) = window().history().and_then(|h| h.back()) {
            log::error!("[ROUTER] history.back failed: {:?}", err);
        }
    };

    view! {
        <Card>
            <div class="grid items-center gap-4 md:grid-cols-[260px_1fr]">
                <img
                    src=project.thumbnail
                    alt=alt
                    class="h-44 w-full rounded-2xl border border-white/10 object-cover"
                />
                <div>
                    <h1 class="text-2xl font-extrabold">{project.title}</h1>
                    <div class="mt-1 text-slate-500">{project.date}</div>
                    <div class="mt-3">
                        <TagList tags=project.tags />
                    </div>
                </div>
            </div>

            <p class="mt-5 leading-relaxed text-slate-300">{project.summary}</p>

            <h2 class="mt-6 text-lg font-extrabold">"What I did"</h2>
            <ul class="mt-2 list-disc space-y-1 pl-6 text-slate-300">
                {project.details.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
            </ul>

            {project.notes.map(|notes| view! {
                <h2 class="mt-6 text-lg font-extrabold">"Notes"</h2>
                <MarkdownView text=notes class="mt-2 space-y-3 leading-relaxed text-slate-300" />
            })}

            <h2 class="mt-6 text-lg font-extrabold">"Links"</h2>
            <div class="mt-3 flex flex-wrap gap-2">
                {project.links.into_iter().map(|l| view! {
                    <BtnExternal href=l.url>{l.label}</BtnExternal>
                }).collect_view()}
            </div>

            <div class="mt-6">
                <button
                    class="rounded-xl border border-white/10 bg-white/5 px-3 py-2 text-sm hover:border-white/20"
                    on:click=go_back
                >
                    "← Back"
                </button>
            </div>
        </Card>
    }
}
