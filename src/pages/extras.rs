//! Extras Page
//!
//! Workshops and excursions outside the classroom.

use leptos::prelude::*;

use crate::components::{Card, TagList};
use crate::context::AppContext;

#[component]
pub fn ExtrasPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (workshops, excursions) = ctx
        .portfolio
        .with_value(|p| (p.workshops.clone(), p.excursions.clone()));

    view! {
        <div class="grid gap-6">
            <Card>
                <h1 class="text-2xl font-extrabold">"Additional Experience"</h1>
                <p class="mt-2 text-slate-400">"Workshops and learning experiences outside the classroom."</p>
            </Card>

            <section>
                <h2 class="text-xl font-extrabold">"Workshops"</h2>
                <div class="mt-3 grid gap-3 sm:grid-cols-2 lg:grid-cols-3">
                    {workshops.into_iter().map(|w| view! {
                        <Card class="flex flex-col gap-3">
                            <div>
                                <div class="font-extrabold">{w.title}</div>
                                <div class="mt-1 text-sm text-slate-400">{w.date}</div>
                            </div>
                            <p class="text-sm text-slate-300">{w.description}</p>
                            <div class="mt-auto">
                                <TagList tags=w.tags />
                            </div>
                        </Card>
                    }).collect_view()}
                </div>
            </section>

            <section>
                <h2 class="text-xl font-extrabold">"Excursions"</h2>
                <p class="mt-1 text-sm text-slate-400">
                    "Educational visits with my class to explore real-world IT environments."
                </p>
                <div class="mt-3 grid gap-3 sm:grid-cols-2 lg:grid-cols-3">
                    {excursions.into_iter().map(|e| view! {
                        <Card>
                            <div class="font-extrabold">{e.title}</div>
                            <div class="mt-2 text-sm text-slate-400">{e.description}</div>
                        </Card>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
