//! Certifications Page
//!
//! Certifications grouped by issuer, then badges.

use leptos::prelude::*;

use crate::components::{BtnExternal, Card};
use crate::context::AppContext;
use crate::models::{Badge, CertificationGroup};

#[component]
pub fn CertificationsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (groups, badges) = ctx
        .portfolio
        .with_value(|p| (p.certifications.clone(), p.badges.clone()));
    let group_names = groups
        .iter()
        .map(|g| g.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <Card>
            <h1 class="text-2xl font-extrabold">"Certifications"</h1>
            <p class="mt-2 text-slate-400">"Grouped into " {group_names} "."</p>
        </Card>

        <div class="mt-6 grid gap-6">
            {groups.into_iter().map(|group| view! { <GroupSection group=group /> }).collect_view()}
            {(!badges.is_empty()).then(|| view! { <BadgeSection badges=badges /> })}
        </div>
    }
}

#[component]
fn GroupSection(group: CertificationGroup) -> impl IntoView {
    let body = if group.items.is_empty() {
        view! {
            <Card class="border-dashed text-slate-400">"No certifications added yet."</Card>
        }
        .into_any()
    } else {
        group
            .items
            .into_iter()
            .map(|c| {
                view! {
                    <Card class="flex flex-col gap-3">
                        <div>
                            <div class="font-extrabold">{c.title}</div>
                            <div class="mt-1 text-sm text-slate-400">{c.issuer} " • " {c.date}</div>
                        </div>
                        <div>
                            <BtnExternal href=c.credential_url>"View Credential"</BtnExternal>
                        </div>
                    </Card>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section>
            <h2 class="text-xl font-extrabold">{group.title}</h2>
            <div class="mt-3 grid gap-3 sm:grid-cols-2 lg:grid-cols-3">{body}</div>
        </section>
    }
}

#[component]
fn BadgeSection(badges: Vec<Badge>) -> impl IntoView {
    view! {
        <section>
            <h2 class="text-xl font-extrabold">"Badges"</h2>
            <div class="mt-3 grid gap-3 sm:grid-cols-2 lg:grid-cols-3">
                {badges.into_iter().map(|b| {
                    let alt = format!("{} badge", b.title);
                    view! {
                        <Card class="flex items-center gap-4">
                            <img src=b.image_url alt=alt class="h-16 w-16 shrink-0 object-contain" />
                            <div class="flex flex-col gap-2">
                                <div class="font-extrabold">{b.title}</div>
                                <div class="text-sm text-slate-400">{b.issuer} " • " {b.date}</div>
                                <div>
                                    <BtnExternal href=b.credential_url>"View Credential"</BtnExternal>
                                </div>
                            </div>
                        </Card>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
