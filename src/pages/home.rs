//! Home Page
//!
//! Profile intro, skills, and sneak peeks of certifications and projects.

use leptos::prelude::*;

use crate::components::{BtnExternal, BtnLink, Card, MarkdownView, ProjectCard, SkillBar};
use crate::context::AppContext;
use crate::models::{Certification, Profile, Project, Skill};
use crate::routes::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (profile, skills, cert_peek, project_peek) = ctx.portfolio.with_value(|p| {
        (
            p.profile.clone(),
            p.skills.clone(),
            p.certification_peek().into_iter().cloned().collect::<Vec<Certification>>(),
            p.project_peek().to_vec(),
        )
    });
    let cv_url = profile.cv_url.clone();

    view! {
        <ProfileSection profile=profile />
        <SkillsSection skills=skills />
        <CertificationPeek certifications=cert_peek />
        <ProjectPeek projects=project_peek />

        <section class="mt-7">
            <Card class="flex flex-wrap items-center justify-between gap-3">
                <div>
                    <div class="text-lg font-extrabold">"Curriculum Vitae"</div>
                    <div class="text-slate-400">"PDF format"</div>
                </div>
                <BtnExternal href=cv_url>"View CV"</BtnExternal>
            </Card>
        </section>
    }
}

#[component]
fn ProfileSection(profile: Profile) -> impl IntoView {
    let avatar = profile.avatar_url.clone();

    view! {
        <section class="grid gap-4 md:grid-cols-[1.4fr_.6fr]">
            <Card>
                <h1 class="text-3xl font-extrabold tracking-tight">{profile.name}</h1>
                <div class="mt-1 text-slate-400">
                    {profile.title} " • " {profile.location}
                </div>

                <div class="mt-4 rounded-2xl border border-white/10 bg-slate-900/40 p-4">
                    <div class="font-bold">"About Me"</div>
                    <MarkdownView text=profile.about class="mt-2 leading-relaxed text-slate-300" />
                </div>

                <div class="mt-4 flex flex-wrap gap-2">
                    <BtnLink href=Route::Projects.href()>"View Projects"</BtnLink>
                    <BtnLink href=Route::Certifications.href()>"View Certifications"</BtnLink>
                    <BtnExternal href=profile.cv_url>"View CV (PDF)"</BtnExternal>
                </div>
            </Card>

            <Card>
                <div class="text-slate-400">"Profile"</div>
                <img
                    src=avatar
                    alt="profile"
                    class="mt-3 h-56 w-full rounded-2xl border border-white/10 object-cover"
                />
            </Card>
        </section>
    }
}

#[component]
fn SkillsSection(skills: Vec<Skill>) -> impl IntoView {
    view! {
        <section class="mt-7">
            <h2 class="text-xl font-extrabold">"Skills"</h2>
            <div class="mt-3 grid gap-3 sm:grid-cols-2 lg:grid-cols-3">
                {skills.into_iter().map(|skill| view! { <SkillBar skill=skill /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CertificationPeek(certifications: Vec<Certification>) -> impl IntoView {
    view! {
        <section class="mt-7">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <h2 class="text-xl font-extrabold">"Certifications (Sneak Peek)"</h2>
                <BtnLink href=Route::Certifications.href()>"See all"</BtnLink>
            </div>
            <div class="mt-3 grid gap-3 sm:grid-cols-2 lg:grid-cols-4">
                {certifications.into_iter().map(|c| view! {
                    <Card>
                        <div class="font-bold">{c.title}</div>
                        <div class="mt-2 text-sm text-slate-400">{c.issuer} " • " {c.date}</div>
                    </Card>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectPeek(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section class="mt-7">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <h2 class="text-xl font-extrabold">"Projects (Sneak Peek)"</h2>
                <BtnLink href=Route::Projects.href()>"See all"</BtnLink>
            </div>
            <div class="mt-3 grid gap-3">
                {projects.into_iter().map(|p| view! { <ProjectCard project=p /> }).collect_view()}
            </div>
        </section>
    }
}
