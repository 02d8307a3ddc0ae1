//! Page Shell
//!
//! Sticky header with navigation and the footer every page shares.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::routes::{Route, NAV_LINKS};

const LINK_BASE: &str = "px-3 py-2 rounded-xl text-sm border border-transparent text-slate-300 hover:text-slate-100 hover:border-white/10 hover:bg-white/5";
const LINK_ACTIVE: &str = "!text-slate-100 !border-white/10 !bg-white/5";

/// Header, main column and footer around the current page
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-950 text-slate-100">
            <Navbar />
            <main class="mx-auto w-[min(1100px,92%)] py-6">{children()}</main>
            <Footer />
        </div>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let brand = ctx.portfolio.with_value(|p| p.site.brand.clone());

    view! {
        <header class="sticky top-0 z-20 border-b border-white/10 bg-slate-950/70 backdrop-blur">
            <div class="mx-auto flex w-[min(1100px,92%)] items-center justify-between gap-3 py-3">
                <a href=Route::Home.href() class="font-extrabold tracking-tight">
                    {brand}
                </a>

                <nav class="flex flex-wrap gap-2">
                    {NAV_LINKS.iter().map(|(target, label)| {
                        let href = target.href();
                        let target = target.clone();
                        let is_active = move || ctx.route.get().nav_section().as_ref() == Some(&target);
                        view! {
                            <a
                                href=href
                                class=move || if is_active() {
                                    format!("{} {}", LINK_BASE, LINK_ACTIVE)
                                } else {
                                    LINK_BASE.to_string()
                                }
                            >
                                {*label}
                            </a>
                        }
                    }).collect_view()}
                </nav>
            </div>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (name, github, linkedin) = ctx
        .portfolio
        .with_value(|p| (p.profile.name.clone(), p.profile.github.clone(), p.profile.linkedin.clone()));
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="mt-10 border-t border-white/10 py-5 text-slate-400">
            <div class="mx-auto flex w-[min(1100px,92%)] flex-wrap items-center justify-between gap-3">
                <div>"© " {year} " " {name}</div>
                <div class="flex gap-4">
                    <a class="hover:text-slate-100" href=github target="_blank" rel="noreferrer">
                        "GitHub"
                    </a>
                    <a class="hover:text-slate-100" href=linkedin target="_blank" rel="noreferrer">
                        "LinkedIn"
                    </a>
                </div>
            </div>
        </footer>
    }
}
