//! Portfolio App
//!
//! Root component: tracks the hash route and renders the matching page
//! inside the shared shell.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{Card, Layout};
use crate::context::AppContext;
use crate::models::Portfolio;
use crate::pages::{
    CertificationsPage, ContactPage, ExtrasPage, HomePage, NotFoundPage, ProjectDetailPage,
    ProjectsPage,
};
use crate::routes::{route_change, Route};

/// Current `location.hash`, empty when unavailable
fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

#[component]
pub fn App(portfolio: Portfolio) -> impl IntoView {
    let (route, set_route) = signal(Route::from_hash(&current_hash()));

    // Provide context to all children
    provide_context(AppContext::new(portfolio, route));

    let _hashchange = window_event_listener(ev::hashchange, move |_| {
        // `#/projects` and `#/projects/` are the same page; keep its state
        let Some(next) = route_change(&route.get_untracked(), &current_hash()) else {
            return;
        };
        log::debug!("[ROUTER] -> {:?}", next);
        set_route.set(next);
        window().scroll_to_with_x_and_y(0.0, 0.0);
    });

    view! {
        <Layout>
            {move || match route.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Certifications => view! { <CertificationsPage /> }.into_any(),
                Route::Projects => view! { <ProjectsPage /> }.into_any(),
                Route::Project(id) => view! { <ProjectDetailPage id=id /> }.into_any(),
                Route::Extras => view! { <ExtrasPage /> }.into_any(),
                Route::Contact => view! { <ContactPage /> }.into_any(),
                Route::NotFound => view! { <NotFoundPage /> }.into_any(),
            }}
        </Layout>
    }
}

/// Shown instead of the app when the portfolio document cannot be loaded
#[component]
pub fn LoadError(message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-950 p-6 text-slate-100">
            <Card class="border-dashed text-slate-400">
                <div class="font-extrabold text-slate-100">"This portfolio failed to load."</div>
                <pre class="mt-3 whitespace-pre-wrap text-sm">{message}</pre>
            </Card>
        </div>
    }
}
