use leptos::prelude::*;

use crate::components::{BtnLink, Card};
use crate::routes::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Card class="border-dashed text-slate-400">
            "Page not found."
            <div class="mt-3">
                <BtnLink href=Route::Home.href()>"Go Home"</BtnLink>
            </div>
        </Card>
    }
}
