//! Card Components
//!
//! Bordered panels and the small pills/buttons placed inside them.

use leptos::prelude::*;

const CARD_BASE: &str = "rounded-2xl border border-white/10 bg-white/[0.03] p-4 shadow-[0_10px_30px_rgba(0,0,0,0.25)]";
const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 rounded-xl border border-white/10 bg-white/5 px-3 py-2 text-sm hover:border-white/20";

/// Bordered panel
#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("{} {}", CARD_BASE, class)>{children()}</div>
    }
}

/// Rounded tag pill
#[component]
pub fn TagChip(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class="rounded-full border border-white/10 bg-white/[0.02] px-2.5 py-1 text-xs text-slate-300">
            {label}
        </span>
    }
}

/// Row of tag pills
#[component]
pub fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags.into_iter().map(|t| view! { <TagChip label=t /> }).collect_view()}
        </div>
    }
}

/// Button-styled link inside the app
#[component]
pub fn BtnLink(#[prop(into)] href: String, children: Children) -> impl IntoView {
    view! {
        <a href=href class=BUTTON_BASE>{children()}</a>
    }
}

/// Button-styled link opening in a new tab
#[component]
pub fn BtnExternal(#[prop(into)] href: String, children: Children) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noreferrer" class=BUTTON_BASE>{children()}</a>
    }
}
