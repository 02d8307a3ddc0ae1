//! Markdown View Component

use leptos::prelude::*;

use crate::markdown::render_markdown;

/// Renders trusted markdown from the portfolio document
#[component]
pub fn MarkdownView(
    #[prop(into)] text: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let html = render_markdown(&text);
    view! {
        <div class=format!("markdown {}", class) inner_html=html></div>
    }
}
