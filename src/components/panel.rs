//! Markdown content panels.

use leptos::prelude::*;

use crate::utils::markdown_to_html;

stylance::import_crate_style!(css, "src/components/panel.module.css");

/// Renders a Markdown document as sanitized HTML.
///
/// # Props
/// - `source`: Markdown text embedded at compile time
#[component]
pub fn MarkdownPanel(source: &'static str) -> impl IntoView {
    let html = markdown_to_html(source);

    view! {
        <article class=css::panel inner_html=html />
    }
}
