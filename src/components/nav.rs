//! Section navigation bar.
//!
//! One button per catalog entry; the button of the resolved section is
//! marked active. On compact viewports the ordinal prefix of each label is
//! dropped.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::{Catalog, CatalogEntry, Section, TabSelection};
use crate::utils::format::short_label;

stylance::import_crate_style!(css, "src/components/nav.module.css");

/// Navigation bar for the top-level section router.
///
/// # Props
/// - `catalog`: Sections to list, in display order
/// - `selection`: Router state owned by the parent shell
#[component]
pub fn SectionNav(
    catalog: Arc<Catalog<Section>>,
    selection: RwSignal<TabSelection>,
) -> impl IntoView {
    let tabs = catalog
        .entries()
        .iter()
        .map(|entry| {
            view! { <SectionTab entry=entry.clone() catalog=catalog.clone() selection=selection /> }
        })
        .collect_view();

    view! {
        <nav class=css::navigation aria-label="Sections">
            {tabs}
        </nav>
    }
}

#[component]
fn SectionTab(
    entry: CatalogEntry<Section>,
    catalog: Arc<Catalog<Section>>,
    selection: RwSignal<TabSelection>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let CatalogEntry { id, label, .. } = entry;
    let id_for_active = id.clone();

    let is_active =
        Memo::new(move |_| selection.with(|s| s.is_active(&catalog, &id_for_active)));

    let handle_click = move |_: leptos::ev::MouseEvent| {
        let previous = selection.with_untracked(|s| s.id().to_string());
        log::debug!("section: {previous} -> {id}");
        selection.update(|s| s.select(id.clone()));
    };

    let text = move || {
        if ctx.compact_nav.get() {
            short_label(&label).to_string()
        } else {
            label.clone()
        }
    };

    let class = move || {
        if is_active.get() {
            format!("{} {}", css::tab, css::active)
        } else {
            css::tab.to_string()
        }
    };

    view! {
        <button
            class=class
            on:click=handle_click
            aria-pressed=move || is_active.get().to_string()
        >
            {text}
        </button>
    }
}
