//! Topic card for the examples gallery.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{CatalogEntry, Level, Topic};
use crate::utils::format::questions_badge;

stylance::import_crate_style!(css, "src/components/gallery/card.module.css");

fn level_class(level: Level) -> &'static str {
    match level {
        Level::Beginner => css::levelBeginner,
        Level::Intermediate => css::levelIntermediate,
        Level::Advanced => css::levelAdvanced,
    }
}

/// Selectable card showing a topic's display metadata.
///
/// # Props
/// - `entry`: Topic entry to display
/// - `on_select`: Invoked with the entry id when the card is activated
#[component]
pub fn TopicCard(entry: CatalogEntry<Topic>, on_select: Callback<String>) -> impl IntoView {
    let CatalogEntry { id, label, meta, .. } = entry;

    let aria_label = format!("Open topic: {}", label);
    let accent = meta
        .accent
        .map(|a| format!("--card-accent: {}", a))
        .unwrap_or_default();

    let id_for_key = id.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| on_select.run(id.clone());
    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" || ev.key() == " " {
            ev.prevent_default();
            on_select.run(id_for_key.clone());
        }
    };

    view! {
        <div
            class=css::card
            style=accent
            role="button"
            tabindex="0"
            aria-label=aria_label
            on:click=handle_click
            on:keydown=handle_keydown
        >
            <div class=css::head>
                <h3 class=css::title>{label}</h3>
                <div class=css::badges>
                    {meta.questions.map(|n| view! {
                        <span class=css::countBadge>{questions_badge(n)}</span>
                    })}
                    {meta.level.map(|level| view! {
                        <span class=format!("{} {}", css::levelBadge, level_class(level))>
                            {level.label()}
                        </span>
                    })}
                </div>
            </div>

            {meta.description.map(|d| view! { <p class=css::description>{d}</p> })}

            <div class=css::tags>
                {meta.tags.into_iter().map(|tag| view! { <span class=css::tag>{tag}</span> }).collect_view()}
            </div>

            <div class=css::cta>
                "Explore Questions"
                <Icon icon=ic::ARROW_RIGHT />
            </div>
        </div>
    }
}
