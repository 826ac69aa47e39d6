//! Topic gallery router.
//!
//! Starts unselected and shows every topic as a card. Choosing a card drills
//! into its panel; "Back to Topics" returns to the gallery. The selection is
//! local to this component, so leaving the examples section resets it.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_icons::Icon;

use super::TopicCard;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::panel::MarkdownPanel;
use crate::models::{Catalog, GallerySelection, GalleryView, PanelKey, Section, Topic};
use crate::utils::format::questions_badge;

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

/// Nested router for the examples section.
#[component]
pub fn TopicGallery() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let topics = ctx.catalogs.topics;

    let selection = RwSignal::new(GallerySelection::default());

    // `None` while the gallery is shown
    let open_topic = {
        let topics = topics.clone();
        Memo::new(move |_| {
            selection.with(|s| match s.resolve(&topics) {
                GalleryView::Gallery => None,
                GalleryView::Panel(entry) => Some(entry.panel),
            })
        })
    };

    let on_select = Callback::new(move |id: String| {
        log::debug!("topic: open {id}");
        selection.update(|s| s.select(id));
    });

    let go_back = Callback::new(move |_: ()| {
        log::debug!("topic: back to gallery");
        selection.update(GallerySelection::go_back);
    });

    view! {
        <div class=css::gallery>
            {move || match open_topic.get() {
                None => view! {
                    <GalleryIndex catalog=topics.clone() on_select=on_select />
                }
                .into_any(),
                Some(topic) => view! {
                    <TopicView topic=topic on_back=go_back />
                }
                .into_any(),
            }}
        </div>
    }
}

/// A single topic with the back affordance.
#[component]
fn TopicView(topic: Topic, on_back: Callback<()>) -> impl IntoView {
    view! {
        <div class=css::topic>
            <button class=css::backButton on:click=move |_| on_back.run(())>
                <Icon icon=ic::CHEVRON_LEFT />
                "Back to Topics"
            </button>
            <MarkdownPanel source=topic.source() />
        </div>
    }
}

/// Gallery of topic cards with summary and study notes.
#[component]
fn GalleryIndex(catalog: Arc<Catalog<Topic>>, on_select: Callback<String>) -> impl IntoView {
    let total_questions = catalog.total_questions();
    let categories = catalog.len();

    let cards = catalog
        .entries()
        .iter()
        .map(|entry| view! { <TopicCard entry=entry.clone() on_select=on_select /> })
        .collect_view();

    view! {
        <header class=css::intro>
            <MarkdownPanel source=Section::Examples.source() />
        </header>

        <section class=css::summary>
            <h3 class=css::summaryTitle>"What's Inside?"</h3>
            <div class=css::stats>
                <div class=css::stat>
                    <strong class=css::statValue>{format!("{}+", total_questions)}</strong>
                    <span>"Interview Questions"</span>
                </div>
                <div class=css::stat>
                    <strong class=css::statValue>{categories}</strong>
                    <span>"Topic Categories"</span>
                </div>
                <div class=css::stat>
                    <strong class=css::statValue>{questions_badge(total_questions)}</strong>
                    <span>"With Answers"</span>
                </div>
            </div>
        </section>

        <div class=css::grid>{cards}</div>

        <section class=css::howTo>
            <h3>"How to Use This Section"</h3>
            <ol>
                <li><strong>"Click on any topic card"</strong>" above to see its interview questions"</li>
                <li><strong>"Each question includes"</strong>" a short answer, key points and code snippets"</li>
                <li><strong>"Use the \"Back to Topics\" button"</strong>" to return to this page"</li>
            </ol>
        </section>

        <section class=css::tips>
            <h3 class=css::tipsTitle>
                <Icon icon=ic::TIP />
                "Quick Tips for Interview Success"
            </h3>
            <div class=css::tipGrid>
                <Tip title="Understand, don't memorize">
                    "Focus on understanding concepts rather than memorizing code"
                </Tip>
                <Tip title="Practice explaining">
                    "Explain concepts out loud as if teaching someone"
                </Tip>
                <Tip title="Know the \"why\"">
                    "Understand why a pattern or solution is recommended"
                </Tip>
                <Tip title="Hands-on practice">
                    "Build projects to reinforce concepts and gain real experience"
                </Tip>
            </div>
        </section>
    }
}

#[component]
fn Tip(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=css::tip>
            <strong>{title}</strong>
            <p>{children()}</p>
        </div>
    }
}
