//! Main shell component.
//!
//! Hosts the top-level section router: header, navigation bar, the panel of
//! the resolved section, and the footer.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::gallery::TopicGallery;
use super::icons as ic;
use super::nav::SectionNav;
use super::panel::MarkdownPanel;
use crate::app::AppContext;
use crate::config::{APP_FOOTER, APP_NAME, APP_TAGLINE};
use crate::models::{PanelKey, Section, TabSelection};

stylance::import_crate_style!(css, "src/components/shell.module.css");

/// Render the panel of a resolved section.
fn section_panel(section: Section) -> AnyView {
    if section.is_gallery() {
        view! { <TopicGallery /> }.into_any()
    } else {
        view! { <MarkdownPanel source=section.source() /> }.into_any()
    }
}

/// Shell component owning the section selection.
///
/// The selection starts at the catalog default and lives as long as the
/// shell. Only a change of the resolved section rebuilds the panel, so
/// re-selecting the active section is a no-op for the view.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let sections = ctx.catalogs.sections;

    let selection = RwSignal::new(TabSelection::new(&sections));

    let active = {
        let sections = sections.clone();
        Memo::new(move |_| selection.with(|s| s.resolve(&sections).panel))
    };

    view! {
        <div class=css::app>
            <header class=css::header>
                <h1 class=css::title>
                    <span class=css::titleIcon><Icon icon=ic::BOOK /></span>
                    {APP_NAME}
                </h1>
                <p class=css::tagline>{APP_TAGLINE}</p>
            </header>

            <SectionNav catalog=sections selection=selection />

            <main class=css::container>
                {move || section_panel(active.get())}
            </main>

            <footer class=css::footer>
                <p>{APP_FOOTER}</p>
            </footer>
        </div>
    }
}
