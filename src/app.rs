//! Root application module.
//!
//! Contains the main App component and the AppContext shared with every
//! component below it.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::Shell;
use crate::config::COMPACT_NAV_QUERY;
use crate::core::{Catalogs, load_catalogs};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`. Holds only read-only data and derived
/// signals; each router owns its own selection state.
#[derive(Clone)]
pub struct AppContext {
    /// Section and topic catalogs, built once at startup.
    pub catalogs: Catalogs,

    /// True on narrow viewports, where navigation uses short labels.
    pub compact_nav: Signal<bool>,
}

impl AppContext {
    /// Creates the context from loaded catalogs.
    ///
    /// Must be called inside a reactive owner since it registers a media
    /// query listener.
    pub fn new(catalogs: Catalogs) -> Self {
        Self {
            catalogs,
            compact_nav: use_media_query(COMPACT_NAV_QUERY),
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the embedded catalogs and provides the AppContext
/// - Wraps the app in an ErrorBoundary that reports catalog defects
/// - Renders the Shell component
#[component]
pub fn App() -> impl IntoView {
    let shell = load_catalogs().map(|catalogs| {
        provide_context(AppContext::new(catalogs));
        view! { <Shell /> }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: #20232a;
                    color: #e6e6e6;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a0a0a0; margin-bottom: 2rem;">
                            "The tutorial catalog could not be loaded."
                        </p>
                        <details style="
                            text-align: left;
                            background: #282c34;
                            padding: 1rem;
                            border-radius: 6px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #8b949e;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #ff6b6b;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #61dafb;
                                color: #20232a;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 6px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {shell}
        </ErrorBoundary>
    }
}
