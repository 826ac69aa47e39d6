//! Top-level tutorial sections.
//!
//! Each variant is one panel of the section router. All but
//! [`Section::Examples`] render a Markdown document; `Examples` hosts the
//! nested topic gallery.

use super::PanelKey;

/// Panels available to the section router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// JSX, components, props and state
    Fundamentals,
    /// Built-in hooks
    Hooks,
    /// Reconciliation, keys and composition
    Advanced,
    /// Patterns and best practices
    Patterns,
    /// State management strategies
    State,
    /// Hook internals and rules
    HooksDeep,
    /// Context API patterns
    Context,
    /// Rendering performance
    Performance,
    /// Controlled and uncontrolled forms
    Forms,
    /// Writing custom hooks
    CustomHooks,
    /// Refs and direct DOM access
    Refs,
    /// Error boundaries
    Errors,
    /// Rendering into other DOM nodes
    Portals,
    /// Lazy loading and code splitting
    Splitting,
    /// Higher-order components and render props
    PatternsAdv,
    /// Concurrent features
    React18,
    /// Client-side routing
    Routing,
    /// Redux Toolkit
    Redux,
    /// Reference documentation
    Docs,
    /// Interview examples index (nested gallery)
    Examples,
}

impl PanelKey for Section {
    const ALL: &'static [Self] = &[
        Self::Fundamentals,
        Self::Hooks,
        Self::Advanced,
        Self::Patterns,
        Self::State,
        Self::HooksDeep,
        Self::Context,
        Self::Performance,
        Self::Forms,
        Self::CustomHooks,
        Self::Refs,
        Self::Errors,
        Self::Portals,
        Self::Splitting,
        Self::PatternsAdv,
        Self::React18,
        Self::Routing,
        Self::Redux,
        Self::Docs,
        Self::Examples,
    ];

    fn id(self) -> &'static str {
        match self {
            Self::Fundamentals => "fundamentals",
            Self::Hooks => "hooks",
            Self::Advanced => "advanced",
            Self::Patterns => "patterns",
            Self::State => "state",
            Self::HooksDeep => "hooks-deep",
            Self::Context => "context",
            Self::Performance => "performance",
            Self::Forms => "forms",
            Self::CustomHooks => "custom-hooks",
            Self::Refs => "refs",
            Self::Errors => "errors",
            Self::Portals => "portals",
            Self::Splitting => "splitting",
            Self::PatternsAdv => "patterns-adv",
            Self::React18 => "react18",
            Self::Routing => "routing",
            Self::Redux => "redux",
            Self::Docs => "docs",
            Self::Examples => "examples",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Self::Fundamentals => include_str!("../../assets/content/sections/fundamentals.md"),
            Self::Hooks => include_str!("../../assets/content/sections/hooks.md"),
            Self::Advanced => include_str!("../../assets/content/sections/advanced.md"),
            Self::Patterns => include_str!("../../assets/content/sections/patterns.md"),
            Self::State => include_str!("../../assets/content/sections/state.md"),
            Self::HooksDeep => include_str!("../../assets/content/sections/hooks-deep.md"),
            Self::Context => include_str!("../../assets/content/sections/context.md"),
            Self::Performance => include_str!("../../assets/content/sections/performance.md"),
            Self::Forms => include_str!("../../assets/content/sections/forms.md"),
            Self::CustomHooks => include_str!("../../assets/content/sections/custom-hooks.md"),
            Self::Refs => include_str!("../../assets/content/sections/refs.md"),
            Self::Errors => include_str!("../../assets/content/sections/errors.md"),
            Self::Portals => include_str!("../../assets/content/sections/portals.md"),
            Self::Splitting => include_str!("../../assets/content/sections/splitting.md"),
            Self::PatternsAdv => include_str!("../../assets/content/sections/patterns-adv.md"),
            Self::React18 => include_str!("../../assets/content/sections/react18.md"),
            Self::Routing => include_str!("../../assets/content/sections/routing.md"),
            Self::Redux => include_str!("../../assets/content/sections/redux.md"),
            Self::Docs => include_str!("../../assets/content/sections/docs.md"),
            Self::Examples => include_str!("../../assets/content/sections/examples.md"),
        }
    }
}

impl Section {
    /// Whether this section renders the nested topic gallery instead of Markdown.
    #[inline]
    pub fn is_gallery(self) -> bool {
        matches!(self, Self::Examples)
    }
}
