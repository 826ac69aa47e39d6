//! Interview topics shown by the examples gallery.

use super::PanelKey;

/// Panels available to the nested topic router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    /// React fundamentals Q&A
    Fundamentals,
    /// Hooks Q&A
    Hooks,
    /// Performance and optimization Q&A
    Performance,
    /// Context API and state management Q&A
    ContextState,
    /// Advanced patterns and features Q&A
    Advanced,
    /// Custom hooks Q&A
    CustomHooks,
    /// Redux and testing Q&A
    ReduxTesting,
    /// TypeScript with React Q&A
    TypescriptReact,
    /// Next.js and SSR/SSG Q&A
    NextjsSsr,
}

impl PanelKey for Topic {
    const ALL: &'static [Self] = &[
        Self::Fundamentals,
        Self::Hooks,
        Self::Performance,
        Self::ContextState,
        Self::Advanced,
        Self::CustomHooks,
        Self::ReduxTesting,
        Self::TypescriptReact,
        Self::NextjsSsr,
    ];

    fn id(self) -> &'static str {
        match self {
            Self::Fundamentals => "fundamentals",
            Self::Hooks => "hooks",
            Self::Performance => "performance",
            Self::ContextState => "context-state",
            Self::Advanced => "advanced",
            Self::CustomHooks => "custom-hooks",
            Self::ReduxTesting => "redux-testing",
            Self::TypescriptReact => "typescript-react",
            Self::NextjsSsr => "nextjs-ssr",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Self::Fundamentals => include_str!("../../assets/content/topics/fundamentals.md"),
            Self::Hooks => include_str!("../../assets/content/topics/hooks.md"),
            Self::Performance => include_str!("../../assets/content/topics/performance.md"),
            Self::ContextState => include_str!("../../assets/content/topics/context-state.md"),
            Self::Advanced => include_str!("../../assets/content/topics/advanced.md"),
            Self::CustomHooks => include_str!("../../assets/content/topics/custom-hooks.md"),
            Self::ReduxTesting => include_str!("../../assets/content/topics/redux-testing.md"),
            Self::TypescriptReact => include_str!("../../assets/content/topics/typescript-react.md"),
            Self::NextjsSsr => include_str!("../../assets/content/topics/nextjs-ssr.md"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_ids() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_id(topic.id()), Some(*topic));
        }
        assert_eq!(Topic::ALL.len(), 9);
    }

    #[test]
    fn test_topic_content_is_not_blank() {
        for topic in Topic::ALL {
            assert!(!topic.source().trim().is_empty(), "{}", topic.id());
        }
    }
}
