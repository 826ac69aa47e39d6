//! Catalog registry for selectable content panels.
//!
//! A [`Catalog`] is an ordered, immutable list of [`CatalogEntry`] values
//! with one designated default entry. It is built once at startup and shared
//! by reference; routers only ever read from it.

use serde::Deserialize;

use crate::core::error::CatalogError;

// ============================================================================
// Panel Keys
// ============================================================================

/// Closed set of panels a catalog can point at.
///
/// Implemented by [`Section`](super::Section) and [`Topic`](super::Topic).
/// Every variant has a stable id that matches the manifest record declaring it.
pub trait PanelKey: Copy + Eq + std::fmt::Debug + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Stable identifier used by the manifest and by selection state.
    fn id(self) -> &'static str;

    /// Markdown source rendered for this panel.
    fn source(self) -> &'static str;

    /// Reverse lookup from an id to its variant.
    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.id() == id)
    }
}

// ============================================================================
// Entry Metadata
// ============================================================================

/// Difficulty tag shown on topic cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Display name for badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// Display-only metadata attached to an entry.
///
/// Never read by selection or resolution logic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryMeta {
    /// One-line summary shown under the title
    pub description: Option<String>,
    /// Difficulty badge
    pub level: Option<Level>,
    /// Grouping chips
    pub tags: Vec<String>,
    /// Number of Q&A items in the panel
    pub questions: Option<u32>,
    /// CSS background for the card accent
    pub accent: Option<String>,
}

// ============================================================================
// CatalogEntry
// ============================================================================

/// One selectable unit: id, label and the panel it resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry<P> {
    pub id: String,
    pub label: String,
    pub panel: P,
    pub meta: EntryMeta,
}

impl<P: PanelKey> CatalogEntry<P> {
    /// Create an entry whose id is the panel's own id.
    #[cfg(test)]
    pub fn new(panel: P, label: impl Into<String>) -> Self {
        Self {
            id: panel.id().to_string(),
            label: label.into(),
            panel,
            meta: EntryMeta::default(),
        }
    }

    /// Attach display metadata.
    #[cfg(test)]
    pub fn with_meta(mut self, meta: EntryMeta) -> Self {
        self.meta = meta;
        self
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Ordered registry of entries with a designated default.
///
/// Invariants established by [`Catalog::new`]:
/// - at least one entry
/// - ids are unique
/// - `default` indexes an existing entry
#[derive(Clone, Debug)]
pub struct Catalog<P> {
    /// Name used in error messages ("sections", "topics")
    name: &'static str,
    entries: Vec<CatalogEntry<P>>,
    default: usize,
}

impl<P: PanelKey> Catalog<P> {
    /// Build a catalog, validating ids and the default.
    ///
    /// When `default_id` is `None` the first entry is the default.
    pub fn new(
        name: &'static str,
        entries: Vec<CatalogEntry<P>>,
        default_id: Option<&str>,
    ) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty { catalog: name });
        }

        for (idx, entry) in entries.iter().enumerate() {
            if entries[..idx].iter().any(|prev| prev.id == entry.id) {
                return Err(CatalogError::DuplicateId {
                    catalog: name,
                    id: entry.id.clone(),
                });
            }
        }

        let default = match default_id {
            None => 0,
            Some(id) => entries.iter().position(|e| e.id == id).ok_or_else(|| {
                CatalogError::UnknownDefault {
                    catalog: name,
                    id: id.to_string(),
                }
            })?,
        };

        Ok(Self {
            name,
            entries,
            default,
        })
    }

    /// Catalog name as used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up an entry by id. Ordered scan, first match wins.
    pub fn get(&self, id: &str) -> Option<&CatalogEntry<P>> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// The designated default entry.
    pub fn default_entry(&self) -> &CatalogEntry<P> {
        &self.entries[self.default]
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[CatalogEntry<P>] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of the Q&A counts declared in entry metadata.
    pub fn total_questions(&self) -> u32 {
        self.entries.iter().filter_map(|e| e.meta.questions).sum()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Three-panel key used across router and catalog tests.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Letter {
        A,
        B,
        C,
    }

    impl PanelKey for Letter {
        const ALL: &'static [Self] = &[Self::A, Self::B, Self::C];

        fn id(self) -> &'static str {
            match self {
                Self::A => "a",
                Self::B => "b",
                Self::C => "c",
            }
        }

        fn source(self) -> &'static str {
            match self {
                Self::A => "# A",
                Self::B => "# B",
                Self::C => "# C",
            }
        }
    }

    pub fn letters() -> Catalog<Letter> {
        Catalog::new(
            "letters",
            vec![
                CatalogEntry::new(Letter::A, "A"),
                CatalogEntry::new(Letter::B, "B"),
                CatalogEntry::new(Letter::C, "C"),
            ],
            Some("a"),
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = letters();
        assert_eq!(catalog.get("b").map(|e| e.panel), Some(Letter::B));
        assert_eq!(catalog.get("c").map(|e| e.label.as_str()), Some("C"));
        assert!(catalog.get("z").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let catalog = letters();
        let ids: Vec<_> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_default_entry() {
        assert_eq!(letters().default_entry().panel, Letter::A);

        let catalog = Catalog::new(
            "letters",
            vec![
                CatalogEntry::new(Letter::A, "A"),
                CatalogEntry::new(Letter::B, "B"),
            ],
            Some("b"),
        )
        .unwrap();
        assert_eq!(catalog.default_entry().panel, Letter::B);
    }

    #[test]
    fn test_default_falls_back_to_first_entry() {
        let catalog = Catalog::new(
            "letters",
            vec![
                CatalogEntry::new(Letter::C, "C"),
                CatalogEntry::new(Letter::A, "A"),
            ],
            None,
        )
        .unwrap();
        assert_eq!(catalog.default_entry().panel, Letter::C);
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let err = Catalog::<Letter>::new("letters", vec![], None).unwrap_err();
        assert_eq!(err, CatalogError::Empty { catalog: "letters" });
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Catalog::new(
            "letters",
            vec![
                CatalogEntry::new(Letter::A, "A"),
                CatalogEntry::new(Letter::B, "B"),
                CatalogEntry::new(Letter::A, "A again"),
            ],
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                catalog: "letters",
                id: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_unknown_default() {
        let err = Catalog::new("letters", vec![CatalogEntry::new(Letter::A, "A")], Some("q"))
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownDefault {
                catalog: "letters",
                id: "q".to_string(),
            }
        );
    }

    #[test]
    fn test_total_questions() {
        let meta = |n| EntryMeta {
            questions: Some(n),
            ..EntryMeta::default()
        };
        let catalog = Catalog::new(
            "letters",
            vec![
                CatalogEntry::new(Letter::A, "A").with_meta(meta(6)),
                CatalogEntry::new(Letter::B, "B"),
                CatalogEntry::new(Letter::C, "C").with_meta(meta(7)),
            ],
            None,
        )
        .unwrap();
        assert_eq!(catalog.total_questions(), 13);
    }

    #[test]
    fn test_panel_key_from_id() {
        assert_eq!(Letter::from_id("b"), Some(Letter::B));
        assert_eq!(Letter::from_id("B"), None);
    }
}
