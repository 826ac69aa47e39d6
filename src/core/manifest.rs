//! Catalog manifest parsing.
//!
//! The manifest is a TOML document with one table per catalog:
//!
//! ```toml
//! [sections]
//! default = "fundamentals"
//!
//! [[sections.entries]]
//! id = "fundamentals"
//! label = "1. ⚛️ Fundamentals"
//!
//! [[topics.entries]]
//! id = "hooks"
//! label = "🪝 React Hooks"
//! level = "intermediate"
//! questions = 7
//! tags = ["useState", "useEffect"]
//! ```
//!
//! Entry ids must name a panel variant; see [`PanelKey::from_id`].

use std::sync::Arc;

use serde::Deserialize;

use super::error::CatalogError;
use crate::config::CATALOG_MANIFEST;
use crate::models::{Catalog, CatalogEntry, EntryMeta, Level, PanelKey, Section, Topic};

// ============================================================================
// Manifest Records
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    sections: CatalogRecord,
    topics: CatalogRecord,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogRecord {
    default: Option<String>,
    #[serde(default)]
    entries: Vec<EntryRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryRecord {
    id: String,
    label: String,
    description: Option<String>,
    level: Option<Level>,
    #[serde(default)]
    tags: Vec<String>,
    questions: Option<u32>,
    accent: Option<String>,
}

impl EntryRecord {
    fn into_entry<P: PanelKey>(self, catalog: &'static str) -> Result<CatalogEntry<P>, CatalogError> {
        let panel = P::from_id(&self.id).ok_or_else(|| CatalogError::UnknownPanel {
            catalog,
            id: self.id.clone(),
        })?;

        Ok(CatalogEntry {
            id: self.id,
            label: self.label,
            panel,
            meta: EntryMeta {
                description: self.description,
                level: self.level,
                tags: self.tags,
                questions: self.questions,
                accent: self.accent,
            },
        })
    }
}

fn build_catalog<P: PanelKey>(
    name: &'static str,
    record: CatalogRecord,
) -> Result<Catalog<P>, CatalogError> {
    let entries = record
        .entries
        .into_iter()
        .map(|entry| entry.into_entry(name))
        .collect::<Result<Vec<_>, _>>()?;

    Catalog::new(name, entries, record.default.as_deref())
}

// ============================================================================
// Catalogs
// ============================================================================

/// Both application catalogs, shared read-only.
#[derive(Clone, Debug)]
pub struct Catalogs {
    /// Top-level sections
    pub sections: Arc<Catalog<Section>>,
    /// Interview topics of the examples gallery
    pub topics: Arc<Catalog<Topic>>,
}

/// Parse and validate a manifest document.
pub fn parse_catalogs(source: &str) -> Result<Catalogs, CatalogError> {
    let manifest: Manifest = toml::from_str(source)?;

    Ok(Catalogs {
        sections: Arc::new(build_catalog("sections", manifest.sections)?),
        topics: Arc::new(build_catalog("topics", manifest.topics)?),
    })
}

/// Load the manifest embedded at compile time.
pub fn load_catalogs() -> Result<Catalogs, CatalogError> {
    let catalogs = parse_catalogs(CATALOG_MANIFEST).inspect_err(|err| {
        log::error!("failed to load catalogs: {err}");
    })?;

    for (name, len) in [
        (catalogs.sections.name(), catalogs.sections.len()),
        (catalogs.topics.name(), catalogs.topics.len()),
    ] {
        log::debug!("loaded {name} catalog ({len} entries)");
    }

    Ok(catalogs)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [sections]
        default = "hooks"

        [[sections.entries]]
        id = "fundamentals"
        label = "1. Fundamentals"

        [[sections.entries]]
        id = "hooks"
        label = "2. Hooks"

        [[topics.entries]]
        id = "hooks"
        label = "Hooks"
        description = "useState, useEffect"
        level = "intermediate"
        questions = 7
        tags = ["useState", "useEffect"]
        accent = "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)"
    "#;

    #[test]
    fn test_parse_minimal_manifest() {
        let catalogs = parse_catalogs(MINIMAL).unwrap();

        assert_eq!(catalogs.sections.len(), 2);
        assert_eq!(catalogs.sections.default_entry().panel, Section::Hooks);

        let topic = &catalogs.topics.entries()[0];
        assert_eq!(topic.panel, Topic::Hooks);
        assert_eq!(topic.meta.level, Some(Level::Intermediate));
        assert_eq!(topic.meta.questions, Some(7));
        assert_eq!(topic.meta.tags, ["useState", "useEffect"]);
        assert_eq!(catalogs.topics.default_entry().panel, Topic::Hooks);
    }

    #[test]
    fn test_embedded_manifest_loads() {
        let catalogs = load_catalogs().unwrap();

        assert_eq!(catalogs.sections.len(), 20);
        assert_eq!(catalogs.sections.default_entry().id, "fundamentals");
        assert_eq!(
            catalogs.sections.entries().last().map(|e| e.panel),
            Some(Section::Examples)
        );

        assert_eq!(catalogs.topics.len(), 9);
        assert_eq!(catalogs.topics.total_questions(), 49);
    }

    #[test]
    fn test_embedded_manifest_covers_every_panel() {
        let catalogs = load_catalogs().unwrap();

        for section in Section::ALL {
            let count = catalogs
                .sections
                .entries()
                .iter()
                .filter(|e| e.panel == *section)
                .count();
            assert_eq!(count, 1, "section {}", section.id());
        }
        for topic in Topic::ALL {
            let count = catalogs
                .topics
                .entries()
                .iter()
                .filter(|e| e.panel == *topic)
                .count();
            assert_eq!(count, 1, "topic {}", topic.id());
        }
    }

    #[test]
    fn test_every_topic_has_card_metadata() {
        let catalogs = load_catalogs().unwrap();
        for entry in catalogs.topics.entries() {
            assert!(entry.meta.description.is_some(), "{}", entry.id);
            assert!(entry.meta.level.is_some(), "{}", entry.id);
            assert!(!entry.meta.tags.is_empty(), "{}", entry.id);
        }
    }

    #[test]
    fn test_unknown_panel_id() {
        let source = r#"
            [[sections.entries]]
            id = "angular"
            label = "Angular"

            [[topics.entries]]
            id = "hooks"
            label = "Hooks"
        "#;
        assert_eq!(
            parse_catalogs(source).unwrap_err(),
            CatalogError::UnknownPanel {
                catalog: "sections",
                id: "angular".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_default() {
        let source = r#"
            [sections]
            default = "docs"

            [[sections.entries]]
            id = "hooks"
            label = "Hooks"

            [[topics.entries]]
            id = "hooks"
            label = "Hooks"
        "#;
        assert_eq!(
            parse_catalogs(source).unwrap_err(),
            CatalogError::UnknownDefault {
                catalog: "sections",
                id: "docs".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_topics() {
        let source = r#"
            [[sections.entries]]
            id = "hooks"
            label = "Hooks"

            [topics]
        "#;
        assert_eq!(
            parse_catalogs(source).unwrap_err(),
            CatalogError::Empty { catalog: "topics" }
        );
    }

    #[test]
    fn test_duplicate_topic() {
        let source = r#"
            [[sections.entries]]
            id = "hooks"
            label = "Hooks"

            [[topics.entries]]
            id = "hooks"
            label = "Hooks"

            [[topics.entries]]
            id = "hooks"
            label = "Hooks again"
        "#;
        assert!(matches!(
            parse_catalogs(source),
            Err(CatalogError::DuplicateId { catalog: "topics", .. })
        ));
    }

    #[test]
    fn test_malformed_manifest() {
        assert!(matches!(
            parse_catalogs("[sections"),
            Err(CatalogError::Parse(_))
        ));
        // Wrong field type
        let source = r#"
            [[sections.entries]]
            id = "hooks"
            label = 3
        "#;
        assert!(matches!(parse_catalogs(source), Err(CatalogError::Parse(_))));
        // Unknown level
        let source = r#"
            [[sections.entries]]
            id = "hooks"
            label = "Hooks"

            [[topics.entries]]
            id = "hooks"
            label = "Hooks"
            level = "expert"
        "#;
        assert!(matches!(parse_catalogs(source), Err(CatalogError::Parse(_))));
    }
}
