//! Selection state for the two content routers.
//!
//! Both types hold a raw id rather than a catalog reference, so a stale or
//! unknown id is representable. Resolution against a [`Catalog`] applies the
//! fallback policy:
//!
//! - [`TabSelection`] falls back to the catalog's default entry
//! - [`GallerySelection`] falls back to the gallery view

use super::{Catalog, CatalogEntry, PanelKey};

// ============================================================================
// TabSelection
// ============================================================================

/// Selection of the top-level router. Always holds an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSelection {
    id: String,
}

impl TabSelection {
    /// Start at the catalog's default entry.
    pub fn new<P: PanelKey>(catalog: &Catalog<P>) -> Self {
        Self {
            id: catalog.default_entry().id.clone(),
        }
    }

    /// Select an entry by id. Unknown ids are accepted and resolve to the default.
    pub fn select(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// The raw selected id, which may not resolve.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Entry to display: the selected one, or the default when the id is unknown.
    pub fn resolve<'c, P: PanelKey>(&self, catalog: &'c Catalog<P>) -> &'c CatalogEntry<P> {
        catalog
            .get(&self.id)
            .unwrap_or_else(|| catalog.default_entry())
    }

    /// Whether the control for `id` should be marked active.
    ///
    /// True for exactly one entry of the catalog: the resolved one.
    pub fn is_active<P: PanelKey>(&self, catalog: &Catalog<P>, id: &str) -> bool {
        self.resolve(catalog).id == id
    }
}

// ============================================================================
// GallerySelection
// ============================================================================

/// Selection of the nested router: a gallery until a topic is chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GallerySelection {
    /// Nothing chosen yet; the gallery is shown
    #[default]
    Unselected,
    /// A topic id was chosen (possibly unknown)
    Selected(String),
}

/// What the nested router displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryView<'c, P> {
    /// Card gallery of every entry
    Gallery,
    /// Panel of a single entry
    Panel(&'c CatalogEntry<P>),
}

impl GallerySelection {
    /// Drill into an entry.
    pub fn select(&mut self, id: impl Into<String>) {
        *self = Self::Selected(id.into());
    }

    /// Return to the gallery.
    pub fn go_back(&mut self) {
        *self = Self::Unselected;
    }

    /// The gallery when unselected or when the selected id is unknown.
    pub fn resolve<'c, P: PanelKey>(&self, catalog: &'c Catalog<P>) -> GalleryView<'c, P> {
        match self {
            Self::Unselected => GalleryView::Gallery,
            Self::Selected(id) => catalog
                .get(id)
                .map_or(GalleryView::Gallery, GalleryView::Panel),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
